use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    let app = Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!([text] ... "Text to pseudo-localize")
        .long_help(
            "Text to pseudo-localize. Multiple values are joined with a single space. \
                    When omitted, the text is read from the standard input. \
                    Text starting with the word \"library\" must follow \"--\" \
                    (e.g. pseudo -- library of things) or be piped through the standard input.",
        ),
    )
    .arg(
        arg!(-m --mode <MODE> "Transformation mode (XA or XB)")
        .long_help(
            "Selects the transformation mode : XA replaces every letter with a random \
                    variant from the character library, XB reverses the text. \
                    Unknown values fall back to XA.",
        ),
    )
    .arg(arg!(-U --upper "Converts the text to upper case before transforming it"))
    .arg(
        arg!(-L --lower "Converts the text to lower case before transforming it")
        .long_help("Converts the text to lower case before transforming it. Takes precedence over --upper."),
    )
    .arg(
        arg!(-e --"preserve-esc" "Keeps escape sequences (\\n, \\t, \\xHH, \\uHHHH...) untouched")
        .long_help("Copies escape sequences verbatim instead of transforming their letters (XA mode only)."),
    )
    .arg(arg!(-d --dbvowel "Repeats the variants of vowels"))
    .arg(
        arg!(--"dbvowel-count" <COUNT> "Extra copies of each vowel (defaults to 1)")
        .long_help("Number of extra copies appended after each substituted vowel when --dbvowel is set."),
    )
    .arg(arg!(-n --numcir "Replaces the digits 1-9 with circled digits"))
    .arg(
        arg!(-s --suffix <STYLE> "Suffix style (0: none, 1: ms, 2: android, 3: numeric, 4: custom)")
        .long_help(
            "Appends a suffix proportional to the text length : 0 (none), 1 (Microsoft \
                    style exclamation marks), 2 (Android style number words), 3 (numeric), \
                    4 (custom, see --custom-*). Unknown values fall back to 0.",
        ),
    )
    .arg(arg!(--"custom-prefix" <TEXT> "Prefix used by the custom suffix style"))
    .arg(arg!(--"custom-suffix" <TEXT> "Suffix used by the custom suffix style"))
    .arg(arg!(--"custom-repeat" <TEXT> "Text repeated by the custom suffix style"))
    .arg(
        arg!(--"custom-repeat-count" <COUNT> "Characters per repetition of the custom text (defaults to 7)"),
    )
    .arg(arg!(-H --hash "Prefixes the text with a random identifier"))
    .arg(arg!(--"hash-length" <LENGTH> "Length of the random identifier (defaults to 6)"))
    .arg(
        arg!(-l --library <FILE> "Character library to use")
        .long_help(
            "Path to a JSON character library. Overrides $PSEUDO_LIBRARY and the library \
                    configured in the settings. The embedded library is used when none is set.",
        ),
    )
    .arg(
        arg!(--seed <SEED> "Seeds the random generator for reproducible output")
        .value_parser(value_parser!(u64)),
    );

    app.subcommand(build_library_command())
}

/// Builds the library command displaying the character library contents
///
/// # Returns
/// A `Command` object representing the library command.
fn build_library_command() -> Command {
    Command::new("library")
    .about("Displays the characters and variants of the character library.")
    .long_about(
        "Displays every character of the active character library together with \
                its variants and the number of variants.",
    )
    .arg(arg!(-c --char <CHAR> "Only displays the given character").value_parser(value_parser!(char)))
    .arg(arg!(-l --library <FILE> "Character library to display"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_is_consistent() {
        build_app(false).debug_assert();
    }

    #[test]
    fn test_parses_options() {
        let matches = build_app(false)
            .try_get_matches_from(["pseudo", "-m", "XB", "--numcir", "--seed", "4", "Hello", "world"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("mode").map(String::as_str), Some("XB"));
        assert!(matches.get_flag("numcir"));
        assert_eq!(matches.get_one::<u64>("seed"), Some(&4));
        let text: Vec<&String> = matches.get_many::<String>("text").unwrap().collect();
        assert_eq!(text, ["Hello", "world"]);
    }

    #[test]
    fn test_library_subcommand() {
        let matches = build_app(false)
            .try_get_matches_from(["pseudo", "library", "--char", "a"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "library");
        assert_eq!(sub.get_one::<char>("char"), Some(&'a'));
    }

    #[test]
    fn test_text_after_separator_is_not_a_subcommand() {
        let matches = build_app(false)
            .try_get_matches_from(["pseudo", "--", "library", "of", "things"])
            .unwrap();
        assert!(matches.subcommand().is_none());
        let text: Vec<&String> = matches.get_many::<String>("text").unwrap().collect();
        assert_eq!(text, ["library", "of", "things"]);
    }

    #[test]
    fn test_lib_is_plain_text() {
        let matches = build_app(false)
            .try_get_matches_from(["pseudo", "lib", "version"])
            .unwrap();
        assert!(matches.subcommand().is_none());
        let text: Vec<&String> = matches.get_many::<String>("text").unwrap().collect();
        assert_eq!(text, ["lib", "version"]);
    }
}
