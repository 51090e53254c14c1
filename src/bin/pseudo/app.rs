use std::io::{IsTerminal, Read};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use pseudo::{
    config::MainConfig,
    debug,
    display,
    error::*,
    options::{Options, RawOptions},
    processor::Pseudolocalizer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub struct App {
    pub matches: ArgMatches,
    interactive_output: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
            interactive_output,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Start the application, bootstraps the configuration and either displays the
    /// character library or pseudo-localizes the input text.
    ///
    /// # Returns
    /// A `Result` indicating whether the command completed successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;
        let config = bootstrap.get_config();

        match self.matches.subcommand() {
            Some(("library", lib_params)) => self.show_library(config, lib_params),
            _ => self.pseudolocalize(config),
        }
    }

    fn show_library(&self, config: &MainConfig, params: &ArgMatches) -> Result<bool> {
        let library = config.load_library(params.get_one::<String>("library").map(String::as_str))?;
        let filter = params.get_one::<char>("char").copied();
        let stdout = std::io::stdout();
        display::display_library(&library, filter, self.interactive_output, &mut stdout.lock())
    }

    fn pseudolocalize(&self, config: &MainConfig) -> Result<bool> {
        let library = config.load_library(
            self.matches
                .get_one::<String>("library")
                .map(String::as_str),
        )?;
        let raw = config.defaults.clone().merge(raw_options(&self.matches));
        let options = Options::from(&raw);
        debug!("Options : {:?}", options);

        let text = self.read_text()?;
        let localizer = Pseudolocalizer::new(library, options);
        let result = match self.matches.get_one::<u64>("seed") {
            Some(seed) => localizer.process_with_rng(&text, &mut ChaCha20Rng::seed_from_u64(*seed)),
            None => localizer.process(&text),
        };

        println!("{}", result);
        Ok(true)
    }

    /// Retrieves the text from the command line arguments or, when absent,
    /// from the standard input (without its trailing line break).
    fn read_text(&self) -> Result<String> {
        if let Some(values) = self.matches.get_many::<String>("text") {
            return Ok(values.map(String::as_str).collect::<Vec<_>>().join(" "));
        }

        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::ArgsProcessingError(
                "no text supplied (pass it as an argument or through the standard input)"
                    .to_string(),
            ));
        }

        let mut text = String::new();
        stdin.lock().read_to_string(&mut text)?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

/// Translates the command line arguments into string-encoded options.
/// Flags are only set when present so the configured defaults still apply.
fn raw_options(matches: &ArgMatches) -> RawOptions {
    let flag = |name: &str| matches.get_flag(name).then_some(true);
    let value = |name: &str| matches.get_one::<String>(name).cloned();

    RawOptions {
        mode: value("mode"),
        upper: flag("upper"),
        lower: flag("lower"),
        preserve_esc: flag("preserve-esc"),
        dbvowel: flag("dbvowel"),
        dbvowel_count: value("dbvowel-count"),
        numcir: flag("numcir"),
        suffix: value("suffix"),
        custom_prefix: value("custom-prefix"),
        custom_suffix: value("custom-suffix"),
        custom_repeat: value("custom-repeat"),
        custom_repeat_count: value("custom-repeat-count"),
        add_hash: flag("hash"),
        hash_length: value("hash-length"),
    }
}
