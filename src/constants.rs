//! Module for shared constants used across the codebase

/// Defaults applied when an option is missing or malformed
pub mod defaults {
    /// Divisor used by the Microsoft, Android and numeric suffix styles
    pub const SUFFIX_DIVISOR: usize = 7;

    /// Extra copies of a substituted vowel when vowel elongation is on
    pub const DBVOWEL_COUNT: usize = 1;

    /// Divisor controlling how often the custom repeat text is emitted
    pub const CUSTOM_REPEAT_COUNT: usize = 7;

    /// Length of the generated identifier tag
    pub const HASH_LENGTH: usize = 6;
}

/// Reserved entries of the character library
pub mod library {
    /// Key holding the identifier alphabet
    pub const ALPHABET_KEY: &str = "alphabet";

    /// Key holding the number words used by the Android suffix style
    pub const NUMBERS_KEY: &str = "enNumber";

    /// Alphabet used for identifiers when the library does not define one
    pub const DEFAULT_ALPHABET: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    /// Number words used when the library does not define any
    pub const DEFAULT_NUMBERS: [&str; 20] = [
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
        "nineteen", "twenty",
    ];

    /// Library bundled with the binary
    pub const EMBEDDED_LIBRARY: &str = include_str!("../assets/character.json");
}

/// Characters treated specially by the transforms
pub mod glyphs {
    /// Vowels eligible for elongation
    pub const VOWELS: &str = "aeiouAEIOU";

    /// Circled replacements for the digits 1 to 9, in order
    pub const CIRCLED_DIGITS: [char; 9] = ['①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨'];
}
