use rand::seq::SliceRandom;
use rand::RngCore;

use super::{EscapeGuard, Transform};
use crate::constants::glyphs::VOWELS;
use crate::library::CharLibrary;
use crate::options::Options;

/// Normalizes the case of the whole text before the mode transform.
/// Lower case is applied after upper case, so it wins when both are set.
pub struct CaseFolder {
    upper: bool,
    lower: bool,
}

impl CaseFolder {
    pub fn new(upper: bool, lower: bool) -> Self {
        Self { upper, lower }
    }
}

impl Transform for CaseFolder {
    fn transform(&self, text: &str, _rng: &mut dyn RngCore) -> String {
        let mut result = text.to_string();
        if self.upper {
            result = result.to_uppercase();
        }
        if self.lower {
            result = result.to_lowercase();
        }
        result
    }
}

/// Replaces every ASCII letter with one of its library variants picked at
/// random ("XA" mode).
///
/// Non-letters and letters without a library entry are copied unchanged.
/// When escape preservation is on, recognized escape sequences are copied
/// verbatim. When vowel elongation is on, a substituted vowel is repeated
/// `dbvowel_count` extra times.
pub struct Substitution<'a> {
    library: &'a CharLibrary,
    preserve_esc: bool,
    dbvowel: bool,
    dbvowel_count: usize,
}

impl<'a> Substitution<'a> {
    pub fn new(library: &'a CharLibrary, options: &Options) -> Self {
        Self {
            library,
            preserve_esc: options.preserve_esc,
            dbvowel: options.dbvowel,
            dbvowel_count: options.dbvowel_count,
        }
    }

    fn push_letter(&self, result: &mut String, c: char, rng: &mut dyn RngCore) {
        let variant = self
            .library
            .variants(c)
            .and_then(|variants| variants.choose(rng));

        match variant {
            Some(variant) => {
                let copies = if self.dbvowel && VOWELS.contains(c) {
                    self.dbvowel_count + 1
                } else {
                    1
                };
                result.push_str(&variant.repeat(copies));
            }
            None => result.push(c),
        }
    }
}

impl<'a> Transform for Substitution<'a> {
    fn transform(&self, text: &str, rng: &mut dyn RngCore) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut result = String::with_capacity(text.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            if self.preserve_esc {
                if let Some(token) = EscapeGuard::token_at(&chars, i) {
                    result.extend(token);
                    i += token.len();
                    continue;
                }
            }

            let c = chars[i];
            if c.is_ascii_alphabetic() {
                self.push_letter(&mut result, c, rng);
            } else {
                result.push(c);
            }
            i += 1;
        }

        result
    }
}

/// Reverses the character order of the text ("XB" mode).
pub struct Reversal;

impl Transform for Reversal {
    fn transform(&self, text: &str, _rng: &mut dyn RngCore) -> String {
        text.chars().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(7)
    }

    fn accented() -> CharLibrary {
        CharLibrary::from_variants([
            ('a', vec!["á"]),
            ('e', vec!["é"]),
            ('H', vec!["Ĥ"]),
            ('l', vec!["ĺ"]),
            ('o', vec!["ö"]),
            ('x', vec!["ẋ"]),
            ('n', vec!["ñ"]),
        ])
        .unwrap()
    }

    fn substitute(text: &str, options: &Options) -> String {
        let library = accented();
        Substitution::new(&library, options).transform(text, &mut rng())
    }

    #[test]
    fn test_case_folder() {
        let mut rng = rng();
        assert_eq!(CaseFolder::new(true, false).transform("Hello", &mut rng), "HELLO");
        assert_eq!(CaseFolder::new(false, true).transform("Hello", &mut rng), "hello");
        assert_eq!(CaseFolder::new(true, true).transform("Hello", &mut rng), "hello");
        assert_eq!(CaseFolder::new(false, false).transform("Hello", &mut rng), "Hello");
    }

    #[test]
    fn test_substitution_replaces_known_letters() {
        assert_eq!(substitute("Hello", &Options::default()), "Ĥéĺĺö");
    }

    #[test]
    fn test_missing_variant_passes_through() {
        assert_eq!(substitute("Hz", &Options::default()), "Ĥz");
    }

    #[test]
    fn test_non_letters_are_copied() {
        assert_eq!(substitute("a-1 é!", &Options::default()), "á-1 é!");
    }

    #[test]
    fn test_picks_from_all_variants() {
        let library = CharLibrary::from_variants([('a', vec!["1", "2", "3"])]).unwrap();
        let stage = Substitution::new(&library, &Options::default());
        let result = stage.transform(&"a".repeat(300), &mut rng());
        for variant in ["1", "2", "3"] {
            assert!(result.contains(variant), "variant {} never picked", variant);
        }
        assert_eq!(result.chars().count(), 300);
    }

    #[test]
    fn test_vowel_elongation() {
        let options = Options {
            dbvowel: true,
            dbvowel_count: 2,
            ..Options::default()
        };
        assert_eq!(substitute("Hello", &options), "Ĥéééĺĺööö");
    }

    #[test]
    fn test_vowel_elongation_zero_count() {
        let options = Options {
            dbvowel: true,
            dbvowel_count: 0,
            ..Options::default()
        };
        assert_eq!(substitute("Hello", &options), "Ĥéĺĺö");
    }

    #[test]
    fn test_vowel_without_variant_is_not_elongated() {
        let options = Options {
            dbvowel: true,
            ..Options::default()
        };
        assert_eq!(substitute("u", &options), "u");
    }

    #[test]
    fn test_escapes_preserved() {
        let options = Options {
            preserve_esc: true,
            ..Options::default()
        };
        assert_eq!(substitute(r"a\na\x41\'", &options), r"á\ná\x41\'");
    }

    #[test]
    fn test_escapes_not_preserved_when_disabled() {
        assert_eq!(substitute(r"\n\x41", &Options::default()), r"\ñ\ẋ41");
    }

    #[test]
    fn test_unknown_escape_falls_through() {
        let options = Options {
            preserve_esc: true,
            ..Options::default()
        };
        assert_eq!(substitute(r"\a", &options), r"\á");
    }

    #[test]
    fn test_escaped_backslash_consumes_both() {
        let options = Options {
            preserve_esc: true,
            ..Options::default()
        };
        assert_eq!(substitute(r"\\x41", &options), r"\\ẋ41");
    }

    #[test]
    fn test_truncated_escape_at_end() {
        let options = Options {
            preserve_esc: true,
            ..Options::default()
        };
        assert_eq!(substitute(r"a\x4", &options), r"á\x4");
    }

    #[test]
    fn test_reversal() {
        let mut rng = rng();
        assert_eq!(Reversal.transform("Hello", &mut rng), "olleH");
        assert_eq!(Reversal.transform("añb", &mut rng), "bña");
        assert_eq!(Reversal.transform(r"\n", &mut rng), r"n\");
    }
}
