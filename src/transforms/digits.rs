use once_cell::sync::Lazy;
use rand::RngCore;
use regex::{Captures, Regex};

use super::Transform;
use crate::constants::glyphs::CIRCLED_DIGITS;

// ASCII digits with a circled counterpart (0 has none)
static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[1-9]").unwrap());

/// Replaces the ASCII digits 1 to 9 with their circled glyphs (①..⑨).
#[derive(Default)]
pub struct DigitDecorator;

impl DigitDecorator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the circled glyph for an ASCII digit between 1 and 9
    pub fn circled(digit: char) -> Option<char> {
        match digit {
            '1'..='9' => Some(CIRCLED_DIGITS[digit as usize - '1' as usize]),
            _ => None,
        }
    }
}

impl Transform for DigitDecorator {
    fn transform(&self, text: &str, _rng: &mut dyn RngCore) -> String {
        DIGIT_PATTERN
            .replace_all(text, |caps: &Captures| {
                caps[0]
                    .chars()
                    .filter_map(Self::circled)
                    .collect::<String>()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decorate(text: &str) -> String {
        DigitDecorator::new().transform(text, &mut rand::thread_rng())
    }

    #[test]
    fn test_all_digits() {
        assert_eq!(decorate("0123456789"), "0①②③④⑤⑥⑦⑧⑨");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(decorate("a1b1c22"), "a①b①c②②");
    }

    #[test]
    fn test_zero_is_unchanged() {
        assert_eq!(decorate("100"), "①00");
    }

    #[test]
    fn test_second_pass_keeps_circled_glyphs() {
        let once = decorate("1234567");
        assert_eq!(once, "①②③④⑤⑥⑦");
        assert_eq!(decorate(&once), once);
    }

    #[test]
    fn test_circled() {
        assert_eq!(DigitDecorator::circled('1'), Some('①'));
        assert_eq!(DigitDecorator::circled('9'), Some('⑨'));
        assert_eq!(DigitDecorator::circled('0'), None);
        assert_eq!(DigitDecorator::circled('a'), None);
    }

    proptest! {
        #[test]
        fn prop_no_ascii_digit_but_zero_survives(s in "(?s).{0,64}") {
            let out = decorate(&s);
            prop_assert!(!out.chars().any(|c| ('1'..='9').contains(&c)));
            prop_assert_eq!(out.chars().count(), s.chars().count());
            prop_assert_eq!(
                out.chars().filter(|c| *c == '0').count(),
                s.chars().filter(|c| *c == '0').count()
            );
        }
    }
}
