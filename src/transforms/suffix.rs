//! Length-proportional padding appended to the decorated text.
//!
//! The amount of padding is `n = original_len / divisor`, where
//! `original_len` is the length in characters of the untouched input and the
//! divisor is 7 except for the custom style, which uses its own repeat count.
//!
//! The Microsoft, Android and numeric styles wrap the text as
//! `[<text> <padding>]`, keeping the space even when the padding is empty.

use rand::RngCore;

use super::Transform;
use crate::constants::defaults::SUFFIX_DIVISOR;
use crate::options::{Options, SuffixStyle};

pub struct SuffixPadder<'a> {
    style: SuffixStyle,
    original_len: usize,
    numbers: &'a [String],
    custom_prefix: String,
    custom_suffix: String,
    custom_repeat: String,
    custom_repeat_count: usize,
}

impl<'a> SuffixPadder<'a> {
    /// Creates a padder for the given options
    ///
    /// # Arguments
    /// * `options` - The options selecting the style and the custom values
    /// * `numbers` - Number words used by the Android style
    /// * `original_len` - Length in characters of the untouched input text
    pub fn new(options: &Options, numbers: &'a [String], original_len: usize) -> Self {
        Self {
            style: options.suffix,
            original_len,
            numbers,
            custom_prefix: options.custom_prefix.clone(),
            custom_suffix: options.custom_suffix.clone(),
            custom_repeat: options.custom_repeat.clone(),
            custom_repeat_count: options.custom_repeat_count.max(1),
        }
    }

    /// Returns `n` exclamation marks, grouped by three
    ///
    /// # Examples
    /// ```
    /// use pseudo::transforms::SuffixPadder;
    ///
    /// assert_eq!(SuffixPadder::microsoft(4), "!!! !");
    /// ```
    pub fn microsoft(n: usize) -> String {
        let mut body = String::with_capacity(n + n / 3);
        for i in 0..n {
            body.push('!');
            if (i + 1) % 3 == 0 && i != n - 1 {
                body.push(' ');
            }
        }
        body
    }

    /// Returns `n` number words taken cyclically from `numbers`, each one
    /// followed by a space
    pub fn android(n: usize, numbers: &[String]) -> String {
        if numbers.is_empty() {
            return String::new();
        }
        (0..n)
            .map(|i| format!("{} ", numbers[i % numbers.len()]))
            .collect()
    }

    /// Returns the integers from 1 to `n` concatenated
    ///
    /// # Examples
    /// ```
    /// use pseudo::transforms::SuffixPadder;
    ///
    /// assert_eq!(SuffixPadder::numeric(12), "123456789101112");
    /// ```
    pub fn numeric(n: usize) -> String {
        (1..=n).map(|i| i.to_string()).collect()
    }

    fn wrap(text: &str, body: &str) -> String {
        format!("[{} {}]", text, body)
    }

    fn custom(&self, text: &str) -> String {
        if self.custom_repeat.is_empty() {
            return format!("{}{}{}", self.custom_prefix, text, self.custom_suffix);
        }
        let n = self.original_len / self.custom_repeat_count;
        let repeats: String = (0..=n).map(|_| format!("{} ", self.custom_repeat)).collect();
        format!(
            "{}{} {}{}",
            self.custom_prefix, text, repeats, self.custom_suffix
        )
    }
}

impl<'a> Transform for SuffixPadder<'a> {
    fn transform(&self, text: &str, _rng: &mut dyn RngCore) -> String {
        let n = self.original_len / SUFFIX_DIVISOR;
        match self.style {
            SuffixStyle::None => text.to_string(),
            SuffixStyle::Microsoft => Self::wrap(text, &Self::microsoft(n)),
            SuffixStyle::Android => Self::wrap(text, &Self::android(n, self.numbers)),
            SuffixStyle::Numeric => Self::wrap(text, &Self::numeric(n)),
            SuffixStyle::Custom => self.custom(text),
        }
    }
}
