//! Recognition of escape sequences embedded in the input text.
//!
//! Supported tokens, matched on scalar characters:
//! - `\xHH` : hex escape (4 characters)
//! - `\uHHHH` : unicode escape (6 characters)
//! - `\n`, `\t`, `\r`, `\\`, `\'`, `\"` : single-character escapes
//!
//! Tokens cut short by the end of the text are returned as far as they go.

pub struct EscapeGuard;

impl EscapeGuard {
    /// Returns the escape token starting at `index`, if any.
    ///
    /// # Arguments
    /// * `chars` - The text as scalar characters
    /// * `index` - Position to inspect
    ///
    /// # Returns
    /// The characters to copy verbatim, or `None` when `index` does not start
    /// a recognized escape sequence.
    ///
    /// # Examples
    /// ```
    /// use pseudo::transforms::EscapeGuard;
    ///
    /// let chars: Vec<char> = r"a\x41b".chars().collect();
    /// assert_eq!(EscapeGuard::token_at(&chars, 1), Some(&chars[1..5]));
    /// assert_eq!(EscapeGuard::token_at(&chars, 0), None);
    /// ```
    pub fn token_at(chars: &[char], index: usize) -> Option<&[char]> {
        if chars.get(index) != Some(&'\\') {
            return None;
        }
        let len = match chars.get(index + 1)? {
            'x' => 4,
            'u' => 6,
            'n' | 't' | 'r' | '\\' | '\'' | '"' => 2,
            _ => return None,
        };
        let end = (index + len).min(chars.len());
        Some(&chars[index..end])
    }
}
