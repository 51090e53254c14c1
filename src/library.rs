//! The character variant library consumed by the pseudo-localization pipeline.
//!
//! A library maps single characters to an ordered list of visually similar
//! glyph strings and carries two reserved entries:
//! - `alphabet` : the characters used to generate identifier tags
//! - `enNumber` : the number words used by the Android suffix style
//!
//! Libraries are validated when built, so the pipeline never runs against a
//! partial or empty table.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::constants::library::{
    ALPHABET_KEY, DEFAULT_ALPHABET, DEFAULT_NUMBERS, EMBEDDED_LIBRARY, NUMBERS_KEY,
};
use crate::debug;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharLibrary {
    variants: BTreeMap<char, Vec<String>>,
    alphabet: String,
    numbers: Vec<String>,
}

impl CharLibrary {
    /// Builds a library from `(character, variants)` pairs using the default
    /// alphabet and number words.
    ///
    /// # Errors
    /// Returns `LibraryFormat` if a character has no variants and
    /// `LibraryUnavailable` if no pairs are supplied at all.
    ///
    /// # Examples
    /// ```
    /// use pseudo::library::CharLibrary;
    ///
    /// let library = CharLibrary::from_variants([('a', vec!["á", "à"])]).unwrap();
    /// assert_eq!(library.variants('a').unwrap().len(), 2);
    /// assert!(library.variants('b').is_none());
    /// ```
    pub fn from_variants<I, V, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, V)>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut variants = BTreeMap::new();
        for (key, list) in entries {
            let list: Vec<String> = list.into_iter().map(Into::into).collect();
            if list.is_empty() {
                return Err(Error::LibraryFormat {
                    key: key.to_string(),
                    cause: "variant list is empty".to_string(),
                });
            }
            variants.insert(key, list);
        }
        Self::build(variants, "<in-memory>")
    }

    /// Builds a library where every ASCII letter maps to itself.
    ///
    /// Substitution through this library leaves text unchanged, which makes
    /// it useful for checking the decorating stages in isolation.
    pub fn identity() -> Self {
        let variants = ('a'..='z')
            .chain('A'..='Z')
            .map(|c| (c, vec![c.to_string()]))
            .collect();
        CharLibrary {
            variants,
            alphabet: DEFAULT_ALPHABET.to_string(),
            numbers: default_numbers(),
        }
    }

    /// Parses a library from its JSON representation.
    ///
    /// # Arguments
    /// * `data` - The JSON document.
    /// * `source_name` - Name of the source reported in errors.
    ///
    /// # Examples
    /// ```
    /// use pseudo::library::CharLibrary;
    ///
    /// let library = CharLibrary::from_json_str(
    ///     r#"{ "o": ["ö"], "alphabet": "xyz", "enNumber": ["uno"] }"#,
    ///     "inline",
    /// )
    /// .unwrap();
    /// assert_eq!(library.alphabet(), "xyz");
    /// assert_eq!(library.numbers(), ["uno".to_string()]);
    /// ```
    pub fn from_json_str(data: &str, source_name: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(data).map_err(|e| Error::LibraryUnavailable {
            source_name: source_name.to_string(),
            cause: e.to_string(),
        })?;

        let object = match root {
            Value::Object(object) => object,
            _ => {
                return Err(Error::LibraryFormat {
                    key: "<root>".to_string(),
                    cause: "expected a JSON object".to_string(),
                })
            }
        };

        let mut variants = BTreeMap::new();
        let mut alphabet = None;
        let mut numbers = None;

        for (key, value) in object {
            if key == ALPHABET_KEY {
                match value {
                    Value::String(s) => alphabet = Some(s),
                    _ => {
                        return Err(Error::LibraryFormat {
                            key,
                            cause: "expected a string".to_string(),
                        })
                    }
                }
            } else if key == NUMBERS_KEY {
                numbers = Some(string_list(&key, value)?);
            } else {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        let list = string_list(&key, value)?;
                        variants.insert(c, list);
                    }
                    _ => debug!("Ignoring unknown library entry \"{}\"", key),
                }
            }
        }

        let mut library = Self::build(variants, source_name)?;
        if let Some(alphabet) = alphabet.filter(|a| !a.is_empty()) {
            library.alphabet = alphabet;
        }
        if let Some(numbers) = numbers {
            library.numbers = numbers;
        }
        debug!(
            "Loaded {} character entries from \"{}\"",
            library.len(),
            source_name
        );
        Ok(library)
    }

    /// Reads and parses a library file.
    ///
    /// # Errors
    /// Returns `LibraryUnavailable` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source_name = path.to_string_lossy().to_string();
        let data = fs::read_to_string(path).map_err(|e| Error::LibraryUnavailable {
            source_name: source_name.clone(),
            cause: e.to_string(),
        })?;
        Self::from_json_str(&data, &source_name)
    }

    /// Parses the library bundled with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_LIBRARY, "<embedded>")
    }

    /// Replaces the identifier alphabet. An empty alphabet keeps the current one.
    pub fn with_alphabet(mut self, alphabet: &str) -> Self {
        if !alphabet.is_empty() {
            self.alphabet = alphabet.to_string();
        }
        self
    }

    /// Replaces the number words used by the Android suffix style.
    ///
    /// # Errors
    /// Returns `LibraryFormat` if `numbers` is empty.
    pub fn with_numbers<I, S>(mut self, numbers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let numbers: Vec<String> = numbers.into_iter().map(Into::into).collect();
        if numbers.is_empty() {
            return Err(Error::LibraryFormat {
                key: NUMBERS_KEY.to_string(),
                cause: "at least one number word is required".to_string(),
            });
        }
        self.numbers = numbers;
        Ok(self)
    }

    pub fn variants(&self, c: char) -> Option<&[String]> {
        self.variants.get(&c).map(Vec::as_slice)
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Iterates the character entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &[String])> {
        self.variants.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    fn build(variants: BTreeMap<char, Vec<String>>, source_name: &str) -> Result<Self> {
        if variants.is_empty() {
            return Err(Error::LibraryUnavailable {
                source_name: source_name.to_string(),
                cause: "no character entries defined".to_string(),
            });
        }
        Ok(CharLibrary {
            variants,
            alphabet: DEFAULT_ALPHABET.to_string(),
            numbers: default_numbers(),
        })
    }
}

fn default_numbers() -> Vec<String> {
    DEFAULT_NUMBERS.iter().map(|n| n.to_string()).collect()
}

/// Extracts a non-empty list of strings from a library value.
fn string_list(key: &str, value: Value) -> Result<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(Error::LibraryFormat {
                key: key.to_string(),
                cause: "expected an array of strings".to_string(),
            })
        }
    };
    if items.is_empty() {
        return Err(Error::LibraryFormat {
            key: key.to_string(),
            cause: "list is empty".to_string(),
        });
    }
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            other => Err(Error::LibraryFormat {
                key: key.to_string(),
                cause: format!("expected a string, found {}", other),
            }),
        })
        .collect()
}
