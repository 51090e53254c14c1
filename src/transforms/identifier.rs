use rand::seq::SliceRandom;
use rand::RngCore;

use super::Transform;
use crate::constants::library::DEFAULT_ALPHABET;

/// Prefixes the text with a random identifier tag, `[<id>]<text>`.
pub struct IdentifierTagger {
    alphabet: Vec<char>,
    length: usize,
}

impl IdentifierTagger {
    /// An empty `alphabet` is replaced by the default one so identifiers
    /// always have exactly `length` characters.
    pub fn new(alphabet: &str, length: usize) -> Self {
        let alphabet = if alphabet.is_empty() {
            DEFAULT_ALPHABET
        } else {
            alphabet
        };
        Self {
            alphabet: alphabet.chars().collect(),
            length,
        }
    }

    /// Generates an identifier of `length` characters drawn independently
    /// from the alphabet
    pub fn generate(&self, rng: &mut dyn RngCore) -> String {
        (0..self.length)
            .filter_map(|_| self.alphabet.choose(rng))
            .collect()
    }
}

impl Transform for IdentifierTagger {
    fn transform(&self, text: &str, rng: &mut dyn RngCore) -> String {
        format!("[{}]{}", self.generate(rng), text)
    }
}
