use rand::RngCore;

use super::{
    CaseFolder, DigitDecorator, IdentifierTagger, Reversal, Substitution, SuffixPadder, Transform,
};
use crate::debug;
use crate::library::CharLibrary;
use crate::options::{Mode, Options};

pub struct Pipeline<'a> {
    stages: Vec<(&'static str, Box<dyn Transform + 'a>)>,
}

impl<'a> Default for Pipeline<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Builds the chain of stages enabled by the given options
    /// - CaseFolder: Upper/lower case normalization
    /// - Substitution or Reversal: The mode transform
    /// - DigitDecorator: Circled digits (numcir)
    /// - SuffixPadder: Length-proportional suffix
    /// - IdentifierTagger: Random identifier prefix (add_hash)
    ///
    /// # Arguments
    /// * `options` - The options of this run
    /// * `library` - The character library
    /// * `original_len` - Length in characters of the untouched input text
    pub fn for_options(options: &'a Options, library: &'a CharLibrary, original_len: usize) -> Self {
        let mut pipeline = Self::new();

        if options.upper || options.lower {
            pipeline.register("case_folder", CaseFolder::new(options.upper, options.lower));
        }
        match options.mode {
            Mode::Xa => pipeline.register("substitution", Substitution::new(library, options)),
            Mode::Xb => pipeline.register("reversal", Reversal),
        }
        if options.numcir {
            pipeline.register("digit_decorator", DigitDecorator::new());
        }
        pipeline.register(
            "suffix_padder",
            SuffixPadder::new(options, library.numbers(), original_len),
        );
        if options.add_hash {
            pipeline.register(
                "identifier_tagger",
                IdentifierTagger::new(library.alphabet(), options.hash_length),
            );
        }

        debug!("Pipeline stages : {}", pipeline.names().join(" -> "));
        pipeline
    }

    pub fn register<T: Transform + 'a>(&mut self, name: &'static str, transform: T) {
        self.stages.push((name, Box::new(transform)));
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    /// Process the text through all registered transforms in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process
    /// * `rng` - The source of randomness shared by every stage
    ///
    /// # Returns
    /// The processed text after applying all transforms
    pub fn process(&self, text: &str, rng: &mut dyn RngCore) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, (_, transform)| {
                transform.transform(&acc, rng)
            })
    }
}
