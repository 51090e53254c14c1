use rand::RngCore;

use crate::library::CharLibrary;
use crate::options::Options;
use crate::transforms::Pipeline;

/// Pseudo-localizes `text` using the thread-local random generator.
///
/// Returns an empty string for empty input, whatever the options.
///
/// # Examples
/// ```
/// use pseudo::{library::CharLibrary, options::{Mode, Options}, processor::transform};
///
/// let options = Options { mode: Mode::Xb, ..Options::default() };
/// assert_eq!(transform("Hello", &options, &CharLibrary::identity()), "olleH");
/// ```
pub fn transform(text: &str, options: &Options, library: &CharLibrary) -> String {
    transform_with_rng(text, options, library, &mut rand::thread_rng())
}

/// Pseudo-localizes `text` drawing every random choice from `rng`.
///
/// A seeded generator makes the output reproducible.
///
/// # Examples
/// ```
/// use pseudo::{library::CharLibrary, options::Options, processor::transform_with_rng};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let library = CharLibrary::embedded().unwrap();
/// let options = Options { add_hash: true, ..Options::default() };
/// let first = transform_with_rng("Hello", &options, &library, &mut ChaCha20Rng::seed_from_u64(3));
/// let second = transform_with_rng("Hello", &options, &library, &mut ChaCha20Rng::seed_from_u64(3));
/// assert_eq!(first, second);
/// ```
pub fn transform_with_rng<R: RngCore>(
    text: &str,
    options: &Options,
    library: &CharLibrary,
    rng: &mut R,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let original_len = text.chars().count();
    Pipeline::for_options(options, library, original_len).process(text, rng)
}

/// Owns a library and a set of options to pseudo-localize many texts.
pub struct Pseudolocalizer {
    library: CharLibrary,
    options: Options,
}

impl Pseudolocalizer {
    pub fn new(library: CharLibrary, options: Options) -> Self {
        Self { library, options }
    }

    pub fn library(&self) -> &CharLibrary {
        &self.library
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Pseudo-localizes `text` using the thread-local random generator
    pub fn process(&self, text: &str) -> String {
        transform(text, &self.options, &self.library)
    }

    /// Pseudo-localizes `text` drawing every random choice from `rng`
    pub fn process_with_rng<R: RngCore>(&self, text: &str, rng: &mut R) -> String {
        transform_with_rng(text, &self.options, &self.library, rng)
    }
}
