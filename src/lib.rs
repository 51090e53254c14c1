//! `pseudo` is a library to pseudo-localize text, distorting it the way a
//! translation would (accented glyphs, reversed reading order, elongated
//! vowels, padding, identifier tags) to stress-test user interfaces.
//!
//! The main entry point is `processor::transform`, which takes the text, an
//! `options::Options` record and a `library::CharLibrary`. For reproducible
//! output use `processor::transform_with_rng` with a seeded generator.
//!
//! The stages of the pipeline live in the `transforms` module and can be
//! used on their own.
//!
//! "Hello world" example:
//! ```
//! use pseudo::prelude::*;
//!
//! let library = CharLibrary::embedded().unwrap();
//! let options = Options { suffix: SuffixStyle::Microsoft, ..Options::default() };
//!
//! let result = transform("Hello world!!", &options, &library);
//! assert!(result.starts_with('['));
//! assert!(result.ends_with(" !]"));
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod library;
pub mod log;
pub mod options;
pub mod processor;
pub mod transforms;

/// The pseudo prelude
///
/// This module re-exports the most commonly used items from pseudo.
/// You can use it with `use pseudo::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::error::Result;
    pub use crate::library::CharLibrary;
    pub use crate::options::{Mode, Options, RawOptions, SuffixStyle};
    pub use crate::processor::Pseudolocalizer;

    // Re-export commonly used functions
    pub use crate::processor::{transform, transform_with_rng};
}
