//! Stages of the pseudo-localization pipeline.
//!
//! Every stage implements [`Transform`] and is chained by a [`Pipeline`] in
//! this order: case folding, mode transform (substitution or reversal), digit
//! decoration, suffix padding and identifier tagging.

mod digits;
mod escape;
mod identifier;
mod mode;
mod pipeline;
mod suffix;
mod transform;

pub use digits::DigitDecorator;
pub use escape::EscapeGuard;
pub use identifier::IdentifierTagger;
pub use mode::{CaseFolder, Reversal, Substitution};
pub use pipeline::Pipeline;
pub use suffix::SuffixPadder;
pub use transform::Transform;
