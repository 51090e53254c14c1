use rand::RngCore;

/// Trait for text transformations in the pseudo-localization chain
///
/// Each transform is responsible for one stage of the pipeline, such as:
/// - Case normalization
/// - Variant substitution or reversal
/// - Digit decoration
/// - Suffix padding
/// - Identifier tagging
///
/// Stages that pick values at random draw from the supplied generator, so a
/// seeded generator makes the whole chain reproducible.
///
/// # Examples
///
/// ```
/// use pseudo::transforms::{DigitDecorator, Transform};
///
/// let result = DigitDecorator::new().transform("v2.10", &mut rand::thread_rng());
/// assert_eq!(result, "v②.①0");
/// ```
pub trait Transform: Send + Sync {
    /// Transforms the input text
    ///
    /// # Arguments
    /// * `text` - The text to transform
    /// * `rng` - The source of randomness for this run
    ///
    /// # Returns
    /// The transformed text
    fn transform(&self, text: &str, rng: &mut dyn RngCore) -> String;
}
