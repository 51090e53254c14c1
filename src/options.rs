//! Options controlling a pseudo-localization run.
//!
//! `Options` is the typed form consumed by the pipeline. `RawOptions` is the
//! string-encoded form used by the command line and the configuration file.
//! Numeric options and the suffix selector may be written in the
//! configuration file either as bare values or as strings. Malformed values
//! fall back silently to their defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::defaults;
use crate::debug;
use crate::error::{Error, Result};

/// Substitution strategy applied to the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Per-character variant substitution
    #[default]
    Xa,
    /// Whole-string reversal
    Xb,
}

/// Padding strategy appended to the decorated text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixStyle {
    #[default]
    None,
    Microsoft,
    Android,
    Numeric,
    Custom,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "XA" => Ok(Mode::Xa),
            "XB" => Ok(Mode::Xb),
            _ => Err(Error::ArgsProcessingError(format!("Invalid mode: {}", s))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Xa => write!(f, "XA"),
            Mode::Xb => write!(f, "XB"),
        }
    }
}

impl FromStr for SuffixStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "none" => Ok(SuffixStyle::None),
            "1" | "ms" | "microsoft" => Ok(SuffixStyle::Microsoft),
            "2" | "android" => Ok(SuffixStyle::Android),
            "3" | "numeric" => Ok(SuffixStyle::Numeric),
            "4" | "custom" => Ok(SuffixStyle::Custom),
            _ => Err(Error::ArgsProcessingError(format!(
                "Invalid suffix style: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for SuffixStyle {
    /// Writes the selector id used by persisted option sets ("0".."4")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            SuffixStyle::None => "0",
            SuffixStyle::Microsoft => "1",
            SuffixStyle::Android => "2",
            SuffixStyle::Numeric => "3",
            SuffixStyle::Custom => "4",
        };
        write!(f, "{}", id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub upper: bool,
    pub lower: bool,
    pub preserve_esc: bool,
    pub dbvowel: bool,
    pub dbvowel_count: usize,
    pub numcir: bool,
    pub suffix: SuffixStyle,
    pub custom_prefix: String,
    pub custom_suffix: String,
    pub custom_repeat: String,
    pub custom_repeat_count: usize,
    pub add_hash: bool,
    pub hash_length: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            mode: Mode::default(),
            upper: false,
            lower: false,
            preserve_esc: false,
            dbvowel: false,
            dbvowel_count: defaults::DBVOWEL_COUNT,
            numcir: false,
            suffix: SuffixStyle::default(),
            custom_prefix: String::new(),
            custom_suffix: String::new(),
            custom_repeat: String::new(),
            custom_repeat_count: defaults::CUSTOM_REPEAT_COUNT,
            add_hash: false,
            hash_length: defaults::HASH_LENGTH,
        }
    }
}

/// String-encoded options as they arrive from the command line or the
/// `[defaults]` table of the configuration file.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RawOptions {
    pub mode: Option<String>,
    pub upper: Option<bool>,
    pub lower: Option<bool>,
    pub preserve_esc: Option<bool>,
    pub dbvowel: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    pub dbvowel_count: Option<String>,
    pub numcir: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    pub suffix: Option<String>,
    pub custom_prefix: Option<String>,
    pub custom_suffix: Option<String>,
    pub custom_repeat: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub custom_repeat_count: Option<String>,
    pub add_hash: Option<bool>,
    #[serde(deserialize_with = "lenient_string")]
    pub hash_length: Option<String>,
}

/// A configuration value accepted where a string-encoded option is expected
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

/// Reads a bare TOML scalar or a string into its string form so it goes
/// through the same parse-with-fallback rules as command line values.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LenientValue>::deserialize(deserializer)?.map(|value| match value {
        LenientValue::Int(n) => n.to_string(),
        LenientValue::Float(f) => f.to_string(),
        LenientValue::Bool(b) => b.to_string(),
        LenientValue::Str(s) => s,
    }))
}

impl RawOptions {
    /// Overlays `other` on top of these options, keeping current values
    /// wherever `other` leaves a field unset.
    pub fn merge(self, other: RawOptions) -> RawOptions {
        RawOptions {
            mode: other.mode.or(self.mode),
            upper: other.upper.or(self.upper),
            lower: other.lower.or(self.lower),
            preserve_esc: other.preserve_esc.or(self.preserve_esc),
            dbvowel: other.dbvowel.or(self.dbvowel),
            dbvowel_count: other.dbvowel_count.or(self.dbvowel_count),
            numcir: other.numcir.or(self.numcir),
            suffix: other.suffix.or(self.suffix),
            custom_prefix: other.custom_prefix.or(self.custom_prefix),
            custom_suffix: other.custom_suffix.or(self.custom_suffix),
            custom_repeat: other.custom_repeat.or(self.custom_repeat),
            custom_repeat_count: other.custom_repeat_count.or(self.custom_repeat_count),
            add_hash: other.add_hash.or(self.add_hash),
            hash_length: other.hash_length.or(self.hash_length),
        }
    }
}

impl From<&RawOptions> for Options {
    fn from(raw: &RawOptions) -> Options {
        Options {
            mode: parse_or("mode", raw.mode.as_deref(), Mode::default()),
            upper: raw.upper.unwrap_or(false),
            lower: raw.lower.unwrap_or(false),
            preserve_esc: raw.preserve_esc.unwrap_or(false),
            dbvowel: raw.dbvowel.unwrap_or(false),
            dbvowel_count: parse_count(
                "dbvowel_count",
                raw.dbvowel_count.as_deref(),
                defaults::DBVOWEL_COUNT,
                0,
            ),
            numcir: raw.numcir.unwrap_or(false),
            suffix: parse_or("suffix", raw.suffix.as_deref(), SuffixStyle::default()),
            custom_prefix: raw.custom_prefix.clone().unwrap_or_default(),
            custom_suffix: raw.custom_suffix.clone().unwrap_or_default(),
            custom_repeat: raw.custom_repeat.clone().unwrap_or_default(),
            custom_repeat_count: parse_count(
                "custom_repeat_count",
                raw.custom_repeat_count.as_deref(),
                defaults::CUSTOM_REPEAT_COUNT,
                1,
            ),
            add_hash: raw.add_hash.unwrap_or(false),
            hash_length: parse_count(
                "hash_length",
                raw.hash_length.as_deref(),
                defaults::HASH_LENGTH,
                0,
            ),
        }
    }
}

/// Parses a selector, falling back to `default` when absent or unknown.
fn parse_or<T: FromStr>(name: &str, value: Option<&str>, default: T) -> T {
    match value {
        Some(v) => v.parse().unwrap_or_else(|_| {
            debug!("Unknown {} \"{}\", using the default", name, v);
            default
        }),
        None => default,
    }
}

/// Parses an unsigned count, falling back to `default` when absent,
/// malformed or below `min`.
fn parse_count(name: &str, value: Option<&str>, default: usize, min: usize) -> usize {
    match value.map(|v| (v, v.trim().parse::<usize>())) {
        Some((_, Ok(n))) if n >= min => n,
        Some((v, _)) => {
            debug!("Malformed {} \"{}\", using {}", name, v, default);
            default
        }
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawOptions {
        RawOptions::default()
    }

    #[test]
    fn test_defaults() {
        let options = Options::from(&raw());
        assert_eq!(options, Options::default());
        assert_eq!(options.mode, Mode::Xa);
        assert_eq!(options.suffix, SuffixStyle::None);
        assert_eq!(options.dbvowel_count, 1);
        assert_eq!(options.custom_repeat_count, 7);
        assert_eq!(options.hash_length, 6);
    }

    #[test]
    fn test_selectors() {
        assert_eq!("XB".parse::<Mode>().unwrap(), Mode::Xb);
        assert_eq!("xa".parse::<Mode>().unwrap(), Mode::Xa);
        assert!("XC".parse::<Mode>().is_err());
        assert_eq!("1".parse::<SuffixStyle>().unwrap(), SuffixStyle::Microsoft);
        assert_eq!("2".parse::<SuffixStyle>().unwrap(), SuffixStyle::Android);
        assert_eq!("3".parse::<SuffixStyle>().unwrap(), SuffixStyle::Numeric);
        assert_eq!("custom".parse::<SuffixStyle>().unwrap(), SuffixStyle::Custom);
        assert!("5".parse::<SuffixStyle>().is_err());
    }

    #[test]
    fn test_selector_display_round_trips_ids() {
        assert_eq!(Mode::Xb.to_string(), "XB");
        assert_eq!(SuffixStyle::Custom.to_string(), "4");
        assert_eq!(SuffixStyle::None.to_string(), "0");
    }

    #[test]
    fn test_unknown_selectors_fall_back() {
        let options = Options::from(&RawOptions {
            mode: Some("XZ".to_string()),
            suffix: Some("9".to_string()),
            ..raw()
        });
        assert_eq!(options.mode, Mode::Xa);
        assert_eq!(options.suffix, SuffixStyle::None);
    }

    #[test]
    fn test_malformed_numbers_fall_back() {
        let options = Options::from(&RawOptions {
            dbvowel_count: Some("lots".to_string()),
            custom_repeat_count: Some("-3".to_string()),
            hash_length: Some("".to_string()),
            ..raw()
        });
        assert_eq!(options.dbvowel_count, 1);
        assert_eq!(options.custom_repeat_count, 7);
        assert_eq!(options.hash_length, 6);
    }

    #[test]
    fn test_zero_handling() {
        let options = Options::from(&RawOptions {
            dbvowel_count: Some("0".to_string()),
            custom_repeat_count: Some("0".to_string()),
            hash_length: Some(" 0 ".to_string()),
            ..raw()
        });
        assert_eq!(options.dbvowel_count, 0);
        assert_eq!(options.custom_repeat_count, 7);
        assert_eq!(options.hash_length, 0);
    }

    #[test]
    fn test_valid_numbers() {
        let options = Options::from(&RawOptions {
            dbvowel_count: Some("3".to_string()),
            custom_repeat_count: Some("2".to_string()),
            hash_length: Some("10".to_string()),
            ..raw()
        });
        assert_eq!(options.dbvowel_count, 3);
        assert_eq!(options.custom_repeat_count, 2);
        assert_eq!(options.hash_length, 10);
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = RawOptions {
            mode: Some("XB".to_string()),
            upper: Some(true),
            hash_length: Some("4".to_string()),
            ..raw()
        };
        let overlay = RawOptions {
            upper: Some(false),
            suffix: Some("1".to_string()),
            ..raw()
        };
        let merged = base.merge(overlay);
        assert_eq!(merged.mode.as_deref(), Some("XB"));
        assert_eq!(merged.upper, Some(false));
        assert_eq!(merged.suffix.as_deref(), Some("1"));
        assert_eq!(merged.hash_length.as_deref(), Some("4"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let raw: RawOptions = toml::from_str(
            "mode = \"XB\"\nnumcir = true\nsuffix = \"2\"\nhash_length = \"8\"\n",
        )
        .unwrap();
        let options = Options::from(&raw);
        assert_eq!(options.mode, Mode::Xb);
        assert!(options.numcir);
        assert_eq!(options.suffix, SuffixStyle::Android);
        assert_eq!(options.hash_length, 8);
    }

    #[test]
    fn test_deserialize_bare_numbers_from_toml() {
        let raw: RawOptions = toml::from_str(
            "suffix = 4
dbvowel_count = 2
custom_repeat_count = 3
hash_length = 8
",
        )
        .unwrap();
        assert_eq!(raw.hash_length.as_deref(), Some("8"));
        let options = Options::from(&raw);
        assert_eq!(options.suffix, SuffixStyle::Custom);
        assert_eq!(options.dbvowel_count, 2);
        assert_eq!(options.custom_repeat_count, 3);
        assert_eq!(options.hash_length, 8);
    }

    #[test]
    fn test_malformed_toml_values_fall_back() {
        let raw: RawOptions =
            toml::from_str("dbvowel_count = -2
hash_length = 2.5
custom_repeat_count = true
")
                .unwrap();
        let options = Options::from(&raw);
        assert_eq!(options.dbvowel_count, defaults::DBVOWEL_COUNT);
        assert_eq!(options.hash_length, defaults::HASH_LENGTH);
        assert_eq!(options.custom_repeat_count, defaults::CUSTOM_REPEAT_COUNT);
    }
}
