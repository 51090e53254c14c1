use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Library")]
    LIBRARY,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to create default configuration file in {0}")]
    ConfigError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("character library {source_name:?} is unavailable. Cause : {cause}")]
    LibraryUnavailable { source_name: String, cause: String },
    #[error("invalid entry {key:?} in character library. Cause : {cause}")]
    LibraryFormat { key: String, cause: String },
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { .. }
        | Error::SerdeTomlError { .. }
        | Error::InterpolationError { .. } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::LibraryUnavailable { .. } | Error::LibraryFormat { .. } => {
            writeln!(output, "{}: {}", Red.paint("[library error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[pseudo error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_error_is_tagged() {
        let error = Error::LibraryUnavailable {
            source_name: "character.json".to_string(),
            cause: "not found".to_string(),
        };
        let mut output = Vec::new();
        default_error_handler(&error, &mut output);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[library error]"));
        assert!(text.contains("\"character.json\" is unavailable"));
    }

    #[test]
    fn test_config_error_names_location() {
        let error = Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: "pseudo.toml".to_string(),
            cause: "bad key".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unable to parse Main config file \"pseudo.toml\". Cause : bad key"
        );
    }

    #[test]
    fn test_args_error_uses_generic_tag() {
        let error = Error::ArgsProcessingError("no text supplied".to_string());
        let mut output = Vec::new();
        default_error_handler(&error, &mut output);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[pseudo error]"));
        assert!(text.contains("no text supplied"));
    }
}
