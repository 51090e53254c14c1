use chrono::prelude::*;
use nu_ansi_term::Color::Yellow;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

pub use pseudo::{
    config::{parse as config_parse, MainConfig, DEFAULT_CONF_FILE},
    debug,
    error::*,
    log,
};

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            mode                = \"XA\"\n\
                            upper               = false\n\
                            lower               = false\n\
                            preserve_esc        = false\n\
                            dbvowel             = false\n\
                            dbvowel_count       = 1\n\
                            numcir              = false\n\
                            suffix              = 0\n\
                            custom_prefix       = \"\"\n\
                            custom_suffix       = \"\"\n\
                            custom_repeat       = \"\"\n\
                            custom_repeat_count = 7\n\
                            add_hash            = false\n\
                            hash_length         = 6\n\n\
                            [library]\n\
                            # path = \"${config_dir}/character.json\"\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config: parse_main_config()?,
        })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Creates the default main configuration file in the config directory
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &Path) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF
        .replacen("${date}", &current_date.to_string(), 1)
        .replacen("${config_dir}", &parent_dir.to_string_lossy(), 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    debug!("Created default configuration in {}", config_file.display());
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// This function reads the configuration file and returns a `MainConfig` structure.
/// If the file does not exist, it creates a default configuration file. When no
/// configuration directory can be determined the built-in defaults are used.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config() -> Result<MainConfig> {
    match PROJECT_DIRS.as_ref() {
        Some(dirs) => parse_config_file(&dirs.config_dir().join(DEFAULT_CONF_FILE)),
        None => {
            debug!("No configuration directory available, using defaults");
            Ok(MainConfig::default())
        }
    }
}

fn parse_config_file(conf_file: &PathBuf) -> Result<MainConfig> {
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: String::from(DEFAULT_CONF_FILE),
                cause: log::debug_message(
                    e.to_string(),
                    Yellow
                        .paint(format!("\n[Config path] {}", conf_file.display()))
                        .to_string(),
                ),
            });
        }
        Err(e) => return Err(e),
    };

    MainConfig::from_toml(&toml_data, DEFAULT_CONF_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pseudo::options::{Options, SuffixStyle};

    #[test]
    fn test_default_config_is_created_and_valid() {
        let dir = tempfile::tempdir().unwrap();
        let conf_file = dir.path().join("nested").join(DEFAULT_CONF_FILE);

        let config = parse_config_file(&conf_file).unwrap();
        assert!(conf_file.exists());
        assert_eq!(Options::from(&config.defaults), Options::default());
        assert!(config.library.path.is_none());
    }

    #[test]
    fn test_existing_config_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let conf_file = dir.path().join(DEFAULT_CONF_FILE);
        std::fs::write(&conf_file, "[defaults]\nsuffix = \"3\"\n").unwrap();

        let config = parse_config_file(&conf_file).unwrap();
        assert_eq!(Options::from(&config.defaults).suffix, SuffixStyle::Numeric);
    }

    #[test]
    fn test_unreadable_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let conf_file = dir.path().join(DEFAULT_CONF_FILE);
        std::fs::create_dir(&conf_file).unwrap();

        let result = parse_config_file(&conf_file);
        assert!(matches!(
            result,
            Err(Error::ConfigReadError { ref file, ref cause }) if file == DEFAULT_CONF_FILE && !cause.is_empty()
        ));
    }
}
