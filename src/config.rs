use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::*;
use crate::library::CharLibrary;
use crate::options::RawOptions;

pub const DEFAULT_CONF_FILE: &str = "pseudo.toml";

/// Environment variable overriding the configured library path
pub const LIBRARY_ENV_VAR: &str = "PSEUDO_LIBRARY";

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct MainConfig {
    pub defaults: RawOptions,
    pub library: LibraryConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LibraryConfig {
    pub path: Option<String>,
}

impl MainConfig {
    /// Parses the main configuration from its TOML contents
    ///
    /// # Arguments
    /// * `data` - The TOML document
    /// * `file` - Name of the file reported in errors
    pub fn from_toml(data: &str, file: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file.to_string(),
            cause: e.to_string(),
        })
    }

    /// Resolves the library path using the following order :
    ///
    /// - The explicit path given by the caller (e.g. a command line argument)
    /// - The path in the PSEUDO_LIBRARY environment variable
    /// - The path in the `[library]` table of the configuration file
    ///
    /// Shell variables and `~` are expanded. Returns `None` when no path is
    /// configured anywhere.
    pub fn library_path(&self, explicit: Option<&str>) -> Result<Option<PathBuf>> {
        let env_path = std::env::var(LIBRARY_ENV_VAR).ok().filter(|p| !p.is_empty());
        let path = explicit
            .map(str::to_string)
            .or(env_path)
            .or_else(|| self.library.path.clone());

        match path {
            Some(p) => {
                let expanded = shellexpand::full(&p).map_err(|e| Error::InterpolationError {
                    location: ConfigType::LIBRARY,
                    cause: e.to_string(),
                })?;
                Ok(Some(PathBuf::from(expanded.as_ref())))
            }
            None => Ok(None),
        }
    }

    /// Loads the character library, falling back to the embedded one when
    /// no path is configured.
    ///
    /// # Errors
    /// Fails when a configured library cannot be read or parsed. A broken
    /// library is never replaced by the embedded one silently.
    pub fn load_library(&self, explicit: Option<&str>) -> Result<CharLibrary> {
        match self.library_path(explicit)? {
            Some(path) => CharLibrary::from_file(&path),
            None => CharLibrary::embedded(),
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
