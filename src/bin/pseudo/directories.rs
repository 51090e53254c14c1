use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;

/// Location of `pseudo.toml` and of user character libraries.
///
/// `PSEUDO_CONFIG_DIR` wins when set. Otherwise the platform config directory
/// is used, except on macOS where `XDG_CONFIG_HOME` or `~/.config` is preferred
/// so the file sits in the same place as on Linux.
pub struct ProjectDirs {
    config_dir: PathBuf,
}

impl ProjectDirs {
    fn new() -> Option<ProjectDirs> {
        Self::resolve(env::var_os("PSEUDO_CONFIG_DIR").map(PathBuf::from))
    }

    fn resolve(override_dir: Option<PathBuf>) -> Option<ProjectDirs> {
        let config_dir =
            if let Some(override_dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
                override_dir
            } else {
                #[cfg(target_os = "macos")]
                let platform_dir = env::var_os("XDG_CONFIG_HOME")
                    .map(PathBuf::from)
                    .filter(|p| p.is_absolute())
                    .or_else(|| dirs_next::home_dir().map(|d| d.join(".config")));

                #[cfg(not(target_os = "macos"))]
                let platform_dir = dirs_next::config_dir();

                platform_dir.map(|d| d.join("pseudo"))?
            };

        Some(ProjectDirs { config_dir })
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

pub static PROJECT_DIRS: Lazy<Option<ProjectDirs>> = Lazy::new(ProjectDirs::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_is_used_as_is() {
        let dirs = ProjectDirs::resolve(Some(PathBuf::from("/tmp/pseudo-conf"))).unwrap();
        assert_eq!(dirs.config_dir(), &PathBuf::from("/tmp/pseudo-conf"));
    }

    #[test]
    fn test_empty_override_uses_platform_dir() {
        if let Some(dirs) = ProjectDirs::resolve(Some(PathBuf::new())) {
            assert!(dirs.config_dir().ends_with("pseudo"));
        }
    }
}
