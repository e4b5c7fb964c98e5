use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{PomError, PomResult};
use crate::options::Options;

pub const DEFAULT_JDK: &str = "1.7";
pub const DEFAULT_VERSION: &str = "1.0-SNAPSHOT";
const CONFIG_FILE_NAME: &str = ".pompilot.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub jdk: String,
    pub version: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            jdk: DEFAULT_JDK.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> PomResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| PomError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| PomError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `--config=<path>` if given, else `~/.pompilot.toml` if it
    /// exists, else the built-in defaults.
    pub fn resolve(options: &Options) -> PomResult<Self> {
        if let Some(path) = options.lookup("config") {
            debug!("Using config file {}", path);
            return Config::from_file(Path::new(path));
        }

        match home_config_path().filter(|path| path.is_file()) {
            Some(path) => {
                debug!("Using config file {}", path.display());
                Config::from_file(&path)
            }
            None => {
                debug!("No config file found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }
}

fn home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.defaults.jdk, "1.7");
        assert_eq!(config.defaults.version, "1.0-SNAPSHOT");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pompilot.toml");
        fs::write(&path, "[defaults]\njdk = \"1.8\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.defaults.jdk, "1.8");
        assert_eq!(config.defaults.version, "1.0-SNAPSHOT");
    }

    #[test]
    fn explicit_config_option_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pompilot.toml");
        fs::write(&path, "[defaults]\nversion = \"0.1.0\"\n").unwrap();

        let flag = format!("--config={}", path.display());
        let options = Options::from_args([flag.as_str(), "demo", "a:b:c"]);
        let config = Config::resolve(&options).unwrap();
        assert_eq!(config.defaults.version, "0.1.0");
        assert!(options.unused_names().is_empty());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(matches!(err, PomError::ConfigRead { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pompilot.toml");
        fs::write(&path, "[defaults]\njava = \"1.8\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, PomError::ConfigParse { .. }));
    }
}
