//! Configuration for the koi driver.
//!
//! Settings come from a TOML file: an explicit path if one is given,
//! otherwise `koi.toml` in the current directory, otherwise the defaults.

use std::path::{Path, PathBuf};

use koi_lex::LexerConfig;
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "koi.toml";

/// Driver configuration.
///
/// ```toml
/// verbose = true
///
/// [lexer]
/// comment = "#"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Delimiters used by the lexer.
    #[serde(default)]
    pub lexer: LexerConfig,
}

impl Config {
    /// Picks the file to load: `explicit` if given, else `./koi.toml` if it
    /// exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(Self::find_config_file)
    }

    /// Load configuration from the file picked by [`Config::locate`], or the
    /// defaults if there is none. Returns the path that was read.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit) {
            Some(path) => Ok((Self::load_from_path(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))?;
        config.lexer.validate()?;
        Ok(config)
    }

    fn find_config_file() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }
}
