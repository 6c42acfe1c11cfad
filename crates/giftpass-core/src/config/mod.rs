//! Station configuration: where the mapping tables and the ledger live.
//!
//! One TOML file per redemption station. Every field has a default matching
//! the conventional filenames in the working directory, so a missing config
//! file yields a working station; an unreadable or invalid file is a typed
//! error, never silently replaced by defaults.
//!
//! ```toml
//! [paths]
//! mapping_short = "staff-id-to-team-mapping.csv"
//! mapping_long  = "staff-id-to-team-mapping-long.csv"
//! ledger        = "redemption.csv"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading station configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level station configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    /// File locations for this station.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl StationConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            },
            Err(err) => return Err(err.into()),
        };
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML is invalid.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// File locations for one redemption station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Short mapping table, scanned first.
    #[serde(default = "default_mapping_short")]
    pub mapping_short: PathBuf,

    /// Long mapping table, the fallback.
    #[serde(default = "default_mapping_long")]
    pub mapping_long: PathBuf,

    /// Redemption ledger file.
    #[serde(default = "default_ledger")]
    pub ledger: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            mapping_short: default_mapping_short(),
            mapping_long: default_mapping_long(),
            ledger: default_ledger(),
        }
    }
}

fn default_mapping_short() -> PathBuf {
    PathBuf::from("staff-id-to-team-mapping.csv")
}

fn default_mapping_long() -> PathBuf {
    PathBuf::from("staff-id-to-team-mapping-long.csv")
}

fn default_ledger() -> PathBuf {
    PathBuf::from("redemption.csv")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config =
            StationConfig::from_file(Path::new("/no/such/giftpass.toml")).expect("load failed");
        assert_eq!(config, StationConfig::default());
        assert_eq!(config.paths.ledger, PathBuf::from("redemption.csv"));
    }

    #[test]
    fn partial_file_fills_in_per_field_defaults() {
        let config = StationConfig::from_toml("[paths]\nledger = \"counter-3.csv\"\n")
            .expect("parse failed");
        assert_eq!(config.paths.ledger, PathBuf::from("counter-3.csv"));
        assert_eq!(
            config.paths.mapping_short,
            PathBuf::from("staff-id-to-team-mapping.csv")
        );
    }

    #[test]
    fn full_file_round_trips() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join("giftpass.toml");
        fs::write(
            &path,
            "[paths]\n\
             mapping_short = \"short.csv\"\n\
             mapping_long = \"long.csv\"\n\
             ledger = \"ledger.csv\"\n",
        )
        .expect("failed to write config");

        let config = StationConfig::from_file(&path).expect("load failed");
        assert_eq!(config.paths.mapping_short, PathBuf::from("short.csv"));
        assert_eq!(config.paths.mapping_long, PathBuf::from("long.csv"));
        assert_eq!(config.paths.ledger, PathBuf::from("ledger.csv"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = StationConfig::from_toml("[paths\nledger = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
