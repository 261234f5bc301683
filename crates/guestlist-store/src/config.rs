//! Store configuration
//!
//! A `StoreConfig` names the database file and the connection settings
//! applied when it is opened. It can be read from TOML or from
//! `GUESTLIST_*` environment variables (a `.env` file is honoured).

use crate::errors::{config_error, io_error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_DB_PATH: &str = "GUESTLIST_DB_PATH";
pub const ENV_WAL: &str = "GUESTLIST_WAL";
pub const ENV_BUSY_TIMEOUT_MS: &str = "GUESTLIST_BUSY_TIMEOUT_MS";

const DEFAULT_DB_PATH: &str = "guest_list.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Connection settings for a file-backed guest store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Use write-ahead journaling
    pub wal: bool,
    /// How long a blocked statement waits on a locked database
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            wal: true,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Create a config for the given database path with default settings
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    /// Parse a config from TOML text
    ///
    /// Missing keys fall back to defaults; unknown keys are rejected.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| config_error(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| io_error("load_config", e))?;
        Self::from_toml_str(&content)
    }

    /// Build a config from the process environment
    ///
    /// Loads `.env` from the working directory or its parents first if one
    /// exists. A `.env` that exists but does not parse is an error.
    pub fn from_env() -> Result<Self> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from the process environment after loading `path`
    ///
    /// Variables already set in the environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        check_dotenv(dotenvy::from_path(path.as_ref()))?;
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from a variable lookup, defaulting anything unset
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_WAL) {
            config.wal = parse_bool(&raw)
                .ok_or_else(|| config_error(format!("{} must be a boolean, got '{}'", ENV_WAL, raw)))?;
        }

        if let Some(raw) = lookup(ENV_BUSY_TIMEOUT_MS) {
            config.busy_timeout_ms = raw.trim().parse().map_err(|_| {
                config_error(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_BUSY_TIMEOUT_MS, raw
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(config_error("db_path must not be empty"));
        }
        Ok(())
    }
}

// Only a missing file is tolerated
fn check_dotenv<T>(loaded: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(config_error(format!("invalid .env file: {}", e))),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guestlist_core::ExErrorKind;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, PathBuf::from("guest_list.db"));
        assert!(config.wal);
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = StoreConfig::from_toml_str("db_path = \"/tmp/party.db\"\nwal = false\n").unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/party.db"));
        assert!(!config.wal);
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = StoreConfig::from_toml_str("db_path = \"a.db\"\npool_size = 4\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_from_toml_rejects_empty_path() {
        let err = StoreConfig::from_toml_str("db_path = \"\"\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("db_path"));
    }

    #[test]
    fn test_from_vars_overrides() {
        let env = vars(&[
            (ENV_DB_PATH, "/var/lib/guests.db"),
            (ENV_WAL, "off"),
            (ENV_BUSY_TIMEOUT_MS, "250"),
        ]);
        let config = StoreConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/guests.db"));
        assert!(!config.wal);
        assert_eq!(config.busy_timeout_ms, 250);
    }

    #[test]
    fn test_from_vars_empty_is_default() {
        let config = StoreConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_from_vars_bad_bool() {
        let env = vars(&[(ENV_WAL, "maybe")]);
        let err = StoreConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains(ENV_WAL));
    }

    #[test]
    fn test_from_vars_bad_timeout() {
        let env = vars(&[(ENV_BUSY_TIMEOUT_MS, "-5")]);
        assert!(StoreConfig::from_vars(|k| env.get(k).cloned()).is_err());
    }
}
