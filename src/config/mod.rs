use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::utils::{config_file, ensure_dir};

/// Engine configuration. Unknown fields are ignored and missing fields take
/// defaults, so older config files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Currency label shown in replies.
    pub currency: String,
    /// Overrides the default ledger file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "FCFA".into(),
            data_file: None,
        }
    }
}

/// Loads and saves the configuration file under the app data directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::at(config_file())
    }

    pub fn at(path: PathBuf) -> Result<Self, ConfigError> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        Ok(Self { path })
    }

    /// Reads the configuration; a missing or unreadable file yields the
    /// defaults (corruption is logged, not fatal).
    pub fn load(&self) -> Config {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Config::default(),
            Err(err) => {
                tracing::warn!("config at {} unreadable, using defaults: {err}", self.path.display());
                return Config::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config at {} corrupt, using defaults: {err}", self.path.display());
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
