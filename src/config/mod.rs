pub mod paths;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::ConfigError, utils::persistence::replace_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File name of the account book inside the data directory.
    pub data_file: String,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: paths::DEFAULT_DATA_FILE.into(),
            currency: "KRW".into(),
        }
    }
}

/// Loads and saves [`Config`] as `config.json` under a base directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        replace_file(&self.path, &json)?;
        Ok(())
    }

    /// Absolute path of the account book named by `config`.
    pub fn data_path(&self, config: &Config) -> PathBuf {
        self.base.join(&config.data_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
