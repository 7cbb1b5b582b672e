use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ExpenseError, Result},
    expense::Category,
    utils::{ensure_dir, tmp_path, write_atomic, PathResolver},
};

/// User-facing settings consumed by front ends and storage setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the platform data directory when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Category preselected when entering a new expense.
    #[serde(default)]
    pub default_category: Category,
    /// Whether the presentation layer re-sorts right after an add.
    #[serde(default = "Config::default_auto_sort")]
    pub auto_sort_on_add: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_category: Category::default(),
            auto_sort_on_add: true,
        }
    }
}

impl Config {
    fn default_auto_sort() -> bool {
        true
    }
}

/// Loads and saves the configuration file under the application base
/// directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored configuration, falling back to defaults when no
    /// file exists yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ExpenseError::Config(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
