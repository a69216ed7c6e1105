// Rust guideline compliant 2026-10-14

//! Data directory discovery and path management utilities.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tasklist_core::{Config, Storage};

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "TASKLIST_DATA_DIR";

/// Data directory used when nothing else is specified.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Path metadata for a Tasklist data directory.
#[derive(Debug, Clone)]
pub struct DataContext {
    data_dir: PathBuf,
    config_path: PathBuf,
}

impl DataContext {
    /// Resolves the data directory and makes sure it exists.
    ///
    /// Resolution order: `data_dir` argument, `TASKLIST_DATA_DIR`, `./data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn discover(data_dir: Option<&Path>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => match std::env::var_os(DATA_DIR_ENV) {
                Some(dir) => PathBuf::from(dir),
                None => PathBuf::from(DEFAULT_DATA_DIR),
            },
        };
        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            config_path: data_dir.join("config.toml"),
            data_dir,
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Returns the task file path for `config`.
    ///
    /// Relative `data_file` values resolve against the data directory.
    #[must_use]
    pub fn tasks_path(&self, config: &Config) -> PathBuf {
        let file = Path::new(&config.data_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }

    /// Loads configuration from the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.data_dir())?)
    }

    /// Opens storage for the task file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self, config: &Config) -> Result<Storage> {
        Ok(Storage::new(self.tasks_path(config))?)
    }
}
