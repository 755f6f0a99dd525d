//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StudentDbError};

/// Default store file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "Students.bin";

/// Main configuration for a studentdb session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Flat file holding every student record.
    /// Absent until the first student is created.
    pub store_path: PathBuf,

    /// fsync the store after every append or rewrite
    pub sync_writes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            sync_writes: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the store cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(StudentDbError::Config("store path is empty".to_string()));
        }
        if self.store_path.is_dir() {
            return Err(StudentDbError::Config(format!(
                "store path {} is a directory",
                self.store_path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file location
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Enable or disable fsync after writes
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
