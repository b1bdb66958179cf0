//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` over the two input file paths.
//! - Default both paths from a [`ProjectPaths`] and allow per-path overrides.
//!
//! Does NOT handle:
//! - Parsing logic (delegated to config_file.rs and secrets.rs).

use std::path::{Path, PathBuf};

use super::config_file::read_config_file;
use super::error::ConfigError;
use super::secrets::{Secrets, read_secrets_file};
use crate::paths::ProjectPaths;
use crate::types::ClusterConfig;

/// Loads the cluster config and secrets for one generator run.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    secrets_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader reading the standard files under `paths`.
    pub fn new(paths: &ProjectPaths) -> Self {
        Self {
            config_path: paths.config_file().to_path_buf(),
            secrets_path: paths.secrets_file().to_path_buf(),
        }
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = path;
        self
    }

    /// Override the secrets file path.
    pub fn with_secrets_path(mut self, path: PathBuf) -> Self {
        self.secrets_path = path;
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn secrets_path(&self) -> &Path {
        &self.secrets_path
    }

    /// Load `config.yaml`. Missing or malformed files are errors.
    pub fn load_config(&self) -> Result<ClusterConfig, ConfigError> {
        read_config_file(&self.config_path)
    }

    /// Load `secrets.env`. A missing file yields empty secrets.
    pub fn load_secrets(&self) -> Result<Secrets, ConfigError> {
        read_secrets_file(&self.secrets_path)
    }
}
