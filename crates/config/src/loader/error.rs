//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for config and secrets loading failures.
//!
//! Invariants:
//! - All error variants carry the path of the file involved.
//! - Secrets errors NEVER include raw secrets file contents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the generator inputs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The secrets file exists but could not be read.
    ///
    /// A missing secrets file is not an error and never produces this variant.
    #[error("Failed to read secrets file at {}", path.display())]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::SecretsRead { path, .. } => path,
        }
    }
}
