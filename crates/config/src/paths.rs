//! Resolved file locations for a single generator run.
//!
//! Responsibilities:
//! - Derive the input and output paths from a project root.
//!
//! Does NOT handle:
//! - File I/O (see `loader` and the inventory writer).
//!
//! Invariants:
//! - All paths are derived from `root`; nothing here consults the process
//!   environment except [`ProjectPaths::from_current_dir`].

use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE_NAME, INVENTORY_FILE_NAME, OUTPUT_DIR, SECRETS_FILE_NAME,
};

/// Input and output locations relative to a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    config_file: PathBuf,
    secrets_file: PathBuf,
    output_dir: PathBuf,
    inventory_file: PathBuf,
}

impl ProjectPaths {
    /// Resolve all paths under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let config_dir = root.join(CONFIG_DIR);
        let output_dir = root.join(OUTPUT_DIR);

        Self {
            config_file: config_dir.join(CONFIG_FILE_NAME),
            secrets_file: config_dir.join(SECRETS_FILE_NAME),
            inventory_file: output_dir.join(INVENTORY_FILE_NAME),
            output_dir,
            root,
        }
    }

    /// Resolve all paths under the current working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn secrets_file(&self) -> &Path {
        &self.secrets_file
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn inventory_file(&self) -> &Path {
        &self.inventory_file
    }
}
