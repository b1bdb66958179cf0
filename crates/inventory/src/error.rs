//! Error types for inventory generation and output.
//!
//! Invariants:
//! - Every variant names the node or path involved.
//! - No variant carries secret values.

use std::path::PathBuf;
use thiserror::Error;

/// Lookup failures while deriving host entries. Any of these aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The node has neither `ip` nor a non-empty `tailscale_ip`.
    #[error("Node '{node}' has no 'ip' or 'tailscale_ip' to use as ansible_host")]
    MissingAddress { node: String },

    /// `ssh_keys` has no `personal` entry. `key` is the key name the node uses.
    #[error("Node '{node}' uses ssh key '{key}', but ssh_keys has no 'personal' entry")]
    MissingSshKey { node: String, key: String },

    #[error("Node '{node}' has role 'headscale' but versions.headscale is not set")]
    MissingHeadscaleVersion { node: String },
}

/// Failures while writing the generated inventory.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize inventory")]
    Serialize(#[from] serde_yaml::Error),

    #[error("Failed to write inventory to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
