//! Configuration management for the h-kube inventory generator.
//!
//! This crate provides the typed cluster topology model and the loaders
//! for `config/config.yaml` and `config/secrets.env`.

pub mod constants;
mod loader;
pub mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, Secrets, read_config_file, read_secrets_file};
pub use paths::ProjectPaths;
pub use types::{ClusterConfig, Identity, NodeRecord, NodeRole, OidcConfig, Versions};
