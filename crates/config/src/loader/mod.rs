//! Loaders for the generator's two input files.
//!
//! Responsibilities:
//! - Read and parse `config/config.yaml` into a [`ClusterConfig`](crate::ClusterConfig).
//! - Read and parse `config/secrets.env` into [`Secrets`].
//! - Provide a builder-pattern `ConfigLoader` bound to a [`ProjectPaths`](crate::ProjectPaths).
//!
//! Does NOT handle:
//! - Deriving inventory values (see the `hkube-inventory` crate).
//! - Exporting secrets into the process environment. Secrets stay in memory.
//!
//! Invariants / Assumptions:
//! - A missing config file is an error; a missing secrets file is not.
//! - Malformed secrets lines are skipped, never reported.

mod builder;
mod config_file;
mod error;
mod secrets;

pub use builder::ConfigLoader;
pub use config_file::read_config_file;
pub use error::ConfigError;
pub use secrets::{Secrets, read_secrets_file};
