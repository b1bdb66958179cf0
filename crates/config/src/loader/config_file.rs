//! Parsing of `config.yaml`.

use std::path::Path;

use super::error::ConfigError;
use crate::types::ClusterConfig;

/// Read and parse the cluster topology document at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file is missing or unreadable, and
/// [`ConfigError::Parse`] if it is not valid YAML or lacks a required section.
pub fn read_config_file(path: &Path) -> Result<ClusterConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: ClusterConfig =
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        nodes = config.nodes.len(),
        ssh_keys = config.ssh_keys.len(),
        "Config file parsed"
    );

    Ok(config)
}
