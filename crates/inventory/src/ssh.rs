//! SSH private key resolution for host entries.
//!
//! Responsibilities:
//! - Resolve a node's key name against the `ssh_keys` section with the
//!   `personal` fallback.
//! - Expand a leading `~` to the invoking user's home directory.
//!
//! Does NOT handle:
//! - Checking that the key file exists. The provisioning run reports that.
//! - `~user` forms, which are left untouched.

use std::path::{Path, PathBuf};

use hkube_config::constants::DEFAULT_SSH_KEY;
use indexmap::IndexMap;

/// Home directory of the invoking user, if it can be determined.
pub fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Path configured for `key_name`, falling back to the `personal` key.
///
/// `personal` is mandatory: without it nothing resolves, even a key that is
/// itself defined.
pub fn resolve_key<'a>(ssh_keys: &'a IndexMap<String, String>, key_name: &str) -> Option<&'a str> {
    let personal = ssh_keys.get(DEFAULT_SSH_KEY)?;
    Some(ssh_keys.get(key_name).unwrap_or(personal).as_str())
}

/// Expand `~` or a leading `~/` using `home`.
///
/// Paths without a leading tilde, and all paths when `home` is `None`, are
/// returned unchanged.
pub fn expand_tilde(path: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return path.to_string();
    };
    let Some(rest) = path.strip_prefix('~') else {
        return path.to_string();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        return path.to_string();
    }

    let home = home.to_string_lossy();
    let expanded = format!("{}{}", home.trim_end_matches('/'), rest);
    if expanded.is_empty() {
        "/".to_string()
    } else {
        expanded
    }
}
