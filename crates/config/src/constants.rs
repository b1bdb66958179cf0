//! Centralized constants for the h-kube workspace.
//!
//! This module contains file names, default values and well-known secret keys
//! used across crates to avoid string duplication.

// =============================================================================
// Project Layout
// =============================================================================

/// Directory (relative to the project root) holding the input documents.
pub const CONFIG_DIR: &str = "config";

/// File name of the cluster topology document inside [`CONFIG_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// File name of the secrets file inside [`CONFIG_DIR`].
pub const SECRETS_FILE_NAME: &str = "secrets.env";

/// Directory (relative to the project root) receiving generated artifacts.
pub const OUTPUT_DIR: &str = "generated";

/// File name of the generated Ansible inventory inside [`OUTPUT_DIR`].
pub const INVENTORY_FILE_NAME: &str = "inventory.yml";

// =============================================================================
// Node Defaults
// =============================================================================

/// Node type assumed when a node record has no `type` field.
pub const DEFAULT_NODE_TYPE: &str = "home";

/// SSH key name used when a node record has no `ssh_key` field, and the
/// fallback entry when the named key is missing from `ssh_keys`.
pub const DEFAULT_SSH_KEY: &str = "personal";

// =============================================================================
// Secret Keys
// =============================================================================

/// Pre-authentication key used by nodes to join the Headscale mesh.
pub const HEADSCALE_AUTHKEY: &str = "HEADSCALE_AUTHKEY";

/// OIDC client id for the Headscale login flow.
pub const OIDC_CLIENT_ID: &str = "OIDC_CLIENT_ID";

/// OIDC client secret for the Headscale login flow.
pub const OIDC_CLIENT_SECRET: &str = "OIDC_CLIENT_SECRET";
