//! Top-level sections of `config.yaml`.

use indexmap::IndexMap;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

use super::node::NodeRecord;

/// The parsed cluster topology document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub identity: Identity,
    pub versions: Versions,
    /// SSH key name to private key path (may start with `~`).
    pub ssh_keys: IndexMap<String, String>,
    pub nodes: IndexMap<String, NodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oidc: Option<OidcConfig>,
}

impl ClusterConfig {
    /// OIDC settings, or the disabled defaults when the section is absent.
    pub fn oidc(&self) -> OidcConfig {
        self.oidc.clone().unwrap_or_default()
    }
}

/// Operator and repository identity shared by every host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub admin_user: String,
    pub domain: String,
    pub github_user: String,
    pub github_repo: String,
    pub github_branch: String,
}

impl Identity {
    pub fn mesh_domain(&self) -> String {
        format!("mesh.{}", self.domain)
    }

    pub fn headscale_domain(&self) -> String {
        format!("headscale.{}", self.domain)
    }

    pub fn kube_domain(&self) -> String {
        format!("kube.{}", self.domain)
    }
}

/// Pinned component versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Versions {
    pub k3s: String,
    pub sops: String,
    /// Only required when the topology contains a headscale node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headscale: Option<String>,
}

/// Headscale OIDC login settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcConfig {
    #[serde(default, deserialize_with = "bool_or_yaml11_word")]
    pub enabled: bool,
    #[serde(default)]
    pub allowed_groups: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrWord {
    Bool(bool),
    Word(String),
}

/// YAML 1.1 boolean words, as hand-written topology files commonly use them.
fn yaml11_bool(word: &str) -> Option<bool> {
    match word {
        "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "true" | "True" | "TRUE" => Some(true),
        "no" | "No" | "NO" | "off" | "Off" | "OFF" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Accept `true`/`false`, the YAML 1.1 words (`yes`, `off`, ...) and null.
fn bool_or_yaml11_word<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrWord>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolOrWord::Bool(value)) => Ok(value),
        Some(BoolOrWord::Word(word)) => yaml11_bool(&word)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&word), &"a boolean")),
    }
}
