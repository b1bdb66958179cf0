//! Output model of the generated inventory.
//!
//! Responsibilities:
//! - Mirror the YAML shape `{all: {vars, children: {group: {hosts: {name: entry}}}}}`.
//! - Fix the field order of every emitted mapping through struct field order.
//!
//! Invariants:
//! - Optional host fields are omitted, never emitted as `null`.
//! - Secret-derived fields are held as `SecretString` and exposed only by
//!   serialization.

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use serde_yaml::Value;

fn expose<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

/// The complete inventory document.
#[derive(Debug, Serialize)]
pub struct Inventory {
    pub all: AllGroup,
}

impl Inventory {
    /// Hosts of `group`, or `None` when the group has no members.
    pub fn group(&self, group: crate::Group) -> Option<&HostGroup> {
        self.all.children.get(group.as_str())
    }

    /// Look up a host entry by node name across all groups.
    pub fn host(&self, name: &str) -> Option<&HostEntry> {
        self.all
            .children
            .iter()
            .find_map(|(_, group)| group.hosts.get(name))
    }

    /// Number of hosts across all groups.
    pub fn host_count(&self) -> usize {
        self.all.children.iter().map(|(_, g)| g.hosts.len()).sum()
    }
}

/// The implicit Ansible `all` group.
#[derive(Debug, Serialize)]
pub struct AllGroup {
    pub vars: GlobalVars,
    /// Non-empty groups keyed by group name, in [`Group::ALL`](crate::Group::ALL) order.
    pub children: IndexMap<String, HostGroup>,
}

/// Variables shared by every host.
#[derive(Debug, Serialize)]
pub struct GlobalVars {
    pub admin_user: String,
    pub domain: String,
    pub mesh_domain: String,
    pub headscale_domain: String,
    pub kube_domain: String,
    pub github_user: String,
    pub github_repo: String,
    pub github_branch: String,
    pub k3s_version: String,
    pub sops_version: String,
    #[serde(serialize_with = "expose")]
    pub headscale_authkey: SecretString,
}

#[derive(Debug, Default, Serialize)]
pub struct HostGroup {
    pub hosts: IndexMap<String, HostEntry>,
}

/// Per-node connection details and role-specific variables.
#[derive(Debug, Serialize)]
pub struct HostEntry {
    pub ansible_host: String,
    pub ansible_user: String,
    pub ansible_ssh_private_key_file: String,
    pub tailscale_hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall_allow_ports: Option<Value>,
    #[serde(flatten)]
    pub headscale: Option<HeadscaleVars>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k3s_labels: Option<IndexMap<String, String>>,
}

/// Variables only the anchor (headscale) host receives.
#[derive(Debug, Serialize)]
pub struct HeadscaleVars {
    pub headscale_version: String,
    pub oidc_enabled: bool,
    pub oidc_client_id: String,
    #[serde(serialize_with = "expose")]
    pub oidc_client_secret: SecretString,
    pub oidc_allowed_groups: Vec<String>,
}
