//! Node records and role classification input.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::constants::{DEFAULT_NODE_TYPE, DEFAULT_SSH_KEY};

/// Role of a node as declared by its `role` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRole {
    /// Runs the Headscale coordination server.
    Headscale,
    K3sServer,
    K3sAgent,
    /// Any other declared role. Such nodes are never grouped.
    Other(String),
    /// No `role` field.
    Unset,
}

impl NodeRole {
    pub fn parse(role: Option<&str>) -> Self {
        match role {
            Some("headscale") => Self::Headscale,
            Some("k3s-server") => Self::K3sServer,
            Some("k3s-agent") => Self::K3sAgent,
            Some(other) => Self::Other(other.to_string()),
            None => Self::Unset,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Headscale => "headscale",
            Self::K3sServer => "k3s-server",
            Self::K3sAgent => "k3s-agent",
            Self::Other(role) => role,
            Self::Unset => "other",
        }
    }

    /// True for roles that join the k3s cluster.
    pub fn is_k3s(&self) -> bool {
        matches!(self, Self::K3sServer | Self::K3sAgent)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry under `nodes:`.
///
/// Every field is optional at parse time; the accessors apply defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailscale_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailscale_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_user: Option<String>,
    /// Passed through to the inventory untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_ports: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<IndexMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<IndexMap<String, Value>>,
}

impl NodeRecord {
    pub fn role(&self) -> NodeRole {
        NodeRole::parse(self.role.as_deref())
    }

    /// Declared node type, `home` when absent.
    pub fn node_type(&self) -> &str {
        self.node_type.as_deref().unwrap_or(DEFAULT_NODE_TYPE)
    }

    /// Address Ansible should connect to: the tailscale IP when set and
    /// non-empty, the plain IP otherwise.
    pub fn connect_address(&self) -> Option<&str> {
        self.tailscale_ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
            .or(self.ip.as_deref())
    }

    pub fn ssh_key_name(&self) -> &str {
        self.ssh_key.as_deref().unwrap_or(DEFAULT_SSH_KEY)
    }

    pub fn ssh_user_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.ssh_user.as_deref().unwrap_or(fallback)
    }

    pub fn tailscale_hostname_or<'a>(&'a self, node_name: &'a str) -> &'a str {
        self.tailscale_hostname.as_deref().unwrap_or(node_name)
    }

    pub fn labels(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.labels.iter().flat_map(|map| str_entries(map))
    }

    pub fn storage(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.storage.iter().flat_map(|map| str_entries(map))
    }

    pub fn capabilities(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.capabilities.iter().flat_map(|map| str_entries(map))
    }
}

fn str_entries(map: &IndexMap<String, Value>) -> impl Iterator<Item = (&str, &Value)> {
    map.iter().map(|(key, value)| (key.as_str(), value))
}
