//! Inventory group classification.
//!
//! Every node lands in at most one group. The rules are exact matches on
//! `(role, type)`:
//!
//! | role         | type    | group            |
//! |--------------|---------|------------------|
//! | `headscale`  | any     | `anchor`         |
//! | `k3s-server` | `cloud` | `control_planes` |
//! | `k3s-server` | `home`  | `home_servers`   |
//! | `k3s-agent`  | any     | `home_workers`   |
//!
//! Anything else is left out of the inventory.

use std::fmt;

use hkube_config::NodeRole;

/// One of the four fixed inventory groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Anchor,
    ControlPlanes,
    HomeServers,
    HomeWorkers,
}

impl Group {
    /// All groups in output order.
    pub const ALL: [Group; 4] = [
        Group::Anchor,
        Group::ControlPlanes,
        Group::HomeServers,
        Group::HomeWorkers,
    ];

    /// Group for a node, or `None` when no rule matches.
    pub fn classify(role: &NodeRole, node_type: &str) -> Option<Self> {
        match (role, node_type) {
            (NodeRole::Headscale, _) => Some(Group::Anchor),
            (NodeRole::K3sServer, "cloud") => Some(Group::ControlPlanes),
            (NodeRole::K3sServer, "home") => Some(Group::HomeServers),
            (NodeRole::K3sAgent, _) => Some(Group::HomeWorkers),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Group::Anchor => "anchor",
            Group::ControlPlanes => "control_planes",
            Group::HomeServers => "home_servers",
            Group::HomeWorkers => "home_workers",
        }
    }

    /// Position in [`Group::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
