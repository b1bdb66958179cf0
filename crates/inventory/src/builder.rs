//! Inventory builder.
//!
//! Responsibilities:
//! - Compute the global `all.vars` from identity, versions and secrets.
//! - Classify nodes into groups and build one host entry per grouped node.
//!
//! Does NOT handle:
//! - Reading inputs (see `hkube-config`) or writing output (see `writer.rs`).
//!
//! Invariants / Assumptions:
//! - The build is pure given its inputs and home directory: same inputs, same
//!   inventory.
//! - Empty groups are omitted; nodes matching no group are dropped silently.
//! - Any lookup failure aborts the whole build.

use std::path::PathBuf;

use hkube_config::constants::{HEADSCALE_AUTHKEY, OIDC_CLIENT_ID, OIDC_CLIENT_SECRET};
use hkube_config::{ClusterConfig, NodeRecord, NodeRole, Secrets};
use indexmap::IndexMap;
use secrecy::SecretString;

use crate::error::InventoryError;
use crate::group::Group;
use crate::labels::k3s_labels;
use crate::model::{AllGroup, GlobalVars, HeadscaleVars, HostEntry, HostGroup, Inventory};
use crate::ssh::{expand_tilde, home_dir, resolve_key};

/// Builds an [`Inventory`] from a loaded config and secrets.
pub struct InventoryBuilder<'a> {
    config: &'a ClusterConfig,
    secrets: &'a Secrets,
    home_dir: Option<PathBuf>,
}

impl<'a> InventoryBuilder<'a> {
    /// Create a builder that expands `~` against the invoking user's home.
    pub fn new(config: &'a ClusterConfig, secrets: &'a Secrets) -> Self {
        Self {
            config,
            secrets,
            home_dir: home_dir(),
        }
    }

    /// Expand `~` in key paths against `home` instead of the user's home.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    pub fn build(&self) -> Result<Inventory, InventoryError> {
        let mut members: [Vec<(&str, &NodeRecord, NodeRole)>; 4] = Default::default();

        for (name, node) in self.config.nodes.iter() {
            let role = node.role();
            match Group::classify(&role, node.node_type()) {
                Some(group) => members[group.index()].push((name.as_str(), node, role)),
                None => tracing::debug!(
                    node = name.as_str(),
                    role = %role,
                    node_type = node.node_type(),
                    "Node matches no inventory group, skipping"
                ),
            }
        }

        let mut children = IndexMap::new();
        for group in Group::ALL {
            let nodes = &members[group.index()];
            if nodes.is_empty() {
                continue;
            }

            let mut hosts = HostGroup::default();
            for (name, node, role) in nodes {
                hosts
                    .hosts
                    .insert(name.to_string(), self.host_entry(name, node, role)?);
            }
            tracing::debug!(group = %group, hosts = hosts.hosts.len(), "Group built");
            children.insert(group.as_str().to_string(), hosts);
        }

        let inventory = Inventory {
            all: AllGroup {
                vars: self.global_vars(),
                children,
            },
        };

        tracing::info!(
            nodes = self.config.nodes.len(),
            hosts = inventory.host_count(),
            "Inventory built"
        );

        Ok(inventory)
    }

    fn global_vars(&self) -> GlobalVars {
        let identity = &self.config.identity;
        let versions = &self.config.versions;

        GlobalVars {
            admin_user: identity.admin_user.clone(),
            domain: identity.domain.clone(),
            mesh_domain: identity.mesh_domain(),
            headscale_domain: identity.headscale_domain(),
            kube_domain: identity.kube_domain(),
            github_user: identity.github_user.clone(),
            github_repo: identity.github_repo.clone(),
            github_branch: identity.github_branch.clone(),
            k3s_version: versions.k3s.clone(),
            sops_version: versions.sops.clone(),
            headscale_authkey: self.secret(HEADSCALE_AUTHKEY),
        }
    }

    fn host_entry(
        &self,
        name: &str,
        node: &NodeRecord,
        role: &NodeRole,
    ) -> Result<HostEntry, InventoryError> {
        let ansible_host = node
            .connect_address()
            .ok_or_else(|| InventoryError::MissingAddress {
                node: name.to_string(),
            })?;

        let key_name = node.ssh_key_name();
        let key_path = resolve_key(&self.config.ssh_keys, key_name).ok_or_else(|| {
            InventoryError::MissingSshKey {
                node: name.to_string(),
                key: key_name.to_string(),
            }
        })?;

        let headscale = match role {
            NodeRole::Headscale => Some(self.headscale_vars(name)?),
            _ => None,
        };
        let k3s_labels = role.is_k3s().then(|| k3s_labels(role, node));

        Ok(HostEntry {
            ansible_host: ansible_host.to_string(),
            ansible_user: node
                .ssh_user_or(&self.config.identity.admin_user)
                .to_string(),
            ansible_ssh_private_key_file: expand_tilde(key_path, self.home_dir.as_deref()),
            tailscale_hostname: node.tailscale_hostname_or(name).to_string(),
            firewall_allow_ports: node.firewall_ports.clone(),
            headscale,
            k3s_labels,
        })
    }

    fn headscale_vars(&self, name: &str) -> Result<HeadscaleVars, InventoryError> {
        let headscale_version = self.config.versions.headscale.clone().ok_or_else(|| {
            InventoryError::MissingHeadscaleVersion {
                node: name.to_string(),
            }
        })?;
        let oidc = self.config.oidc();

        Ok(HeadscaleVars {
            headscale_version,
            oidc_enabled: oidc.enabled,
            oidc_client_id: self.secrets.expose_or_empty(OIDC_CLIENT_ID),
            oidc_client_secret: self.secret(OIDC_CLIENT_SECRET),
            oidc_allowed_groups: oidc.allowed_groups,
        })
    }

    fn secret(&self, key: &str) -> SecretString {
        SecretString::new(self.secrets.expose_or_empty(key).into())
    }
}

/// Build the inventory expanding `~` against the invoking user's home.
pub fn build_inventory(
    config: &ClusterConfig,
    secrets: &Secrets,
) -> Result<Inventory, InventoryError> {
    InventoryBuilder::new(config, secrets).build()
}
