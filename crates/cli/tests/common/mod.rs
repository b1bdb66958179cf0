//! Shared test utilities for hkube-generate integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory bound to a temporary project root.
//! - Lay out `config/` fixtures inside that root.
//!
//! Invariants / Assumptions:
//! - `HOME` points at a fixed fake directory so `~` expansion is predictable.
//! - `RUST_LOG` is cleared so stderr only carries errors.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Home directory every test command runs with.
#[allow(dead_code)]
pub const FAKE_HOME: &str = "/home/hkube-test";

pub const CONFIG_YAML: &str = r#"
identity:
  admin_user: ops
  domain: example.net
  github_user: octo
  github_repo: homelab
  github_branch: main
versions:
  k3s: v1.30.2+k3s1
  sops: v3.9.0
  headscale: 0.23.0
ssh_keys:
  personal: ~/.ssh/id_ed25519
nodes:
  anchor:
    role: headscale
    type: cloud
    ip: 203.0.113.10
    firewall_ports: [22, 443]
  cp-1:
    role: k3s-server
    type: cloud
    ip: 203.0.113.20
    tailscale_ip: 100.64.0.20
  worker-1:
    role: k3s-agent
    type: home
    ip: 192.168.1.31
    storage:
      ssd: true
  jump:
    role: bastion
    ip: 192.168.1.2
oidc:
  enabled: true
  allowed_groups: [admins]
"#;

/// Returns a hermetic `hkube-generate` command running inside `root`.
pub fn generate_cmd(root: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("hkube-generate");
    cmd.current_dir(root)
        .env("HOME", FAKE_HOME)
        .env_remove("RUST_LOG");
    cmd
}

/// Create a project root with `config/config.yaml` and optional secrets.
pub fn project(config: &str, secrets: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), config).unwrap();
    if let Some(secrets) = secrets {
        fs::write(config_dir.join("secrets.env"), secrets).unwrap();
    }
    temp_dir
}

/// Read the generated inventory of a project.
#[allow(dead_code)]
pub fn read_inventory(root: &Path) -> String {
    fs::read_to_string(root.join("generated").join("inventory.yml"))
        .expect("inventory should have been written")
}
