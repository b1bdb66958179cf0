//! Integration tests for loading the generator inputs from a project tree.
//!
//! These tests lay out a `config/` directory inside a temporary project root
//! and verify that `ConfigLoader` reads both files the way the CLI does.

use hkube_config::{ConfigError, ConfigLoader, NodeRole, ProjectPaths};
use std::fs;
use tempfile::TempDir;

const CONFIG_YAML: &str = r#"
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
  deploy: ~/.ssh/deploy
nodes:
  anchor:
    role: headscale
    type: cloud
    ip: 203.0.113.10
    firewall_ports: [22, 80, 443]
  cp-1:
    role: k3s-server
    type: cloud
    ip: 203.0.113.20
    tailscale_ip: 100.64.0.20
  nas:
    role: k3s-agent
    ip: 192.168.1.50
    ssh_key: deploy
    storage:
      ssd: true
      zfs: false
oidc:
  enabled: true
  allowed_groups:
    - admins
"#;

fn project_with(config: &str, secrets: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yaml"), config).unwrap();
    if let Some(secrets) = secrets {
        fs::write(config_dir.join("secrets.env"), secrets).unwrap();
    }
    temp_dir
}

#[test]
fn test_load_full_project() {
    let project = project_with(
        CONFIG_YAML,
        Some("HEADSCALE_AUTHKEY=\"hskey\"\nOIDC_CLIENT_ID=kube\n"),
    );
    let loader = ConfigLoader::new(&ProjectPaths::new(project.path()));

    let config = loader.load_config().expect("config should load");
    let secrets = loader.load_secrets().expect("secrets should load");

    let names: Vec<&str> = config.nodes.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["anchor", "cp-1", "nas"]);
    assert_eq!(config.nodes.get("anchor").unwrap().role(), NodeRole::Headscale);
    assert_eq!(config.nodes.get("nas").unwrap().ssh_key_name(), "deploy");
    assert_eq!(config.versions.headscale.as_deref(), Some("0.23.0"));
    assert!(config.oidc().enabled);
    assert_eq!(config.oidc().allowed_groups, vec!["admins".to_string()]);

    assert_eq!(secrets.expose_or_empty("HEADSCALE_AUTHKEY"), "hskey");
    assert_eq!(secrets.expose_or_empty("OIDC_CLIENT_ID"), "kube");
    assert_eq!(secrets.expose_or_empty("OIDC_CLIENT_SECRET"), "");
}

#[test]
fn test_missing_secrets_file_is_not_an_error() {
    let project = project_with(CONFIG_YAML, None);
    let loader = ConfigLoader::new(&ProjectPaths::new(project.path()));

    let secrets = loader.load_secrets().expect("missing secrets should be tolerated");
    assert!(secrets.is_empty());
}

#[test]
fn test_missing_config_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let paths = ProjectPaths::new(temp_dir.path());
    let loader = ConfigLoader::new(&paths);

    let err = loader.load_config().unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), paths.config_file());
    assert!(err.to_string().contains("config.yaml"));
}

#[test]
fn test_missing_identity_section_fails() {
    let without_identity = CONFIG_YAML
        .lines()
        .skip_while(|line| !line.starts_with("versions:"))
        .collect::<Vec<_>>()
        .join("\n");
    let project = project_with(&without_identity, None);
    let loader = ConfigLoader::new(&ProjectPaths::new(project.path()));

    let err = loader.load_config().unwrap_err();
    match err {
        ConfigError::Parse { source, .. } => assert!(source.to_string().contains("identity")),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}
