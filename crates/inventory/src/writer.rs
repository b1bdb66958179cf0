//! Inventory writer.
//!
//! Responsibilities:
//! - Render the inventory as the fixed header followed by block-style YAML.
//! - Write it to `generated/inventory.yml`, creating the directory if needed.
//!
//! Invariants:
//! - Field and group order follow the model; keys are never sorted.
//! - Writes are atomic (temp file + rename). A failed run leaves any previous
//!   inventory untouched.

use std::path::{Path, PathBuf};

use hkube_config::ProjectPaths;

use crate::error::WriteError;
use crate::model::Inventory;

/// Comment block written above the generated YAML.
pub const INVENTORY_HEADER: &str = "\
# ==============================================================================
# Ansible Inventory (GENERATED - DO NOT EDIT)
# ==============================================================================
# Generated from: config/config.yaml + config/secrets.env
# Regenerate with: make generate
# ==============================================================================

";

/// Render the full file content for `inventory`.
pub fn render_inventory(inventory: &Inventory) -> Result<String, WriteError> {
    let yaml = serde_yaml::to_string(inventory)?;
    Ok(format!("{INVENTORY_HEADER}{yaml}"))
}

/// Writes the rendered inventory to its output location.
#[derive(Debug, Clone)]
pub struct InventoryWriter {
    output_dir: PathBuf,
    inventory_file: PathBuf,
}

impl InventoryWriter {
    pub fn new(paths: &ProjectPaths) -> Self {
        Self {
            output_dir: paths.output_dir().to_path_buf(),
            inventory_file: paths.inventory_file().to_path_buf(),
        }
    }

    pub fn inventory_file(&self) -> &Path {
        &self.inventory_file
    }

    /// Render and write `inventory`, overwriting any existing file.
    ///
    /// Returns the path written.
    pub fn write(&self, inventory: &Inventory) -> Result<&Path, WriteError> {
        let content = render_inventory(inventory)?;

        std::fs::create_dir_all(&self.output_dir).map_err(|source| WriteError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        // Write to a temporary file first
        let temp_path = self.inventory_file.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(|source| WriteError::Write {
            path: temp_path.clone(),
            source,
        })?;

        // Atomically rename the temporary file to the target path
        if let Err(source) = std::fs::rename(&temp_path, &self.inventory_file) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(WriteError::Write {
                path: self.inventory_file.clone(),
                source,
            });
        }

        tracing::debug!(
            path = %self.inventory_file.display(),
            "Inventory saved atomically"
        );

        Ok(self.inventory_file.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllGroup, GlobalVars};
    use indexmap::IndexMap;
    use secrecy::SecretString;
    use tempfile::TempDir;

    fn empty_inventory() -> Inventory {
        Inventory {
            all: AllGroup {
                vars: GlobalVars {
                    admin_user: "ops".to_string(),
                    domain: "example.net".to_string(),
                    mesh_domain: "mesh.example.net".to_string(),
                    headscale_domain: "headscale.example.net".to_string(),
                    kube_domain: "kube.example.net".to_string(),
                    github_user: "octo".to_string(),
                    github_repo: "homelab".to_string(),
                    github_branch: "main".to_string(),
                    k3s_version: "v1.30.2+k3s1".to_string(),
                    sops_version: "v3.9.0".to_string(),
                    headscale_authkey: SecretString::new("hskey".into()),
                },
                children: IndexMap::new(),
            },
        }
    }

    #[test]
    fn test_render_starts_with_header() {
        let rendered = render_inventory(&empty_inventory()).unwrap();
        assert!(rendered.starts_with(INVENTORY_HEADER));
        assert!(rendered.contains("Ansible Inventory (GENERATED - DO NOT EDIT)"));
    }

    #[test]
    fn test_render_block_style_in_field_order() {
        let rendered = render_inventory(&empty_inventory()).unwrap();
        let body = rendered.strip_prefix(INVENTORY_HEADER).unwrap();

        assert!(body.starts_with("all:\n  vars:\n    admin_user: ops\n    domain: example.net\n"));
        let authkey = body.find("headscale_authkey: hskey").unwrap();
        let sops = body.find("sops_version:").unwrap();
        assert!(sops < authkey);
        assert!(body.contains("  children: {}\n"));
    }

    #[test]
    fn test_write_creates_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        let writer = InventoryWriter::new(&paths);

        let written = writer.write(&empty_inventory()).unwrap();
        assert_eq!(written, paths.inventory_file());
        assert!(paths.inventory_file().exists());
        assert!(!paths.inventory_file().with_extension("tmp").exists());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        std::fs::create_dir_all(paths.output_dir()).unwrap();
        std::fs::write(paths.inventory_file(), "stale: true\n").unwrap();

        InventoryWriter::new(&paths)
            .write(&empty_inventory())
            .unwrap();

        let content = std::fs::read_to_string(paths.inventory_file()).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.starts_with(INVENTORY_HEADER));
    }

    #[test]
    fn test_write_fails_when_output_dir_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        std::fs::write(paths.output_dir(), "not a directory").unwrap();

        let err = InventoryWriter::new(&paths)
            .write(&empty_inventory())
            .unwrap_err();
        assert!(matches!(err, WriteError::CreateDir { .. }));
    }
}
