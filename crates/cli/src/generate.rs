//! The generator pipeline: load config, load secrets, build, write.
//!
//! Responsibilities:
//! - Run the four stages strictly in sequence.
//! - Print the progress lines on stdout.
//!
//! Invariants:
//! - Nothing is written unless every earlier stage succeeded.

use std::path::PathBuf;

use anyhow::Context;
use hkube_config::{ConfigLoader, ProjectPaths};
use hkube_inventory::{InventoryBuilder, InventoryWriter};

/// Generate the inventory for `paths` and return the path written.
pub fn run(paths: &ProjectPaths) -> anyhow::Result<PathBuf> {
    let loader = ConfigLoader::new(paths);

    println!("Loading config...");
    let config = loader.load_config().context("Failed to load cluster config")?;

    println!("Loading secrets...");
    let secrets = loader.load_secrets().context("Failed to load secrets")?;

    println!("Generating inventory...");
    let inventory = InventoryBuilder::new(&config, &secrets)
        .build()
        .context("Failed to generate inventory")?;

    let written = InventoryWriter::new(paths)
        .write(&inventory)
        .context("Failed to write inventory")?
        .to_path_buf();
    println!("Generated: {}", written.display());

    tracing::info!(
        path = %written.display(),
        hosts = inventory.host_count(),
        "Inventory generated"
    );

    Ok(written)
}
