//! Ansible inventory generation for the h-kube cluster.
//!
//! This crate turns a loaded [`ClusterConfig`](hkube_config::ClusterConfig)
//! and [`Secrets`](hkube_config::Secrets) into the inventory document consumed
//! by the provisioning playbooks, and writes it to disk.

mod builder;
mod error;
pub mod group;
pub mod labels;
pub mod model;
pub mod ssh;
mod writer;

pub use builder::{InventoryBuilder, build_inventory};
pub use error::{InventoryError, WriteError};
pub use group::Group;
pub use model::{AllGroup, GlobalVars, HeadscaleVars, HostEntry, HostGroup, Inventory};
pub use writer::{INVENTORY_HEADER, InventoryWriter, render_inventory};
