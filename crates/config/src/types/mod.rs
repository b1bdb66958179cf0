//! Typed model of the cluster topology document.
//!
//! Responsibilities:
//! - Define the `config.yaml` sections (identity, versions, ssh_keys, nodes, oidc).
//! - Provide accessors that apply the documented defaults for optional fields.
//! - Preserve document order for every mapping the generator iterates.
//!
//! Does NOT handle:
//! - Reading files (see `loader` module).
//! - Deriving inventory values (see the `hkube-inventory` crate).
//!
//! Invariants:
//! - Required sections are required at deserialization time; a document without
//!   them fails to load.
//! - Unknown fields are ignored.

mod cluster;
mod node;

pub use cluster::{ClusterConfig, Identity, OidcConfig, Versions};
pub use node::{NodeRecord, NodeRole};
