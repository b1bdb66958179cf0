//! Kubernetes node labels derived from node metadata.
//!
//! Labels are applied by the bootstrap playbook when a node joins k3s.
//!
//! Invariants:
//! - `node.h-kube.io/role` and `node.h-kube.io/type` always come first.
//! - Custom labels keep their value's case; storage and capability labels are
//!   lowercased. A boolean custom label therefore reads `True`, the same flag
//!   under `storage` reads `true`.

use hkube_config::{NodeRecord, NodeRole};
use indexmap::IndexMap;
use serde_yaml::Value;

pub const NODE_LABEL_PREFIX: &str = "node.h-kube.io";
pub const STORAGE_LABEL_PREFIX: &str = "storage.h-kube.io";
pub const CAPABILITY_LABEL_PREFIX: &str = "capability.h-kube.io";

/// Build the `k3s_labels` map for a k3s node.
pub fn k3s_labels(role: &NodeRole, node: &NodeRecord) -> IndexMap<String, String> {
    let mut labels = IndexMap::new();

    let role = role.as_str();
    let role = role.strip_prefix("k3s-").unwrap_or(role);
    labels.insert(format!("{NODE_LABEL_PREFIX}/role"), role.to_string());
    labels.insert(
        format!("{NODE_LABEL_PREFIX}/type"),
        node.node_type().to_string(),
    );

    for (key, value) in node.labels() {
        labels.insert(format!("{NODE_LABEL_PREFIX}/{key}"), value_to_label(value));
    }
    for (key, value) in node.storage() {
        labels.insert(
            format!("{STORAGE_LABEL_PREFIX}/{key}"),
            value_to_label(value).to_lowercase(),
        );
    }
    for (key, value) in node.capabilities() {
        labels.insert(
            format!("{CAPABILITY_LABEL_PREFIX}/{key}"),
            value_to_label(value).to_lowercase(),
        );
    }

    labels
}

/// String form of a YAML value as used in a label value.
///
/// Booleans render as `True`/`False` and null as `None`, the spelling the
/// bootstrap playbooks and existing node selectors were written against.
pub fn value_to_label(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => value_to_label(&tagged.value),
        // Mappings with non-string keys have no JSON form.
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
