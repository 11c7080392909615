//! Catalog data model and provider boundaries.
//!
//! A catalog is a tree of [`CatalogNode`] values: a single `catalog` root,
//! `schema` branches, and `table` leaves carrying row count and size labels.
//! The model is serde-derived so catalogs can be loaded from JSON files with
//! the same shape as the built-in mock.

mod providers;
mod schema;

pub use providers::{CatalogProvider, JsonCatalogProvider, MockCatalogProvider};
pub use schema::{ColumnDescriptor, ColumnSchemaProvider, KeyRole, RuleBasedSchemaProvider};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a catalog tree node.
///
/// Kind is descriptive metadata: branch-vs-leaf decisions are always made on
/// the presence of children, so a malformed table that carries children still
/// renders as a branch instead of failing the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Catalog,
    Schema,
    Table,
}

impl NodeKind {
    /// Display label used in messages and the tree view.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Catalog => "catalog",
            NodeKind::Schema => "schema",
            NodeKind::Table => "table",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the catalog/schema/table hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogNode {
    /// Identifier, unique among siblings.
    pub name: String,
    /// Node kind. Serialized as `type` to match the external catalog shape.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered children. Empty for leaves; order is preserved as given.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogNode>,
    /// Row count, present on well-formed tables only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
    /// Human-readable size label ("2.5 GB"). Free-form, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CatalogNode {
    /// Create a branch node (catalog or schema) with the given children.
    pub fn branch(name: impl Into<String>, kind: NodeKind, children: Vec<CatalogNode>) -> Self {
        Self {
            name: name.into(),
            kind,
            children,
            row_count: None,
            size: None,
        }
    }

    /// Create a table leaf with row count and size metadata.
    pub fn table(name: impl Into<String>, row_count: u64, size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Table,
            children: Vec::new(),
            row_count: Some(row_count),
            size: Some(size.into()),
        }
    }

    /// Whether this node renders as a branch (has children to disclose).
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CatalogNode::node_count)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "main",
            "type": "catalog",
            "children": [
                {
                    "name": "dw",
                    "type": "schema",
                    "children": [
                        { "name": "customers", "type": "table", "rowCount": 15420, "size": "2.5 GB" }
                    ]
                }
            ]
        }"#
    }

    #[test]
    fn test_deserialize_external_shape() {
        let root: CatalogNode = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(root.kind, NodeKind::Catalog);
        assert_eq!(root.children.len(), 1);

        let table = &root.children[0].children[0];
        assert_eq!(table.name, "customers");
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(table.row_count, Some(15420));
        assert_eq!(table.size.as_deref(), Some("2.5 GB"));
        assert!(!table.is_branch());
    }

    #[test]
    fn test_missing_table_fields_deserialize_as_none() {
        let json = r#"{ "name": "raw", "type": "table" }"#;
        let node: CatalogNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.row_count, None);
        assert_eq!(node.size, None);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let root: CatalogNode = serde_json::from_str(sample_json()).unwrap();
        let encoded = serde_json::to_string(&root).unwrap();
        let decoded: CatalogNode = serde_json::from_str(&encoded).unwrap();
        assert_eq!(root, decoded);
    }

    #[test]
    fn test_node_count() {
        let root: CatalogNode = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(root.node_count(), 3);
    }

    #[test]
    fn test_branch_is_decided_by_children_not_kind() {
        // A malformed table with children still counts as a branch.
        let node = CatalogNode {
            name: "weird".to_string(),
            kind: NodeKind::Table,
            children: vec![CatalogNode::table("inner", 1, "1 KB")],
            row_count: Some(1),
            size: None,
        };
        assert!(node.is_branch());
    }
}
