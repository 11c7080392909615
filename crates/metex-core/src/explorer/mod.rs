//! Explorer state machine: tree view-model, expand/collapse, selection.
//!
//! [`ExplorerState`] indexes a catalog tree into a flat arena and owns the
//! per-session UI state: which branches are collapsed and which table is
//! selected. Front ends consume [`TreeRow`] and [`TableDetails`] view-models
//! and never hold tree state of their own, so selection invariants can be
//! tested without mounting a UI.

use std::collections::HashSet;

use log::debug;

use crate::catalog::{CatalogNode, ColumnDescriptor, ColumnSchemaProvider, NodeKind};
use crate::error::ExplorerError;
use crate::format::group_thousands;

/// Stable identifier of a node within one tree build (preorder index).
pub type NodeId = usize;

/// One visible row of the flattened tree view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    /// Nesting depth; the root is 0.
    pub depth: usize,
    pub name: String,
    pub kind: NodeKind,
    /// Whether the row has children to disclose.
    pub is_branch: bool,
    /// Disclosure state. Always true for leaves.
    pub expanded: bool,
}

/// Detail view-model for the currently selected table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDetails {
    pub name: String,
    pub row_count: u64,
    /// Row count with thousands separators, ready for display.
    pub row_count_display: String,
    /// Size label, passed through verbatim. Empty string when the node
    /// carried no size.
    pub size: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// Arena entry for one indexed catalog node.
#[derive(Debug, Clone)]
struct IndexedNode {
    name: String,
    kind: NodeKind,
    depth: usize,
    row_count: Option<u64>,
    size: Option<String>,
    children: Vec<NodeId>,
}

/// Tree and selection state for one explorer session.
///
/// Rebuilding from the same catalog restores the initial state (everything
/// expanded, nothing selected), which is what makes re-render idempotent.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    nodes: Vec<IndexedNode>,
    /// Branches the user has collapsed. Empty set means default-expanded.
    collapsed: HashSet<NodeId>,
    /// The single selected table, if any.
    selected: Option<NodeId>,
    root_name: String,
}

impl ExplorerState {
    /// Index a catalog tree and reset all session state.
    pub fn new(root: CatalogNode) -> Self {
        let root_name = root.name.clone();
        let mut nodes = Vec::with_capacity(root.node_count());
        Self::index_subtree(&root, 0, &mut nodes);
        debug!(
            "indexed catalog '{}': {} nodes",
            root_name,
            nodes.len()
        );
        Self {
            nodes,
            collapsed: HashSet::new(),
            selected: None,
            root_name,
        }
    }

    fn index_subtree(node: &CatalogNode, depth: usize, nodes: &mut Vec<IndexedNode>) -> NodeId {
        let id = nodes.len();
        nodes.push(IndexedNode {
            name: node.name.clone(),
            kind: node.kind,
            depth,
            row_count: node.row_count,
            size: node.size.clone(),
            children: Vec::new(),
        });

        let mut children = Vec::with_capacity(node.children.len());
        for child in &node.children {
            children.push(Self::index_subtree(child, depth + 1, nodes));
        }
        nodes[id].children = children;
        id
    }

    /// Name of the catalog root.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Total number of indexed nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of branch nodes (nodes with children).
    pub fn branch_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.children.is_empty()).count()
    }

    /// Number of leaf nodes (nodes without children).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.children.is_empty()).count()
    }

    /// The currently selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Flatten the tree into visible rows, honoring collapse state.
    ///
    /// Children render in provider order; a collapsed branch contributes its
    /// own row but none of its descendants. Recursion is generic over depth.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        if !self.nodes.is_empty() {
            self.push_visible(0, &mut rows);
        }
        rows
    }

    fn push_visible(&self, id: NodeId, rows: &mut Vec<TreeRow>) {
        let node = &self.nodes[id];
        let is_branch = !node.children.is_empty();
        let expanded = !self.collapsed.contains(&id);
        rows.push(TreeRow {
            id,
            depth: node.depth,
            name: node.name.clone(),
            kind: node.kind,
            is_branch,
            expanded,
        });

        if is_branch && expanded {
            for &child in &node.children {
                self.push_visible(child, rows);
            }
        }
    }

    /// Flip the disclosure state of a branch row.
    ///
    /// Leaf rows are a no-op: leaf and branch activation can share the same
    /// key in a front end, so a toggle on a row with nothing to disclose must
    /// not fail. Returns the new expanded state, or `None` if nothing
    /// changed.
    pub fn toggle(&mut self, id: NodeId) -> Option<bool> {
        let node = self.nodes.get(id)?;
        if node.children.is_empty() {
            return None;
        }
        if self.collapsed.remove(&id) {
            Some(true)
        } else {
            self.collapsed.insert(id);
            Some(false)
        }
    }

    /// Force a branch to a specific disclosure state. No-op on leaves.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.children.is_empty() {
            return;
        }
        if expanded {
            self.collapsed.remove(&id);
        } else {
            self.collapsed.insert(id);
        }
    }

    /// Select a table and build its detail view-model.
    ///
    /// Only nodes of kind `table` are selectable; anything else is rejected
    /// with `UnsupportedSelection` and the current selection is untouched.
    /// Missing row count or size renders as placeholders rather than failing.
    pub fn select(
        &mut self,
        id: NodeId,
        schema: &dyn ColumnSchemaProvider,
    ) -> Result<TableDetails, ExplorerError> {
        let node = self
            .nodes
            .get(id)
            .ok_or(ExplorerError::UnknownNode { id })?;
        if node.kind != NodeKind::Table {
            return Err(ExplorerError::UnsupportedSelection { kind: node.kind });
        }

        let row_count = node.row_count.unwrap_or(0);
        let details = TableDetails {
            name: node.name.clone(),
            row_count,
            row_count_display: group_thousands(row_count),
            size: node.size.clone().unwrap_or_default(),
            columns: schema.columns_for(&node.name),
        };

        self.selected = Some(id);
        debug!("selected table '{}' (id {})", details.name, id);
        Ok(details)
    }

    /// Clear the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, MockCatalogProvider, RuleBasedSchemaProvider};

    fn state() -> ExplorerState {
        ExplorerState::new(MockCatalogProvider.catalog().unwrap())
    }

    fn row_id(state: &ExplorerState, name: &str) -> NodeId {
        state
            .visible_rows()
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("row '{}' not visible", name))
            .id
    }

    #[test]
    fn test_full_coverage() {
        let state = state();
        let rows = state.visible_rows();

        // 1 catalog + 3 schemas + 7 tables, all visible by default.
        assert_eq!(rows.len(), 11);
        assert_eq!(state.branch_count(), 4);
        assert_eq!(state.leaf_count(), 7);
        assert_eq!(rows.iter().filter(|r| r.is_branch).count(), 4);
        assert_eq!(rows.iter().filter(|r| !r.is_branch).count(), 7);
    }

    #[test]
    fn test_default_expanded() {
        let state = state();
        for row in state.visible_rows() {
            assert!(row.expanded, "row '{}' should start expanded", row.name);
        }
    }

    #[test]
    fn test_children_keep_provider_order() {
        let state = state();
        let names: Vec<String> = state.visible_rows().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "main",
                "dw",
                "customers",
                "sales_orders",
                "products",
                "dim_date",
                "dm",
                "report_monthly_sales",
                "report_top_customers",
                "staging",
                "raw_events"
            ]
        );
    }

    #[test]
    fn test_toggle_hides_subtree() {
        let mut state = state();
        let dw = row_id(&state, "dw");

        assert_eq!(state.toggle(dw), Some(false));
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 7); // dw's four tables hidden
        assert!(!rows.iter().find(|r| r.id == dw).unwrap().expanded);
        assert!(!rows.iter().any(|r| r.name == "customers"));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = state();
        let before = state.visible_rows();
        let dm = row_id(&state, "dm");

        assert_eq!(state.toggle(dm), Some(false));
        assert_eq!(state.toggle(dm), Some(true));
        assert_eq!(state.visible_rows(), before);
    }

    #[test]
    fn test_toggle_leaf_is_noop() {
        let mut state = state();
        let leaf = row_id(&state, "customers");

        assert_eq!(state.toggle(leaf), None);
        assert_eq!(state.visible_rows().len(), 11);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = state();
        assert_eq!(state.toggle(9999), None);
    }

    #[test]
    fn test_collapsed_root_hides_everything_below() {
        let mut state = state();
        state.toggle(0);
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "main");
    }

    #[test]
    fn test_at_most_one_selected_last_wins() {
        let mut state = state();
        let schema = RuleBasedSchemaProvider;
        let customers = row_id(&state, "customers");
        let products = row_id(&state, "products");
        let raw_events = row_id(&state, "raw_events");

        for id in [customers, products, raw_events, products] {
            state.select(id, &schema).unwrap();
            assert_eq!(state.selected(), Some(id));
        }
    }

    #[test]
    fn test_select_schema_is_rejected_and_keeps_selection() {
        let mut state = state();
        let schema = RuleBasedSchemaProvider;
        let customers = row_id(&state, "customers");
        state.select(customers, &schema).unwrap();

        let dw = row_id(&state, "dw");
        let err = state.select(dw, &schema).unwrap_err();
        assert_eq!(
            err,
            ExplorerError::UnsupportedSelection {
                kind: NodeKind::Schema
            }
        );
        assert_eq!(state.selected(), Some(customers));
    }

    #[test]
    fn test_select_builds_formatted_details() {
        let mut state = state();
        let id = row_id(&state, "sales_orders");
        let details = state.select(id, &RuleBasedSchemaProvider).unwrap();

        assert_eq!(details.name, "sales_orders");
        assert_eq!(details.row_count, 450012);
        assert_eq!(details.row_count_display, "450,012");
        assert_eq!(details.size, "18.2 GB"); // verbatim, never reformatted
        assert_eq!(details.columns.len(), 6);
    }

    #[test]
    fn test_select_zero_rows() {
        let mut state = state();
        let id = row_id(&state, "raw_events");
        let details = state.select(id, &RuleBasedSchemaProvider).unwrap();
        assert_eq!(details.row_count_display, "0");
        assert_eq!(details.size, "0 GB");
    }

    #[test]
    fn test_malformed_table_renders_placeholders() {
        let root = CatalogNode::branch(
            "c",
            NodeKind::Catalog,
            vec![CatalogNode {
                name: "broken".to_string(),
                kind: NodeKind::Table,
                children: Vec::new(),
                row_count: None,
                size: None,
            }],
        );
        let mut state = ExplorerState::new(root);
        let id = row_id(&state, "broken");
        let details = state.select(id, &RuleBasedSchemaProvider).unwrap();
        assert_eq!(details.row_count_display, "0");
        assert_eq!(details.size, "");
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut state = state();
        let dw = row_id(&state, "dw");
        state.toggle(dw);
        state.select(row_id(&state, "raw_events"), &RuleBasedSchemaProvider).unwrap();

        // Rebuild from the same catalog: counts restored, default-expanded
        // again, selection gone, no duplicate rows.
        let rebuilt = ExplorerState::new(MockCatalogProvider.catalog().unwrap());
        let rows = rebuilt.visible_rows();
        assert_eq!(rows.len(), 11);
        assert!(rows.iter().all(|r| r.expanded));
        assert_eq!(rebuilt.selected(), None);
        assert_eq!(rebuilt.branch_count(), 4);
        assert_eq!(rebuilt.leaf_count(), 7);
    }

    #[test]
    fn test_deeper_nesting_is_supported() {
        // The flattener must not assume the catalog/schema/table depth.
        let root = CatalogNode::branch(
            "top",
            NodeKind::Catalog,
            vec![CatalogNode::branch(
                "mid",
                NodeKind::Schema,
                vec![CatalogNode::branch(
                    "inner",
                    NodeKind::Schema,
                    vec![CatalogNode::table("deep", 12, "1 KB")],
                )],
            )],
        );
        let mut state = ExplorerState::new(root);
        assert_eq!(state.visible_rows().len(), 4);

        let deep = row_id(&state, "deep");
        assert_eq!(state.visible_rows()[3].depth, 3);

        let inner = row_id(&state, "inner");
        state.toggle(inner);
        assert!(!state.visible_rows().iter().any(|r| r.id == deep));
    }
}
