//! Catalog provider boundary and built-in implementations.
//!
//! A [`CatalogProvider`] supplies the root [`CatalogNode`] rendered by the
//! explorer. The mock provider ships a fixed warehouse-style catalog; the
//! JSON provider reads the same shape from a file so a real backend export
//! can be substituted without touching the explorer.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

use super::{CatalogNode, NodeKind};
use crate::error::CatalogError;

/// Source of catalog trees.
pub trait CatalogProvider {
    /// Build a fresh catalog tree. Called once per explorer open and again
    /// on explicit reload; implementations should not cache across calls.
    fn catalog(&self) -> Result<CatalogNode, CatalogError>;

    /// Short human-readable description of the source, for the status bar.
    fn describe(&self) -> String;
}

/// Fixed in-memory catalog used when no external source is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCatalogProvider;

impl CatalogProvider for MockCatalogProvider {
    fn catalog(&self) -> Result<CatalogNode, CatalogError> {
        debug!("building mock catalog");
        Ok(CatalogNode::branch(
            "main",
            NodeKind::Catalog,
            vec![
                CatalogNode::branch(
                    "dw",
                    NodeKind::Schema,
                    vec![
                        CatalogNode::table("customers", 15420, "2.5 GB"),
                        CatalogNode::table("sales_orders", 450012, "18.2 GB"),
                        CatalogNode::table("products", 3200, "150 MB"),
                        CatalogNode::table("dim_date", 7300, "2 MB"),
                    ],
                ),
                CatalogNode::branch(
                    "dm",
                    NodeKind::Schema,
                    vec![
                        CatalogNode::table("report_monthly_sales", 48, "100 KB"),
                        CatalogNode::table("report_top_customers", 100, "50 KB"),
                    ],
                ),
                CatalogNode::branch(
                    "staging",
                    NodeKind::Schema,
                    vec![CatalogNode::table("raw_events", 0, "0 GB")],
                ),
            ],
        ))
    }

    fn describe(&self) -> String {
        "built-in mock catalog".to_string()
    }
}

/// Catalog provider backed by a JSON file on disk.
///
/// The file holds a single root node in the external catalog shape
/// (`name` / `type` / `children` / `rowCount` / `size`).
#[derive(Debug, Clone)]
pub struct JsonCatalogProvider {
    path: PathBuf,
}

impl JsonCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for JsonCatalogProvider {
    fn catalog(&self) -> Result<CatalogNode, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::FileIo {
            path: self.path.to_string_lossy().to_string(),
            source,
        })?;

        let root: CatalogNode =
            serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
                message: format!("{} in {}", e, self.path.display()),
            })?;

        info!(
            "loaded catalog '{}' ({} nodes) from {}",
            root.name,
            root.node_count(),
            self.path.display()
        );
        Ok(root)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
