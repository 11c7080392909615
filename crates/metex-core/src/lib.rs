//! # metex-core
//!
//! Core library for the metex metadata explorer.
//!
//! This crate holds everything that does not touch a terminal: the catalog
//! data model, the provider boundaries (catalog source and column schema
//! source), the explorer state machine that drives the tree/detail UI, and
//! the ambient storage/formatting helpers shared with the front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Catalog Layer                │  CatalogNode model, providers
//! ├─────────────────────────────────────┤
//! │        Explorer Layer               │  Tree view-model, selection state
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  Configuration persistence
//! ├─────────────────────────────────────┤
//! │        Utils Layer                  │  Formatting helpers
//! └─────────────────────────────────────┘
//! ```
//!
//! The explorer layer is deliberately UI-agnostic: it produces flat row
//! view-models and detail view-models that a front end renders however it
//! likes, and tests can assert on state without mounting any UI.

pub mod catalog;
pub mod error;
pub mod explorer;
pub mod format;
pub mod storage;

pub use error::{CatalogError, ExplorerError, StorageError};

/// Commonly used types, re-exported for front ends.
pub mod prelude {
    pub use crate::catalog::{
        CatalogNode, CatalogProvider, ColumnDescriptor, ColumnSchemaProvider,
        JsonCatalogProvider, KeyRole, MockCatalogProvider, NodeKind, RuleBasedSchemaProvider,
    };
    pub use crate::explorer::{ExplorerState, NodeId, TableDetails, TreeRow};
}
