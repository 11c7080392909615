use crate::catalog::NodeKind;
use thiserror::Error;

/// Errors raised by the explorer state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// Detail selection is only defined for table nodes. Selecting anything
    /// else is rejected without touching the current selection.
    #[error("cannot show details for a {kind} node")]
    UnsupportedSelection { kind: NodeKind },
    /// A row id that does not exist in the current tree build. Stale ids can
    /// appear when a front end caches rows across a reload.
    #[error("unknown node id {id}")]
    UnknownNode { id: usize },
}

/// Errors raised while obtaining a catalog from a provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {message}")]
    Parse { message: String },
}

/// Errors raised by configuration storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("file I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("configuration directory not found")]
    ConfigDirNotFound,
}
