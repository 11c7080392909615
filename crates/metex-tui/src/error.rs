//! Error types for metex-tui.

use std::io;
use thiserror::Error;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Catalog could not be obtained from its provider.
    #[error("Catalog error: {0}")]
    Catalog(#[from] metex_core::CatalogError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] metex_core::StorageError),
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;
