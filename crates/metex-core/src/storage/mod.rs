//! Configuration persistence.

mod config;

pub use config::Config;

use crate::error::StorageError;

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
