//! Error types for the user directory.
//!
//! The directory operations themselves never fail; errors only arise while
//! constructing a directory from configuration.

use thiserror::Error;

/// Main error type for directory setup.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
