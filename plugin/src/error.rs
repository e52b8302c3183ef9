//! Error types for the generation stage.
//!
//! The transformation callbacks themselves are total and never fail; this
//! error type covers the configuration-file surface, where I/O and YAML
//! problems are real.

use thiserror::Error;

/// Errors from configuration loading and saving.
#[derive(Debug, Error)]
pub enum GenError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`GenError`].
pub type Result<T> = std::result::Result<T, GenError>;
