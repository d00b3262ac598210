//! Error types and error handling for the Acervo search engine.
//!
//! The ranking engine itself is infallible. Errors only surface at
//! the boundary (request validation) and while loading the catalog
//! or configuration from disk.

use thiserror::Error;

/// Result type alias for Acervo operations
pub type Result<T> = std::result::Result<T, AcervoError>;

/// Main error type for the Acervo engine
#[derive(Error, Debug)]
pub enum AcervoError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AcervoError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AcervoError::CatalogNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            AcervoError::InvalidQuery(_) | AcervoError::ConfigError(_)
        )
    }
}
