//! # Catalog Error Types
//!
//! Typed error handling for catalog loading and lookups.
//! Quoting itself never fails; these errors surface at startup (bad catalog
//! data) or from the direct lookup endpoints.

use thiserror::Error;

/// Core error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration errors (unreadable catalog file, bad settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog document could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(String),

    /// Two entries of the same collection share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// Item points at a category that does not exist
    #[error("Item {item_id} references unknown category {category_id}")]
    UnknownCategory {
        item_id: String,
        category_id: String,
    },

    /// Tier quantity is zero or repeated within one item
    #[error("Invalid price tier for {item_id}: {message}")]
    InvalidTier { item_id: String, message: String },

    /// Negative price on a tier or pack
    #[error("Invalid price for {id}: {message}")]
    InvalidPrice { id: String, message: String },

    /// Item not found in catalog
    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },
}

impl CatalogError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Configuration(_) => 500,
            CatalogError::Parse(_) => 500,
            CatalogError::DuplicateId { .. } => 500,
            CatalogError::UnknownCategory { .. } => 500,
            CatalogError::InvalidTier { .. } => 500,
            CatalogError::InvalidPrice { .. } => 500,
            CatalogError::ItemNotFound { .. } => 404,
        }
    }

    /// Returns true if the error comes from malformed catalog data
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CatalogError::Parse(_)
                | CatalogError::DuplicateId { .. }
                | CatalogError::UnknownCategory { .. }
                | CatalogError::InvalidTier { .. }
                | CatalogError::InvalidPrice { .. }
        )
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
