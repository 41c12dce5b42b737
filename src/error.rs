use thiserror::Error;

/// Errors that can occur while working with a recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No recipe in the catalog matched the one requested
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Index-based removal pointed past the end of the catalog
    #[error("Index {index} is out of range for a catalog of {len} recipes")]
    IndexOutOfRange { index: usize, len: usize },

    /// A view operation needed a selected recipe but none was selected
    #[error("No recipe is selected")]
    NothingSelected,

    /// Failed to encode or decode the JSON exchange format
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
