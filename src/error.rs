//! Error handling module for mealpicker
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Catalog file helpers use `anyhow` for context; everything that touches the
//! selection state returns these types.

use thiserror::Error;

/// Main error type for mealpicker
#[derive(Error, Debug)]
pub enum MealPickerError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog invariant violations (bounds, duplicate keys, empty names)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A category key that is not part of the catalog
    #[error("Unknown category: {category}")]
    UnknownCategory { category: String },

    /// An item name that is not part of the category's catalog
    #[error("Unknown item '{item}' in category '{category}'")]
    UnknownItem { category: String, item: String },

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for mealpicker operations
pub type Result<T> = std::result::Result<T, MealPickerError>;

impl MealPickerError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create an unknown-category error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an unknown-item error
    pub fn unknown_item(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self::UnknownItem {
            category: category.into(),
            item: item.into(),
        }
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }

    /// Whether this error is a caller fault (a name not drawn from the catalog)
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. } | Self::UnknownItem { .. })
    }
}
