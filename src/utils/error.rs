use crate::domain::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Product {id} is not in the catalog")]
    UnknownProduct { id: ProductId },

    #[error("Could not understand '{input}': {reason}")]
    CommandError { input: String, reason: String },
}

impl CartError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::IoError(_) => "Check that the catalog file exists and is readable",
            CartError::SerializationError(_) => "Report this output problem; the cart is unaffected",
            CartError::TomlError(_) => "Fix the TOML syntax in the catalog file",
            CartError::InvalidValue { .. } => "Correct the catalog entry and restart",
            CartError::UnknownProduct { .. } => "Pick an id from the product list",
            CartError::CommandError { .. } => "Type 'help' to list the available commands",
        }
    }

    /// Errors the interactive screen reports and then keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CartError::UnknownProduct { .. } | CartError::CommandError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
