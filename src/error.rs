//! Error taxonomy for inventory operations
//!
//! Every failure is resolved at the manager boundary; the `Display`
//! strings double as the human-readable messages the view layer shows.
//! No operation mutates state before its validation passes.

use thiserror::Error;

use crate::products::ProductId;
use crate::storage::StorageError;

/// Product field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Unit,
    Quantity,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Unit => write!(f, "unit"),
            Field::Quantity => write!(f, "quantity"),
        }
    }
}

/// Inventory errors
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: Field, reason: String },

    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: f64, available: f64 },

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl InventoryError {
    pub(crate) fn validation(field: Field, reason: impl Into<String>) -> Self {
        InventoryError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;
