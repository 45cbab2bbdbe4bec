use thiserror::Error;

use crate::domain::{TransactionId, ValidationError};

#[derive(Error, Debug)]
pub enum AppError {
    /// A candidate violated a write-boundary invariant; the store is
    /// unchanged and the caller should re-prompt.
    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationError),

    /// The id does not exist (stale reference); the store is unchanged.
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    /// The durable medium failed; the operation aborted without persisting
    /// partial state. Not recoverable at this layer.
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn validation_reason(&self) -> Option<ValidationError> {
        match self {
            AppError::Validation(reason) => Some(*reason),
            _ => None,
        }
    }
}
