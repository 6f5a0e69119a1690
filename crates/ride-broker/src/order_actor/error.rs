//! Error types for the Order actor.

use crate::model::{ModelError, OrderStatus};
use actor_store::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order's current status forbids the requested change.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The request data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The order store could not be written to or did not answer.
    #[error("Order persistence error: {0}")]
    PersistenceError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.into_entity::<OrderError>() {
            Ok(order_error) => order_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::PersistenceError(other.to_string()),
        }
    }
}

impl From<ModelError> for OrderError {
    fn from(e: ModelError) -> Self {
        match e {
            // No order can live under a key that is not a valid id
            ModelError::MalformedId(raw) => OrderError::NotFound(raw),
            ModelError::UnknownStatus(_) => OrderError::ValidationError(e.to_string()),
        }
    }
}
