use thiserror::Error;

use crate::models::queue::QueueStatus;

#[derive(Error, Debug)]
pub enum GroomError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: QueueStatus,
        to: QueueStatus,
    },

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type GroomResult<T> = Result<T, GroomError>;
