//! Domain errors

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Group not found: {0}")]
    NotFound(String),

    /// The backing store could not complete the request. Never retried.
    #[error("Operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl DomainError {
    pub fn operation_failed(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        DomainError::OperationFailed {
            context: context.into(),
            source: source.into(),
        }
    }
}
