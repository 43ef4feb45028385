//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Entity not found
    #[error("{0}")]
    NotFound(String),

    /// Email does not match the accepted grammar
    #[error("Invalid email:{0}")]
    InvalidEmail(String),
}

impl DomainError {
    /// Create a not found error for a user id
    pub fn user_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("User not found with id:{}", id))
    }

    /// Create a not found error for an organisational unit id
    pub fn unit_not_found(id: i64) -> Self {
        DomainError::NotFound(format!("Organisational unit not found with id:{}", id))
    }

    /// Create an invalid email error
    pub fn invalid_email(email: impl Into<String>) -> Self {
        DomainError::InvalidEmail(email.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
