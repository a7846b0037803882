//! Errors raised when deciding categorization commands.

use prereview_core::error::DomainError;
use thiserror::Error;
use uuid::Uuid;

/// Rejections of a `CategorizeReviewRequest` command.
///
/// No current rule raises these; the channel exists so that validation can
/// be added without changing the signature callers depend on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategorizationError {
    /// The review request already carries a conflicting categorization.
    #[error("review request {0} was already categorized")]
    ReviewRequestWasAlreadyCategorized(Uuid),
}

impl From<CategorizationError> for DomainError {
    fn from(err: CategorizationError) -> Self {
        DomainError::Validation(err.to_string())
    }
}
