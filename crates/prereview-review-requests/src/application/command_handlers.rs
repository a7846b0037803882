//! Command handlers for the Review Request categorization context.
//!
//! Handlers orchestrate domain logic: load the filtered history, fold it,
//! decide, and append the decided event.

use prereview_core::decider;
use prereview_core::error::DomainError;
use prereview_core::repository::EventRepository;
use prereview_events::Event;
use uuid::Uuid;

use crate::domain::commands::CategorizeReviewRequest;
use crate::domain::decide::CategorizeReviewRequestDecider;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct CategorizationCommandResult {
    /// The review request affected by the command.
    pub review_request_id: Uuid,
    /// The appended event, or `None` if the command changed nothing.
    pub event: Option<Event>,
}

/// Handles the `CategorizeReviewRequest` command.
///
/// # Errors
///
/// Returns `DomainError` if event loading or appending fails, or
/// `DomainError::Validation` if the command is rejected.
pub async fn handle_categorize_review_request(
    command: &CategorizeReviewRequest,
    repo: &dyn EventRepository<Event>,
) -> Result<CategorizationCommandResult, DomainError> {
    let event = decider::execute::<CategorizeReviewRequestDecider, _>(command, repo).await?;

    Ok(CategorizationCommandResult {
        review_request_id: command.review_request_id,
        event,
    })
}
