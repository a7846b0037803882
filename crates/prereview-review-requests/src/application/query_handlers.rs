//! Query handlers for the Review Request categorization context.

use prereview_core::error::DomainError;
use prereview_core::repository::EventRepository;
use prereview_events::{Event, KeywordId, LanguageCode, TopicId};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::state::{self, CategorizationState};

/// Read-only view of a review request's categorization.
#[derive(Debug, Serialize)]
pub struct CategorizationView {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// Language of the preprint.
    pub language: LanguageCode,
    /// Keywords describing the preprint.
    pub keywords: Vec<KeywordId>,
    /// Topics the preprint belongs to.
    pub topics: Vec<TopicId>,
}

/// Retrieves the current categorization of a review request.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if the request was never
/// categorized, or any error raised while loading events.
#[instrument(skip(repo))]
pub async fn get_review_request_categorization(
    review_request_id: Uuid,
    repo: &dyn EventRepository<Event>,
) -> Result<CategorizationView, DomainError> {
    let events = repo
        .load_events(&state::categorization_filter(review_request_id))
        .await?;
    match state::fold_state(&events, review_request_id) {
        CategorizationState::HasBeenCategorized(categorization) => Ok(CategorizationView {
            review_request_id,
            language: categorization.language,
            keywords: categorization.keywords,
            topics: categorization.topics,
        }),
        CategorizationState::NotCategorized => {
            Err(DomainError::AggregateNotFound(review_request_id))
        }
    }
}
