//! Query handlers for the Prereviewer context.
//!
//! Handlers load the streams a read model needs through the repository and
//! hand them to the pure projections.

use prereview_core::error::DomainError;
use prereview_core::repository::EventRepository;
use prereview_events::{Event, Filter, KeywordId, OrcidId};
use tracing::{debug, instrument};

use crate::domain::projections::{
    self, PreprintMatch, REVIEW_REQUEST_EVENT_TAGS, subscriptions_filter,
};

/// Retrieves the keywords a prereviewer has subscribed to.
///
/// # Errors
///
/// Returns `DomainError` if event loading fails.
#[instrument(skip(repo))]
pub async fn handle_get_subscribed_keywords(
    prereviewer_id: &OrcidId,
    repo: &dyn EventRepository<Event>,
) -> Result<Vec<KeywordId>, DomainError> {
    let events = repo.load_events(&subscriptions_filter(prereviewer_id)).await?;
    Ok(projections::get_subscribed_keywords(&events, prereviewer_id))
}

/// Retrieves the preprints with accepted review requests matching a
/// prereviewer's keyword subscriptions.
///
/// Review request events are only loaded when the prereviewer has at least
/// one subscription.
///
/// # Errors
///
/// Returns `DomainError` if event loading fails.
#[instrument(skip(repo))]
pub async fn handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
    prereviewer_id: &OrcidId,
    repo: &dyn EventRepository<Event>,
) -> Result<Vec<PreprintMatch>, DomainError> {
    let mut events = repo.load_events(&subscriptions_filter(prereviewer_id)).await?;
    if events.is_empty() {
        debug!("prereviewer has no subscriptions");
        return Ok(Vec::new());
    }

    events.extend(
        repo.load_events(&Filter::new(REVIEW_REQUEST_EVENT_TAGS))
            .await?,
    );
    let matches = projections::get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
        &events,
        prereviewer_id,
    );
    debug!(matches = matches.len(), "matched preprints");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use prereview_core::error::DomainError;
    use prereview_events::{KeywordId, OrcidId, PreprintId};
    use prereview_test_support::{
        FailingEventRepository, RecordingEventRepository, accepted, at_hour, categorized,
        subscribed,
    };
    use uuid::Uuid;

    use crate::application::query_handlers::{
        handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer,
        handle_get_subscribed_keywords,
    };

    const PREREVIEWER: &str = "0000-0002-1825-0097";

    #[tokio::test]
    async fn test_handle_get_subscribed_keywords_returns_keywords() {
        // Arrange
        let repo = RecordingEventRepository::new(vec![
            subscribed(PREREVIEWER, "kw-1"),
            subscribed(PREREVIEWER, "kw-1"),
            subscribed(PREREVIEWER, "kw-2"),
        ]);

        // Act
        let keywords = handle_get_subscribed_keywords(&OrcidId::new(PREREVIEWER), &repo)
            .await
            .unwrap();

        // Assert
        assert_eq!(keywords, vec![KeywordId::new("kw-1"), KeywordId::new("kw-2")]);
    }

    #[tokio::test]
    async fn test_handle_matching_joins_subscriptions_with_review_requests() {
        // Arrange
        let review_request_id = Uuid::new_v4();
        let repo = RecordingEventRepository::new(vec![
            accepted(review_request_id, "doi:10.1101/1", at_hour(9)),
            categorized(review_request_id, &["kw-1", "kw-2"], &["t-1"]),
            subscribed(PREREVIEWER, "kw-2"),
        ]);

        // Act
        let matches = handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
            &OrcidId::new(PREREVIEWER),
            &repo,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].preprint_id, PreprintId::new("doi:10.1101/1"));
        assert_eq!(matches[0].matching_keywords, vec![KeywordId::new("kw-2")]);
        assert_eq!(repo.load_count(), 2);
    }

    #[tokio::test]
    async fn test_handle_matching_skips_review_requests_without_subscriptions() {
        // Arrange
        let review_request_id = Uuid::new_v4();
        let repo = RecordingEventRepository::new(vec![
            accepted(review_request_id, "doi:10.1101/1", at_hour(9)),
            categorized(review_request_id, &["kw-1"], &[]),
        ]);

        // Act
        let matches = handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
            &OrcidId::new(PREREVIEWER),
            &repo,
        )
        .await
        .unwrap();

        // Assert
        assert!(matches.is_empty());
        assert_eq!(repo.load_count(), 1);
    }

    #[tokio::test]
    async fn test_handle_matching_propagates_repository_errors() {
        // Act
        let result = handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
            &OrcidId::new(PREREVIEWER),
            &FailingEventRepository,
        )
        .await;

        // Assert
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_preprint_match_serializes_as_json() {
        // Arrange
        let preprint_match = crate::domain::projections::PreprintMatch {
            preprint_id: PreprintId::new("doi:10.1101/1"),
            first_requested: at_hour(5),
            last_requested: at_hour(9),
            matching_keywords: vec![KeywordId::new("kw-1")],
        };

        // Act
        let json = serde_json::to_value(&preprint_match).unwrap();

        // Assert
        assert_eq!(
            json,
            serde_json::json!({
                "preprint_id": "doi:10.1101/1",
                "first_requested": "2026-01-15T05:00:00Z",
                "last_requested": "2026-01-15T09:00:00Z",
                "matching_keywords": ["kw-1"]
            })
        );
    }
}
