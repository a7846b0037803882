//! Event builders: terse constructors for test fixtures.

use chrono::{DateTime, TimeZone, Utc};
use prereview_events::{
    Event, KeywordId, LanguageCode, OrcidId, PrereviewerSubscribedToAKeyword, PreprintId,
    Requester, ReviewRequestForAPreprintWasAccepted, ReviewRequestForAPreprintWasCategorized,
    ReviewRequestForAPreprintWasRecategorized, TopicId,
};
use uuid::Uuid;

/// Returns `2026-01-15T{hour}:00:00Z`.
///
/// # Panics
///
/// Panics if `hour` is not a valid hour of the day.
#[must_use]
pub fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, hour, 0, 0).unwrap()
}

/// A `ReviewRequestForAPreprintWasAccepted` event received an hour before
/// it was accepted.
#[must_use]
pub fn accepted(review_request_id: Uuid, preprint_id: &str, accepted_at: DateTime<Utc>) -> Event {
    Event::from(ReviewRequestForAPreprintWasAccepted {
        review_request_id,
        preprint_id: PreprintId::new(preprint_id),
        requester: Requester {
            name: "Josiah Carberry".to_owned(),
            orcid_id: None,
        },
        accepted_at,
        received_at: accepted_at - chrono::Duration::hours(1),
    })
}

/// A `ReviewRequestForAPreprintWasCategorized` event in English with the
/// given keywords and topics.
#[must_use]
pub fn categorized(review_request_id: Uuid, keywords: &[&str], topics: &[&str]) -> Event {
    Event::from(ReviewRequestForAPreprintWasCategorized {
        review_request_id,
        language: LanguageCode::new("en"),
        keywords: keywords.iter().copied().map(KeywordId::new).collect(),
        topics: topics.iter().copied().map(TopicId::new).collect(),
    })
}

/// A `ReviewRequestForAPreprintWasRecategorized` event; `None` leaves the
/// field unchanged.
#[must_use]
pub fn recategorized(
    review_request_id: Uuid,
    language: Option<&str>,
    keywords: Option<&[&str]>,
    topics: Option<&[&str]>,
) -> Event {
    Event::from(ReviewRequestForAPreprintWasRecategorized {
        review_request_id,
        language: language.map(LanguageCode::new),
        keywords: keywords.map(|keywords| keywords.iter().copied().map(KeywordId::new).collect()),
        topics: topics.map(|topics| topics.iter().copied().map(TopicId::new).collect()),
    })
}

/// A `PrereviewerSubscribedToAKeyword` event.
#[must_use]
pub fn subscribed(prereviewer_id: &str, keyword_id: &str) -> Event {
    Event::from(PrereviewerSubscribedToAKeyword {
        prereviewer_id: OrcidId::new(prereviewer_id),
        keyword_id: KeywordId::new(keyword_id),
    })
}
