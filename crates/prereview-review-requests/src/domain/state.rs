//! Categorization state, replayed from history.
//!
//! Categorized and recategorized events are folded in log order into a
//! running record; a recategorization overrides only the fields it carries.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use prereview_events::{
    Event, EventField, EventTag, Filter, KeywordId, LanguageCode,
    ReviewRequestForAPreprintWasRecategorized, TopicId,
};
use serde::Serialize;
use uuid::Uuid;

/// Tags of the events that shape a review request's categorization.
pub const CATEGORIZATION_EVENT_TAGS: [EventTag; 2] = [
    EventTag::ReviewRequestForAPreprintWasCategorized,
    EventTag::ReviewRequestForAPreprintWasRecategorized,
];

/// The current categorization of a review request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categorization {
    /// Language of the preprint.
    pub language: LanguageCode,
    /// Keywords, in the order they were last asserted.
    pub keywords: Vec<KeywordId>,
    /// Topics, in the order they were last asserted.
    pub topics: Vec<TopicId>,
}

impl Categorization {
    fn recategorize(&mut self, event: &ReviewRequestForAPreprintWasRecategorized) {
        if let Some(language) = &event.language {
            self.language = language.clone();
        }
        if let Some(keywords) = &event.keywords {
            self.keywords = keywords.clone();
        }
        if let Some(topics) = &event.topics {
            self.topics = topics.clone();
        }
    }
}

/// State of a review request with respect to categorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorizationState {
    /// No categorization event exists yet.
    NotCategorized,
    /// The request has been categorized; holds the latest values.
    HasBeenCategorized(Categorization),
}

/// Returns the filter selecting the categorization history of one request.
#[must_use]
pub fn categorization_filter(review_request_id: Uuid) -> Filter {
    Filter::new(CATEGORIZATION_EVENT_TAGS).with(EventField::ReviewRequestId, review_request_id)
}

/// Replays the categorization history of `review_request_id` from `events`,
/// which must be in append order. Unrelated events are ignored.
#[must_use]
pub fn fold_state(events: &[Event], review_request_id: Uuid) -> CategorizationState {
    let filter = categorization_filter(review_request_id);
    match filter.select(events).fold(None, apply) {
        Some(categorization) => CategorizationState::HasBeenCategorized(categorization),
        None => CategorizationState::NotCategorized,
    }
}

/// Replays every review request's categorization history in one pass.
///
/// Requests that were never categorized are absent from the map.
#[must_use]
pub fn fold_all(events: &[Event]) -> HashMap<Uuid, Categorization> {
    let filter = Filter::new(CATEGORIZATION_EVENT_TAGS);
    let mut categorizations = HashMap::new();
    for event in filter.select(events) {
        let Some(review_request_id) = event.review_request_id() else {
            continue;
        };
        let current = categorizations.remove(&review_request_id);
        if let Some(next) = apply(current, event) {
            categorizations.insert(review_request_id, next);
        }
    }
    categorizations
}

// A recategorization with nothing to override leaves the request uncategorized.
fn apply(current: Option<Categorization>, event: &Event) -> Option<Categorization> {
    match event {
        Event::ReviewRequestForAPreprintWasCategorized(categorized) => Some(Categorization {
            language: categorized.language.clone(),
            keywords: categorized.keywords.clone(),
            topics: categorized.topics.clone(),
        }),
        Event::ReviewRequestForAPreprintWasRecategorized(recategorized) => {
            current.map(|mut categorization| {
                categorization.recategorize(recategorized);
                categorization
            })
        }
        Event::ReviewRequestForAPreprintWasReceived(_)
        | Event::ReviewRequestForAPreprintWasAccepted(_)
        | Event::ReviewRequestForAPreprintWasRejected(_)
        | Event::PrereviewerSubscribedToAKeyword(_) => current,
    }
}

/// Compares two sequences as sets: order and repetition are ignored.
#[must_use]
pub fn same_members<T: Eq + Hash>(left: &[T], right: &[T]) -> bool {
    left.iter().collect::<HashSet<_>>() == right.iter().collect::<HashSet<_>>()
}
