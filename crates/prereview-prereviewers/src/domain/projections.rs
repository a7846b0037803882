//! Read models over prereviewer subscriptions.
//!
//! Both projections are computed directly from the event slice; nothing is
//! cached between calls.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use prereview_events::{Event, EventField, EventTag, Filter, KeywordId, OrcidId, PreprintId};
use prereview_review_requests::domain::state::{CATEGORIZATION_EVENT_TAGS, fold_all};
use serde::Serialize;
use uuid::Uuid;

/// Tags of the review request events the matching read model joins on.
pub const REVIEW_REQUEST_EVENT_TAGS: [EventTag; 3] = [
    EventTag::ReviewRequestForAPreprintWasAccepted,
    CATEGORIZATION_EVENT_TAGS[0],
    CATEGORIZATION_EVENT_TAGS[1],
];

/// A preprint with accepted review requests whose keywords overlap a
/// prereviewer's subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprintMatch {
    /// The preprint.
    pub preprint_id: PreprintId,
    /// When the oldest matching request was accepted.
    pub first_requested: DateTime<Utc>,
    /// When the newest matching request was accepted.
    pub last_requested: DateTime<Utc>,
    /// Subscribed keywords found on the preprint's requests, newest request
    /// first, each listed once.
    pub matching_keywords: Vec<KeywordId>,
}

/// Returns the filter selecting every subscription of `prereviewer_id`.
#[must_use]
pub fn subscriptions_filter(prereviewer_id: &OrcidId) -> Filter {
    Filter::new([EventTag::PrereviewerSubscribedToAKeyword])
        .with(EventField::PrereviewerId, prereviewer_id.clone())
}

/// Lists the keywords `prereviewer_id` has subscribed to, in order of first
/// subscription, without duplicates.
#[must_use]
pub fn get_subscribed_keywords(events: &[Event], prereviewer_id: &OrcidId) -> Vec<KeywordId> {
    let filter = subscriptions_filter(prereviewer_id);
    let mut seen = HashSet::new();
    filter
        .select(events)
        .filter_map(|event| match event {
            Event::PrereviewerSubscribedToAKeyword(subscribed) => Some(&subscribed.keyword_id),
            _ => None,
        })
        .filter(|keyword_id| seen.insert(*keyword_id))
        .cloned()
        .collect()
}

struct MatchingRequest {
    review_request_id: Uuid,
    accepted_at: DateTime<Utc>,
    matching_keywords: Vec<KeywordId>,
}

/// Matches `prereviewer_id` to preprints with accepted review requests whose
/// categorized keywords overlap the prereviewer's subscriptions.
///
/// Requests never categorized anywhere in `events` are left out. One entry
/// is produced per preprint, most recently requested first; ties are broken
/// by preprint id.
#[must_use]
pub fn get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
    events: &[Event],
    prereviewer_id: &OrcidId,
) -> Vec<PreprintMatch> {
    let subscribed = get_subscribed_keywords(events, prereviewer_id);
    if subscribed.is_empty() {
        return Vec::new();
    }
    let subscribed: HashSet<&KeywordId> = subscribed.iter().collect();

    let categorizations = fold_all(events);
    let accepted_filter = Filter::new([EventTag::ReviewRequestForAPreprintWasAccepted]);

    let mut requests_by_preprint: BTreeMap<&PreprintId, Vec<MatchingRequest>> = BTreeMap::new();
    for event in accepted_filter.select(events) {
        let Event::ReviewRequestForAPreprintWasAccepted(accepted) = event else {
            continue;
        };
        let Some(categorization) = categorizations.get(&accepted.review_request_id) else {
            continue;
        };
        let matching_keywords: Vec<KeywordId> = categorization
            .keywords
            .iter()
            .filter(|keyword_id| subscribed.contains(keyword_id))
            .cloned()
            .collect();
        if matching_keywords.is_empty() {
            continue;
        }
        requests_by_preprint
            .entry(&accepted.preprint_id)
            .or_default()
            .push(MatchingRequest {
                review_request_id: accepted.review_request_id,
                accepted_at: accepted.accepted_at,
                matching_keywords,
            });
    }

    let mut matches: Vec<PreprintMatch> = requests_by_preprint
        .into_iter()
        .filter_map(|(preprint_id, requests)| to_preprint_match(preprint_id, requests))
        .collect();
    matches.sort_by(|a, b| {
        b.last_requested
            .cmp(&a.last_requested)
            .then_with(|| a.preprint_id.cmp(&b.preprint_id))
    });
    matches
}

fn to_preprint_match(
    preprint_id: &PreprintId,
    mut requests: Vec<MatchingRequest>,
) -> Option<PreprintMatch> {
    requests.sort_by(|a, b| {
        b.accepted_at
            .cmp(&a.accepted_at)
            .then_with(|| a.review_request_id.cmp(&b.review_request_id))
    });
    let last_requested = requests.first()?.accepted_at;
    let first_requested = requests.last()?.accepted_at;

    let mut seen = HashSet::new();
    let matching_keywords = requests
        .iter()
        .flat_map(|request| &request.matching_keywords)
        .filter(|keyword_id| seen.insert(*keyword_id))
        .cloned()
        .collect();

    Some(PreprintMatch {
        preprint_id: preprint_id.clone(),
        first_requested,
        last_requested,
        matching_keywords,
    })
}

#[cfg(test)]
mod tests {
    use prereview_test_support::{accepted, at_hour, categorized, recategorized, subscribed};
    use proptest::prelude::*;

    use super::*;

    const PREREVIEWER: &str = "0000-0002-1825-0097";

    fn prereviewer() -> OrcidId {
        OrcidId::new(PREREVIEWER)
    }

    fn match_prereviewer(events: &[Event]) -> Vec<PreprintMatch> {
        get_preprints_with_a_recent_review_requests_matching_a_prereviewer(events, &prereviewer())
    }

    fn keywords(ids: &[&str]) -> Vec<KeywordId> {
        ids.iter().copied().map(KeywordId::new).collect()
    }

    #[test]
    fn test_get_subscribed_keywords_deduplicates_in_first_occurrence_order() {
        // Arrange
        let events = vec![
            subscribed(PREREVIEWER, "kw-2"),
            subscribed("0000-0001-5109-3700", "kw-9"),
            subscribed(PREREVIEWER, "kw-1"),
            subscribed(PREREVIEWER, "kw-2"),
            subscribed(PREREVIEWER, "kw-3"),
        ];

        // Act
        let subscribed = get_subscribed_keywords(&events, &prereviewer());

        // Assert
        assert_eq!(subscribed, keywords(&["kw-2", "kw-1", "kw-3"]));
    }

    #[test]
    fn test_get_subscribed_keywords_is_empty_without_subscriptions() {
        assert!(get_subscribed_keywords(&[], &prereviewer()).is_empty());
    }

    #[test]
    fn test_matching_is_empty_without_subscriptions() {
        // Arrange
        let review_request_id = Uuid::new_v4();
        let events = vec![
            subscribed("0000-0001-5109-3700", "kw-1"),
            accepted(review_request_id, "doi:10.1101/1", at_hour(9)),
            categorized(review_request_id, &["kw-1"], &[]),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert!(matches.is_empty());
    }

    #[test]
    fn test_matching_aggregates_requests_for_the_same_preprint() {
        // Arrange
        let request_a = Uuid::new_v4();
        let request_b = Uuid::new_v4();
        let events = vec![
            subscribed(PREREVIEWER, "K1"),
            subscribed(PREREVIEWER, "K3"),
            accepted(request_a, "P1", at_hour(5)),
            categorized(request_a, &["K1", "K2"], &[]),
            accepted(request_b, "P1", at_hour(9)),
            categorized(request_b, &["K3"], &[]),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert_eq!(
            matches,
            vec![PreprintMatch {
                preprint_id: PreprintId::new("P1"),
                first_requested: at_hour(5),
                last_requested: at_hour(9),
                matching_keywords: keywords(&["K3", "K1"]),
            }]
        );
    }

    #[test]
    fn test_matching_excludes_requests_never_categorized() {
        // Arrange
        let categorized_request = Uuid::new_v4();
        let uncategorized_request = Uuid::new_v4();
        let events = vec![
            subscribed(PREREVIEWER, "kw-1"),
            accepted(categorized_request, "P1", at_hour(5)),
            categorized(categorized_request, &["kw-1"], &[]),
            accepted(uncategorized_request, "P1", at_hour(11)),
            accepted(Uuid::new_v4(), "P2", at_hour(12)),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].preprint_id, PreprintId::new("P1"));
        assert_eq!(matches[0].first_requested, at_hour(5));
        assert_eq!(matches[0].last_requested, at_hour(5));
    }

    #[test]
    fn test_matching_counts_categorization_appended_after_acceptance() {
        // Arrange
        let review_request_id = Uuid::new_v4();
        let events = vec![
            accepted(review_request_id, "P1", at_hour(5)),
            subscribed(PREREVIEWER, "kw-1"),
            categorized(review_request_id, &["kw-1"], &[]),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_matching_uses_the_latest_categorization() {
        // Arrange
        let moved_away = Uuid::new_v4();
        let moved_in = Uuid::new_v4();
        let events = vec![
            subscribed(PREREVIEWER, "kw-1"),
            accepted(moved_away, "P1", at_hour(5)),
            categorized(moved_away, &["kw-1"], &[]),
            recategorized(moved_away, None, Some(&["kw-2"]), None),
            accepted(moved_in, "P2", at_hour(6)),
            categorized(moved_in, &["kw-2"], &[]),
            recategorized(moved_in, Some("es"), Some(&["kw-2", "kw-1"]), None),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert_eq!(
            matches,
            vec![PreprintMatch {
                preprint_id: PreprintId::new("P2"),
                first_requested: at_hour(6),
                last_requested: at_hour(6),
                matching_keywords: keywords(&["kw-1"]),
            }]
        );
    }

    #[test]
    fn test_matching_sorts_by_last_requested_then_preprint_id() {
        // Arrange
        let [a, b, c, d] = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let events = vec![
            subscribed(PREREVIEWER, "kw-1"),
            accepted(a, "P-old", at_hour(3)),
            accepted(b, "P-tie-b", at_hour(8)),
            accepted(c, "P-tie-a", at_hour(8)),
            accepted(d, "P-old", at_hour(4)),
            categorized(a, &["kw-1"], &[]),
            categorized(b, &["kw-1"], &[]),
            categorized(c, &["kw-1"], &[]),
            categorized(d, &["kw-1"], &[]),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        let order: Vec<&str> = matches.iter().map(|m| m.preprint_id.as_str()).collect();
        assert_eq!(order, vec!["P-tie-a", "P-tie-b", "P-old"]);
        assert_eq!(matches[2].first_requested, at_hour(3));
        assert_eq!(matches[2].last_requested, at_hour(4));
    }

    #[test]
    fn test_matching_lists_each_keyword_once_newest_request_first() {
        // Arrange
        let older = Uuid::new_v4();
        let newer = Uuid::new_v4();
        let events = vec![
            subscribed(PREREVIEWER, "kw-1"),
            subscribed(PREREVIEWER, "kw-2"),
            subscribed(PREREVIEWER, "kw-3"),
            accepted(older, "P1", at_hour(2)),
            categorized(older, &["kw-3", "kw-1"], &[]),
            accepted(newer, "P1", at_hour(7)),
            categorized(newer, &["kw-1", "kw-9", "kw-2"], &[]),
        ];

        // Act
        let matches = match_prereviewer(&events);

        // Assert
        assert_eq!(matches[0].matching_keywords, keywords(&["kw-1", "kw-2", "kw-3"]));
    }

    fn scenario() -> Vec<Event> {
        let requests = [
            (Uuid::from_u128(1), "P1", 3, vec!["kw-1"]),
            (Uuid::from_u128(2), "P1", 6, vec!["kw-2", "kw-1"]),
            (Uuid::from_u128(3), "P2", 6, vec!["kw-3"]),
            (Uuid::from_u128(4), "P3", 8, vec!["kw-9"]),
            (Uuid::from_u128(5), "P4", 6, vec!["kw-2"]),
            (Uuid::from_u128(6), "P4", 6, vec!["kw-1"]),
        ];
        let mut events = vec![
            subscribed(PREREVIEWER, "kw-1"),
            subscribed(PREREVIEWER, "kw-2"),
            subscribed(PREREVIEWER, "kw-3"),
        ];
        for (review_request_id, preprint_id, hour, keywords) in requests {
            events.push(accepted(review_request_id, preprint_id, at_hour(hour)));
            events.push(categorized(review_request_id, &keywords, &[]));
        }
        events
    }

    proptest! {
        #[test]
        fn test_matching_output_does_not_depend_on_slice_order(
            shuffled in Just(scenario()).prop_shuffle()
        ) {
            let expected = match_prereviewer(&scenario());

            let actual = match_prereviewer(&shuffled);

            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_matching_scenario_breaks_acceptance_ties_by_review_request_id() {
        // Act
        let matches = match_prereviewer(&scenario());

        // Assert
        let p4 = matches
            .iter()
            .find(|m| m.preprint_id.as_str() == "P4")
            .unwrap();
        assert_eq!(p4.matching_keywords, keywords(&["kw-2", "kw-1"]));
        assert!(matches.iter().all(|m| m.preprint_id.as_str() != "P3"));
    }
}
