//! Subscription state, replayed from history.

use prereview_events::{Event, EventField, EventTag, Filter, KeywordId, OrcidId};

/// Whether a prereviewer is subscribed to a keyword. There is no
/// unsubscribe, so once subscribed always subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// No subscription event exists for the pair.
    NotSubscribed,
    /// At least one subscription event exists for the pair.
    HasBeenSubscribed,
}

/// Returns the filter selecting subscriptions of `prereviewer_id` to
/// `keyword_id`.
#[must_use]
pub fn subscription_filter(prereviewer_id: &OrcidId, keyword_id: &KeywordId) -> Filter {
    Filter::new([EventTag::PrereviewerSubscribedToAKeyword])
        .with(EventField::PrereviewerId, prereviewer_id.clone())
        .with(EventField::KeywordId, keyword_id.clone())
}

/// Replays `events` into the subscription state of the pair. Only the
/// existence of a matching event matters, not its position.
#[must_use]
pub fn fold_state(
    events: &[Event],
    prereviewer_id: &OrcidId,
    keyword_id: &KeywordId,
) -> SubscriptionState {
    let filter = subscription_filter(prereviewer_id, keyword_id);
    if filter.select(events).next().is_some() {
        SubscriptionState::HasBeenSubscribed
    } else {
        SubscriptionState::NotSubscribed
    }
}
