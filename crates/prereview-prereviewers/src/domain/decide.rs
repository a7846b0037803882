//! Decisions for the `SubscribeToAKeyword` command.

use std::convert::Infallible;

use prereview_core::decider::Decider;
use prereview_events::{Event, Filter, PrereviewerSubscribedToAKeyword};

use super::commands::SubscribeToAKeyword;
use super::state::{self, SubscriptionState};

/// Decides the next event for a subscription command. Subscribing twice is
/// a no-op.
#[must_use]
pub fn decide(state: &SubscriptionState, command: &SubscribeToAKeyword) -> Option<Event> {
    match state {
        SubscriptionState::NotSubscribed => Some(Event::from(PrereviewerSubscribedToAKeyword {
            prereviewer_id: command.prereviewer_id.clone(),
            keyword_id: command.keyword_id.clone(),
        })),
        SubscriptionState::HasBeenSubscribed => None,
    }
}

/// The fold/decide pair for `SubscribeToAKeyword`.
#[derive(Debug, Clone, Copy)]
pub struct SubscribeToAKeywordDecider;

impl Decider for SubscribeToAKeywordDecider {
    type Command = SubscribeToAKeyword;
    type Event = Event;
    type State = SubscriptionState;
    type Error = Infallible;

    fn create_filter(command: &SubscribeToAKeyword) -> Filter {
        state::subscription_filter(&command.prereviewer_id, &command.keyword_id)
    }

    fn fold_state(events: &[Event], command: &SubscribeToAKeyword) -> SubscriptionState {
        state::fold_state(events, &command.prereviewer_id, &command.keyword_id)
    }

    fn decide(
        state: &SubscriptionState,
        command: &SubscribeToAKeyword,
    ) -> Result<Option<Event>, Infallible> {
        Ok(decide(state, command))
    }
}

#[cfg(test)]
mod tests {
    use prereview_events::{KeywordId, OrcidId};
    use prereview_test_support::subscribed;
    use proptest::prelude::*;

    use super::*;

    fn command(prereviewer_id: &str, keyword_id: &str) -> SubscribeToAKeyword {
        SubscribeToAKeyword {
            prereviewer_id: OrcidId::new(prereviewer_id),
            keyword_id: KeywordId::new(keyword_id),
        }
    }

    #[test]
    fn test_decide_subscribes_when_not_subscribed() {
        // Arrange
        let command = command("0000-0002-1825-0097", "kw-1");

        // Act
        let decision = decide(&SubscriptionState::NotSubscribed, &command);

        // Assert
        assert_eq!(decision, Some(subscribed("0000-0002-1825-0097", "kw-1")));
    }

    #[test]
    fn test_decide_is_a_no_op_when_already_subscribed() {
        // Arrange
        let command = command("0000-0002-1825-0097", "kw-1");

        // Act
        let decision = decide(&SubscriptionState::HasBeenSubscribed, &command);

        // Assert
        assert_eq!(decision, None);
    }

    proptest! {
        #[test]
        fn test_no_event_once_subscribed_however_many_times(repeats in 1usize..8) {
            let command = command("0000-0002-1825-0097", "kw-1");
            let history = vec![subscribed("0000-0002-1825-0097", "kw-1"); repeats];

            let state = SubscribeToAKeywordDecider::fold_state(&history, &command);
            let decision = SubscribeToAKeywordDecider::decide(&state, &command);

            prop_assert_eq!(state, SubscriptionState::HasBeenSubscribed);
            prop_assert_eq!(decision, Ok(None));
        }
    }
}
