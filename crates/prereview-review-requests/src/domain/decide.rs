//! Decisions for the `CategorizeReviewRequest` command.

use prereview_core::decider::Decider;
use prereview_events::{
    Event, Filter, ReviewRequestForAPreprintWasCategorized,
    ReviewRequestForAPreprintWasRecategorized,
};

use super::commands::CategorizeReviewRequest;
use super::errors::CategorizationError;
use super::state::{self, CategorizationState, same_members};

/// Decides the next event for a categorization command.
///
/// A first categorization emits `ReviewRequestForAPreprintWasCategorized`.
/// Afterwards only the fields that differ from the current state are
/// emitted in a `ReviewRequestForAPreprintWasRecategorized`; keywords and
/// topics are compared as sets. Re-asserting the current values emits
/// nothing.
///
/// # Errors
///
/// The signature reserves `CategorizationError` for validation rules; no
/// current rule rejects a command.
pub fn decide(
    state: &CategorizationState,
    command: &CategorizeReviewRequest,
) -> Result<Option<Event>, CategorizationError> {
    let current = match state {
        CategorizationState::NotCategorized => {
            return Ok(Some(Event::from(ReviewRequestForAPreprintWasCategorized {
                review_request_id: command.review_request_id,
                language: command.language.clone(),
                keywords: command.keywords.clone(),
                topics: command.topics.clone(),
            })));
        }
        CategorizationState::HasBeenCategorized(current) => current,
    };

    let language = (current.language != command.language).then(|| command.language.clone());
    let keywords = (!same_members(&current.keywords, &command.keywords))
        .then(|| command.keywords.clone());
    let topics =
        (!same_members(&current.topics, &command.topics)).then(|| command.topics.clone());

    if language.is_none() && keywords.is_none() && topics.is_none() {
        return Ok(None);
    }

    Ok(Some(Event::from(ReviewRequestForAPreprintWasRecategorized {
        review_request_id: command.review_request_id,
        language,
        keywords,
        topics,
    })))
}

/// The fold/decide pair for `CategorizeReviewRequest`.
#[derive(Debug, Clone, Copy)]
pub struct CategorizeReviewRequestDecider;

impl Decider for CategorizeReviewRequestDecider {
    type Command = CategorizeReviewRequest;
    type Event = Event;
    type State = CategorizationState;
    type Error = CategorizationError;

    fn create_filter(command: &CategorizeReviewRequest) -> Filter {
        state::categorization_filter(command.review_request_id)
    }

    fn fold_state(events: &[Event], command: &CategorizeReviewRequest) -> CategorizationState {
        state::fold_state(events, command.review_request_id)
    }

    fn decide(
        state: &CategorizationState,
        command: &CategorizeReviewRequest,
    ) -> Result<Option<Event>, CategorizationError> {
        decide(state, command)
    }
}
