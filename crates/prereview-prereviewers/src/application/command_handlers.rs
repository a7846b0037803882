//! Command handlers for the Prereviewer context.

use prereview_core::decider;
use prereview_core::error::DomainError;
use prereview_core::repository::EventRepository;
use prereview_events::{Event, OrcidId};

use crate::domain::commands::SubscribeToAKeyword;
use crate::domain::decide::SubscribeToAKeywordDecider;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct PrereviewerCommandResult {
    /// The prereviewer affected by the command.
    pub prereviewer_id: OrcidId,
    /// The appended event, or `None` if the prereviewer was already
    /// subscribed.
    pub event: Option<Event>,
}

/// Handles the `SubscribeToAKeyword` command.
///
/// # Errors
///
/// Returns `DomainError` if event loading or appending fails.
pub async fn handle_subscribe_to_a_keyword(
    command: &SubscribeToAKeyword,
    repo: &dyn EventRepository<Event>,
) -> Result<PrereviewerCommandResult, DomainError> {
    let event = decider::execute::<SubscribeToAKeywordDecider, _>(command, repo).await?;

    Ok(PrereviewerCommandResult {
        prereviewer_id: command.prereviewer_id.clone(),
        event,
    })
}
