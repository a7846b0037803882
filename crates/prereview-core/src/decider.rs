//! Decider abstraction.
//!
//! State is never stored: it is folded from a filtered slice of the event
//! log every time a command is decided.

use tracing::{debug, info};

use crate::command::Command;
use crate::error::DomainError;
use crate::event::DomainEvent;
use crate::filter::EventFilter;
use crate::repository::EventRepository;

/// The fold/decide contract of a single command.
pub trait Decider {
    /// The command being decided.
    type Command: Command;
    /// The event set the command reads from and writes to.
    type Event: DomainEvent;
    /// Closed state variant reconstructed from history.
    type State;
    /// Errors `decide` may raise.
    type Error: Into<DomainError>;

    /// Returns the filter selecting the history relevant to `command`.
    fn create_filter(command: &Self::Command) -> EventFilter<Self::Event>;

    /// Replays `events` into the current state. Events not selected by
    /// [`Decider::create_filter`] are ignored.
    fn fold_state(events: &[Self::Event], command: &Self::Command) -> Self::State;

    /// Maps the current state and the command to at most one new event.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the command is rejected.
    fn decide(
        state: &Self::State,
        command: &Self::Command,
    ) -> Result<Option<Self::Event>, Self::Error>;
}

/// Loads the command's history, folds it, decides, and appends the decided
/// event (if any) through the repository.
///
/// Returns the appended event, or `None` when the command was a no-op.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails, or if the decider
/// rejects the command.
pub async fn execute<D, R>(
    command: &D::Command,
    repo: &R,
) -> Result<Option<D::Event>, DomainError>
where
    D: Decider,
    D::Event: Clone,
    R: EventRepository<D::Event> + ?Sized,
{
    let events = repo.load_events(&D::create_filter(command)).await?;
    let decision = {
        let state = D::fold_state(&events, command);
        D::decide(&state, command).map_err(Into::into)?
    };

    match decision {
        Some(event) => {
            repo.append_event(event.clone()).await?;
            info!(
                command = command.command_type(),
                event = ?event.tag(),
                "command produced a new event"
            );
            Ok(Some(event))
        }
        None => {
            debug!(
                command = command.command_type(),
                history = events.len(),
                "command was a no-op"
            );
            Ok(None)
        }
    }
}
