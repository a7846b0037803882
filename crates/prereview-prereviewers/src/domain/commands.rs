//! Commands for the Prereviewer context.

use prereview_core::command::Command;
use prereview_events::{KeywordId, OrcidId};

/// Command to subscribe a prereviewer to a keyword.
#[derive(Debug, Clone)]
pub struct SubscribeToAKeyword {
    /// The subscribing prereviewer.
    pub prereviewer_id: OrcidId,
    /// The keyword to subscribe to.
    pub keyword_id: KeywordId,
}

impl Command for SubscribeToAKeyword {
    fn command_type(&self) -> &'static str {
        "prereviewers.subscribe_to_a_keyword"
    }
}
