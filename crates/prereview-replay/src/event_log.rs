//! Read-only event log loaded from a JSON file.

use std::path::Path;

use async_trait::async_trait;
use prereview_core::error::DomainError;
use prereview_core::filter::EventFilter;
use prereview_core::repository::EventRepository;
use prereview_events::Event;
use tracing::info;

use crate::error::ReplayError;

/// An event log held in memory, in the order it was read.
#[derive(Debug)]
pub struct JsonEventLog {
    events: Vec<Event>,
}

impl JsonEventLog {
    /// Reads a JSON array of events from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Io` if the file cannot be read and
    /// `ReplayError::Json` if it is not a JSON array of events.
    pub async fn from_path(path: &Path) -> Result<Self, ReplayError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let events: Vec<Event> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), events = events.len(), "loaded event log");
        Ok(Self { events })
    }
}

#[async_trait]
impl EventRepository<Event> for JsonEventLog {
    async fn load_events(&self, filter: &EventFilter<Event>) -> Result<Vec<Event>, DomainError> {
        Ok(filter.select(&self.events).cloned().collect())
    }

    async fn append_event(&self, _event: Event) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure(
            "replayed event logs are read-only".to_owned(),
        ))
    }
}
