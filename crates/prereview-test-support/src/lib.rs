//! Shared test mocks and event builders for the PREreview domain core.

mod events;
mod repository;

pub use events::{accepted, at_hour, categorized, recategorized, subscribed};
pub use repository::{FailingEventRepository, RecordingEventRepository};
