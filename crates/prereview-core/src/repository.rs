//! Event repository abstraction.
//!
//! Storage, ordering and concurrency-safe appends are owned by the
//! implementation; the domain only reads filtered slices and hands back
//! newly decided events.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::event::DomainEvent;
use crate::filter::EventFilter;

/// Repository trait for loading and appending domain events.
#[async_trait]
pub trait EventRepository<E: DomainEvent>: Send + Sync {
    /// Load every event matching `filter`, in append order.
    async fn load_events(&self, filter: &EventFilter<E>) -> Result<Vec<E>, DomainError>;

    /// Append a newly decided event to the log.
    async fn append_event(&self, event: E) -> Result<(), DomainError>;
}
