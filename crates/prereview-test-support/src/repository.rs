//! Test repositories: mock `EventRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use prereview_core::error::DomainError;
use prereview_core::filter::EventFilter;
use prereview_core::repository::EventRepository;
use prereview_events::Event;

/// An in-memory event repository seeded with a history. `load_events`
/// applies the filter to everything seen so far, including events appended
/// through this repository, and every append is recorded.
#[derive(Debug, Default)]
pub struct RecordingEventRepository {
    log: Mutex<Vec<Event>>,
    appended: Mutex<Vec<Event>>,
    loads: Mutex<usize>,
}

impl RecordingEventRepository {
    /// Create a new recording repository seeded with `history`.
    #[must_use]
    pub fn new(history: Vec<Event>) -> Self {
        Self {
            log: Mutex::new(history),
            ..Self::default()
        }
    }

    /// Returns a snapshot of all events that were appended.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_events(&self) -> Vec<Event> {
        self.appended.lock().unwrap().clone()
    }

    /// Returns how many times `load_events` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

#[async_trait]
impl EventRepository<Event> for RecordingEventRepository {
    async fn load_events(&self, filter: &EventFilter<Event>) -> Result<Vec<Event>, DomainError> {
        *self.loads.lock().unwrap() += 1;
        let log = self.log.lock().unwrap();
        Ok(filter.select(&log).cloned().collect())
    }

    async fn append_event(&self, event: Event) -> Result<(), DomainError> {
        self.log.lock().unwrap().push(event.clone());
        self.appended.lock().unwrap().push(event);
        Ok(())
    }
}

/// An event repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository<Event> for FailingEventRepository {
    async fn load_events(&self, _filter: &EventFilter<Event>) -> Result<Vec<Event>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn append_event(&self, _event: Event) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
