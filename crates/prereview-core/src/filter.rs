//! Event filtering.
//!
//! [`matches`] is the only way events are selected: folds, decisions and
//! projections all build an [`EventFilter`] and go through it.

use std::collections::{BTreeMap, HashSet};

use crate::event::DomainEvent;

/// Selects events by tag and by equality predicates on correlation fields.
///
/// An event matches when its tag is one of the accepted tags and every
/// predicate field is present on the event with the required value.
#[derive(Debug, Clone)]
pub struct EventFilter<E: DomainEvent> {
    tags: HashSet<E::Tag>,
    predicates: BTreeMap<E::Field, E::Value>,
}

impl<E: DomainEvent> EventFilter<E> {
    /// Creates a filter accepting any event whose tag is in `tags`.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = E::Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            predicates: BTreeMap::new(),
        }
    }

    /// Adds an equality predicate. A later predicate on the same field
    /// replaces the earlier one.
    #[must_use]
    pub fn with(mut self, field: E::Field, value: impl Into<E::Value>) -> Self {
        self.predicates.insert(field, value.into());
        self
    }

    /// Returns `true` if `event` satisfies this filter.
    #[must_use]
    pub fn matches(&self, event: &E) -> bool {
        matches(event, self)
    }

    /// Iterates over the events in `events` that satisfy this filter, in
    /// their original order.
    pub fn select<'a>(&'a self, events: &'a [E]) -> impl Iterator<Item = &'a E> + 'a {
        events.iter().filter(move |event| self.matches(event))
    }
}

/// Returns `true` iff the event's tag is accepted by `filter` and every
/// predicate field on the event equals the required value.
///
/// A predicate on a field the event does not carry fails the match.
#[must_use]
pub fn matches<E: DomainEvent>(event: &E, filter: &EventFilter<E>) -> bool {
    filter.tags.contains(&event.tag())
        && filter
            .predicates
            .iter()
            .all(|(field, expected)| event.field(*field).as_ref() == Some(expected))
}
