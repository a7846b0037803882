//! Tags and filterable fields of the domain events.

use prereview_core::event::DomainEvent;
use prereview_core::filter::EventFilter;
use uuid::Uuid;

use crate::events::Event;
use crate::ids::{KeywordId, OrcidId, PreprintId};

/// Discriminator of [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    /// See [`Event::ReviewRequestForAPreprintWasReceived`].
    ReviewRequestForAPreprintWasReceived,
    /// See [`Event::ReviewRequestForAPreprintWasAccepted`].
    ReviewRequestForAPreprintWasAccepted,
    /// See [`Event::ReviewRequestForAPreprintWasRejected`].
    ReviewRequestForAPreprintWasRejected,
    /// See [`Event::ReviewRequestForAPreprintWasCategorized`].
    ReviewRequestForAPreprintWasCategorized,
    /// See [`Event::ReviewRequestForAPreprintWasRecategorized`].
    ReviewRequestForAPreprintWasRecategorized,
    /// See [`Event::PrereviewerSubscribedToAKeyword`].
    PrereviewerSubscribedToAKeyword,
}

/// Correlation fields a filter can put predicates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventField {
    /// The review request an event is about.
    ReviewRequestId,
    /// The preprint a review request is for.
    PreprintId,
    /// The prereviewer an event is about.
    PrereviewerId,
    /// The keyword an event is about.
    KeywordId,
}

/// Value of a correlation field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A review request identifier.
    ReviewRequestId(Uuid),
    /// A preprint identifier.
    PreprintId(PreprintId),
    /// A prereviewer's ORCID iD.
    PrereviewerId(OrcidId),
    /// A keyword identifier.
    KeywordId(KeywordId),
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        Self::ReviewRequestId(value)
    }
}

impl From<PreprintId> for FieldValue {
    fn from(value: PreprintId) -> Self {
        Self::PreprintId(value)
    }
}

impl From<OrcidId> for FieldValue {
    fn from(value: OrcidId) -> Self {
        Self::PrereviewerId(value)
    }
}

impl From<KeywordId> for FieldValue {
    fn from(value: KeywordId) -> Self {
        Self::KeywordId(value)
    }
}

impl Event {
    /// Returns the review request this event is about, if any.
    #[must_use]
    pub fn review_request_id(&self) -> Option<Uuid> {
        match self {
            Self::ReviewRequestForAPreprintWasReceived(e) => Some(e.review_request_id),
            Self::ReviewRequestForAPreprintWasAccepted(e) => Some(e.review_request_id),
            Self::ReviewRequestForAPreprintWasRejected(e) => Some(e.review_request_id),
            Self::ReviewRequestForAPreprintWasCategorized(e) => Some(e.review_request_id),
            Self::ReviewRequestForAPreprintWasRecategorized(e) => Some(e.review_request_id),
            Self::PrereviewerSubscribedToAKeyword(_) => None,
        }
    }

    fn preprint_id(&self) -> Option<&PreprintId> {
        match self {
            Self::ReviewRequestForAPreprintWasReceived(e) => Some(&e.preprint_id),
            Self::ReviewRequestForAPreprintWasAccepted(e) => Some(&e.preprint_id),
            Self::ReviewRequestForAPreprintWasRejected(_)
            | Self::ReviewRequestForAPreprintWasCategorized(_)
            | Self::ReviewRequestForAPreprintWasRecategorized(_)
            | Self::PrereviewerSubscribedToAKeyword(_) => None,
        }
    }
}

impl DomainEvent for Event {
    type Tag = EventTag;
    type Field = EventField;
    type Value = FieldValue;

    fn tag(&self) -> EventTag {
        match self {
            Self::ReviewRequestForAPreprintWasReceived(_) => {
                EventTag::ReviewRequestForAPreprintWasReceived
            }
            Self::ReviewRequestForAPreprintWasAccepted(_) => {
                EventTag::ReviewRequestForAPreprintWasAccepted
            }
            Self::ReviewRequestForAPreprintWasRejected(_) => {
                EventTag::ReviewRequestForAPreprintWasRejected
            }
            Self::ReviewRequestForAPreprintWasCategorized(_) => {
                EventTag::ReviewRequestForAPreprintWasCategorized
            }
            Self::ReviewRequestForAPreprintWasRecategorized(_) => {
                EventTag::ReviewRequestForAPreprintWasRecategorized
            }
            Self::PrereviewerSubscribedToAKeyword(_) => EventTag::PrereviewerSubscribedToAKeyword,
        }
    }

    fn field(&self, field: EventField) -> Option<FieldValue> {
        match field {
            EventField::ReviewRequestId => self.review_request_id().map(FieldValue::ReviewRequestId),
            EventField::PreprintId => self.preprint_id().cloned().map(FieldValue::PreprintId),
            EventField::PrereviewerId => match self {
                Self::PrereviewerSubscribedToAKeyword(e) => {
                    Some(FieldValue::PrereviewerId(e.prereviewer_id.clone()))
                }
                _ => None,
            },
            EventField::KeywordId => match self {
                Self::PrereviewerSubscribedToAKeyword(e) => {
                    Some(FieldValue::KeywordId(e.keyword_id.clone()))
                }
                _ => None,
            },
        }
    }
}

/// Filter alias for the domain's event set.
pub type Filter = EventFilter<Event>;
