//! PREreview: domain events.
//!
//! The closed set of events the domain core reads and writes, the
//! identifiers they carry, and the tags and fields filters select them by.

pub mod events;
pub mod fields;
pub mod ids;

pub use events::{
    Event, PrereviewerSubscribedToAKeyword, ReviewRequestForAPreprintWasAccepted,
    ReviewRequestForAPreprintWasCategorized, ReviewRequestForAPreprintWasReceived,
    ReviewRequestForAPreprintWasRecategorized, ReviewRequestForAPreprintWasRejected,
};
pub use fields::{EventField, EventTag, FieldValue, Filter};
pub use ids::{KeywordId, LanguageCode, OrcidId, PreprintId, Requester, TopicId};
