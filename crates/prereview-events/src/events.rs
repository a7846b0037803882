//! Domain events.
//!
//! Events are immutable once appended. Keyword and topic collections are
//! carried as sequences; their order is significant only for presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{KeywordId, LanguageCode, OrcidId, PreprintId, Requester, TopicId};

/// Emitted when someone asks for a preprint to be reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequestForAPreprintWasReceived {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// The preprint to be reviewed.
    pub preprint_id: PreprintId,
    /// Who asked.
    pub requester: Requester,
    /// When the request arrived.
    pub received_at: DateTime<Utc>,
}

/// Emitted when a review request is accepted and published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequestForAPreprintWasAccepted {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// The preprint to be reviewed.
    pub preprint_id: PreprintId,
    /// Who asked.
    pub requester: Requester,
    /// When the request was accepted.
    pub accepted_at: DateTime<Utc>,
    /// When the request arrived.
    pub received_at: DateTime<Utc>,
}

/// Emitted when a review request is turned down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequestForAPreprintWasRejected {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// Why the request was rejected.
    pub reason: String,
}

/// Emitted the first time a review request is categorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequestForAPreprintWasCategorized {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// Language of the preprint.
    pub language: LanguageCode,
    /// Keywords describing the preprint.
    pub keywords: Vec<KeywordId>,
    /// Topics the preprint belongs to.
    pub topics: Vec<TopicId>,
}

/// Emitted when an already categorized review request changes category.
///
/// Only the fields that changed are present; `None` means unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequestForAPreprintWasRecategorized {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// New language, if it changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
    /// New keywords, if they changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<KeywordId>>,
    /// New topics, if they changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<TopicId>>,
}

/// Emitted when a prereviewer subscribes to a keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrereviewerSubscribedToAKeyword {
    /// The subscribing prereviewer.
    pub prereviewer_id: OrcidId,
    /// The keyword subscribed to.
    pub keyword_id: KeywordId,
}

/// The closed set of domain events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_tag")]
pub enum Event {
    /// A review request has been received.
    ReviewRequestForAPreprintWasReceived(ReviewRequestForAPreprintWasReceived),
    /// A review request has been accepted.
    ReviewRequestForAPreprintWasAccepted(ReviewRequestForAPreprintWasAccepted),
    /// A review request has been rejected.
    ReviewRequestForAPreprintWasRejected(ReviewRequestForAPreprintWasRejected),
    /// A review request has been categorized.
    ReviewRequestForAPreprintWasCategorized(ReviewRequestForAPreprintWasCategorized),
    /// A review request has been recategorized.
    ReviewRequestForAPreprintWasRecategorized(ReviewRequestForAPreprintWasRecategorized),
    /// A prereviewer has subscribed to a keyword.
    PrereviewerSubscribedToAKeyword(PrereviewerSubscribedToAKeyword),
}

macro_rules! event_from_payload {
    ($($payload:ident),* $(,)?) => {
        $(
            impl From<$payload> for Event {
                fn from(payload: $payload) -> Self {
                    Self::$payload(payload)
                }
            }
        )*
    };
}

event_from_payload!(
    ReviewRequestForAPreprintWasReceived,
    ReviewRequestForAPreprintWasAccepted,
    ReviewRequestForAPreprintWasRejected,
    ReviewRequestForAPreprintWasCategorized,
    ReviewRequestForAPreprintWasRecategorized,
    PrereviewerSubscribedToAKeyword,
);
