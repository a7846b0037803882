//! Commands for the Review Request categorization context.

use prereview_core::command::Command;
use prereview_events::{KeywordId, LanguageCode, TopicId};
use uuid::Uuid;

/// Command to categorize (or recategorize) a review request.
#[derive(Debug, Clone)]
pub struct CategorizeReviewRequest {
    /// The review request identifier.
    pub review_request_id: Uuid,
    /// Language of the preprint.
    pub language: LanguageCode,
    /// Keywords describing the preprint.
    pub keywords: Vec<KeywordId>,
    /// Topics the preprint belongs to.
    pub topics: Vec<TopicId>,
}

impl Command for CategorizeReviewRequest {
    fn command_type(&self) -> &'static str {
        "review_requests.categorize"
    }
}
