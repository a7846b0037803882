//! PREreview: Review Request categorization bounded context.
//!
//! Responsible for categorizing review requests by language, keywords and
//! topics, and for replaying those categorizations into snapshots other
//! contexts can join against.

pub mod application;
pub mod domain;
