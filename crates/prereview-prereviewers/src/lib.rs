//! PREreview: Prereviewer bounded context.
//!
//! Responsible for prereviewers' keyword subscriptions and for the read
//! model matching them to preprints with recently accepted review requests.

pub mod application;
pub mod domain;
