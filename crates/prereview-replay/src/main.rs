//! PREreview replay entry point.
//!
//! Loads an event log from disk, runs one prereviewer read model over it and
//! prints the result as JSON on stdout. Logs go to stderr.

use prereview_prereviewers::application::query_handlers::{
    handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer,
    handle_get_subscribed_keywords,
};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod event_log;

use config::{ReplayConfig, ReplayQuery};
use error::ReplayError;
use event_log::JsonEventLog;

#[tokio::main]
async fn main() -> Result<(), ReplayError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = ReplayConfig::from_env()?;
    tracing::info!(
        prereviewer_id = %config.prereviewer_id,
        query = ?config.query,
        "Replaying event log"
    );

    let log = JsonEventLog::from_path(&config.event_log_path).await?;

    let output = match config.query {
        ReplayQuery::Matches => serde_json::to_string_pretty(
            &handle_get_preprints_with_a_recent_review_requests_matching_a_prereviewer(
                &config.prereviewer_id,
                &log,
            )
            .await?,
        )?,
        ReplayQuery::Keywords => serde_json::to_string_pretty(
            &handle_get_subscribed_keywords(&config.prereviewer_id, &log).await?,
        )?,
    };
    println!("{output}");

    Ok(())
}
