//! Configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use prereview_events::OrcidId;

use crate::error::ReplayError;

/// Which read model to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayQuery {
    /// Preprints with recent review requests matching the prereviewer.
    Matches,
    /// Keywords the prereviewer subscribed to.
    Keywords,
}

impl FromStr for ReplayQuery {
    type Err = ReplayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "matches" => Ok(Self::Matches),
            "keywords" => Ok(Self::Keywords),
            other => Err(ReplayError::Config(format!(
                "REPLAY_QUERY must be `matches` or `keywords`, got `{other}`"
            ))),
        }
    }
}

/// Replay settings.
#[derive(Debug)]
pub struct ReplayConfig {
    /// Path to a JSON array of events, in append order.
    pub event_log_path: PathBuf,
    /// The prereviewer to run the read models for.
    pub prereviewer_id: OrcidId,
    /// The read model to print.
    pub query: ReplayQuery,
}

impl ReplayConfig {
    /// Reads `EVENT_LOG_PATH`, `PREREVIEWER_ID` and `REPLAY_QUERY`.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::Config` if a required variable is missing or a
    /// value is invalid.
    pub fn from_env() -> Result<Self, ReplayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ReplayError> {
        let event_log_path = lookup("EVENT_LOG_PATH").ok_or_else(|| {
            ReplayError::Config("EVENT_LOG_PATH environment variable must be set".to_owned())
        })?;
        let prereviewer_id = lookup("PREREVIEWER_ID")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                ReplayError::Config("PREREVIEWER_ID environment variable must be set".to_owned())
            })?;
        let query = match lookup("REPLAY_QUERY") {
            Some(value) => value.parse()?,
            None => ReplayQuery::Matches,
        };

        Ok(Self {
            event_log_path: PathBuf::from(event_log_path),
            prereviewer_id: OrcidId::new(prereviewer_id.trim()),
            query,
        })
    }
}
