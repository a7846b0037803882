//! Identifiers crossing the domain core boundary.
//!
//! Keywords, topics and languages are drawn from reference vocabularies
//! maintained outside the core; here they are opaque strings.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// A keyword from the reference keyword vocabulary.
    KeywordId
);
string_id!(
    /// A topic from the reference topic vocabulary.
    TopicId
);
string_id!(
    /// An ORCID iD, e.g. `0000-0002-1825-0097`. Identifies prereviewers.
    OrcidId
);
string_id!(
    /// A preprint identifier, e.g. `doi:10.1101/2024.01.01.123456`.
    PreprintId
);
string_id!(
    /// An ISO 639 language code.
    LanguageCode
);

/// The person who asked for a preprint to be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// Display name.
    pub name: String,
    /// ORCID iD, if the requester supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orcid_id: Option<OrcidId>,
}
