//! Core data types for credit search
//!
//! Contains the wire model returned by the search endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// One work a person is credited on, as returned by `POST /search`
///
/// Credits are transient: they are built from a response, rendered
/// positionally and dropped on the next search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    /// Title of the movie or show
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Kind of work (e.g. "Movie", "TV Show")
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,

    /// Character played or job held
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,

    /// Overview text
    #[serde(default)]
    pub description: Option<String>,

    /// Trailer URL (usually a YouTube watch link)
    #[serde(default)]
    pub trailer: Option<String>,

    /// Names of subscription streaming providers, in server order
    #[serde(default)]
    pub streaming_platforms: Option<Vec<String>>,
}

impl Credit {
    /// Create a credit with only the required display fields set
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            role: role.into(),
            description: None,
            trailer: None,
            streaming_platforms: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
