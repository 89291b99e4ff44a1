use serde::Deserialize;
use thiserror::Error;

/// Generation tag carried by every issued search and its completion.
pub type RequestId = u64;

/// One hit from the search API, as shaped on the wire.
///
/// Hits that are not plain stories carry nulls in several fields, so
/// everything except `objectID` is optional; one odd hit must not fail a
/// whole response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoryHit {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub url: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub num_comments: Option<u64>,
    pub points: Option<i64>,
}

/// Response body of the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<StoryHit>,
}

/// Event emitted by the engine thread back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request: RequestId,
        result: Result<Vec<StoryHit>, FetchError>,
    },
}

/// Why a search failed. The shell collapses every kind into one
/// user-visible failure; the distinction feeds logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed response body")]
    MalformedBody,
    #[error("network error")]
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
