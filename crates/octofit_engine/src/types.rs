use std::fmt;

use bytes::Bytes;
use octofit_core::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    /// Raw, undecoded response body.
    pub body: Bytes,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// A failed collection request. `message` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
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

    pub(crate) fn http_status(code: u16) -> Self {
        Self::new(
            FailureKind::HttpStatus(code),
            format!("HTTP error! status: {code}"),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Diagnostic events emitted while loading a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    /// Before the request is sent.
    Requesting { resource: Resource, url: String },
    /// After the body was decoded into records.
    Normalized { resource: Resource, count: usize },
    /// Fetch or decode failed.
    Failed { resource: Resource, message: String },
}
