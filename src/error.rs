//! Error types for concept resolution
//!
//! Every failure of a resolve call maps onto one `ConceptSearchError` variant.
//! Callers that only need to branch on the cause can compare `ErrorKind`s.

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConceptSearchError {
    #[error("no concept identifiers provided")]
    NoIdentifiersProvided,

    #[error("all provided concept identifiers are empty")]
    EmptyIdentifierSet,

    #[error("invalid concept search URL '{url}': {source}")]
    InvalidRequestUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Correlation ID not usable as an `X-Request-Id` value. Checked locally,
    /// so nothing is sent.
    #[error("invalid value for header {name}: {source}")]
    InvalidRequestHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },

    #[error("concept search request failed: {0}")]
    TransportFailure(#[source] anyhow::Error),

    /// Non-2xx answer. `message` is `"<code> <reason>"`, followed by
    /// `": <message>"` when the body carried one.
    #[error("{message}")]
    RemoteRejected { status: StatusCode, message: String },

    #[error("failed to decode concept search response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Fieldless discriminant of [`ConceptSearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoIdentifiersProvided,
    EmptyIdentifierSet,
    InvalidRequestUrl,
    InvalidRequestHeader,
    TransportFailure,
    RemoteRejected,
    MalformedResponse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoIdentifiersProvided => write!(f, "no-identifiers-provided"),
            Self::EmptyIdentifierSet => write!(f, "empty-identifier-set"),
            Self::InvalidRequestUrl => write!(f, "invalid-request-url"),
            Self::InvalidRequestHeader => write!(f, "invalid-request-header"),
            Self::TransportFailure => write!(f, "transport-failure"),
            Self::RemoteRejected => write!(f, "remote-rejected"),
            Self::MalformedResponse => write!(f, "malformed-response"),
        }
    }
}

impl ConceptSearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoIdentifiersProvided => ErrorKind::NoIdentifiersProvided,
            Self::EmptyIdentifierSet => ErrorKind::EmptyIdentifierSet,
            Self::InvalidRequestUrl { .. } => ErrorKind::InvalidRequestUrl,
            Self::InvalidRequestHeader { .. } => ErrorKind::InvalidRequestHeader,
            Self::TransportFailure(_) => ErrorKind::TransportFailure,
            Self::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Only transport failures are worth retrying; everything else is either a
    /// caller mistake or a deterministic answer from the search service.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    /// HTTP status of a rejected call.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
