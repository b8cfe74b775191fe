//! Concept resolver
//!
//! Resolves a batch of concept identifiers with a single GET against the
//! concept search endpoint:
//!
//! ```text
//! GET <base_url>?ids=<id1>&ids=<id2>...
//! X-Request-Id: <correlation id>
//! User-Agent: UPP concept-resolver/<version>
//! ```
//!
//! Blank identifiers are dropped before the call. If nothing is left, no
//! request is made at all.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use tracing::{debug, instrument, warn};

use crate::config::ResolverConfig;
use crate::error::ConceptSearchError;
use crate::transport::{HttpTransport, TransportResponse};
use crate::types::{Concept, RemoteErrorBody, SearchResponse};
use crate::{ConceptSearch, Result};

/// Query parameter carrying each requested identifier.
pub const CONCEPT_SEARCH_QUERY_PARAM: &str = "ids";

/// Correlation header propagated to the search service.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Client identity sent as `User-Agent`.
pub const CLIENT_USER_AGENT: &str = concat!("UPP concept-resolver/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct ConceptResolver {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl std::fmt::Debug for ConceptResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptResolver")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ConceptResolver {
    /// The URL is not checked here; a bad one fails every resolve call.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Build a resolver backed by a `reqwest::Client` honouring the configured timeout.
    pub fn from_config(config: &ResolverConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::new(Arc::new(client), config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `identifiers` into the concepts the search service knows about.
    ///
    /// Order follows the service's response. Fewer concepts than identifiers
    /// is a normal outcome.
    #[instrument(
        skip(self, identifiers),
        fields(correlation_id = %correlation_id, requested = identifiers.len())
    )]
    pub async fn resolve<S: AsRef<str>>(
        &self,
        correlation_id: &str,
        identifiers: &[S],
    ) -> Result<Vec<Concept>> {
        let ids = requested_ids(identifiers)?;
        let request = self.build_request(correlation_id, &ids)?;

        debug!(url = %request.url(), ids = ids.len(), "Dispatching concept search");

        let response = self.transport.send(request).await.map_err(|e| {
            warn!(error = %e, "Concept search request failed");
            ConceptSearchError::TransportFailure(e)
        })?;

        let concepts = decode_response(response)?;
        debug!(found = concepts.len(), "Concept search complete");
        Ok(concepts)
    }

    fn build_request(&self, correlation_id: &str, ids: &[&str]) -> Result<reqwest::Request> {
        let mut url =
            Url::parse(&self.base_url).map_err(|source| ConceptSearchError::InvalidRequestUrl {
                url: self.base_url.clone(),
                source,
            })?;

        {
            let mut query = url.query_pairs_mut();
            for id in ids {
                query.append_pair(CONCEPT_SEARCH_QUERY_PARAM, id);
            }
        }

        let request_id = HeaderValue::from_str(correlation_id).map_err(|source| {
            ConceptSearchError::InvalidRequestHeader {
                name: REQUEST_ID_HEADER,
                source,
            }
        })?;

        let mut request = reqwest::Request::new(Method::GET, url);
        let headers = request.headers_mut();
        headers.insert(REQUEST_ID_HEADER, request_id);
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        Ok(request)
    }
}

#[async_trait]
impl ConceptSearch for ConceptResolver {
    async fn by_ids(&self, correlation_id: &str, identifiers: &[String]) -> Result<Vec<Concept>> {
        self.resolve(correlation_id, identifiers).await
    }
}

/// Non-empty identifiers in input order.
///
/// Zero identifiers and all-blank identifiers are distinct failures. Some
/// blanks among valid ids are simply dropped.
fn requested_ids<S: AsRef<str>>(identifiers: &[S]) -> Result<Vec<&str>> {
    if identifiers.is_empty() {
        return Err(ConceptSearchError::NoIdentifiersProvided);
    }

    let ids: Vec<&str> = identifiers
        .iter()
        .map(AsRef::as_ref)
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(ConceptSearchError::EmptyIdentifierSet);
    }

    Ok(ids)
}

fn decode_response(response: TransportResponse) -> Result<Vec<Concept>> {
    if !response.status.is_success() {
        let message = rejection_message(response.status, &response.body);
        warn!(status = response.status.as_u16(), %message, "Concept search rejected");
        return Err(ConceptSearchError::RemoteRejected {
            status: response.status,
            message,
        });
    }

    // a bare `null` body matched nothing as well
    let payload: Option<SearchResponse> =
        serde_json::from_slice(&response.body).map_err(ConceptSearchError::MalformedResponse)?;

    Ok(payload.map(|p| p.concepts).unwrap_or_default())
}

/// `"<code> <reason>: <message>"`, or just the status line when the body
/// has no usable `message`.
fn rejection_message(status: StatusCode, body: &[u8]) -> String {
    let status_line = match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    };

    match serde_json::from_slice::<RemoteErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
    {
        Some(message) if !message.is_empty() => format!("{}: {}", status_line, message),
        _ => status_line,
    }
}
