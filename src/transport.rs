//! HTTP transport seam
//!
//! The resolver never talks to the network directly. It hands a fully built
//! `reqwest::Request` to an `HttpTransport` and gets back the status and the
//! buffered body. Production code uses `reqwest::Client`; tests plug in fakes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

/// Status and fully read body of an HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and read the whole response body.
    ///
    /// An `Err` means no usable response was obtained. Non-2xx statuses are
    /// not errors at this level.
    async fn send(&self, request: reqwest::Request) -> Result<TransportResponse>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<TransportResponse> {
        let url = request.url().clone();

        let response = self
            .execute(request)
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
