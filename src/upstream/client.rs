//! HTTP client for the query-answering collaborator.

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::models::{Answer, Query};

/// Error type for a collaborator round trip.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to send request: {0}")]
    Send(#[source] reqwest::Error),

    #[error("collaborator responded with status {0}")]
    Status(StatusCode),

    #[error("failed to read response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to decode answer: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The external service that actually answers queries.
#[derive(Debug, Clone)]
pub struct Collaborator {
    client: reqwest::Client,
    url: String,
}

impl Collaborator {
    /// Create a client for the collaborator at `url`.
    ///
    /// No request timeout is set: a collaborator that never answers holds the
    /// calling request open. Connections are made directly, ignoring any
    /// `HTTP_PROXY` in the environment.
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().no_proxy().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Forward a query and wait for the collaborator's answer.
    pub async fn ask(&self, query: &Query) -> Result<Answer, UpstreamError> {
        let response = self
            .client
            .post(&self.url)
            .json(query)
            .send()
            .await
            .map_err(UpstreamError::Send)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        // Decode from the raw bytes so a wrong content type does not matter,
        // only the shape of the body.
        let body = response.bytes().await.map_err(UpstreamError::Read)?;
        let answer = serde_json::from_slice(&body)?;

        tracing::debug!(url = %self.url, bytes = body.len(), "Collaborator answered");
        Ok(answer)
    }
}
