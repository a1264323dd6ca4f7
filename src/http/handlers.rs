//! Request handlers for the relay's two endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::models::{Answer, Query};
use crate::http::server::AppState;
use crate::upstream::UpstreamError;

/// Body returned by a successful health probe.
pub const HEALTHY_BODY: &str = "Backend is healthy!";

/// Failures surfaced to callers of `/query`.
///
/// Callers only ever see a fixed message; the cause stays in the relay's log.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid request body: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::InvalidRequest(e) => {
                tracing::debug!(error = %e, "Rejected query body");
                (StatusCode::BAD_REQUEST, "Invalid request body").into_response()
            }
            RelayError::Upstream(e) => {
                tracing::error!(error = %e, "Error processing query");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process query").into_response()
            }
        }
    }
}

/// `POST /query`: forward the query and hand back the collaborator's answer.
///
/// The body is decoded by hand rather than through the `Json` extractor so a
/// missing content type or a malformed body both come back as 400.
pub async fn submit_query(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Answer>, RelayError> {
    let query: Query = serde_json::from_slice(&body).map_err(RelayError::InvalidRequest)?;
    state.reporter.query_received(&query);

    let answer = state.collaborator.ask(&query).await?;

    tokio::time::sleep(state.answer_delay).await;

    state.reporter.answer(&answer);
    Ok(Json(answer))
}

/// `GET /health`: liveness of the relay process only.
pub async fn health_check(State(state): State<AppState>) -> &'static str {
    state.reporter.health_ok();
    HEALTHY_BODY
}
