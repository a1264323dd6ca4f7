//! Access logging middleware.
//!
//! Runs inside the router for every request, matched or not, before the
//! handler is invoked.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

pub const X_REQUEST_ID: &str = "x-request-id";

pub async fn access_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Received request"
    );
    state.reporter.request(request.method(), request.uri());

    next.run(request).await
}
