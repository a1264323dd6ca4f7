//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode, Uri},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use query_relay::http::{Answer, Query};
use query_relay::observability::Reporter;
use query_relay::RelayConfig;

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: &'static str,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Bytes>>>,
}

/// A fake collaborator that answers every `POST /query` with a fixed reply.
pub struct MockCollaborator {
    pub url: String,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Bytes>>>,
}

impl MockCollaborator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Raw bodies the relay forwarded, in arrival order.
    pub fn received(&self) -> Vec<Bytes> {
        self.received.lock().unwrap().clone()
    }
}

async fn reply(
    State(reply): State<Reply>,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    reply.calls.fetch_add(1, Ordering::SeqCst);
    reply.received.lock().unwrap().push(body);
    (reply.status, [(header::CONTENT_TYPE, "application/json")], reply.body)
}

/// Start a collaborator on an ephemeral port.
pub async fn start_collaborator(status: u16, body: &'static str) -> MockCollaborator {
    let calls = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = Reply {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        calls: calls.clone(),
        received: received.clone(),
    };

    let app = Router::new().route("/query", post(reply)).with_state(state);
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockCollaborator {
        url: format!("http://{addr}/query"),
        calls,
        received,
    }
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/query")
}

/// Relay configuration pointed at `upstream` with the given answer delay.
pub fn relay_config(upstream: &str, answer_delay_ms: u64) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.upstream.url = upstream.to_string();
    config.upstream.answer_delay_ms = answer_delay_ms;
    config
}

/// Captures console notices instead of printing them.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Reporter for RecordingReporter {
    fn request(&self, method: &Method, uri: &Uri) {
        self.push(format!("request {method} {uri}"));
    }

    fn query_received(&self, query: &Query) {
        self.push(format!("query {}", query.query));
    }

    fn answer(&self, answer: &Answer) {
        self.push(format!("answer {} from {}", answer.response, answer.source));
    }

    fn health_ok(&self) {
        self.push("health".to_string());
    }

    fn started(&self, addr: SocketAddr) {
        self.push(format!("started {addr}"));
    }
}
