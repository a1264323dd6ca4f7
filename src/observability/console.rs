//! Human-facing console output.
//!
//! The relay prints a few colored lines for operators watching the terminal:
//! access lines, received queries, answers and health probes. All of it goes
//! through [`Reporter`], which the server receives at construction, so tests
//! and embedders can capture or silence it.

use std::io::Write;
use std::net::SocketAddr;

use axum::http::{Method, Uri};
use nu_ansi_term::Color;

use crate::http::models::{Answer, Query};

/// Sink for console notices emitted while serving requests.
pub trait Reporter: Send + Sync + 'static {
    /// A request reached the router, before its handler runs.
    fn request(&self, method: &Method, uri: &Uri);

    /// A query body was parsed and is about to be forwarded.
    fn query_received(&self, query: &Query);

    /// The collaborator answered and the answer is about to be returned.
    fn answer(&self, answer: &Answer);

    /// A health probe was served.
    fn health_ok(&self);

    /// The listener is bound and the relay is about to serve.
    fn started(&self, addr: SocketAddr);
}

/// Writes colored notices to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    ansi: bool,
}

impl ConsoleReporter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if self.ansi {
            color.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_request(&self, method: &Method, uri: &Uri) -> String {
        self.paint(Color::Cyan, &format!("Received request: {method} {uri}"))
    }

    pub fn render_query(&self, query: &Query) -> String {
        format!("Received query: {}", query.query)
    }

    pub fn render_answer(&self, answer: &Answer) -> String {
        format!(
            "{}\n{}: {}\n{}: {}\n-------------------",
            self.paint(Color::Cyan, "🤖 Query Response:"),
            self.paint(Color::Green, "Source"),
            answer.source,
            self.paint(Color::Yellow, "Response"),
            answer.response,
        )
    }

    pub fn render_health(&self) -> String {
        self.paint(Color::Green, "🟢 Health Check Successful")
    }

    pub fn render_started(&self, addr: SocketAddr) -> String {
        self.paint(Color::Cyan, &format!("🚀 Starting relay on {addr}"))
    }

    fn emit(&self, text: String) {
        // One locked write per notice keeps multi-line answers together
        // when requests finish concurrently.
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }
}

impl Reporter for ConsoleReporter {
    fn request(&self, method: &Method, uri: &Uri) {
        self.emit(self.render_request(method, uri));
    }

    fn query_received(&self, query: &Query) {
        self.emit(self.render_query(query));
    }

    fn answer(&self, answer: &Answer) {
        self.emit(self.render_answer(answer));
    }

    fn health_ok(&self) {
        self.emit(self.render_health());
    }

    fn started(&self, addr: SocketAddr) {
        self.emit(self.render_started(addr));
    }
}
