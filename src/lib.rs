//! Query relay library.
//!
//! Accepts `POST /query` from browsers and other callers, forwards the query
//! to a separately running collaborator service, and hands its answer back.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
