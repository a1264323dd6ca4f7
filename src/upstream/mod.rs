//! Outbound side of the relay.
//!
//! # Data Flow
//! ```text
//! Query (parsed by http::handlers)
//!     → client.rs (POST as JSON to the collaborator)
//!     → status check, body read, Answer decode
//!     → Answer or UpstreamError back to the handler
//! ```
//!
//! No retries, fallbacks or timeouts: a failure is reported once and the
//! handler turns it into an opaque 500.

pub mod client;

pub use client::{Collaborator, UpstreamError};
