//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (preflight answered here, origin checked)
//!     → access_log.rs (method + target logged before routing)
//!     → handlers.rs
//!         /health → fixed body
//!         /query  → models::Query → upstream::Collaborator → models::Answer
//!     → Send to client
//! ```

pub mod access_log;
pub mod cors;
pub mod handlers;
pub mod models;
pub mod server;

pub use handlers::{RelayError, HEALTHY_BODY};
pub use models::{Answer, Query};
pub use server::{AppState, RelayServer, ServerError};
