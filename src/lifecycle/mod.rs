//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs: SIGINT / SIGTERM
//!     → shutdown.rs: Shutdown::trigger
//!     → every ShutdownSignal resolves
//!     → RelayServer stops accepting, drains in-flight requests
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use signals::wait_for_signal;
