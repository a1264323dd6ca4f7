//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Structured events (tracing macros in every module)
//!     → logging.rs (subscriber: env filter + fmt layer)
//!     → stderr
//!
//! Operator notices (access lines, answers, health probes)
//!     → console.rs (Reporter implementation injected into the server)
//!     → stdout
//! ```

pub mod console;
pub mod logging;

pub use console::{ConsoleReporter, Reporter};
pub use logging::init_tracing;
