//! Wire records exchanged with callers and with the collaborator.

use serde::{Deserialize, Serialize};

/// Inbound request body, forwarded unchanged to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Query {
    pub query: String,
}

/// Collaborator reply, returned unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub response: String,
    /// Knowledge source that produced the answer.
    pub source: String,
}
