//! JSON bodies exchanged with the `/chat` gateway endpoint.

use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Body of `POST /chat`
#[derive(Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The live user text
    pub message: String,
    pub api_key: String,
    /// Everything said before `message`
    pub chat_history: Vec<Message>,
}

// Hand-written so the credential never lands in a log line.
impl std::fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRequest")
            .field("message", &self.message)
            .field("api_key", &"<redacted>")
            .field("chat_history", &self.chat_history.len())
            .finish()
    }
}

/// Success body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Server-side completion time, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Failure body. `error` may be missing on badly behaved servers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    pub error: Option<String>,
}
