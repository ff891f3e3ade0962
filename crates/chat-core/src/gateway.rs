//! Decoding of gateway replies, shared by every transport adapter.

use chat_types::{
    ChatError, Result,
    wire::{ChatReply, ErrorReply},
};

/// Reason used when a failure body carries no usable `error` field.
pub const GENERIC_FAILURE: &str = "Failed to get response";

/// Turn a raw HTTP reply into the assistant text or a typed failure.
///
/// `ok` is the transport's notion of a success status (2xx).
pub fn decode_reply(ok: bool, status: u16, body: &str) -> Result<String> {
    if !ok {
        let message = serde_json::from_str::<ErrorReply>(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        return Err(ChatError::Gateway { status, message });
    }

    let reply: ChatReply = serde_json::from_str(body)?;
    Ok(reply.response)
}
