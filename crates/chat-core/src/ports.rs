//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `chat-core` (pure Rust).
//! Implementations live in `chat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use chat_types::{Result, wire::ChatRequest};

// ─── Gateway Port ────────────────────────────────────────────

/// The remote chat gateway: one request in, one answer (or failure) out.
#[async_trait(?Send)]
pub trait GatewayPort {
    /// Send a request and return the assistant's reply text.
    ///
    /// Every failure mode (transport, non-success status, bad payload)
    /// comes back as `Err`; implementations never panic on bad input.
    async fn send(&self, req: ChatRequest) -> Result<String>;

    /// Name of this adapter (for logging/debug)
    fn gateway_name(&self) -> &str;
}
