//! WASM-target tests for chat-core.
//!
//! Runs the event bus, reply decoding and session controller under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_core::event_bus::EventBus;
use chat_core::gateway::decode_reply;
use chat_core::ports::GatewayPort;
use chat_core::session::{SessionController, SubmitOutcome};
use chat_types::config::DisplayStrings;
use chat_types::event::SessionEvent;
use chat_types::message::Role;
use chat_types::wire::ChatRequest;
use chat_types::{ChatError, Result};

use async_trait::async_trait;

struct EchoGateway;

#[async_trait(?Send)]
impl GatewayPort for EchoGateway {
    async fn send(&self, req: ChatRequest) -> Result<String> {
        Ok(format!("echo: {} ({} prior)", req.message, req.chat_history.len()))
    }

    fn gateway_name(&self) -> &str {
        "echo"
    }
}

struct RejectingGateway;

#[async_trait(?Send)]
impl GatewayPort for RejectingGateway {
    async fn send(&self, _req: ChatRequest) -> Result<String> {
        Err(ChatError::Gateway { status: 401, message: "invalid key".to_string() })
    }

    fn gateway_name(&self) -> &str {
        "rejecting"
    }
}

fn session() -> (SessionController, EventBus) {
    let bus = EventBus::new();
    let session = SessionController::new(DisplayStrings::doctor(), bus.clone());
    session.set_credential("sk-test");
    (session, bus)
}

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(SessionEvent::RequestStarted);
    bus.emit(SessionEvent::Cleared);
    assert_eq!(bus.pending(), 2);
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

// ─── decode_reply Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn decode_reply_success_and_failure() {
    assert_eq!(decode_reply(true, 200, r#"{"response":"Hi"}"#).unwrap(), "Hi");
    let err = decode_reply(false, 401, r#"{"error":"invalid key"}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid key");
}

// ─── Session Tests ───────────────────────────────────────

#[wasm_bindgen_test]
async fn session_two_turns() {
    let (session, _bus) = session();

    let first = session.submit("hello", &EchoGateway).await;
    assert!(matches!(first, SubmitOutcome::Answered(ref m) if m.content == "echo: hello (0 prior)"));

    let second = session.submit("again", &EchoGateway).await;
    assert!(matches!(second, SubmitOutcome::Answered(ref m) if m.content == "echo: again (2 prior)"));

    let roles: Vec<Role> = session.history().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
}

#[wasm_bindgen_test]
async fn session_failure_appends_apology() {
    let (session, bus) = session();

    let outcome = session.submit("hello", &RejectingGateway).await;
    assert!(matches!(outcome, SubmitOutcome::Failed(ref m) if m.content.contains("invalid key")));
    assert!(!session.in_flight());

    let events = bus.drain();
    assert!(matches!(events.last(), Some(SessionEvent::RequestFinished)));
}

#[wasm_bindgen_test]
async fn session_ignores_blank_and_clears() {
    let (session, _bus) = session();

    assert_eq!(session.submit("   ", &EchoGateway).await, SubmitOutcome::Ignored);
    session.submit("hello", &EchoGateway).await;
    session.clear();
    assert!(session.history().is_empty());
    assert!(session.can_submit());
}
