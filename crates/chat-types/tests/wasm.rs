//! WASM-target tests for chat-types.
//!
//! Exercises the parts that touch browser-backed APIs (uuid randomness,
//! chrono's JS clock) under wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use chat_types::message::*;
use chat_types::wire::*;
use chat_types::config::*;

#[wasm_bindgen_test]
fn message_has_id_and_timestamp() {
    let a = Message::user("Hello");
    let b = Message::assistant("Hi");
    assert_eq!(a.role, Role::User);
    assert_ne!(a.id, b.id);
    assert!(b.created_at >= a.created_at);
}

#[wasm_bindgen_test]
fn chat_request_serializes_history() {
    let req = ChatRequest {
        message: "next".to_string(),
        api_key: "sk-test".to_string(),
        chat_history: vec![Message::user("hello"), Message::assistant("Hi there")],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["chat_history"][1]["role"], "assistant");
    assert!(value["chat_history"][0]["timestamp"].is_string());
}

#[wasm_bindgen_test]
fn persona_strings() {
    assert_eq!(ClientConfig::default().persona.strings(), DisplayStrings::doctor());
    assert!(Persona::General.strings().apology("x").contains("Error: x."));
}
