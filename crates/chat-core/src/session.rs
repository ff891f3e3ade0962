//! Session controller: the conversation and its single-flight guard.
//!
//! A submission runs in three steps:
//! 1. accept: check the interaction gate, append the user message, enter flight
//! 2. send: await the gateway with no `RefCell` borrow held, so `clear` and
//!    credential edits are still serviced while the request is pending
//! 3. resolve: drop the reply if the session was cleared in the meantime,
//!    otherwise append the answer (or an apology) and leave flight

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::{
    Result,
    config::DisplayStrings,
    event::SessionEvent,
    message::Message,
    wire::ChatRequest,
};
use crate::event_bus::EventBus;
use crate::ports::GatewayPort;

/// How a call to [`SessionController::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Gate was closed or the text was blank; nothing changed
    Ignored,
    /// The gateway answered; carries the appended assistant message
    Answered(Message),
    /// The gateway failed; carries the appended apology
    Failed(Message),
    /// The session was cleared while the request was out; reply dropped
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Sending,
}

struct SessionInner {
    history: Vec<Message>,
    in_flight: bool,
    credential: String,
    /// Bumped by `clear`; replies from an older generation are stale
    generation: u64,
    strings: DisplayStrings,
}

/// Owner of the running conversation. Clone-cheap via Rc; clones share state.
#[derive(Clone)]
pub struct SessionController {
    inner: Rc<RefCell<SessionInner>>,
    event_bus: EventBus,
}

/// An accepted submission waiting for its gateway reply
struct Ticket {
    generation: u64,
    request: ChatRequest,
}

impl SessionController {
    pub fn new(strings: DisplayStrings, event_bus: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                history: Vec::new(),
                in_flight: false,
                credential: String::new(),
                generation: 0,
                strings,
            })),
            event_bus,
        }
    }

    pub fn set_credential(&self, credential: &str) {
        self.inner.borrow_mut().credential = credential.to_string();
    }

    pub fn credential(&self) -> String {
        self.inner.borrow().credential.clone()
    }

    /// Swap the copy text; affects apologies produced from now on.
    pub fn set_strings(&self, strings: DisplayStrings) {
        self.inner.borrow_mut().strings = strings;
    }

    /// Snapshot of the history, oldest first
    pub fn history(&self) -> Vec<Message> {
        self.inner.borrow().history.clone()
    }

    pub fn message_count(&self) -> usize {
        self.inner.borrow().history.len()
    }

    pub fn in_flight(&self) -> bool {
        self.inner.borrow().in_flight
    }

    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }

    pub fn state(&self) -> SessionState {
        if self.in_flight() {
            SessionState::Sending
        } else {
            SessionState::Idle
        }
    }

    /// The interaction gate: a credential is present and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        let inner = self.inner.borrow();
        !inner.credential.trim().is_empty() && !inner.in_flight
    }

    /// Send `text` to the gateway as the next user turn.
    ///
    /// Blank text or a closed gate makes this a silent no-op. Once accepted,
    /// the submission always resolves to exactly one assistant message unless
    /// `clear` runs first.
    pub async fn submit(&self, text: &str, gateway: &dyn GatewayPort) -> SubmitOutcome {
        let Some(ticket) = self.accept(text) else {
            return SubmitOutcome::Ignored;
        };

        let generation = ticket.generation;
        let result = gateway.send(ticket.request).await;
        if let Err(e) = &result {
            log::warn!("Gateway {} failed: {}", gateway.gateway_name(), e);
        }
        self.resolve(generation, result)
    }

    /// Reset the conversation, even mid-flight.
    pub fn clear(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.history.clear();
            inner.in_flight = false;
            inner.generation += 1;
            log::info!("Session cleared (generation {})", inner.generation);
        }
        self.event_bus.emit(SessionEvent::Cleared);
    }

    fn accept(&self, text: &str) -> Option<Ticket> {
        let text = text.trim();
        let (ticket, message) = {
            let mut inner = self.inner.borrow_mut();
            let credential = inner.credential.trim().to_string();
            if text.is_empty() || credential.is_empty() || inner.in_flight {
                log::debug!("Submission ignored (in_flight: {})", inner.in_flight);
                return None;
            }

            let request = ChatRequest {
                message: text.to_string(),
                api_key: credential,
                chat_history: inner.history.clone(),
            };
            let message = Message::user(text);
            inner.history.push(message.clone());
            inner.in_flight = true;
            log::info!(
                "Submission accepted ({} prior messages)",
                request.chat_history.len()
            );

            (Ticket { generation: inner.generation, request }, message)
        };

        self.event_bus.emit(SessionEvent::MessageAdded { message });
        self.event_bus.emit(SessionEvent::RequestStarted);
        Some(ticket)
    }

    fn resolve(&self, generation: u64, result: Result<String>) -> SubmitOutcome {
        let (outcome, message) = {
            let mut inner = self.inner.borrow_mut();
            if inner.generation != generation {
                log::debug!(
                    "Dropping reply for generation {} (now {})",
                    generation, inner.generation
                );
                return SubmitOutcome::Discarded;
            }

            let (message, answered) = match result {
                Ok(text) => (Message::assistant(text), true),
                Err(e) => (Message::assistant(inner.strings.apology(&e.to_string())), false),
            };
            inner.history.push(message.clone());
            inner.in_flight = false;

            let outcome = if answered {
                SubmitOutcome::Answered(message.clone())
            } else {
                SubmitOutcome::Failed(message.clone())
            };
            (outcome, message)
        };

        self.event_bus.emit(SessionEvent::MessageAdded { message });
        self.event_bus.emit(SessionEvent::RequestFinished);
        outcome
    }
}
