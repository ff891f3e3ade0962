//! UI-level state that drives rendering.
//! The transcript is a projection of the session, updated each frame by
//! draining the EventBus; the rest is form state owned by the panels.

use chat_types::{config::DisplayStrings, event::SessionEvent};
use crate::transcript::Transcript;

/// State visible to UI panels
pub struct UiState {
    pub transcript: Transcript,
    /// Message field content
    pub input_text: String,
    /// Credential field content; pushed into the session on every edit
    pub credential_input: String,
    /// Show the credential in clear text instead of masking it
    pub show_credential: bool,
    /// Whether the settings region is expanded
    pub show_settings: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            input_text: String::new(),
            credential_input: String::new(),
            show_credential: false,
            show_settings: true,
        }
    }

    /// Process events from the EventBus and update the transcript
    pub fn process_events(&mut self, events: Vec<SessionEvent>, strings: &DisplayStrings) {
        self.transcript.apply(events, strings);
    }

    pub fn has_credential(&self) -> bool {
        !self.credential_input.trim().is_empty()
    }

    /// Hint shown in the empty message field
    pub fn placeholder<'a>(&self, strings: &'a DisplayStrings) -> &'a str {
        if self.has_credential() {
            &strings.placeholder_ready
        } else {
            &strings.placeholder_needs_key
        }
    }

    /// Send is offered only when the gate is open and there is text to send.
    pub fn can_send(&self, gate_open: bool) -> bool {
        gate_open && !self.input_text.trim().is_empty()
    }

    /// Take the trimmed message out of the input field.
    pub fn take_input(&mut self) -> String {
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        text
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
