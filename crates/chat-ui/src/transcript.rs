//! Transcript renderer: a projection of session events into display entries.
//!
//! The transcript never looks at the session directly. It appends one entry
//! per `MessageAdded`, shows a transient loading indicator between
//! `RequestStarted` and `RequestFinished`, and empties itself on `Cleared`.

use chrono::{DateTime, Local, TimeZone, Utc};
use chat_types::{
    config::DisplayStrings,
    event::SessionEvent,
    message::{Message, Role},
};

/// One rendered message
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: String,
    pub role: Role,
    pub label: String,
    /// Literal text; shown verbatim, never parsed as markup
    pub text: String,
    /// Local `HH:MM`
    pub time_label: String,
}

/// The "in progress" row shown while a request is in flight
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingIndicator {
    pub caption: String,
}

#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    loading: Option<LoadingIndicator>,
    scroll_pending: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of session events into the transcript.
    pub fn apply(&mut self, events: Vec<SessionEvent>, strings: &DisplayStrings) {
        for event in events {
            match event {
                SessionEvent::MessageAdded { message } => {
                    self.entries.push(render_entry(&message, strings));
                    self.scroll_pending = true;
                }
                SessionEvent::RequestStarted => {
                    self.loading = Some(LoadingIndicator {
                        caption: strings.loading_caption.clone(),
                    });
                    self.scroll_pending = true;
                }
                SessionEvent::RequestFinished => {
                    self.loading = None;
                }
                SessionEvent::Cleared => {
                    self.entries.clear();
                    self.loading = None;
                    self.scroll_pending = false;
                }
            }
        }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn loading(&self) -> Option<&LoadingIndicator> {
        self.loading.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the welcome panel should take the transcript's place
    pub fn shows_welcome(&self) -> bool {
        self.entries.is_empty() && self.loading.is_none()
    }

    /// Returns true once after each append; the panel scrolls to the bottom.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

pub fn render_entry(message: &Message, strings: &DisplayStrings) -> TranscriptEntry {
    TranscriptEntry {
        id: message.id.clone(),
        role: message.role,
        label: strings.role_label(message.role).to_string(),
        text: sanitize(&message.content),
        time_label: time_label(&message.created_at),
    }
}

/// Strip control characters (other than newline and tab) that would render
/// as replacement boxes. Markup-significant characters pass through as-is.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

pub fn time_label(ts: &DateTime<Utc>) -> String {
    time_label_in(ts, &Local)
}

pub fn time_label_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%H:%M").to_string()
}
