use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Events emitted by the session controller.
/// The transcript subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A message was appended to the history
    MessageAdded { message: Message },

    /// A request left for the gateway; the session is now in flight
    RequestStarted,

    /// The in-flight request resolved (answer or apology already appended)
    RequestFinished,

    /// History was reset by the user
    Cleared,
}
