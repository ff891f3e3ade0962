//! Queue of session events, produced by the controller and consumed by the
//! transcript once per frame.
//!
//! Everything runs on the browser main thread, so the queue is an
//! `Rc<RefCell<VecDeque>>` rather than a channel.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::SessionEvent;

/// Shared handle to the event queue. Clones see the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next drain.
    pub fn emit(&self, event: SessionEvent) {
        log::trace!("session event: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Number of events waiting to be drained
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }
}
