//! Registered listener record.

use std::fmt;

use super::handler::HandlerRef;
use super::id::ListenerId;

/// A handler as stored by the emitter: the handler itself, its id and the one-shot flag.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    handler: HandlerRef,
    once: bool,
}

impl Listener {
    /// Creates a persistent listener with a fresh id.
    pub(crate) fn new(handler: HandlerRef) -> Self {
        Self {
            id: ListenerId::generate(),
            handler,
            once: false,
        }
    }

    /// Creates a one-shot listener with a fresh id.
    pub(crate) fn once(handler: HandlerRef) -> Self {
        Self {
            once: true,
            ..Self::new(handler)
        }
    }

    /// Draws a new id; used only on the (practically impossible) collision.
    pub(crate) fn regenerate_id(&mut self) {
        self.id = ListenerId::generate();
    }

    /// Listener identifier.
    pub fn id(&self) -> &ListenerId {
        &self.id
    }

    /// Shared handle to the handler.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// True if the listener is removed after its first dispatch.
    pub fn is_once(&self) -> bool {
        self.once
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}
