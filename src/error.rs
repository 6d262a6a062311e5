//! Error types returned by the emitter.
//!
//! Registration and capacity changes are the only fallible operations.
//! Everything else (removal, dispatch, introspection) is total and answers
//! unknown names or ids with an empty/zero result.
//!
//! [`EmitterError::as_label`] gives every variant a stable label for logs.

use thiserror::Error;

/// # Errors produced by the [`EventEmitter`](crate::EventEmitter).
///
/// Both capacity variants represent programmer misuse: the ceiling is meant to
/// be sized once at startup, before any real listener is registered.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// The event already holds `limit` listeners.
    #[error("listener limit {limit} reached for event {event:?}")]
    CapacityExceeded {
        /// Event name the registration targeted.
        event: String,
        /// The configured per-event ceiling.
        limit: usize,
    },

    /// `set_max_listeners` was called after a user event received its first listener.
    #[error("max listeners is locked at {limit}; a listener was already registered")]
    PolicyLocked {
        /// The ceiling that stays in effect.
        limit: usize,
    },

    /// Registration with an empty event name.
    #[error("event name must not be empty")]
    EmptyEventName,
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use gode::EmitterError;
    ///
    /// let err = EmitterError::PolicyLocked { limit: 8 };
    /// assert_eq!(err.as_label(), "emitter_policy_locked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::CapacityExceeded { .. } => "emitter_capacity_exceeded",
            EmitterError::PolicyLocked { .. } => "emitter_policy_locked",
            EmitterError::EmptyEventName => "emitter_empty_event_name",
        }
    }
}
