//! Reserved (internal) event names.
//!
//! Reserved names carry registry notifications. They exist from construction
//! with empty collections, are never capacity-limited and never lock the
//! capacity policy.

/// Fired after a listener is added. Args: `(event: String, id: ListenerId)`.
pub const NEW_LISTENER: &str = "newListener";

/// Fired after a listener is removed. Args: `(event: String, id: ListenerId)`.
pub const REMOVE_LISTENER: &str = "removeListener";

/// All reserved names.
pub const RESERVED_EVENTS: [&str; 2] = [NEW_LISTENER, REMOVE_LISTENER];

/// True if `event` is a reserved name. Case-sensitive.
#[inline]
pub fn is_reserved(event: &str) -> bool {
    RESERVED_EVENTS.contains(&event)
}
