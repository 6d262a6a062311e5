//! # Listener identifiers.
//!
//! Every registration call draws a fresh random (v4) UUID. The id is kept in
//! its canonical hyphenated string form so callers can store, log and compare
//! it without depending on `uuid` themselves.

use std::borrow::Borrow;
use std::fmt;

use uuid::Uuid;

/// Opaque token returned by registration; pass it back to remove the listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(String);

impl ListenerId {
    /// Draws a new, globally unique identifier.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ListenerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry look ids up by `&str`.
impl Borrow<str> for ListenerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<ListenerId> for String {
    fn from(id: ListenerId) -> Self {
        id.0
    }
}
