//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the settings applied when an
//! [`EventEmitter`](crate::EventEmitter) is created.

/// Default per-event listener ceiling (effectively unbounded).
pub const DEFAULT_MAX_LISTENERS: usize = usize::MAX;

/// Configuration for a new emitter.
///
/// ## Field semantics
/// - `max_listeners`: initial per-event ceiling; may still be changed with
///   `set_max_listeners` until the first user listener is registered
/// - `prune_empty`: drop an event's collection when its last listener is removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Maximum number of listeners per event name.
    ///
    /// Reserved names (`newListener`, `removeListener`) are never limited.
    pub max_listeners: usize,

    /// Remove empty per-event collections eagerly.
    ///
    /// Off by default: an emptied event keeps its (empty) collection, which
    /// also keeps the capacity check active for its next registration.
    /// Reserved names are never pruned.
    pub prune_empty: bool,
}

impl EmitterConfig {
    /// Sets the ceiling.
    #[must_use]
    pub fn with_max_listeners(mut self, n: usize) -> Self {
        self.max_listeners = n;
        self
    }

    /// Enables or disables pruning of empty collections.
    #[must_use]
    pub fn with_prune_empty(mut self, prune: bool) -> Self {
        self.prune_empty = prune;
        self
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_listeners = usize::MAX` (unbounded)
    /// - `prune_empty = false` (keep empty collections)
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
            prune_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let cfg = EmitterConfig::default();
        assert_eq!(cfg.max_listeners, DEFAULT_MAX_LISTENERS);
        assert!(!cfg.prune_empty);
    }

    #[test]
    fn test_builder_helpers() {
        let cfg = EmitterConfig::default()
            .with_max_listeners(4)
            .with_prune_empty(true);
        assert_eq!(cfg.max_listeners, 4);
        assert!(cfg.prune_empty);
    }
}
