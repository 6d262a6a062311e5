//! # Event emitter - the listener registry.
//!
//! [`EventEmitter`] owns a two-level map `event name → listener id → listener`
//! and exposes registration, removal, introspection and fire-and-forget dispatch.
//!
//! ## Architecture
//! ```text
//! add_listener(event, h) ──► write lock ──► capacity check ──► insert ──► unlock
//!                                                                           │
//!                                          newListener handlers (awaited) ◄─┘
//!
//! emit(event, args) ──► read lock ──► snapshot ──► claim once-listeners (write lock)
//!                                                        │
//!                               ┌────────────────────────┼──────────────────────┐
//!                               ▼                        ▼                      ▼
//!                        tokio::spawn(h1)         tokio::spawn(h2)       tokio::spawn(hN)
//! ```
//!
//! ## Rules
//! - One `RwLock` guards the map, the ceiling and the policy flag; it is never
//!   held while user code runs.
//! - The first listener of an event is always accepted; later ones are checked
//!   against the ceiling. Reserved names are never checked.
//! - The ceiling can change only until a non-reserved event gets its first
//!   listener. The lock is irreversible.
//! - Registry notifications (`newListener`, `removeListener`) fire after the
//!   mutation is committed and the lock released. `add_listener`, `once`,
//!   `remove_listener` and `remove_all_listeners` await them; `emit` spawns the
//!   `removeListener` notifications of the one-shot listeners it consumed and
//!   does not wait. Mutations of reserved names are not announced.
//! - A one-shot listener runs at most once: concurrent dispatches race to
//!   remove it and only the winner invokes it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, trace, warn};

use crate::core::config::EmitterConfig;
use crate::core::dispatch::{self, Invocation};
use crate::core::reserved::{NEW_LISTENER, REMOVE_LISTENER, RESERVED_EVENTS, is_reserved};
use crate::error::EmitterError;
use crate::listeners::{Args, HandlerRef, Listener, ListenerId};

type Listeners = HashMap<ListenerId, Listener>;

/// Registry state guarded by a single lock.
#[derive(Debug)]
struct State {
    events: HashMap<String, Listeners>,
    max_listeners: usize,
    /// Set on the first registration against a non-reserved name.
    locked: bool,
}

#[derive(Debug)]
struct Inner {
    state: RwLock<State>,
    prune_empty: bool,
}

/// In-process event emitter.
///
/// Cheap to clone; clones share the same registry, so handlers may capture an
/// emitter and call back into it.
///
/// ## Example
/// ```rust
/// use gode::{args, Args, EventEmitter, SyncFn};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), gode::EmitterError> {
///     let emitter = EventEmitter::new();
///
///     let id = emitter
///         .add_listener("data", SyncFn::arc(|args: &Args| {
///             println!("got {:?}", args.get::<&str>(0));
///         }))
///         .await?;
///
///     emitter.emit("data", args!["hello"]).await;
///     emitter.remove_listener("data", &id).await;
///     assert_eq!(emitter.listener_count("data").await, 0);
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct EventEmitter {
    inner: Arc<Inner>,
}

impl EventEmitter {
    /// Creates an emitter with the default (unbounded) ceiling.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter from a configuration.
    ///
    /// Reserved names are pre-registered with empty collections. Supplying a
    /// ceiling here does not lock the capacity policy.
    pub fn with_config(cfg: EmitterConfig) -> Self {
        let events = RESERVED_EVENTS
            .iter()
            .map(|name| (name.to_string(), Listeners::new()))
            .collect();

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State {
                    events,
                    max_listeners: cfg.max_listeners,
                    locked: false,
                }),
                prune_empty: cfg.prune_empty,
            }),
        }
    }

    /// Registers `handler` for `event` and returns its id.
    ///
    /// ### Errors
    /// - [`EmitterError::EmptyEventName`] for `""`
    /// - [`EmitterError::CapacityExceeded`] when the event already holds `max_listeners` listeners
    pub async fn add_listener(
        &self,
        event: &str,
        handler: HandlerRef,
    ) -> Result<ListenerId, EmitterError> {
        self.register(event, Listener::new(handler)).await
    }

    /// Registers a one-shot handler: removed by the first dispatch that selects it.
    ///
    /// Same errors as [`add_listener`](Self::add_listener).
    pub async fn once(
        &self,
        event: &str,
        handler: HandlerRef,
    ) -> Result<ListenerId, EmitterError> {
        self.register(event, Listener::once(handler)).await
    }

    /// Removes a listener. Returns `false` (no-op) for an unknown event or id.
    pub async fn remove_listener(&self, event: &str, id: impl AsRef<str>) -> bool {
        let removed = {
            let mut state = self.inner.state.write().await;
            let removed = state
                .events
                .get_mut(event)
                .and_then(|listeners| listeners.remove(id.as_ref()));
            if removed.is_some() {
                self.prune_if_empty(&mut state, event);
            }
            removed
        };

        let Some(listener) = removed else {
            return false;
        };
        debug!(event, listener_id = %listener.id(), "listener removed");
        self.announce(REMOVE_LISTENER, event, listener.id()).await;
        true
    }

    /// Removes every listener of `event`, or of all non-reserved events for `None`.
    ///
    /// Returns the number of listeners removed. A `removeListener`
    /// notification is fired for each one. The capacity policy stays locked.
    pub async fn remove_all_listeners(&self, event: Option<&str>) -> usize {
        let removed: Vec<(String, ListenerId)> = {
            let mut state = self.inner.state.write().await;
            let mut removed = Vec::new();

            match event {
                Some(name) => {
                    if let Some(listeners) = state.events.get_mut(name) {
                        removed.extend(listeners.drain().map(|(id, _)| (name.to_string(), id)));
                    }
                    self.prune_if_empty(&mut state, name);
                }
                None => {
                    for (name, listeners) in state.events.iter_mut() {
                        if is_reserved(name) {
                            continue;
                        }
                        removed.extend(listeners.drain().map(|(id, _)| (name.clone(), id)));
                    }
                    if self.inner.prune_empty {
                        state
                            .events
                            .retain(|name, listeners| is_reserved(name) || !listeners.is_empty());
                    }
                }
            }
            removed
        };

        debug!(event = ?event, removed = removed.len(), "listeners cleared");
        for (name, id) in &removed {
            self.announce(REMOVE_LISTENER, name, id).await;
        }
        removed.len()
    }

    /// Invokes every listener of `event` with `args`, each in its own task.
    ///
    /// Returns the number of invocations scheduled, without waiting for any of
    /// them. An event with no listeners is a no-op returning `0`.
    ///
    /// The listener set is the one present when the snapshot is taken; a
    /// listener added or removed concurrently may or may not be included.
    /// Consumed one-shot listeners are announced on `removeListener` in
    /// detached tasks as well. Must be called from within a tokio runtime.
    pub async fn emit(&self, event: &str, args: Args) -> usize {
        let (selected, claimed) = self.take_targets(event).await;
        if selected.is_empty() {
            trace!(event, "emit without listeners");
            return 0;
        }

        let scheduled = selected.len();
        let name: Arc<str> = Arc::from(event);
        for listener in selected {
            let inv = Invocation {
                event: Arc::clone(&name),
                id: listener.id().clone(),
                handler: Arc::clone(listener.handler()),
            };
            dispatch::spawn_invocation(inv, args.clone());
        }
        trace!(event, scheduled, "emit scheduled handlers");

        for id in &claimed {
            self.announce_detached(REMOVE_LISTENER, event, id).await;
        }
        scheduled
    }

    /// Number of listeners registered for `event` (`0` if unknown).
    pub async fn listener_count(&self, event: &str) -> usize {
        let state = self.inner.state.read().await;
        state.events.get(event).map_or(0, HashMap::len)
    }

    /// Snapshot of the handlers registered for `event`.
    ///
    /// Calling a returned handler directly has no effect on the registry, even
    /// for one-shot listeners.
    pub async fn listeners(&self, event: &str) -> Vec<HandlerRef> {
        let state = self.inner.state.read().await;
        state
            .events
            .get(event)
            .map(|listeners| {
                listeners
                    .values()
                    .map(|l| Arc::clone(l.handler()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names of events that currently have at least one listener. Unordered.
    pub async fn event_names(&self) -> Vec<String> {
        let state = self.inner.state.read().await;
        state
            .events
            .iter()
            .filter(|(_, listeners)| !listeners.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Current per-event ceiling.
    pub async fn max_listeners(&self) -> usize {
        self.inner.state.read().await.max_listeners
    }

    /// Changes the per-event ceiling.
    ///
    /// ### Errors
    /// [`EmitterError::PolicyLocked`] once any non-reserved event has received a listener.
    pub async fn set_max_listeners(&self, n: usize) -> Result<(), EmitterError> {
        let mut state = self.inner.state.write().await;
        if state.locked {
            let err = EmitterError::PolicyLocked {
                limit: state.max_listeners,
            };
            warn!(
                requested = n,
                error = %err,
                label = err.as_label(),
                "max listeners change rejected"
            );
            return Err(err);
        }
        debug!(from = state.max_listeners, to = n, "max listeners changed");
        state.max_listeners = n;
        Ok(())
    }

    /// True once the ceiling can no longer change.
    pub async fn is_policy_locked(&self) -> bool {
        self.inner.state.read().await.locked
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    async fn register(
        &self,
        event: &str,
        mut listener: Listener,
    ) -> Result<ListenerId, EmitterError> {
        if event.is_empty() {
            let err = EmitterError::EmptyEventName;
            warn!(error = %err, label = err.as_label(), "listener rejected");
            return Err(err);
        }
        let reserved = is_reserved(event);
        let once = listener.is_once();

        let id = {
            let mut guard = self.inner.state.write().await;
            let state = &mut *guard;

            let id = match state.events.get_mut(event) {
                None => {
                    let id = listener.id().clone();
                    state
                        .events
                        .insert(event.to_string(), Listeners::from([(id.clone(), listener)]));
                    id
                }
                Some(listeners) => {
                    if !reserved && listeners.len() >= state.max_listeners {
                        let err = EmitterError::CapacityExceeded {
                            event: event.to_string(),
                            limit: state.max_listeners,
                        };
                        warn!(
                            event,
                            error = %err,
                            label = err.as_label(),
                            "listener rejected"
                        );
                        return Err(err);
                    }
                    while listeners.contains_key(listener.id()) {
                        listener.regenerate_id();
                    }
                    let id = listener.id().clone();
                    listeners.insert(id.clone(), listener);
                    id
                }
            };

            if !reserved && !state.locked {
                state.locked = true;
                debug!(event, limit = state.max_listeners, "capacity policy locked");
            }
            id
        };

        debug!(event, listener_id = %id, once, "listener added");
        self.announce(NEW_LISTENER, event, &id).await;
        Ok(id)
    }

    /// Selects the listeners a dispatch of `event` invokes.
    ///
    /// Returns the selection and the ids of the one-shot listeners this call
    /// claimed (removed from the registry).
    async fn take_targets(&self, event: &str) -> (Vec<Listener>, Vec<ListenerId>) {
        let snapshot: Vec<Listener> = {
            let state = self.inner.state.read().await;
            match state.events.get(event) {
                Some(listeners) => listeners.values().cloned().collect(),
                None => return (Vec::new(), Vec::new()),
            }
        };

        let (once, mut selected): (Vec<Listener>, Vec<Listener>) =
            snapshot.into_iter().partition(Listener::is_once);
        if once.is_empty() {
            return (selected, Vec::new());
        }

        let mut claimed = Vec::with_capacity(once.len());
        let mut state = self.inner.state.write().await;
        if let Some(listeners) = state.events.get_mut(event) {
            for listener in once {
                if listeners.remove(listener.id()).is_some() {
                    claimed.push(listener.id().clone());
                    selected.push(listener);
                }
            }
        }
        if !claimed.is_empty() {
            self.prune_if_empty(&mut state, event);
        }
        (selected, claimed)
    }

    /// Fires a registry notification about `event` and waits for its handlers.
    async fn announce(&self, notification: &'static str, event: &str, id: &ListenerId) {
        let invocations = self.notification_targets(notification, event).await;
        if invocations.is_empty() {
            return;
        }
        dispatch::run_inline(invocations, notification_args(event, id)).await;
    }

    /// Fires a registry notification about `event` without waiting for its handlers.
    async fn announce_detached(
        &self,
        notification: &'static str,
        event: &str,
        id: &ListenerId,
    ) {
        let invocations = self.notification_targets(notification, event).await;
        if invocations.is_empty() {
            return;
        }
        let args = notification_args(event, id);
        for inv in invocations {
            dispatch::spawn_invocation(inv, args.clone());
        }
    }

    /// Handlers of `notification` that a mutation of `event` should reach.
    async fn notification_targets(
        &self,
        notification: &'static str,
        event: &str,
    ) -> Vec<Invocation> {
        if is_reserved(event) {
            return Vec::new();
        }
        let (selected, _) = self.take_targets(notification).await;

        let name: Arc<str> = Arc::from(notification);
        selected
            .into_iter()
            .map(|l| Invocation {
                event: Arc::clone(&name),
                id: l.id().clone(),
                handler: Arc::clone(l.handler()),
            })
            .collect()
    }

    fn prune_if_empty(&self, state: &mut State, event: &str) {
        if !self.inner.prune_empty || is_reserved(event) {
            return;
        }
        if state.events.get(event).is_some_and(HashMap::is_empty) {
            state.events.remove(event);
            trace!(event, "empty listener collection pruned");
        }
    }
}

fn notification_args(event: &str, id: &ListenerId) -> Args {
    crate::args![event.to_string(), id.clone()]
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}
