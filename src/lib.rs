//! # gode
//!
//! **gode** is an in-process event emitter for async Rust.
//!
//! Callers register named handlers and later trigger every handler registered
//! for a name, passing an arbitrary argument list. Each handler invocation is
//! scheduled as its own tokio task: the emitter never waits for handlers and
//! handlers never wait for each other.
//!
//! ## Architecture
//! ```text
//!   add_listener / once / remove_listener            emit(event, args)
//!            │                                              │
//!            ▼                                              ▼
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  EventEmitter (Arc-shared, one RwLock)                               │
//! │  - events: name ──► { ListenerId ──► Listener { handler, once } }    │
//! │  - max_listeners (per event) + policy lock                           │
//! │  - reserved names: newListener, removeListener                       │
//! └──────┬───────────────────────────────────────────────┬───────────────┘
//!        │ after commit, awaited                         │ snapshot, fire-and-forget
//!        ▼                                               ▼
//!   newListener / removeListener handlers     tokio::spawn per handler
//!                                              ├─► handler1.call(args)
//!                                              ├─► handler2.call(args)
//!                                              └─► handlerN.call(args)
//! ```
//!
//! ## Capacity policy
//! ```text
//! ┌─────────────────────────┐  first listener on a    ┌──────────────────┐
//! │ policy open             │  non-reserved event     │ policy locked    │
//! │ set_max_listeners → Ok  │ ──────────────────────► │ set_max_listeners│
//! └─────────────────────────┘     (irreversible)      │   → PolicyLocked │
//!                                                     └──────────────────┘
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                      |
//! |-------------------|--------------------------------------------------------------|-----------------------------------------|
//! | **Registry**      | Register, remove, introspect listeners per event name.       | [`EventEmitter`]                        |
//! | **Handlers**      | Async or sync callbacks taking variadic opaque arguments.    | [`Handler`], [`HandlerFn`], [`SyncFn`]  |
//! | **Arguments**     | Cheaply clonable, typed-access argument lists.               | [`Args`], [`args!`]                     |
//! | **Errors**        | Typed errors for capacity and naming violations.             | [`EmitterError`]                        |
//! | **Configuration** | Initial ceiling and pruning of empty collections.            | [`EmitterConfig`]                       |
//!
//! ## Example
//! ```rust
//! use gode::{args, Args, EventEmitter, HandlerFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = EventEmitter::new();
//!     emitter.set_max_listeners(16).await?;
//!
//!     let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//!     emitter
//!         .add_listener("sum", HandlerFn::arc(move |args: Args| {
//!             let tx = tx.clone();
//!             async move {
//!                 let total: i32 = (0..args.len()).filter_map(|i| args.get::<i32>(i)).sum();
//!                 let _ = tx.send(total);
//!             }
//!         }))
//!         .await?;
//!
//!     emitter.emit("sum", args![1, 2, 3]).await;
//!     assert_eq!(rx.recv().await, Some(6));
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod listeners;

// ---- Public re-exports ----

pub use crate::core::{
    DEFAULT_MAX_LISTENERS, EmitterConfig, EventEmitter, NEW_LISTENER, REMOVE_LISTENER,
    RESERVED_EVENTS, is_reserved,
};
pub use error::EmitterError;
pub use listeners::{Arg, Args, Handler, HandlerFn, HandlerRef, ListenerId, SyncFn};
