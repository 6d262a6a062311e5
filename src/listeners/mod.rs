//! # Listener building blocks.
//!
//! This module provides the types a caller hands to, or receives from, the emitter:
//! - [`Handler`] - trait for implementing async event handlers
//! - [`HandlerFn`] / [`SyncFn`] - closure-backed handlers
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler>`)
//! - [`Args`] / [`Arg`] - variadic opaque arguments (see the [`args!`](crate::args) macro)
//! - [`ListenerId`] - unique registration token

mod args;
mod handler;
mod id;
mod listener;

pub use args::{Arg, Args};
pub use handler::{Handler, HandlerFn, HandlerRef, SyncFn};
pub use id::ListenerId;
pub(crate) use listener::Listener;
