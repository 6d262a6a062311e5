//! Emitter core: registry, configuration and dispatch.
//!
//! The public API from this module is [`EventEmitter`] and [`EmitterConfig`],
//! plus the reserved event names.
//!
//! Internal modules:
//! - [`emitter`]: the listener registry and all its operations;
//! - [`config`]: settings applied at construction;
//! - [`reserved`]: internal notification event names;
//! - [`dispatch`]: spawns handler invocations with panic isolation.

mod config;
mod dispatch;
mod emitter;
mod reserved;

pub use config::{DEFAULT_MAX_LISTENERS, EmitterConfig};
pub use emitter::EventEmitter;
pub use reserved::{NEW_LISTENER, REMOVE_LISTENER, RESERVED_EVENTS, is_reserved};
