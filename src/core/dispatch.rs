//! # Handler invocation with panic isolation.
//!
//! Two ways to run a selected set of handlers:
//! - [`spawn_invocation`]: one independent tokio task per handler (regular dispatch)
//! - [`run_inline`]: all handlers concurrently, awaited by the caller (registry notifications)
//!
//! ```text
//! emit(event, args)
//!     │                    (Args clone = Arc bump)
//!     ├──► tokio::spawn ──► handler1.call(args)
//!     │                        └──► panic → warn!, task ends
//!     ├──► tokio::spawn ──► handler2.call(args)
//!     └──► tokio::spawn ──► handlerN.call(args)
//! ```
//!
//! ## Rules
//! - **No ordering**: sibling invocations are not ordered relative to each other
//! - **Isolation**: a panicking handler does not affect the emitter or its siblings
//! - **No waiting**: `spawn_invocation` returns as soon as the task is scheduled
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a handler panics while holding a lock on state it shares with other handlers.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::listeners::{Args, HandlerRef, ListenerId};

/// One handler selected by a dispatch.
pub(crate) struct Invocation {
    pub(crate) event: Arc<str>,
    pub(crate) id: ListenerId,
    pub(crate) handler: HandlerRef,
}

/// Schedules one invocation as an independent task.
pub(crate) fn spawn_invocation(inv: Invocation, args: Args) -> JoinHandle<()> {
    tokio::spawn(run_isolated(inv, args))
}

/// Runs all invocations concurrently and waits for every one of them.
pub(crate) async fn run_inline(invocations: Vec<Invocation>, args: Args) {
    join_all(
        invocations
            .into_iter()
            .map(|inv| run_isolated(inv, args.clone())),
    )
    .await;
}

async fn run_isolated(inv: Invocation, args: Args) {
    let fut = inv.handler.call(args);

    if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
        warn!(
            event = %inv.event,
            listener_id = %inv.id,
            info = %panic_info(&*panic_err),
            "handler panicked"
        );
    }
}

fn panic_info(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
