//! # Handler abstraction and closure-backed implementations.
//!
//! This module defines the [`Handler`] trait and two adapters:
//! - [`HandlerFn`] wraps `Fn(Args) -> impl Future<Output = ()>`; a fresh future per call.
//! - [`SyncFn`] wraps a plain `Fn(&Args)` for handlers that never await.
//!
//! The shared handle type is [`HandlerRef`], an `Arc<dyn Handler>`.
//!
//! ## Concurrency semantics
//! A handler may be invoked concurrently with itself (two dispatches of the
//! same event) and with any other handler. Shared state must be synchronized
//! by the handler (`Arc<Mutex<..>>`, atomics, channels).
//!
//! ## Example
//! ```rust
//! use gode::{Args, HandlerFn, HandlerRef, SyncFn};
//!
//! let h: HandlerRef = HandlerFn::arc(|args: Args| async move {
//!     let _ = args.get::<u32>(0);
//! });
//! let s: HandlerRef = SyncFn::arc(|args: &Args| {
//!     let _ = args.len();
//! });
//! # let _ = (h, s);
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use super::args::Args;

/// Shared handle to a handler.
pub type HandlerRef = Arc<dyn Handler>;

/// # Event handler.
///
/// Takes the dispatch arguments and returns nothing. Return values and panics
/// never reach the emitter.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use gode::{Args, Handler};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Handler for Audit {
///     async fn call(&self, args: Args) {
///         // write audit record...
///         let _ = args;
///     }
/// }
/// ```
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Handles one invocation.
    async fn call(&self, args: Args);
}

/// Function-backed handler: the closure *creates* a new future per call.
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a [`HandlerRef`].
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerFn")
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Args) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn call(&self, args: Args) {
        (self.f)(args).await
    }
}

/// Handler backed by a synchronous closure.
pub struct SyncFn<F> {
    f: F,
}

impl<F> SyncFn<F> {
    /// Creates a new synchronous handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F> fmt::Debug for SyncFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SyncFn")
    }
}

#[async_trait]
impl<F> Handler for SyncFn<F>
where
    F: Fn(&Args) + Send + Sync + 'static,
{
    async fn call(&self, args: Args) {
        (self.f)(&args)
    }
}
