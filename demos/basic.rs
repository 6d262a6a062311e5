//! # Basic emitter demo
//!
//! Registers a few handlers, watches registry notifications and dispatches
//! events concurrently.
//!
//! ## Run
//! ```bash
//! RUST_LOG=gode=debug cargo run --example basic
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use gode::{
    Args, EmitterConfig, EventEmitter, HandlerFn, ListenerId, NEW_LISTENER, SyncFn, args,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let emitter = EventEmitter::with_config(EmitterConfig::default().with_max_listeners(8));

    emitter
        .add_listener(
            NEW_LISTENER,
            SyncFn::arc(|args: &Args| {
                let event = args.get::<String>(0).map(String::as_str).unwrap_or("?");
                let id = args.get::<ListenerId>(1).map(ListenerId::as_str).unwrap_or("?");
                println!("[new-listener] event={event} id={id}");
            }),
        )
        .await?;

    let total = Arc::new(AtomicU64::new(0));
    let t = Arc::clone(&total);
    let adder = emitter
        .add_listener(
            "order",
            HandlerFn::arc(move |args: Args| {
                let t = Arc::clone(&t);
                async move {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    if let Some(amount) = args.get::<u64>(1) {
                        t.fetch_add(*amount, Ordering::SeqCst);
                    }
                }
            }),
        )
        .await?;

    emitter
        .add_listener(
            "order",
            SyncFn::arc(|args: &Args| {
                println!(
                    "[order] id={:?} amount={:?}",
                    args.get::<&str>(0),
                    args.get::<u64>(1)
                );
            }),
        )
        .await?;

    emitter
        .once(
            "shutdown",
            SyncFn::arc(|_: &Args| println!("[shutdown] handled once")),
        )
        .await?;

    for (i, amount) in [120_u64, 80, 300].into_iter().enumerate() {
        let id = ["A-1", "A-2", "A-3"][i];
        let scheduled = emitter.emit("order", args![id, amount]).await;
        println!("[emit] order {id} scheduled={scheduled}");
    }

    emitter.emit("shutdown", args![]).await;
    emitter.emit("shutdown", args![]).await;

    // handlers run detached; give them a moment before reading the total
    tokio::time::sleep(Duration::from_millis(100)).await;
    println!("total={}", total.load(Ordering::SeqCst));

    emitter.remove_listener("order", &adder).await;
    println!(
        "events={:?} order_listeners={}",
        emitter.event_names().await,
        emitter.listener_count("order").await
    );

    if let Err(e) = emitter.set_max_listeners(64).await {
        println!("[policy] {} ({})", e, e.as_label());
    }
    Ok(())
}
