//! Basic demo driver for AnyCache.
//!
//! Fills the cache with integer keys, then stores and reads back an entry
//! under a struct-typed key. Run with `cargo run --example basic`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anycache::AnyCache;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct User {
    name: String,
    age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Id(u32),
    User(User),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anycache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cache = AnyCache::new(10 * 1024 * 1024)?;

    for i in 1..1000 {
        cache.set(Key::Id(i), i.to_string());
    }
    info!(len = cache.len(), "cache populated");

    let user = User {
        name: "bradford".to_string(),
        age: 34,
    };
    cache.set(Key::User(user.clone()), "valid".to_string());

    match cache.get(&Key::User(user)) {
        Some(record) => info!(?record, "hit"),
        None => info!("miss"),
    }

    Ok(())
}
