//! `tq-store`: the counter store seam.
//!
//! # Crate layout
//!
//! | Module          | Contents                                          |
//! |-----------------|---------------------------------------------------|
//! | [`store`]       | `KeyValueStore` trait, `ttl_seconds`              |
//! | [`memory`]      | `InMemoryStore`, `StoredEntry`                    |
//! | `redis_store`   | `RedisStore` (feature `redis`)                    |
//! | [`error`]       | `StoreError`, `StoreResult<T>`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `redis` | Adds `RedisStore`, backed by the `redis` crate.           |
//!
//! The simulator only ever sees the trait.  `InMemoryStore` backs tests and
//! local runs; `RedisStore` makes the counters visible to other processes.

pub mod error;
pub mod memory;
pub mod store;

#[cfg(feature = "redis")]
pub mod redis_store;


pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryStore, StoredEntry};
pub use store::{KeyValueStore, ttl_seconds};

#[cfg(feature = "redis")]
pub use redis_store::{DEFAULT_REDIS_URL, RedisStore};
