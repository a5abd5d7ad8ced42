//! The `KeyValueStore` trait implemented by every backend.

use std::sync::Arc;

use crate::{StoreError, StoreResult};

/// String-keyed, string-valued store with per-key expiry.
///
/// The capability set is deliberately narrow: a plain read and a write that
/// replaces the value and its TTL.  There is no compare-and-swap, so a
/// read followed by a write is two independent round-trips and concurrent
/// writers may overwrite each other.
///
/// Implementations must be `Send + Sync`; the simulator shares one store
/// across all job threads.
pub trait KeyValueStore: Send + Sync {
    /// Current value of `key`, or `None` if it is absent or expired.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace `key` with `value`, expiring `ttl_minutes` from now.
    fn set(&self, key: &str, value: &str, ttl_minutes: i64) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    #[inline]
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    #[inline]
    fn set(&self, key: &str, value: &str, ttl_minutes: i64) -> StoreResult<()> {
        (**self).set(key, value, ttl_minutes)
    }
}

/// Validate `ttl_minutes` and convert it to whole seconds.
///
/// Non-positive TTLs and TTLs whose second count does not fit in a `u64`
/// are rejected with [`StoreError::InvalidTtl`].
pub fn ttl_seconds(key: &str, ttl_minutes: i64) -> StoreResult<u64> {
    u64::try_from(ttl_minutes)
        .ok()
        .filter(|&m| m > 0)
        .and_then(|m| m.checked_mul(60))
        .ok_or_else(|| StoreError::InvalidTtl { key: key.to_owned(), ttl_minutes })
}
