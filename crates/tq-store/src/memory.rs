//! In-process TTL store.
//!
//! Entries expire lazily: an expired entry is treated as absent by `get` and
//! physically removed on the next read or [`purge_expired`] sweep.  Every
//! `get`/`set` takes the internal lock once, so single operations are
//! atomic but a read-then-write sequence is not.
//!
//! [`purge_expired`]: InMemoryStore::purge_expired

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::trace;

use crate::store::ttl_seconds;
use crate::{KeyValueStore, StoreError, StoreResult};

/// A live entry, as returned by [`InMemoryStore::inspect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub value:       String,
    /// TTL passed to the write that produced this entry.
    pub ttl_minutes: i64,
    pub expires_at:  Instant,
}

/// `HashMap`-backed [`KeyValueStore`] guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, StoredEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live entry for `key`, including the TTL it was written with.
    pub fn inspect(&self, key: &str) -> StoreResult<Option<StoredEntry>> {
        let now = Instant::now();
        let entries = self.lock()?;
        Ok(entries.get(key).filter(|e| e.expires_at > now).cloned())
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> StoreResult<usize> {
        let now = Instant::now();
        Ok(self.lock()?.values().filter(|e| e.expires_at > now).count())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// All live `(key, value)` pairs, sorted by key.
    pub fn snapshot(&self) -> StoreResult<Vec<(String, String)>> {
        let now = Instant::now();
        let mut pairs: Vec<(String, String)> = self
            .lock()?
            .iter()
            .filter(|(_, e)| e.expires_at > now)
            .map(|(k, e)| (k.clone(), e.value.clone()))
            .collect();
        pairs.sort_unstable();
        Ok(pairs)
    }

    /// Drop every expired entry.  Returns how many were removed.
    pub fn purge_expired(&self) -> StoreResult<usize> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        Ok(before - entries.len())
    }

    /// Write an entry with an explicit expiry instant.  Lets tests place
    /// entries that are already past their deadline.
    pub fn set_expiring_at(&self, key: &str, value: &str, expires_at: Instant) -> StoreResult<()> {
        self.lock()?.insert(
            key.to_owned(),
            StoredEntry {
                value:       value.to_owned(),
                ttl_minutes: 0,
                expires_at,
            },
        );
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, HashMap<String, StoredEntry>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Backend(format!("in-memory store lock poisoned: {e}")))
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(e) if e.expires_at > now => Ok(Some(e.value.clone())),
            Some(_) => {
                trace!(key, "expired on read");
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl_minutes: i64) -> StoreResult<()> {
        let ttl = Duration::from_secs(ttl_seconds(key, ttl_minutes)?);
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| StoreError::InvalidTtl { key: key.to_owned(), ttl_minutes })?;
        self.lock()?.insert(
            key.to_owned(),
            StoredEntry {
                value: value.to_owned(),
                ttl_minutes,
                expires_at,
            },
        );
        Ok(())
    }
}
