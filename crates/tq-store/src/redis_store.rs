//! Redis backend.
//!
//! ```text
//! get(k)          → GET k
//! set(k, v, ttl)  → SET k v EX ttl*60
//! ```
//!
//! One blocking connection shared behind a mutex.  A dropped connection is
//! discarded and re-opened on the next call; the failing call itself is
//! reported, not retried.

use std::sync::{Mutex, MutexGuard};

use redis::{Client, Connection, RedisError, RedisResult};
use tracing::{debug, warn};

use crate::store::ttl_seconds;
use crate::{KeyValueStore, StoreError, StoreResult};

/// Default server used by the ticket-counter consumers.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

/// [`KeyValueStore`] over a Redis server.
pub struct RedisStore {
    client: Client,
    conn:   Mutex<Option<Connection>>,
}

impl RedisStore {
    /// Parse `url` without connecting.  The first store call connects.
    pub fn open(url: &str) -> StoreResult<Self> {
        let client = Client::open(url).map_err(backend)?;
        Ok(Self { client, conn: Mutex::new(None) })
    }

    /// Parse `url`, connect and `PING` the server.
    pub fn connect(url: &str) -> StoreResult<Self> {
        let store = Self::open(url)?;
        store.ping()?;
        debug!(url, "connected to redis");
        Ok(store)
    }

    pub fn ping(&self) -> StoreResult<()> {
        self.with_conn(|conn| redis::cmd("PING").query::<String>(conn).map(|_| ()))
    }

    fn with_conn<T>(&self, op: impl FnOnce(&mut Connection) -> RedisResult<T>) -> StoreResult<T> {
        let mut guard = self.lock()?;
        if guard.is_none() {
            *guard = Some(self.client.get_connection().map_err(backend)?);
        }
        let Some(conn) = guard.as_mut() else {
            return Err(StoreError::Backend("redis connection unavailable".into()));
        };
        op(conn).map_err(|e| {
            if e.is_connection_dropped() || e.is_io_error() {
                warn!(error = %e, "dropping redis connection");
                *guard = None;
            }
            backend(e)
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Option<Connection>>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Backend(format!("redis connection lock poisoned: {e}")))
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.with_conn(|conn| redis::cmd("GET").arg(key).query(conn))
    }

    fn set(&self, key: &str, value: &str, ttl_minutes: i64) -> StoreResult<()> {
        let secs = ttl_seconds(key, ttl_minutes)?;
        self.with_conn(|conn| {
            redis::cmd("SET").arg(key).arg(value).arg("EX").arg(secs).query::<()>(conn)
        })
    }
}

fn backend(e: RedisError) -> StoreError {
    StoreError::Backend(format!("redis: {e}"))
}
