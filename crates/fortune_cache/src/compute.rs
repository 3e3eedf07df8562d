//! Compute-on-miss over any [`CacheStore`].
//!
//! Cache trouble never changes the result: a failed read, an undecodable
//! payload or a failed write is logged and the value is computed anyway.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::store::CacheStore;

fn cached<T: DeserializeOwned, S: CacheStore + ?Sized>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "cache read failed, recomputing");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!(key, "cache hit");
            Some(value)
        }
        Err(e) => {
            warn!(key, error = %e, "stale cache payload, recomputing");
            if let Err(e) = store.delete(key) {
                warn!(key, error = %e, "cache delete failed");
            }
            None
        }
    }
}

fn store_value<T: Serialize, S: CacheStore + ?Sized>(store: &S, key: &str, value: &T, ttl: Duration) {
    let written = serde_json::to_string(value)
        .map_err(Into::into)
        .and_then(|raw| store.set(key, &raw, ttl));
    if let Err(e) = written {
        warn!(key, error = %e, "cache write failed");
    }
}

/// Cached value for `key`, or `compute()` stored with `ttl`.
pub fn get_or_compute<T, S, F>(store: &S, key: &str, ttl: Duration, compute: F) -> T
where
    T: Serialize + DeserializeOwned,
    S: CacheStore + ?Sized,
    F: FnOnce() -> T,
{
    if let Some(value) = cached(store, key) {
        return value;
    }
    let value = compute();
    store_value(store, key, &value, ttl);
    value
}

/// Like [`get_or_compute`] for fallible computations. Errors are returned
/// and never cached.
pub fn get_or_try_compute<T, E, S, F>(store: &S, key: &str, ttl: Duration, compute: F) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    S: CacheStore + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    if let Some(value) = cached(store, key) {
        return Ok(value);
    }
    let value = compute()?;
    store_value(store, key, &value, ttl);
    Ok(value)
}
