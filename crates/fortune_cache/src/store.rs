//! Cache stores.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::error::CacheError;

/// Minimal key/value store with per-entry expiry.
///
/// Implementations must be shareable across threads; concurrent writes to
/// the same key are last-write-wins.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    fn delete(&self, key: &str) -> Result<(), CacheError>;
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entries; expired ones are not counted.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, e| e.expires_at > now);
    }
}

impl CacheStore for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        let hit = self
            .entries
            .get(key)
            .map(|e| (e.expires_at > now).then(|| e.value.clone()));
        match hit {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                self.entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        if ttl.is_zero() {
            self.entries.remove(key);
            return Ok(());
        }
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or_else(|| CacheError::Backend(format!("ttl out of range: {ttl:?}")))?;
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let c = MemoryCache::new();
        c.set("k", "v", Duration::from_secs(60)).unwrap();
        assert_eq!(c.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(c.len(), 1);
        c.delete("k").unwrap();
        assert_eq!(c.get("k").unwrap(), None);
    }

    #[test]
    fn last_write_wins() {
        let c = MemoryCache::new();
        c.set("k", "a", Duration::from_secs(60)).unwrap();
        c.set("k", "b", Duration::from_secs(60)).unwrap();
        assert_eq!(c.get("k").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn expired_entries_vanish() {
        let c = MemoryCache::new();
        c.set("k", "v", Duration::from_millis(1)).unwrap();
        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(c.get("k").unwrap(), None);
        assert!(c.is_empty());
    }

    #[test]
    fn zero_ttl_stores_nothing() {
        let c = MemoryCache::new();
        c.set("k", "v", Duration::ZERO).unwrap();
        assert_eq!(c.get("k").unwrap(), None);
    }

    #[test]
    fn purge_keeps_live() {
        let c = MemoryCache::new();
        c.set("old", "v", Duration::from_millis(1)).unwrap();
        c.set("new", "v", Duration::from_secs(60)).unwrap();
        std::thread::sleep(Duration::from_millis(10));
        c.purge_expired();
        assert_eq!(c.len(), 1);
        assert!(c.get("new").unwrap().is_some());
    }
}
