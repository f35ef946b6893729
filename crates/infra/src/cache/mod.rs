//! In-memory session cache
//!
//! Implements the `SessionCache` port. In the deployed client this role
//! is played by the browser's session storage; here it is a plain
//! key-value map guarded by a read-write lock so tests and tools can
//! share one instance across tasks.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;
use stagelink_core::SessionCache;

/// Thread-safe in-memory implementation of the session cache
#[derive(Default)]
pub struct InMemorySessionCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemorySessionCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl SessionCache for InMemorySessionCache {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: Value) {
        self.entries.write().insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stagelink_domain::SESSION_CACHE_KEY;

    use super::*;

    #[test]
    fn test_round_trip() {
        let cache = InMemorySessionCache::new();
        assert!(cache.get(SESSION_CACHE_KEY).is_none());

        cache.put(SESSION_CACHE_KEY, json!({ "name": "Asha Rao" }));
        let cached = cache.get(SESSION_CACHE_KEY).expect("cached");
        assert_eq!(cached["name"], "Asha Rao");
    }

    #[test]
    fn test_put_replaces_previous_value() {
        let cache = InMemorySessionCache::new();
        cache.put("k", json!(1));
        cache.put("k", json!(2));
        assert_eq!(cache.get("k"), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = InMemorySessionCache::new();
        cache.put("k", json!(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
