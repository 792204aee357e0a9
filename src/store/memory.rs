use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;

/// In-process store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        MemoryStore {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_memory_get_set() {
        let s = MemoryStore::new();
        assert!(s.get("views_1").is_none());
        s.set("views_1", "3");
        assert_eq!(s.get("views_1"), Some("3".to_string()));
        s.set("views_1", "4");
        assert_eq!(s.get("views_1"), Some("4".to_string()));
    }

    #[test]
    fn test_memory_seeded() {
        let s = MemoryStore::with_entries([("views_2", "10")]);
        assert_eq!(s.get("views_2").as_deref(), Some("10"));
    }
}
