use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::id::{self, IdError};

/// Thread-safe in-memory store mapping id -> original_url.
///
/// All access goes through a single exclusive lock; reads and writes take it
/// for one operation at a time and it is never held across I/O. Entries are
/// only ever added (no expiry, no delete), so the map lives for the lifetime
/// of the process and is lost on shutdown.
#[derive(Clone, Debug, Default)]
pub struct UrlStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a mapping. Callers are responsible for picking an id
    /// that is not already taken; `create` is the caller that guarantees it.
    pub fn insert(&self, id: impl Into<String>, original_url: impl Into<String>) {
        self.lock().insert(id.into(), original_url.into());
    }

    /// Look up an id. Returns a clone of the original URL if present.
    pub fn lookup(&self, id: &str) -> Option<String> {
        self.lock().get(id).cloned()
    }

    /// Generate a fresh id and insert the mapping in one critical section.
    /// Holding the lock across the uniqueness check and the insert means two
    /// concurrent creates can never both pass the check with the same id.
    pub fn create(&self, original_url: &str) -> Result<String, IdError> {
        let mut map = self.lock();
        let id = id::generate_unique(&map)?;
        map.insert(id.clone(), original_url.to_owned());
        Ok(id)
    }

    /// Number of mappings currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().expect("store lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn insert_and_lookup() {
        let store = UrlStore::new();
        store.insert("abc123", "https://example.com");

        assert_eq!(store.lookup("abc123").as_deref(), Some("https://example.com"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn lookup_missing_returns_none() {
        let store = UrlStore::new();
        assert!(store.lookup("nope").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn create_adds_exactly_one_entry() {
        let store = UrlStore::new();

        let id = store.create("https://example.com").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup(&id).as_deref(), Some("https://example.com"));
    }

    #[test]
    fn concurrent_creates_yield_distinct_ids() {
        let store = UrlStore::new();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || store.create(&format!("https://example{i}.com")).unwrap())
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let unique: HashSet<&String> = ids.iter().collect();

        assert_eq!(unique.len(), ids.len(), "duplicate id issued");
        assert_eq!(store.len(), ids.len());
    }
}
