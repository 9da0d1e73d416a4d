//! Bounded memoization of similarity vectors keyed by exact profile text.

use std::sync::{Arc, Mutex};

use indexmap::IndexMap;

/// Least-recently-used memo table for computed similarity vectors.
///
/// Keys are the exact profile text, not the structured profile. The cache
/// is a pure latency optimization: hits return the vector computed earlier
/// within the life of one fitted snapshot, and the whole table is created
/// empty alongside each new snapshot, so no entry can outlive the model
/// that produced it.
///
/// Entries are kept in recency order: least recently used at the front,
/// most recently used at the back.
#[derive(Debug)]
pub struct QueryCache {
    capacity: usize,
    entries: Mutex<IndexMap<String, Arc<Vec<f32>>>>,
}

impl QueryCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::new()),
        }
    }

    /// Fetch a previously computed vector, marking it most recently used.
    pub fn get(&self, profile_text: &str) -> Option<Arc<Vec<f32>>> {
        let mut entries = self.lock_entries();
        let hit = entries.shift_remove(profile_text)?;
        entries.insert(profile_text.to_string(), Arc::clone(&hit));
        Some(hit)
    }

    /// Insert a freshly computed vector, evicting from the least recently
    /// used end once the table is full.
    pub fn insert(&self, profile_text: String, scores: Arc<Vec<f32>>) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock_entries();
        entries.shift_remove(&profile_text);
        entries.insert(profile_text, scores);
        while entries.len() > self.capacity {
            entries.shift_remove_index(0);
        }
    }

    pub fn len(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_entries().is_empty()
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, IndexMap<String, Arc<Vec<f32>>>> {
        // a poisoned lock only means another query panicked mid-insert;
        // the map itself is still structurally sound
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
