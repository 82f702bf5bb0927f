//! Generation-tagged memoization.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

/// A cache that forgets everything when the registry generation moves on.
///
/// Every read and write names the generation it was computed against. An
/// entry from an older generation is never returned, so a cached result can
/// not outlive the definition that produced it.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    inner: Mutex<Entries<K, V>>,
}

#[derive(Debug)]
struct Entries<K, V> {
    generation: u64,
    values: HashMap<K, V>,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(Entries {
                generation: 0,
                values: HashMap::new(),
            }),
        }
    }

    pub(crate) fn get(&self, generation: u64, key: &K) -> Option<V> {
        let entries = self.entries(generation);
        entries.values.get(key).cloned()
    }

    pub(crate) fn insert(&self, generation: u64, key: K, value: V) {
        let mut entries = self.entries(generation);
        entries.values.insert(key, value);
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().values.len()
    }

    fn entries(&self, generation: u64) -> MutexGuard<'_, Entries<K, V>> {
        let mut entries = self.lock();
        if entries.generation != generation {
            log::trace!(
                "memo invalidated: generation {} -> {}, {} entries dropped",
                entries.generation,
                generation,
                entries.values.len()
            );
            entries.values.clear();
            entries.generation = generation;
        }
        entries
    }

    fn lock(&self) -> MutexGuard<'_, Entries<K, V>> {
        // A poisoned lock still holds a consistent map.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
