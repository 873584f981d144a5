use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{Cache, CfgDebug, Entry, Tags};

/// In-memory [`Cache`] guarded by a single lock.
///
/// The primary map and the tag -> keys index live behind the same `RwLock`, so a
/// reader can never see one updated without the other.
pub struct TaggedCache<K, V> {
    inner: RwLock<Inner<K, V>>,
}

struct Inner<K, V> {
    entries: HashMap<K, Entry<K, V>>,
    index: HashMap<String, HashSet<K>>,
}

impl<K, V> Cache for TaggedCache<K, V>
where
    K: Hash + Eq + Clone + CfgDebug,
    V: Clone + CfgDebug,
{
    type Key = K;
    type Value = V;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", fields(?key), skip_all, ret)
    )]
    fn get(&self, key: &Self::Key) -> Option<Entry<Self::Key, Self::Value>> {
        self.read().entries.get(key).cloned()
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", fields(?key, ?tags), skip_all)
    )]
    fn put(&self, key: Self::Key, value: Self::Value, tags: Tags) {
        self.write().insert(Entry::new(key, value, tags));
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", fields(?tags), skip_all, ret)
    )]
    fn invalidate(&self, tags: &Tags) -> usize {
        if tags.is_empty() {
            return 0;
        }

        self.write().invalidate(tags)
    }
}

impl<K, V> TaggedCache<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                index: HashMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    // No operation panics between two mutations of `Inner`, so the state behind a
    // poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Inner<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for TaggedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Inner<K, V>
where
    K: Hash + Eq + Clone,
{
    fn insert(&mut self, entry: Entry<K, V>) {
        let key = entry.key.clone();

        if let Some(previous) = self.entries.remove(&key) {
            let stale = previous
                .tags
                .difference(&entry.tags)
                .cloned()
                .collect::<Tags>();
            self.unlink(&key, &stale);
        }

        for tag in &entry.tags {
            self.index
                .entry(tag.clone())
                .or_default()
                .insert(key.clone());
        }

        self.entries.insert(key, entry);
    }

    fn invalidate(&mut self, tags: &Tags) -> usize {
        let mut removed = 0;

        for tag in tags {
            let Some(keys) = self.index.remove(tag) else {
                continue;
            };

            for key in keys {
                // a key matched by an earlier tag is already gone from this set
                if let Some(entry) = self.entries.remove(&key) {
                    self.unlink(&key, &entry.tags);
                    removed += 1;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(removed, remaining = self.entries.len(), "invalidated");

        removed
    }

    fn unlink(&mut self, key: &K, tags: &Tags) {
        for tag in tags {
            if let Some(keys) = self.index.get_mut(tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.index.remove(tag);
                }
            }
        }
    }
}
