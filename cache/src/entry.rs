use std::collections::BTreeSet;

/// The set of labels attached to an entry.
pub type Tags = BTreeSet<String>;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
    pub tags: Tags,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V, tags: Tags) -> Self {
        Self { key, value, tags }
    }
}
