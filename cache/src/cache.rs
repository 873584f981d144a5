use crate::{Entry, Tags};

/// A key-value store whose entries can be dropped in bulk by tag.
///
/// Every method is a single atomic step with respect to every other call on the
/// same cache, so implementations must be safe to share across threads behind `&self`.
pub trait Cache {
    type Key;
    type Value;

    /// Returns an owned copy of the entry stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<Entry<Self::Key, Self::Value>>;

    /// Stores `value` under `key`, replacing both the value and the tags of any
    /// previous entry.
    fn put(&self, key: Self::Key, value: Self::Value, tags: Tags);

    /// Removes every entry carrying at least one of `tags` and returns how many
    /// entries were removed. An empty `tags` removes nothing.
    fn invalidate(&self, tags: &Tags) -> usize;
}
