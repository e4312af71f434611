use crate::error::StoreResult;
use crate::page::Page;

/// Insertion-ordered associative store.
///
/// All implementations must satisfy these invariants:
/// - The keys reachable through `get` are exactly the keys reachable through
///   `page` scans.
/// - `set` appends at the tail; `update` keeps the existing position.
/// - `delete` removes the position as well as the value. Re-inserting the
///   same key later appends it at the then-current tail.
/// - Each call is atomic: a failed `set`/`update`/`delete` leaves the store
///   untouched.
/// - `page` observes one consistent state for its whole scan.
pub trait OrderedStore<K, V>: Send + Sync {
    /// Look up the value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    fn get(&self, key: &K) -> Option<V>;

    /// Insert a new entry at the tail of the order.
    ///
    /// Fails with [`StoreError::KeyAlreadyPresent`](crate::StoreError::KeyAlreadyPresent)
    /// if `key` is already stored. This is not an upsert.
    fn set(&self, key: K, value: V) -> StoreResult<()>;

    /// Replace the value of an existing entry without moving it.
    ///
    /// Fails with [`StoreError::KeyAbsent`](crate::StoreError::KeyAbsent) if
    /// `key` is not stored.
    fn update(&self, key: &K, value: V) -> StoreResult<()>;

    /// Remove an entry and its position.
    ///
    /// Fails with [`StoreError::KeyAbsent`](crate::StoreError::KeyAbsent) if
    /// `key` is not stored.
    fn delete(&self, key: &K) -> StoreResult<()>;

    /// Return up to `limit` consecutive entries in insertion order.
    ///
    /// With `last_key == None` the page starts at, and includes, the oldest
    /// entry. With `Some(k)` the page starts right after `k`; an unknown `k`
    /// fails with [`StoreError::InvalidCursor`](crate::StoreError::InvalidCursor).
    ///
    /// See [`Page::last_evaluated_key`] for the returned cursor.
    fn page(&self, last_key: Option<&K>, limit: usize) -> StoreResult<Page<K, V>>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `key` is stored.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Collect every entry by following cursors `limit` entries at a time.
    ///
    /// Each page is a separate read, so writers may interleave between pages.
    fn scan_all(&self, limit: usize) -> StoreResult<Vec<(K, V)>>
    where
        K: Clone,
    {
        let limit = limit.max(1);
        let mut out = Vec::new();
        let mut cursor: Option<K> = None;
        loop {
            let page = self.page(cursor.as_ref(), limit)?;
            cursor = page.last_evaluated_key.clone();
            out.extend(page.items);
            if cursor.is_none() {
                return Ok(out);
            }
        }
    }
}
