use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::ops::Bound;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{StoreError, StoreResult};
use crate::page::Page;
use crate::traits::OrderedStore;

/// In-memory, insertion-ordered store.
///
/// Values live in a `HashMap` for O(1) lookup. Each entry also carries a
/// sequence number handed out at insertion time, and a `BTreeMap` from
/// sequence number to key gives the insertion order. A cursor resolves to
/// its sequence number, so resuming a scan is a single range query.
///
/// Sequence numbers are never reused: a deleted key that comes back gets a
/// fresh, larger number and therefore sorts at the tail.
///
/// One `RwLock` guards both maps. Reads (`get`, `page`) share it; writes
/// (`set`, `update`, `delete`) take it exclusively. Values are cloned out.
pub struct InMemoryOrderedStore<K, V> {
    inner: RwLock<StoreState<K, V>>,
}

struct StoreState<K, V> {
    entries: HashMap<K, Slot<V>>,
    order: BTreeMap<u64, K>,
    next_seq: u64,
}

struct Slot<V> {
    seq: u64,
    value: V,
}

impl<K, V> Default for StoreState<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<K, V> InMemoryOrderedStore<K, V> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    // Every mutation validates before touching either map, so a guard
    // recovered from a poisoned lock still sees a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, StoreState<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for InMemoryOrderedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedStore<K, V> for InMemoryOrderedStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        let state = self.read();
        state.entries.get(key).map(|slot| slot.value.clone())
    }

    fn set(&self, key: K, value: V) -> StoreResult<()> {
        let mut state = self.write();
        if state.entries.contains_key(&key) {
            return Err(StoreError::KeyAlreadyPresent);
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.order.insert(seq, key.clone());
        state.entries.insert(key, Slot { seq, value });
        Ok(())
    }

    fn update(&self, key: &K, value: V) -> StoreResult<()> {
        let mut state = self.write();
        let slot = state.entries.get_mut(key).ok_or(StoreError::KeyAbsent)?;
        slot.value = value;
        Ok(())
    }

    fn delete(&self, key: &K) -> StoreResult<()> {
        let mut state = self.write();
        let slot = state.entries.remove(key).ok_or(StoreError::KeyAbsent)?;
        state.order.remove(&slot.seq);
        Ok(())
    }

    fn page(&self, last_key: Option<&K>, limit: usize) -> StoreResult<Page<K, V>> {
        let state = self.read();

        let start = match last_key {
            None => Bound::Unbounded,
            Some(key) => {
                let slot = state.entries.get(key).ok_or(StoreError::InvalidCursor)?;
                Bound::Excluded(slot.seq)
            }
        };

        // `order` and `entries` hold the same keys; every write updates both
        // under the same guard.
        debug_assert_eq!(state.order.len(), state.entries.len());
        let items: Vec<(K, V)> = state
            .order
            .range((start, Bound::Unbounded))
            .take(limit)
            .map(|(_, key)| (key.clone(), state.entries[key].value.clone()))
            .collect();

        // A short page means the scan hit the tail.
        let last_evaluated_key = if items.len() < limit {
            None
        } else {
            items.last().map(|(key, _)| key.clone())
        };

        Ok(Page {
            items,
            last_evaluated_key,
        })
    }

    fn len(&self) -> usize {
        self.read().entries.len()
    }

    fn contains(&self, key: &K) -> bool {
        self.read().entries.contains_key(key)
    }
}

impl<K, V> std::fmt::Debug for InMemoryOrderedStore<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("InMemoryOrderedStore")
            .field("entry_count", &state.entries.len())
            .field("next_seq", &state.next_seq)
            .finish()
    }
}
