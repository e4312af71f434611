/// One forward page of a keyset scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<K, V> {
    /// Entries in insertion order.
    pub items: Vec<(K, V)>,
    /// Cursor for the next call to [`OrderedStore::page`](crate::OrderedStore::page).
    ///
    /// Holds the key of the last returned entry when the page came back
    /// full. `None` when the scan ran out of entries before reaching the
    /// limit, i.e. there is nothing left to fetch.
    pub last_evaluated_key: Option<K>,
}

impl<K, V> Page<K, V> {
    /// A page with no entries and no cursor.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            last_evaluated_key: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another page may follow this one.
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key.is_some()
    }

    /// Drop the keys and keep the values, preserving order.
    pub fn into_values(self) -> Vec<V> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(|(k, _)| k)
    }
}

impl<K, V> Default for Page<K, V> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page() {
        let page: Page<u32, String> = Page::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert!(!page.has_more());
    }

    #[test]
    fn into_values_keeps_order() {
        let page = Page {
            items: vec![(1, "a"), (2, "b"), (3, "c")],
            last_evaluated_key: Some(3),
        };
        assert!(page.has_more());
        assert_eq!(page.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(page.into_values(), vec!["a", "b", "c"]);
    }
}
