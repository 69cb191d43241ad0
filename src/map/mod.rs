pub mod open_addressing;
pub mod sorted_array;

pub use open_addressing::OpenAddressingMap;
pub use sorted_array::SortedArrayMap;

/// Selector for the backing store implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    OpenAddressing,
    SortedArray,
}

/// Associative key/value store, object safe so backends can be swapped live.
///
/// Capability bounds live on the implementations, not here: the hash backend
/// needs `K: Hash + Eq`, the sorted-array backend needs `K: Ord`.
pub trait Store<K, V> {
    /// Inserts or overwrites. Returns the previous value for a present key.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the present value, or inserts the one produced by `make`.
    fn get_or_insert_with(&mut self, key: K, make: &mut dyn FnMut() -> V) -> &mut V;

    fn get(&self, key: &K) -> Option<&V>;

    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    /// Removes every entry. Capacity is retained.
    fn clear(&mut self);

    /// Iterates live entries in unspecified order.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn iter_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = (&'a K, &'a mut V)> + 'a>;

    /// Empties the store and hands back its entries. Used for live backend
    /// migration, which re-inserts them into a fresh backend.
    fn drain(&mut self) -> Vec<(K, V)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backends() -> Vec<Box<dyn Store<u32, String>>> {
        vec![
            Box::new(OpenAddressingMap::new()),
            Box::new(SortedArrayMap::new()),
        ]
    }

    #[test]
    fn contract_holds_for_both_backends() {
        for mut store in backends() {
            assert!(store.is_empty());
            assert_eq!(store.get(&1), None);
            assert_eq!(store.remove(&1), None);

            assert_eq!(store.put(1, "one".into()), None);
            assert_eq!(store.put(2, "two".into()), None);
            assert_eq!(store.put(1, "uno".into()), Some("one".into()));
            assert_eq!(store.len(), 2);

            assert_eq!(store.get(&1).map(String::as_str), Some("uno"));
            assert!(store.contains(&2));
            assert!(!store.contains(&3));

            let value = store.get_or_insert_with(3, &mut || "three".into());
            assert_eq!(value, "three");
            let value = store.get_or_insert_with(3, &mut || "never".into());
            assert_eq!(value, "three");
            assert_eq!(store.len(), 3);

            assert_eq!(store.remove(&2), Some("two".into()));
            assert_eq!(store.remove(&2), None);
            assert_eq!(store.len(), 2);

            let mut entries = store.drain();
            entries.sort();
            assert_eq!(entries, vec![(1, "uno".into()), (3, "three".into())]);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn iter_mut_exposes_live_values() {
        for mut store in backends() {
            for i in 0..10 {
                store.put(i, format!("v{}", i));
            }
            store.remove(&4);

            for (_key, value) in store.iter_mut() {
                value.push('!');
            }

            let mut seen: Vec<u32> = store.iter().map(|(k, _)| *k).collect();
            seen.sort();
            assert_eq!(seen, vec![0, 1, 2, 3, 5, 6, 7, 8, 9]);
            assert!(store.iter().all(|(_, v)| v.ends_with('!')));
        }
    }

    #[test]
    fn clear_empties_without_dropping_capacity() {
        for mut store in backends() {
            for i in 0..50 {
                store.put(i, i.to_string());
            }
            let capacity = store.capacity();
            store.clear();
            assert!(store.is_empty());
            assert_eq!(store.capacity(), capacity);
            assert_eq!(store.get(&7), None);

            store.put(7, "back".into());
            assert_eq!(store.get(&7).map(String::as_str), Some("back"));
        }
    }
}
