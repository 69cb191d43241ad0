use crate::array::binary_search;
use crate::sort::Sorter;
use std::cmp::Ordering;

/// A growable array with explicit capacity control and binary-search
/// ordered operations.
///
/// Growth allocates `ceil(required / 0.6)` slots so a burst of appends
/// amortizes to O(1) per item.
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        DynamicArray { items: Vec::new() }
    }

    /// Ensures room for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.items.len() + additional;
        if required <= self.items.capacity() {
            return;
        }

        let new_capacity = (required as f64 / 0.6).ceil() as usize;
        self.items.reserve_exact(new_capacity - self.items.len());
    }

    /// Inserts `item` at `index`, shifting the tail right. `index <= len`.
    pub fn insert_at(&mut self, index: usize, item: T) {
        self.reserve(1);
        self.items.insert(index, item);
    }

    pub fn append(&mut self, item: T) {
        self.reserve(1);
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every item. Capacity is retained.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn sort_with(&mut self, sorter: &mut Sorter, cmp: &dyn Fn(&T, &T) -> Ordering) {
        sorter.sort(&mut self.items, cmp);
    }

    /// See [`binary_search::search_with`]. Only meaningful when the array is
    /// already ordered by `cmp`; that is the caller's obligation.
    pub fn binary_search_with(
        &self,
        target: &T,
        cmp: &dyn Fn(&T, &T) -> Ordering,
    ) -> Result<usize, usize> {
        binary_search::search_with(&self.items, target, cmp)
    }

    /// Ordered insert. Returns false when an equal item is already present.
    pub fn binary_insert(&mut self, item: T, cmp: &dyn Fn(&T, &T) -> Ordering) -> bool {
        match self.binary_search_with(&item, cmp) {
            Ok(_) => false,
            Err(index) => {
                self.insert_at(index, item);
                true
            }
        }
    }

    /// Ordered remove. Returns false when no equal item is present.
    pub fn binary_remove(&mut self, target: &T, cmp: &dyn Fn(&T, &T) -> Ordering) -> bool {
        match self.binary_search_with(target, cmp) {
            Ok(index) => {
                self.items.remove(index);
                true
            }
            Err(_) => false,
        }
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copies out the half-open range `[from, to)`.
    pub fn slice(&self, from: usize, to: usize) -> Vec<T> {
        self.items[from..to].to_vec()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DynamicArray {
            items: Vec::from_iter(iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortKind, Sorter};

    fn ascending(a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn append_and_remove() {
        let mut array = DynamicArray::new();
        assert!(array.is_empty());

        array.append(1);
        array.append(2);
        array.append(3);
        assert_eq!(array.len(), 3);

        assert_eq!(array.remove_at(1), 2);
        assert_eq!(array.as_slice(), &[1, 3]);

        array.insert_at(1, 9);
        assert_eq!(array.as_slice(), &[1, 9, 3]);
    }

    #[test]
    fn growth_overallocates() {
        let mut array = DynamicArray::new();
        array.append(1u32);
        // ceil(1 / 0.6) = 2
        assert!(array.capacity() >= 2);

        for i in 0..100 {
            array.append(i);
        }
        assert!(array.capacity() >= array.len());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut array = DynamicArray::new();
        for i in 0..10u32 {
            array.append(i);
        }
        let capacity = array.capacity();
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), capacity);
    }

    #[test]
    fn binary_insert_keeps_order_and_rejects_duplicates() {
        let mut array = DynamicArray::new();
        for item in [5u32, 1, 9, 3, 7] {
            assert!(array.binary_insert(item, &ascending));
        }
        assert_eq!(array.as_slice(), &[1, 3, 5, 7, 9]);

        assert!(!array.binary_insert(5, &ascending));
        assert_eq!(array.len(), 5);
    }

    #[test]
    fn binary_remove_absent_is_noop() {
        let mut array: DynamicArray<u32> = [1, 3, 5].into_iter().collect();
        assert!(!array.binary_remove(&2, &ascending));
        assert_eq!(array.as_slice(), &[1, 3, 5]);

        assert!(array.binary_remove(&3, &ascending));
        assert_eq!(array.as_slice(), &[1, 5]);
    }

    #[test]
    fn slice_copies_range() {
        let array: DynamicArray<u32> = (0..10).collect();
        assert_eq!(array.slice(2, 5), vec![2, 3, 4]);
        assert_eq!(array.slice(0, 0), Vec::<u32>::new());
        assert_eq!(array.len(), 10);
    }

    #[test]
    fn sort_with_both_strategies() {
        for kind in [SortKind::Quick, SortKind::Selection] {
            let mut sorter = Sorter::new(kind);
            let mut array: DynamicArray<u32> = [4, 1, 3, 2].into_iter().collect();
            array.sort_with(&mut sorter, &ascending);
            assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
        }
    }
}
