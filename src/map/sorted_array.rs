use crate::map::Store;

/// Key-ordered map over parallel key/value vectors. Every operation is a
/// binary search plus, for mutation, a shift of the tail.
///
/// Reservation policy matches the hash backend: `ceil(required / 0.6)`.
#[derive(Debug)]
pub struct SortedArrayMap<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K: Ord, V> SortedArrayMap<K, V> {
    pub fn new() -> Self {
        SortedArrayMap {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        let required = self.keys.len() + additional;
        if required <= self.keys.capacity() {
            return;
        }

        let new_capacity = (required as f64 / 0.6).ceil() as usize;
        let grow_by = new_capacity - self.keys.len();
        self.keys.reserve_exact(grow_by);
        self.values.reserve_exact(grow_by);
    }

    fn search(&self, key: &K) -> Result<usize, usize> {
        crate::array::binary_search::search_with(&self.keys, key, &|a, b| a.cmp(b))
    }

    fn insert_at(&mut self, index: usize, key: K, value: V) {
        self.reserve(1);
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }
}

impl<K: Ord, V> Store<K, V> for SortedArrayMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(index) => Some(std::mem::replace(&mut self.values[index], value)),
            Err(index) => {
                self.insert_at(index, key, value);
                None
            }
        }
    }

    fn get_or_insert_with(&mut self, key: K, make: &mut dyn FnMut() -> V) -> &mut V {
        let index = match self.search(&key) {
            Ok(index) => index,
            Err(index) => {
                let value = make();
                self.insert_at(index, key, value);
                index
            }
        };
        &mut self.values[index]
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.search(key).ok().map(|index| &self.values[index])
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Ok(index) => Some(&mut self.values[index]),
            Err(_) => None,
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        match self.search(key) {
            Ok(index) => {
                self.keys.remove(index);
                Some(self.values.remove(index))
            }
            Err(_) => None,
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(self.keys.iter().zip(self.values.iter()))
    }

    fn iter_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = (&'a K, &'a mut V)> + 'a> {
        Box::new(self.keys.iter().zip(self.values.iter_mut()))
    }

    fn drain(&mut self) -> Vec<(K, V)> {
        self.keys.drain(..).zip(self.values.drain(..)).collect()
    }
}

impl<K: Ord, V> Default for SortedArrayMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
