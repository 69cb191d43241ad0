use crate::map::Store;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// Slot state. A tagged enum instead of an in-band sentinel key, so a
/// tombstone can never collide with a real key.
#[derive(Debug)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied { key: K, value: V },
}

/// Open-addressing hash map with linear probing and tombstone deletion.
///
/// Growth triggers before an insertion would push the live load factor to
/// 0.7, rehashing into `ceil(required / 0.6)` slots; only live entries are
/// carried over, so rehashing also purges tombstones. Capacity never shrinks.
#[derive(Debug)]
pub struct OpenAddressingMap<K, V> {
    slots: Vec<Slot<K, V>>,
    live: usize,
    hasher: RandomState,
}

impl<K: Hash + Eq, V> OpenAddressingMap<K, V> {
    pub fn new() -> Self {
        OpenAddressingMap {
            slots: Vec::new(),
            live: 0,
            hasher: RandomState::new(),
        }
    }

    /// Grows and rehashes if `additional` more insertions would reach a 0.7
    /// load factor. Live entries go through the raw insert path; no nested
    /// growth check can trigger.
    pub fn reserve(&mut self, additional: usize) {
        let capacity = self.slots.len().max(1) as f64;
        if ((self.live + additional) as f64) / capacity < 0.7 {
            return;
        }

        let new_capacity = ((self.live + additional) as f64 / 0.6).ceil() as usize;
        let old_slots = std::mem::replace(
            &mut self.slots,
            std::iter::repeat_with(|| Slot::Empty)
                .take(new_capacity)
                .collect(),
        );
        self.live = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                self.raw_put(key, value);
            }
        }
    }

    /// Linear probe bounded by one full cycle.
    ///
    /// `Ok(index)` for a present key. `Err(index)` for an absent key, where
    /// `index` is the preferred insertion slot: the first tombstone passed,
    /// or the empty slot that terminated the probe.
    fn probe(&self, key: &K) -> Result<usize, usize> {
        let capacity = self.slots.len() as u64;
        let hash = self.hasher.hash_one(key);
        let mut insert_at = (hash % capacity) as usize;

        if self.live == 0 {
            return Err(insert_at);
        }

        let mut tombstone_seen = false;
        for step in 0..capacity {
            let index = ((hash.wrapping_add(step)) % capacity) as usize;
            match &self.slots[index] {
                Slot::Empty => {
                    if !tombstone_seen {
                        insert_at = index;
                    }
                    break;
                }
                Slot::Occupied { key: occupant, .. } if occupant == key => {
                    return Ok(index);
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if !tombstone_seen {
                        tombstone_seen = true;
                        insert_at = index;
                    }
                }
            }
        }

        Err(insert_at)
    }

    /// Insert without a growth check. The caller must have reserved room.
    fn raw_put(&mut self, key: K, value: V) -> Option<V> {
        match self.probe(&key) {
            Ok(index) => match &mut self.slots[index] {
                Slot::Occupied { value: occupant, .. } => {
                    Some(std::mem::replace(occupant, value))
                }
                _ => unreachable!("probe returned a non-occupied slot as found"),
            },
            Err(index) => {
                self.slots[index] = Slot::Occupied { key, value };
                self.live += 1;
                None
            }
        }
    }
}

impl<K: Hash + Eq, V> Store<K, V> for OpenAddressingMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.reserve(1);
        self.raw_put(key, value)
    }

    fn get_or_insert_with(&mut self, key: K, make: &mut dyn FnMut() -> V) -> &mut V {
        self.reserve(1);
        let index = match self.probe(&key) {
            Ok(index) => index,
            Err(index) => {
                self.slots[index] = Slot::Occupied { key, value: make() };
                self.live += 1;
                index
            }
        };

        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => value,
            _ => unreachable!("freshly resolved slot is not occupied"),
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        // A zero-capacity table has nowhere to probe.
        if self.slots.is_empty() {
            return None;
        }

        match self.probe(key) {
            Ok(index) => match &self.slots[index] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Err(_) => None,
        }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if self.slots.is_empty() {
            return None;
        }

        match self.probe(key) {
            Ok(index) => match &mut self.slots[index] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Err(_) => None,
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        if self.slots.is_empty() {
            return None;
        }

        match self.probe(key) {
            Ok(index) => {
                // Tombstone, not Empty: later probes for other keys must not
                // be cut short at this slot.
                match std::mem::replace(&mut self.slots[index], Slot::Tombstone) {
                    Slot::Occupied { value, .. } => {
                        self.live -= 1;
                        Some(value)
                    }
                    _ => unreachable!("probe returned a non-occupied slot as found"),
                }
            }
            Err(_) => None,
        }
    }

    fn len(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.live = 0;
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }))
    }

    fn iter_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = (&'a K, &'a mut V)> + 'a> {
        Box::new(self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((&*key, value)),
            _ => None,
        }))
    }

    fn drain(&mut self) -> Vec<(K, V)> {
        self.live = 0;
        std::mem::take(&mut self.slots)
            .into_iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, value } => Some((key, value)),
                _ => None,
            })
            .collect()
    }
}

impl<K: Hash + Eq, V> Default for OpenAddressingMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_lookups_report_absent() {
        let mut map: OpenAddressingMap<u32, u32> = OpenAddressingMap::new();
        assert_eq!(map.capacity(), 0);
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get_mut(&1), None);
        assert_eq!(map.remove(&1), None);
        assert!(!map.contains(&1));
    }

    #[test]
    fn growth_follows_load_factor_policy() {
        let mut map = OpenAddressingMap::new();

        map.put(1u32, 1u32);
        // ceil(1 / 0.6) = 2
        assert_eq!(map.capacity(), 2);

        // 2 live in 2 slots would be load 1.0 >= 0.7, so grow to ceil(2 / 0.6) = 4
        map.put(2, 2);
        assert_eq!(map.capacity(), 4);

        // 3/4 = 0.75 >= 0.7, grow to ceil(3 / 0.6) = 5
        map.put(3, 3);
        assert_eq!(map.capacity(), 5);

        // the growth check runs before the overwrite is recognized:
        // (3 + 1) / 5 = 0.8 >= 0.7, grow to ceil(4 / 0.6) = 7
        map.put(3, 33);
        assert_eq!(map.capacity(), 7);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&3), Some(&33));
    }

    #[test]
    fn capacity_never_shrinks() {
        let mut map = OpenAddressingMap::new();
        for i in 0..100u32 {
            map.put(i, i);
        }
        let capacity = map.capacity();
        for i in 0..100u32 {
            map.remove(&i);
        }
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), capacity);
    }

    #[test]
    fn tombstones_do_not_truncate_probes() {
        // Dense insert/remove churn: any probe sequence will cross tombstones.
        let mut map = OpenAddressingMap::new();
        for i in 0..200u32 {
            map.put(i, i * 10);
        }
        for i in (0..200).step_by(2) {
            assert_eq!(map.remove(&i), Some(i * 10));
        }
        for i in (1..200).step_by(2) {
            assert_eq!(map.get(&i), Some(&(i * 10)), "lost key {} after churn", i);
        }
        for i in (0..200).step_by(2) {
            assert_eq!(map.get(&i), None);
        }
        assert_eq!(map.len(), 100);
    }

    #[test]
    fn removed_slot_is_reusable() {
        let mut map = OpenAddressingMap::new();
        for i in 0..20u32 {
            map.put(i, i);
        }
        map.remove(&7);
        assert_eq!(map.put(7, 70), None);
        assert_eq!(map.get(&7), Some(&70));
        assert_eq!(map.len(), 20);
    }

    #[test]
    fn rehash_purges_tombstones() {
        let mut map = OpenAddressingMap::new();
        for i in 0..10u32 {
            map.put(i, i);
        }
        for i in 0..10u32 {
            map.remove(&i);
        }
        // Force a rehash; only live entries are re-inserted.
        for i in 100..200u32 {
            map.put(i, i);
        }
        assert_eq!(map.len(), 100);
        for i in 100..200u32 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn get_or_insert_with_runs_supplier_once() {
        let mut map = OpenAddressingMap::new();
        let mut calls = 0;

        let value = map.get_or_insert_with(1u32, &mut || {
            calls += 1;
            vec![1]
        });
        value.push(2);

        map.get_or_insert_with(1u32, &mut || {
            calls += 1;
            vec![]
        });

        assert_eq!(calls, 1);
        assert_eq!(map.get(&1), Some(&vec![1, 2]));
    }
}
