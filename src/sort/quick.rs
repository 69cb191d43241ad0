use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Quicksort with a uniformly random pivot, expected O(n*log(n)).
/// Without randomization an adversarial input degrades it to O(n^2).
///
/// The RNG is instance-local so concurrent test runs never share state.
#[derive(Debug)]
pub struct QuickSort {
    rng: StdRng,
}

impl QuickSort {
    pub fn new() -> Self {
        QuickSort {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn sort<T>(&mut self, items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
        if items.len() <= 1 {
            return;
        }

        let pivot = self.partition(items, cmp);
        self.sort(&mut items[..pivot], cmp);
        self.sort(&mut items[pivot + 1..], cmp);
    }

    /// Lomuto partition around a random pivot moved to the last slot.
    /// Returns the pivot's final index.
    fn partition<T>(&mut self, items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) -> usize {
        let last = items.len() - 1;
        let pivot = self.rng.gen_range(0..items.len());
        items.swap(pivot, last);

        let mut store = 0;
        for i in 0..last {
            if cmp(&items[i], &items[last]) == Ordering::Less {
                items.swap(i, store);
                store += 1;
            }
        }

        items.swap(store, last);
        store
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}
