use std::cmp::Ordering;

/// Selection sort, O(n^2) and deterministic. The predictable choice for
/// small inputs or when run-to-run stability of timings matters.
#[derive(Debug, Default)]
pub struct SelectionSort;

impl SelectionSort {
    pub fn sort<T>(&self, items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
        for sorted_end in 0..items.len() {
            let mut min_index = sorted_end;

            for i in (sorted_end + 1)..items.len() {
                if cmp(&items[i], &items[min_index]) == Ordering::Less {
                    min_index = i;
                }
            }

            items.swap(sorted_end, min_index);
        }
    }
}
