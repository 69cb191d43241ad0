use std::cmp::Ordering;

/// Binary search over a slice already ordered by `cmp`.
///
/// `Ok(index)` when the item is present, `Err(insertion_point)` when absent,
/// so "found at 0" and "not found, would go at 0" stay distinguishable.
pub fn search_with<T>(
    items: &[T],
    target: &T,
    cmp: &dyn Fn(&T, &T) -> Ordering,
) -> Result<usize, usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let middle = (low + high) / 2;
        match cmp(&items[middle], target) {
            Ordering::Greater => high = middle,
            Ordering::Less => low = middle + 1,
            Ordering::Equal => return Ok(middle),
        }
    }

    Err(low)
}
