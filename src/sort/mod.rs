pub mod quick;
pub mod selection;

use std::cmp::Ordering;

pub use quick::QuickSort;
pub use selection::SelectionSort;

/// Selector for the active sorting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Quick,
    Selection,
}

/// The active sorting strategy. A closed enum rather than a trait object:
/// a `sort<T>` method is generic over the element type, which rules out
/// dynamic dispatch, and the strategy set is fixed anyway.
#[derive(Debug)]
pub enum Sorter {
    Quick(QuickSort),
    Selection(SelectionSort),
}

impl Sorter {
    pub fn new(kind: SortKind) -> Self {
        match kind {
            SortKind::Quick => Sorter::Quick(QuickSort::new()),
            SortKind::Selection => Sorter::Selection(SelectionSort),
        }
    }

    pub fn kind(&self) -> SortKind {
        match self {
            Sorter::Quick(_) => SortKind::Quick,
            Sorter::Selection(_) => SortKind::Selection,
        }
    }

    /// Sorts `items` in place according to `cmp`.
    /// Sorting a sub-range is done by slicing at the call site.
    pub fn sort<T>(&mut self, items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
        match self {
            Sorter::Quick(quick) => quick.sort(items, cmp),
            Sorter::Selection(selection) => selection.sort(items, cmp),
        }
    }
}

impl Default for Sorter {
    fn default() -> Self {
        Sorter::new(SortKind::Quick)
    }
}
