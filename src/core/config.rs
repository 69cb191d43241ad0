use crate::map::MapKind;
use crate::sort::SortKind;

/// Initial backend selection for a catalog. Both choices can also be swapped
/// at runtime through [`crate::core::catalog::CatalogIndex::set_map`] and
/// [`crate::core::catalog::CatalogIndex::set_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub map: MapKind,
    pub sort: SortKind,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            map: MapKind::OpenAddressing,
            sort: SortKind::Quick,
        }
    }
}
