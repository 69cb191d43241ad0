pub mod binary_search;
pub mod dynamic_array;

pub use dynamic_array::DynamicArray;
