//! File exchange for catalog records. The catalog core never touches files;
//! these functions only hand fully-constructed records to
//! [`crate::core::CatalogIndex::load`] and write back what
//! [`crate::core::CatalogIndex::all_movies`] returns.

pub mod json;
pub mod text;

pub use json::{load_json, store_json};
pub use text::{load_movies, store_movies};
