pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::{CatalogIndex, CatalogStats};
pub use config::CatalogConfig;
pub use error::{Error, ErrorKind, Result};
pub use types::{Movie, NameKey, Person};
