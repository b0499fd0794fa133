#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod time;

mod catalog_data;

pub use catalog::{Catalog, CatalogError, check_quizable};
pub use time::Clock;
