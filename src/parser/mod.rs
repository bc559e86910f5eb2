//! Catalog input parsing.

mod catalog;

pub use catalog::{parse_catalog, parse_catalog_file};
