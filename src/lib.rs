//! props-convert-rs - Core library for catalog to inventory conversion.
//!
//! This library converts a tabular prop catalog (CSV) into the vendor model
//! inventory XML consumed by xLights.
//!
//! # Example
//!
//! ```no_run
//! use props_convert_rs::{parse_catalog_file, assemble, generate_inventory_xml, VendorConfig};
//! use std::path::Path;
//!
//! let rows = parse_catalog_file(Path::new("catalog.csv")).unwrap();
//! let doc = assemble(&rows, &VendorConfig::default()).unwrap();
//! println!("{}", generate_inventory_xml(&doc));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::VendorConfig;
pub use error::{ConvertError, Result};
pub use generator::generate_inventory_xml;
pub use model::{Category, InventoryDocument, ModelRecord, RawRow};
pub use parser::{parse_catalog, parse_catalog_file};
pub use transform::{assemble, CategoryRegistry};
pub use validation::{validate_rows, ValidationReport};

/// Convert a catalog CSV file to inventory XML.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the catalog file
/// 2. Assemble the inventory document (categories, normalization, sort)
/// 3. Serialize to XML
///
/// # Arguments
///
/// * `input_path` - Path to the input catalog CSV file
/// * `vendor` - Vendor block fields and the download base URI
///
/// # Returns
///
/// The generated XML content as a string.
pub fn convert_catalog_to_xml(
    input_path: &std::path::Path,
    vendor: &VendorConfig,
) -> Result<String> {
    let rows = parse_catalog_file(input_path)?;
    let doc = assemble(&rows, vendor)?;
    Ok(generate_inventory_xml(&doc))
}
