//! Output generation.

mod xml;

pub use xml::generate_inventory_xml;
