//! Data model: raw input rows and normalized output records.

mod record;
mod row;

pub use record::{Category, InventoryDocument, ModelRecord};
pub use row::RawRow;
