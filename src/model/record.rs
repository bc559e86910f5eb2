//! Normalized output records and the assembled inventory document.

use serde::{Deserialize, Serialize};

use crate::config::VendorConfig;

/// A named category with its run-stable integer ID.
///
/// IDs equal the 0-based rank of the name in the sorted set of all distinct
/// trimmed tags seen across the input; they are rebuilt on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: usize,
    pub name: String,
}

/// The normalized, included representation of one catalog row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Dense 0-based ID, assigned only after the final name sort.
    pub id: usize,
    /// Display name (`prop` or `prop - option`), ampersands escaped.
    pub name: String,
    /// Category IDs in source tag order.
    pub category_ids: Vec<usize>,
    /// Fixed model type string.
    pub model_type: String,
    /// Product page link, emitted verbatim inside CDATA.
    pub web_link: Option<String>,
    pub material: String,
    /// Dual-unit width display string.
    pub width: String,
    /// Dual-unit height display string.
    pub height: String,
    pub thickness: String,
    pub pixel_count: u32,
    pub pixel_description: String,
    pub pixel_spacing: String,
    /// Image links in source order; empty means the self-closing form.
    pub image_links: Vec<String>,
    /// Full download URI for the model asset, if any.
    pub xmodel_link: Option<String>,
    /// Native-equivalent note, if any. Mutually exclusive with `xmodel_link`.
    pub notes: Option<String>,
}

/// The complete inventory document, constructed once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryDocument {
    pub vendor: VendorConfig,
    pub categories: Vec<Category>,
    pub models: Vec<ModelRecord>,
}
