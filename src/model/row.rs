//! Raw catalog row as read from the CSV source.

use serde::{Deserialize, Serialize};

/// One catalog row describing a single product variant.
///
/// Field optionality is explicit: `None` means the cell (or column) carried
/// no value. Cell text is kept verbatim; trimming and defaulting happen in
/// the transform layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    /// Product name (`prop` column).
    pub prop: String,
    /// Variant/option name, appended to the product name when present.
    pub option: Option<String>,
    /// Category tags in source column order.
    pub categories: Vec<String>,
    /// Material; `None` only when the column is absent from the file.
    pub material: Option<String>,
    /// Alternative width choices in inches.
    pub widths: Vec<f64>,
    /// Alternative height choices in inches.
    pub heights: Vec<f64>,
    /// Pixel/node count.
    pub nodes: Option<u32>,
    /// Product page link.
    pub product_link: Option<String>,
    /// Downloadable model asset path, relative to the download base URI.
    pub xmodel: Option<String>,
    /// Name of a built-in xLights model equivalent.
    pub native_model: Option<String>,
    /// Settings string accompanying the built-in equivalent.
    pub native_model_settings: Option<String>,
    /// Image links in source column order.
    pub images: Vec<String>,
}

impl RawRow {
    /// Whether this row carries a usable asset reference.
    ///
    /// A row without one is excluded from the output entirely.
    pub fn has_asset(&self) -> bool {
        self.native_model.is_some()
            || self
                .xmodel
                .as_deref()
                .is_some_and(|x| !x.trim().is_empty())
    }
}
