//! Configuration constants and vendor settings for the converter.

/// Conversion factor: inches to centimeters.
pub const INCH_TO_CM: f64 = 2.54;

/// Placeholder for a dimension with no usable values.
pub const EMPTY_DIMENSION: &str = "\" (cm)";

/// Separator between alternative dimension values.
pub const DIMENSION_SEPARATOR: &str = " or ";

/// Material used when the catalog carries no material column.
pub const DEFAULT_MATERIAL: &str = "Coro";

/// Fixed model type emitted for every record.
pub const MODEL_TYPE: &str = "GE Prop";

/// Fixed thickness display string.
pub const THICKNESS_DISPLAY: &str = "12mm";

/// Fixed pixel description.
pub const PIXEL_DESCRIPTION: &str = "12mm bullet";

/// Fixed pixel spacing display string.
pub const PIXEL_SPACING_DISPLAY: &str = "0\" (cm)";

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Vendor block fields and the download base URI.
///
/// All fields are opaque passthrough strings as far as the transformation is
/// concerned; they only surface in the `<vendor>` block and in the prefix of
/// generated `xmodellink` URIs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorConfig {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub website: String,
    pub facebook: String,
    pub notes: String,
    pub logolink: String,
    /// Prefix prepended to each row's downloadable asset path.
    pub download_base_uri: String,
}

impl VendorConfig {
    /// Load vendor settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConvertError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ConvertError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
