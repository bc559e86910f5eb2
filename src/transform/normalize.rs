//! Per-row normalization into model records.

use tracing::debug;

use crate::config::{
    DEFAULT_MATERIAL, EMPTY_DIMENSION, MODEL_TYPE, PIXEL_DESCRIPTION, PIXEL_SPACING_DISPLAY,
    THICKNESS_DISPLAY, VendorConfig,
};
use crate::error::Result;
use crate::model::{ModelRecord, RawRow};
use crate::transform::categories::CategoryRegistry;
use crate::transform::dimension::build_dimension_string;

/// The asset reference derived from a row.
///
/// A native built-in equivalent takes precedence over a downloadable asset;
/// a row with neither is excluded from the output entirely.
enum AssetRef {
    Native(String),
    Download(String),
    None,
}

fn asset_ref(row: &RawRow, config: &VendorConfig) -> AssetRef {
    if let Some(native) = &row.native_model {
        let settings = row.native_model_settings.as_deref().unwrap_or_default();
        return AssetRef::Native(format!(
            "Use Native xLights Model '{}': {}",
            native, settings
        ));
    }

    match &row.xmodel {
        Some(xmodel) if !xmodel.trim().is_empty() => {
            AssetRef::Download(format!("{}{}", config.download_base_uri, xmodel))
        }
        _ => AssetRef::None,
    }
}

/// Render a dimension-value sequence, falling back to the placeholder.
fn dimension_display(values: &[f64]) -> String {
    let display = build_dimension_string(values);
    if display.is_empty() {
        EMPTY_DIMENSION.to_string()
    } else {
        display
    }
}

/// Build the display name and apply the narrow `&` escaping policy.
///
/// Only the ampersand is escaped; the output schema wraps every
/// free-form link in CDATA, and name text is the one place raw catalog
/// text lands in element content.
fn display_name(row: &RawRow) -> String {
    let name = match row.option.as_deref() {
        Some(option) if !option.is_empty() => format!("{} - {}", row.prop, option),
        _ => row.prop.clone(),
    };
    name.replace('&', "&amp;")
}

/// Normalize one raw row into a model record.
///
/// Returns `Ok(None)` when the row carries no usable asset reference (the
/// inclusion filter); errors only on registry consistency failures, which
/// indicate a phase-ordering bug rather than bad data.
pub fn normalize_row(
    row: &RawRow,
    registry: &CategoryRegistry,
    config: &VendorConfig,
) -> Result<Option<ModelRecord>> {
    let (notes, xmodel_link) = match asset_ref(row, config) {
        AssetRef::Native(note) => (Some(note), None),
        AssetRef::Download(link) => (None, Some(link)),
        AssetRef::None => {
            debug!("Excluding '{}': no model asset", row.prop);
            return Ok(None);
        }
    };

    let mut category_ids = Vec::new();
    for tag in &row.categories {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        category_ids.push(registry.id_of(tag)?);
    }

    let image_links: Vec<String> = row
        .images
        .iter()
        .filter(|link| !link.trim().is_empty())
        .cloned()
        .collect();

    Ok(Some(ModelRecord {
        id: 0, // assigned after the final sort
        name: display_name(row),
        category_ids,
        model_type: MODEL_TYPE.to_string(),
        web_link: row.product_link.clone(),
        material: row
            .material
            .clone()
            .unwrap_or_else(|| DEFAULT_MATERIAL.to_string()),
        width: dimension_display(&row.widths),
        height: dimension_display(&row.heights),
        thickness: THICKNESS_DISPLAY.to_string(),
        pixel_count: row.nodes.unwrap_or(0),
        pixel_description: PIXEL_DESCRIPTION.to_string(),
        pixel_spacing: PIXEL_SPACING_DISPLAY.to_string(),
        image_links,
        xmodel_link,
        notes,
    }))
}
