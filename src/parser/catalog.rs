//! CSV catalog reader.
//!
//! Reads the whole catalog into typed [`RawRow`] values before any
//! processing begins. Columns are matched by header name; repeated columns
//! use a dotted numeric suffix (`category.0`, `category.1`, `width.0`, ...),
//! with the bare name accepted as index 0. Unknown columns are ignored.

use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::model::RawRow;

/// Resolved header positions for one catalog file.
#[derive(Debug, Default)]
struct ColumnMap {
    prop: Option<usize>,
    option: Option<usize>,
    material: Option<usize>,
    nodes: Option<usize>,
    product_link: Option<usize>,
    xmodel: Option<usize>,
    native_model: Option<usize>,
    native_model_settings: Option<usize>,
    /// Repeated columns, ordered by numeric suffix.
    categories: Vec<usize>,
    widths: Vec<usize>,
    heights: Vec<usize>,
    images: Vec<usize>,
}

impl ColumnMap {
    /// Build the column map from the header row.
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut map = ColumnMap::default();
        let mut categories: Vec<(usize, usize)> = Vec::new();
        let mut widths: Vec<(usize, usize)> = Vec::new();
        let mut heights: Vec<(usize, usize)> = Vec::new();
        let mut images: Vec<(usize, usize)> = Vec::new();

        for (col, header) in headers.iter().enumerate() {
            let header = header.trim_start_matches('\u{feff}').trim();
            let (base, index) = split_indexed_header(header);

            match base {
                "prop" => map.prop = Some(col),
                "option" => map.option = Some(col),
                "material" => map.material = Some(col),
                "nodes" => map.nodes = Some(col),
                "productLink" => map.product_link = Some(col),
                "xmodel" => map.xmodel = Some(col),
                "nativeModel" => map.native_model = Some(col),
                "nativeModelSettings" => map.native_model_settings = Some(col),
                "category" => categories.push((index, col)),
                "width" => widths.push((index, col)),
                "height" => heights.push((index, col)),
                "image" => images.push((index, col)),
                _ => {}
            }
        }

        if map.prop.is_none() {
            return Err(ConvertError::MissingColumn {
                column: "prop".to_string(),
            });
        }

        map.categories = into_ordered_columns(categories);
        map.widths = into_ordered_columns(widths);
        map.heights = into_ordered_columns(heights);
        map.images = into_ordered_columns(images);

        Ok(map)
    }

    /// Convert one CSV record into a raw row.
    fn row_from_record(&self, record: &csv::StringRecord) -> RawRow {
        let cell = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("");

        RawRow {
            prop: cell(self.prop).to_string(),
            option: optional_cell(cell(self.option)),
            categories: self
                .categories
                .iter()
                .map(|&c| record.get(c).unwrap_or("").to_string())
                .collect(),
            material: self.material.map(|c| record.get(c).unwrap_or("").to_string()),
            widths: parse_numbers(record, &self.widths),
            heights: parse_numbers(record, &self.heights),
            nodes: cell(self.nodes).trim().parse().ok(),
            product_link: optional_cell(cell(self.product_link)),
            xmodel: optional_cell(cell(self.xmodel)),
            native_model: optional_cell(cell(self.native_model)),
            native_model_settings: optional_cell(cell(self.native_model_settings)),
            images: self
                .images
                .iter()
                .map(|&c| record.get(c).unwrap_or("").to_string())
                .collect(),
        }
    }
}

/// Split a header into its base name and repeat index (`category.2` -> 2).
fn split_indexed_header(header: &str) -> (&str, usize) {
    match header.split_once('.') {
        Some((base, suffix)) => match suffix.parse() {
            Ok(index) => (base, index),
            Err(_) => (header, 0),
        },
        None => (header, 0),
    }
}

/// Sort (index, column) pairs by index and keep the column positions.
fn into_ordered_columns(mut pairs: Vec<(usize, usize)>) -> Vec<usize> {
    pairs.sort_by_key(|&(index, _)| index);
    pairs.into_iter().map(|(_, col)| col).collect()
}

/// Map an empty-after-trim cell to `None`.
fn optional_cell(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse numeric cells, skipping empty and malformed entries.
fn parse_numbers(record: &csv::StringRecord, columns: &[usize]) -> Vec<f64> {
    columns
        .iter()
        .filter_map(|&c| record.get(c))
        .filter_map(|v| v.trim().parse().ok())
        .collect()
}

/// Parse catalog rows from CSV content.
pub fn parse_catalog(content: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(columns.row_from_record(&record));
    }

    Ok(rows)
}

/// Parse a catalog CSV file from a path.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_catalog(&content)
}
