//! Advisory validation of raw catalog rows.
//!
//! Warnings only: the pipeline is lenient by design, so nothing reported
//! here affects the generated document or fails the run. Row exclusion in
//! particular is normal behavior, surfaced here purely as a heads-up for
//! catalog maintainers.

use crate::model::RawRow;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Number of rows that will be excluded from the output.
    pub excluded_rows: usize,
}

impl ValidationReport {
    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate all catalog rows.
pub fn validate_rows(rows: &[RawRow]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx + 2; // 1-based, after the header row

        if row.prop.trim().is_empty() {
            report.add_warning(format!("Row {}: blank product name", row_num));
        }

        if !row.has_asset() {
            report.excluded_rows += 1;
            report.add_warning(format!(
                "Row {} ('{}'): no model asset, row will be excluded",
                row_num, row.prop
            ));
        }

        if row.categories.iter().all(|c| c.trim().is_empty()) {
            report.add_warning(format!("Row {} ('{}'): no categories", row_num, row.prop));
        }

        if row.widths.is_empty() && row.heights.is_empty() {
            report.add_warning(format!("Row {} ('{}'): no dimensions", row_num, row.prop));
        }
    }

    report
}
