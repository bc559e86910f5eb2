//! Dual-unit dimension display formatting.

use crate::config::{DIMENSION_SEPARATOR, INCH_TO_CM};

/// Build the display string for a sequence of alternative dimension values.
///
/// Each usable value renders as `{d}" ({cm}cm)` with the centimeter value
/// rounded half away from zero; alternatives are joined with `" or "`.
/// Zero and non-finite values are skipped, so the result is empty when no
/// usable value exists — the caller substitutes the empty-dimension
/// placeholder in that case.
pub fn build_dimension_string(values: &[f64]) -> String {
    let parts: Vec<String> = values
        .iter()
        .filter(|d| d.is_finite() && **d != 0.0)
        .map(|d| format!("{}\" ({}cm)", d, (d * INCH_TO_CM).round() as i64))
        .collect();

    parts.join(DIMENSION_SEPARATOR)
}
