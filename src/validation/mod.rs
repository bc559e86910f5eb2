//! Advisory catalog diagnostics.

mod validate;

pub use validate::{validate_rows, ValidationReport};
