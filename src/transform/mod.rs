//! Transformation core: dimension formatting, category registry, row
//! normalization, and document assembly.

pub mod assemble;
pub mod categories;
pub mod dimension;
pub mod normalize;

pub use assemble::assemble;
pub use categories::CategoryRegistry;
pub use dimension::build_dimension_string;
pub use normalize::normalize_row;
