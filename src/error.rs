//! Error types for catalog to inventory conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for catalog processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// CSV-level read/parse error (-3)
    CsvError = -3,
    /// Required column missing from the header row (-4)
    MissingColumn = -4,
    /// Vendor config unreadable (-5)
    ConfigError = -5,
    /// Category registry used out of phase order (E100)
    RegistryError = 100,
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' in header row")]
    MissingColumn { column: String },

    #[error("Failed to read vendor config {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("Category registry queried before finalize()")]
    RegistryNotFinalized,

    #[error("Category not found in registry: '{name}'")]
    CategoryNotFound { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ConvertError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ConvertError::Csv(_) => ErrorCode::CsvError,
            ConvertError::MissingColumn { .. } => ErrorCode::MissingColumn,
            ConvertError::ConfigRead { .. } => ErrorCode::ConfigError,
            ConvertError::RegistryNotFinalized => ErrorCode::RegistryError,
            ConvertError::CategoryNotFound { .. } => ErrorCode::RegistryError,
            ConvertError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
