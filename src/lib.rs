//! GeoField - field data entry and export for mineral exploration.
//!
//! This library provides the core functionality for the GeoField desktop
//! client: the tabular query engine (filter/sort/paginate over in-memory
//! record collections), the flat-record CSV/text exporter, the static form
//! catalog, and the mock datasets the client is demonstrated with.

pub mod ai;
pub mod config;
pub mod data;
pub mod export;
pub mod forms;
pub mod query;
pub mod record;
pub mod ui;

use thiserror::Error;

/// GeoField error types covering all failure modes.
#[derive(Error, Debug)]
pub enum GeoFieldError {
    /// Export errors (payload assembly, file write)
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration errors (config file parsing)
    #[error("Config error: {0}")]
    Config(String),

    /// AI assistant errors (summary generation)
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GeoFieldError
pub type Result<T> = std::result::Result<T, GeoFieldError>;
