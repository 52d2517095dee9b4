// src/utils/error.rs
use thiserror::Error;

// Errors only ever come from the layers around the extraction core.
// The extractors themselves absorb "not found" as empty values.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not read document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF text extraction failed for {path}: {reason}")]
    PdfConversion { path: String, reason: String },

    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No results grid found in search response")]
    MissingGrid,

    #[error("Search result row {0} has too few cells ({1})")]
    ShortRow(usize, usize),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid folder name: {0:?}")]
    InvalidFolderName(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document could not be loaded: {0}")]
    Document(#[from] DocumentError),

    #[error("Search results could not be parsed: {0}")]
    Search(#[from] SearchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
