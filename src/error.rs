//! Error types for the mock data exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read the dataset file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON of the expected shape.
    #[error("invalid dataset document: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// The dataset carries no field names.
    #[error("dataset is missing fields")]
    MissingFields,
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The row set is empty, so there is nothing meaningful to render.
    #[error("no data to export")]
    EmptyDataset,

    /// The requested format is not one of the supported identifiers.
    #[error("format '{format}' is not supported, use one of: csv, json, markdown (md), sql")]
    InvalidFormat { format: String },

    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Errors raised when validating a generation request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("scenario description is required")]
    InvalidScenario,

    #[error("row count must be between 1 and 1000, got {count}")]
    InvalidRowCount { count: i64 },
}
