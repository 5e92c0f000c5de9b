//! Renderers turning a [`Dataset`] into export bytes.
//!
//! Every renderer is a pure function over its inputs and builds its output
//! in memory, so a failed export never yields partial bytes.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod sql;
pub mod value;

use crate::model::Dataset;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

pub use crate::error::ExportError;
pub use self::csv::export_csv;
pub use self::json::export_json;
pub use markdown::export_markdown;
pub use sql::{export_sql, DEFAULT_TABLE_NAME};

const FORMATS: [&str; 4] = ["csv", "json", "markdown", "sql"];

/// Supported format identifiers, sorted.
#[must_use]
pub fn available_formats() -> Vec<&'static str> {
    FORMATS.to_vec()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
    Sql,
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Sql => "sql",
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            other => other.as_str(),
        }
    }

    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Markdown => "text/markdown",
            Self::Sql => "application/sql",
        }
    }

    /// Download name for the export of dataset `id`, e.g. `mockdata-7.csv`.
    #[must_use]
    pub fn file_name(self, id: &str) -> String {
        format!("mockdata-{id}.{}", self.extension())
    }

    /// Renders `dataset` in this format. `table_name` is only read by
    /// [`ExportFormat::Sql`].
    pub fn render(self, dataset: &Dataset, table_name: &str) -> Result<Vec<u8>, ExportError> {
        let (rows, fields) = (&dataset.rows, &dataset.fields);
        match self {
            Self::Csv => export_csv(rows, fields),
            Self::Json => export_json(rows, fields),
            Self::Markdown => export_markdown(rows, fields),
            Self::Sql => export_sql(rows, fields, table_name),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "sql" => Ok(Self::Sql),
            _ => Err(ExportError::InvalidFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes rendered export bytes to `path`.
pub fn write_export<P: AsRef<Path>>(bytes: &[u8], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
