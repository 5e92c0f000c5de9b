use super::CellValue;
use crate::error::DatasetError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A generated row: field name to cell value.
pub type Row = BTreeMap<String, CellValue>;

static NULL_CELL: CellValue = CellValue::Null;

/// Looks up `field` in `row`, treating a missing key as null.
#[must_use]
pub fn cell<'a>(row: &'a Row, field: &str) -> &'a CellValue {
    row.get(field).unwrap_or(&NULL_CELL)
}

/// Rows plus the ordered field list that fixes column order on export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(alias = "field_names")]
    pub fields: Vec<String>,
    #[serde(rename = "data")]
    pub rows: Vec<Row>,
}

impl Dataset {
    #[must_use]
    pub fn new(fields: Vec<String>, rows: Vec<Row>) -> Self {
        Self { fields, rows }
    }

    /// Parses a `{"fields": [...], "data": [...]}` document.
    ///
    /// The stored form, which names the field list `field_names`, is
    /// accepted too.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] for malformed JSON and
    /// [`DatasetError::MissingFields`] when no field names are present.
    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Reads and parses a dataset document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(&path).map_err(|source| DatasetError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.fields.is_empty() {
            return Err(DatasetError::MissingFields);
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
