//! Cell rendering shared by the text exports.

use crate::model::value::integral;
use crate::model::CellValue;

/// Renders a cell for CSV and Markdown output.
///
/// Null becomes an empty string and integral numbers drop their
/// fractional part (`42`, never `42.0`).
#[must_use]
pub fn format_value(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::String(s) => s.clone(),
        CellValue::Number(n) => format_number(*n),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::Other(v) => v.to_string(),
    }
}

/// Renders a cell as a SQL literal.
///
/// Strings are single-quoted with embedded quotes doubled. No other
/// escaping is applied.
#[must_use]
pub fn format_sql_value(value: &CellValue) -> String {
    match value {
        CellValue::Null => "NULL".to_string(),
        CellValue::String(s) => format!("'{}'", s.replace('\'', "''")),
        CellValue::Number(n) => format_number(*n),
        CellValue::Boolean(true) => "TRUE".to_string(),
        CellValue::Boolean(false) => "FALSE".to_string(),
        CellValue::Other(v) => format!("'{v}'"),
    }
}

/// Column type for a cell, used when declaring the table.
#[must_use]
pub fn infer_sql_type(value: &CellValue) -> &'static str {
    match value {
        CellValue::Number(_) => "NUMERIC",
        CellValue::Boolean(_) => "BOOLEAN",
        CellValue::Null | CellValue::String(_) | CellValue::Other(_) => "TEXT",
    }
}

fn format_number(n: f64) -> String {
    match integral(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}
