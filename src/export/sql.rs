use super::value::{format_sql_value, infer_sql_type};
use crate::error::ExportError;
use crate::model::{cell, Row};
use std::fmt::Write;

pub const DEFAULT_TABLE_NAME: &str = "mock_data";

/// Renders rows as a `CREATE TABLE` statement followed by one `INSERT`
/// per row.
///
/// Column types come from the first row only; a column that is null
/// there is declared `TEXT` even if later rows hold numbers. An empty
/// `table_name` falls back to [`DEFAULT_TABLE_NAME`].
pub fn export_sql(rows: &[Row], fields: &[String], table_name: &str) -> Result<Vec<u8>, ExportError> {
    let Some(first_row) = rows.first() else {
        return Err(ExportError::EmptyDataset);
    };

    let table_name = if table_name.is_empty() {
        tracing::warn!(default = DEFAULT_TABLE_NAME, "no table name given, using default");
        DEFAULT_TABLE_NAME
    } else {
        table_name
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "-- Generated data");
    let _ = writeln!(out, "-- Table: {table_name}");
    out.push('\n');

    let _ = writeln!(out, "CREATE TABLE IF NOT EXISTS {table_name} (");
    let columns: Vec<String> = fields
        .iter()
        .map(|field| format!("  {field} {}", infer_sql_type(cell(first_row, field))))
        .collect();
    out.push_str(&columns.join(",\n"));
    out.push_str("\n);\n\n");

    let column_list = fields.join(", ");
    for row in rows {
        let values: Vec<String> = fields
            .iter()
            .map(|field| format_sql_value(cell(row, field)))
            .collect();
        let _ = writeln!(
            out,
            "INSERT INTO {table_name} ({column_list}) VALUES ({});",
            values.join(", ")
        );
    }

    tracing::debug!(rows = rows.len(), fields = fields.len(), table = table_name, "rendered sql export");
    Ok(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_script() {
        let rows = vec![
            Row::from([
                ("id".to_string(), CellValue::Number(1.0)),
                ("name".to_string(), CellValue::from("O'Brien")),
            ]),
            Row::from([("id".to_string(), CellValue::Number(2.0))]),
        ];
        let fields = vec!["id".to_string(), "name".to_string()];

        let bytes = export_sql(&rows, &fields, "people").unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "-- Generated data\n\
             -- Table: people\n\
             \n\
             CREATE TABLE IF NOT EXISTS people (\n  id NUMERIC,\n  name TEXT\n);\n\n\
             INSERT INTO people (id, name) VALUES (1, 'O''Brien');\n\
             INSERT INTO people (id, name) VALUES (2, NULL);\n"
        );
    }

    #[test]
    fn blank_table_name_uses_default() {
        let rows = vec![Row::from([("id".to_string(), CellValue::Number(1.0))])];

        let bytes = export_sql(&rows, &["id".to_string()], "").unwrap();
        let sql = String::from_utf8(bytes).unwrap();

        assert!(sql.contains("CREATE TABLE IF NOT EXISTS mock_data ("));
        assert!(sql.contains("INSERT INTO mock_data (id) VALUES (1);"));
    }

    #[test]
    fn column_types_follow_first_row_only() {
        let rows = vec![
            Row::from([("score".to_string(), CellValue::Null)]),
            Row::from([("score".to_string(), CellValue::Number(9.5))]),
        ];

        let bytes = export_sql(&rows, &["score".to_string()], "t").unwrap();
        let sql = String::from_utf8(bytes).unwrap();

        assert!(sql.contains("  score TEXT\n"));
        assert!(sql.contains("VALUES (9.5);"));
    }

    #[test]
    fn empty_rows_fail() {
        let err = export_sql(&[], &["id".to_string()], "t").unwrap_err();
        assert!(matches!(err, ExportError::EmptyDataset));
    }
}
