use super::value::format_value;
use crate::error::ExportError;
use crate::model::{cell, Row};

const SEPARATOR_CELL: &str = "--------|";

/// Renders rows as a Markdown table.
///
/// ```text
/// | id | name |
/// |--------|--------|
/// | 1 | John |
/// ```
pub fn export_markdown(rows: &[Row], fields: &[String]) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyDataset);
    }

    let mut out = String::new();
    push_row(&mut out, fields.iter().map(String::as_str));

    out.push('|');
    for _ in fields {
        out.push_str(SEPARATOR_CELL);
    }
    out.push('\n');

    for row in rows {
        let values: Vec<String> = fields
            .iter()
            .map(|field| format_value(cell(row, field)))
            .collect();
        push_row(&mut out, values.iter().map(String::as_str));
    }

    tracing::debug!(rows = rows.len(), fields = fields.len(), "rendered markdown export");
    Ok(out.into_bytes())
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push_str("| ");
    out.push_str(&cells.collect::<Vec<_>>().join(" | "));
    out.push_str(" |\n");
}
