use crate::error::ExportError;
use crate::model::Row;
use serde::Serialize;

#[derive(Serialize)]
struct JsonExport<'a> {
    fields: &'a [String],
    data: &'a [Row],
    count: usize,
}

/// Renders rows as a pretty-printed `{fields, data, count}` document.
///
/// Unlike the other formats an empty row set is valid and yields
/// `"count": 0`.
pub fn export_json(rows: &[Row], fields: &[String]) -> Result<Vec<u8>, ExportError> {
    let document = JsonExport {
        fields,
        data: rows,
        count: rows.len(),
    };
    let json = serde_json::to_vec_pretty(&document)?;

    tracing::debug!(rows = rows.len(), fields = fields.len(), "rendered json export");
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn wraps_rows_with_fields_and_count() {
        let row = Row::from([
            ("id".to_string(), CellValue::Number(1.0)),
            ("name".to_string(), CellValue::from("John")),
        ]);
        let fields = vec!["id".to_string(), "name".to_string()];

        let bytes = export_json(&[row], &fields).unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            parsed,
            json!({"fields": ["id", "name"], "data": [{"id": 1, "name": "John"}], "count": 1})
        );
    }

    #[test]
    fn empty_rows_are_allowed() {
        let bytes = export_json(&[], &["id".to_string()]).unwrap();
        let parsed: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed["count"], json!(0));
        assert_eq!(parsed["data"], json!([]));
    }

    #[test]
    fn output_is_indented() {
        let bytes = export_json(&[Row::new()], &["id".to_string()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.lines().count() > 1);
        assert!(text.contains("\n  \"fields\""));
    }
}
