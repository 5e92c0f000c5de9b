use super::value::format_value;
use crate::error::ExportError;
use crate::model::{cell, Row};

pub fn export_csv(rows: &[Row], fields: &[String]) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyDataset);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(fields)?;

    for row in rows {
        writer.write_record(fields.iter().map(|field| format_value(cell(row, field))))?;
    }

    let bytes = writer.into_inner().map_err(|e| ExportError::WriteError {
        message: e.error().to_string(),
    })?;

    tracing::debug!(rows = rows.len(), fields = fields.len(), "rendered csv export");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use pretty_assertions::assert_eq;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn quotes_delimiters_and_line_breaks() {
        let row = Row::from([
            ("a".to_string(), CellValue::from("x,y")),
            ("b".to_string(), CellValue::from("say \"hi\"")),
            ("c".to_string(), CellValue::from("two\nlines")),
        ]);

        let bytes = export_csv(&[row], &fields(&["a", "b", "c"])).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "a,b,c\n\"x,y\",\"say \"\"hi\"\"\",\"two\nlines\"\n"
        );
    }

    #[test]
    fn missing_and_null_cells_are_empty() {
        let row = Row::from([("a".to_string(), CellValue::Null)]);

        let bytes = export_csv(&[row], &fields(&["a", "b"])).unwrap();

        assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\n,\n");
    }

    #[test]
    fn empty_rows_fail() {
        let err = export_csv(&[], &fields(&["a"])).unwrap_err();
        assert!(matches!(err, ExportError::EmptyDataset));
    }
}
