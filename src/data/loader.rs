use std::path::Path;

use serde_json::Value as JsonValue;

use crate::data::model::Table;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a numeric table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – single object mapping column name → numeric array
/// * `.csv`  – header row of column names, one numeric row per record
///             (the writer's own output format)
pub fn load_table(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(Error::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (column-oriented):
///
/// ```json
/// {
///   "RA":  [182.1, 190.4],
///   "DEC": [-12.0, 33.5]
/// }
/// ```
///
/// Column order follows document order.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let obj = root
        .as_object()
        .ok_or_else(|| Error::TableData("expected a top-level JSON object".to_string()))?;

    let mut table = Table::new();
    for (name, value) in obj {
        let arr = value
            .as_array()
            .ok_or_else(|| Error::TableData(format!("column '{name}' is not an array")))?;
        let values = arr
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64()
                    .ok_or_else(|| Error::TableData(format!("column '{name}'[{i}] is not a number")))
            })
            .collect::<Result<Vec<f64>>>()?;
        table.push_column(name.clone(), values)?;
    }
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != headers.len() {
            return Err(Error::TableData(format!(
                "row {row_no} has {} fields, expected {}",
                record.len(),
                headers.len()
            )));
        }
        for (col, field) in record.iter().enumerate() {
            let v = field.trim().parse::<f64>().map_err(|_| {
                Error::TableData(format!(
                    "row {row_no}, column '{}': '{field}' is not a number",
                    headers[col]
                ))
            })?;
            columns[col].push(v);
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.into_iter().zip(columns) {
        table.push_column(name, values)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(name)
    }

    #[test]
    fn json_columns_keep_document_order() {
        let path = temp_path("starprep_loader_order.json");
        std::fs::write(&path, r#"{"b": [1, 2], "a": [3, 4]}"#).unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.names(), vec!["b", "a"]);
        assert_eq!(table.get("a"), Some([3.0, 4.0].as_slice()));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn json_rejects_ragged_and_non_numeric() {
        let path = temp_path("starprep_loader_ragged.json");
        std::fs::write(&path, r#"{"a": [1, 2], "b": [3]}"#).unwrap();
        assert!(matches!(
            load_table(&path).unwrap_err(),
            Error::ColumnLength { .. }
        ));

        std::fs::write(&path, r#"{"a": ["x"]}"#).unwrap();
        assert!(matches!(load_table(&path).unwrap_err(), Error::TableData(_)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unknown_extension_is_a_config_error() {
        let err = load_table(Path::new("data.parquet")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedExtension(e) if e == "parquet"));
    }
}
