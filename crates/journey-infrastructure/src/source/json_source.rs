use super::TableSource;
use journey_core::{JourneyError, RawTable, Result};
use serde_json::Value;
use std::path::PathBuf;

/// Reads a JSON array of objects keyed by column name.
///
/// Strings are taken verbatim, numbers and booleans are rendered as text,
/// `null` and absent keys become empty cells.
pub struct JsonTableSource {
    path: PathBuf,
}

impl JsonTableSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parses a JSON document already in memory.
    pub fn read_from_str(content: &str) -> Result<RawTable> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Array(items) = value else {
            return Err(json_error("expected a top-level array of row objects"));
        };

        let mut headers: Vec<String> = Vec::new();
        for (i, item) in items.iter().enumerate() {
            let Value::Object(map) = item else {
                return Err(json_error(format!("row {} is not an object", i + 1)));
            };
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }

        let rows = items
            .iter()
            .map(|item| {
                headers
                    .iter()
                    .map(|h| item.get(h).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Ok(RawTable::new(headers, rows))
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_error(message: impl Into<String>) -> JourneyError {
    JourneyError::Serialization {
        format: "JSON".to_string(),
        message: message.into(),
    }
}

impl TableSource for JsonTableSource {
    fn read_table(&self) -> Result<RawTable> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            JourneyError::io(format!("cannot open {}: {}", self.path.display(), e))
        })?;
        let table = Self::read_from_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "read JSON table"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_with_mixed_values() {
        let table = JsonTableSource::read_from_str(
            r#"[
                {"Mitarbeiter": "Anna", "Kontakt": "A", "PLZ": 10115},
                {"Mitarbeiter": "Ben", "Kontakt": "B", "PLZ": null, "Ort": "Köln"}
            ]"#,
        )
        .unwrap();

        let plz = table.column_index("PLZ").unwrap();
        let ort = table.column_index("Ort").unwrap();
        assert_eq!(table.rows[0][plz], "10115");
        assert_eq!(table.rows[0][ort], "");
        assert_eq!(table.rows[1][plz], "");
        assert_eq!(table.rows[1][ort], "Köln");
    }

    #[test]
    fn test_non_array_is_rejected() {
        let err = JsonTableSource::read_from_str(r#"{"Kontakt": "A"}"#).unwrap_err();
        assert!(matches!(err, JourneyError::Serialization { .. }));
    }
}
