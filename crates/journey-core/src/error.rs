//! Error types for the journey engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole journey workspace.
///
/// Schema and input errors are fatal for a run: the engine is a pure
/// function of its input, so none of these are retried.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JourneyError {
    /// One or more mandatory columns are absent from the input table.
    #[error("Schema error: missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A row could not be turned into a contact event.
    #[error("Malformed input in row {row}, column '{column}': {message}")]
    MalformedInput {
        /// 1-based data row (the header row is not counted).
        row: usize,
        column: String,
        message: String,
    },

    /// Reading the input or writing an export failed.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A CSV, JSON or TOML document could not be read or written.
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        /// `CSV`, `JSON` or `TOML`.
        format: String,
        message: String,
    },

    /// The analysis configuration cannot drive a run.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A broken internal invariant.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JourneyError {
    /// Creates a Schema error naming the missing columns.
    pub fn schema<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Schema {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a MalformedInput error for the given data row.
    pub fn malformed(row: usize, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            row,
            column: column.into(),
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns the offending data row for input errors.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JourneyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", err.kind(), err),
        }
    }
}

impl From<serde_json::Error> for JourneyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for JourneyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for JourneyError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for JourneyError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return Self::io(err.to_string());
        }
        Self::Serialization {
            format: "CSV".to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JourneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_every_missing_column() {
        let err = JourneyError::schema(["Kontakt", "Datum/Uhrzeit"]);
        assert!(err.is_schema());
        assert_eq!(
            err.to_string(),
            "Schema error: missing required column(s): Kontakt, Datum/Uhrzeit"
        );
    }

    #[test]
    fn test_malformed_input_carries_row() {
        let err = JourneyError::malformed(7, "Datum/Uhrzeit", "cannot parse 'gestern'");
        assert!(err.is_malformed_input());
        assert_eq!(err.row(), Some(7));
        assert!(err.to_string().contains("row 7"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: JourneyError = io.into();
        assert!(err.is_io());
        assert_eq!(err.row(), None);
    }
}
