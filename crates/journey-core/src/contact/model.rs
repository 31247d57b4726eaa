//! Contact event domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A rectangular table as read from a spreadsheet export.
///
/// Cells are kept as text; typing happens in the [`RecordNormalizer`](super::RecordNormalizer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of a header, trimmed exact match first, then case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.headers
                    .iter()
                    .position(|h| h.trim().to_lowercase() == lower)
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A single typed contact with a customer.
///
/// Immutable once produced by the normalizer. `sequence` is the 0-based
/// position in the input and breaks ties between identical timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub sequence: usize,
    pub customer_id: String,
    pub employee: String,
    pub timestamp: NaiveDateTime,
    pub contact_type: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub report_owner: String,
}

impl ContactEvent {
    /// Creates an event without the optional location/owner fields.
    pub fn new(
        sequence: usize,
        customer_id: impl Into<String>,
        employee: impl Into<String>,
        timestamp: NaiveDateTime,
        contact_type: impl Into<String>,
    ) -> Self {
        Self {
            sequence,
            customer_id: customer_id.into(),
            employee: employee.into(),
            timestamp,
            contact_type: contact_type.into(),
            postal_code: String::new(),
            city: String::new(),
            report_owner: String::new(),
        }
    }

    pub fn with_report_owner(mut self, owner: impl Into<String>) -> Self {
        self.report_owner = owner.into();
        self
    }

    pub fn with_location(mut self, postal_code: impl Into<String>, city: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self.city = city.into();
        self
    }

    /// Chronological ordering key; input order breaks timestamp ties.
    pub fn order_key(&self) -> (NaiveDateTime, usize) {
        (self.timestamp, self.sequence)
    }
}
