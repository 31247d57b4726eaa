//! Record Normalizer: raw table rows to typed contact events.

use super::model::{ContactEvent, RawTable};
use crate::config::{AnalysisConfig, ColumnMapping};
use crate::error::{JourneyError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Resolved column positions for one table.
struct ColumnIndices {
    employee: usize,
    contact_type: usize,
    customer: usize,
    timestamp: usize,
    postal_code: Option<usize>,
    city: Option<usize>,
    report_owner: Option<usize>,
}

impl ColumnIndices {
    fn resolve(table: &RawTable, columns: &ColumnMapping) -> Result<Self> {
        let missing: Vec<&str> = columns
            .required()
            .into_iter()
            .filter(|name| table.column_index(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(JourneyError::schema(missing));
        }

        let required = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| JourneyError::schema([name]))
        };

        Ok(Self {
            employee: required(columns.employee.as_str())?,
            contact_type: required(columns.contact_type.as_str())?,
            customer: required(columns.customer.as_str())?,
            timestamp: required(columns.timestamp.as_str())?,
            postal_code: table.column_index(&columns.postal_code),
            city: table.column_index(&columns.city),
            report_owner: table.column_index(&columns.report_owner),
        })
    }
}

/// Turns a [`RawTable`] into [`ContactEvent`]s.
///
/// Any bad row fails the whole run: ordering downstream depends on every
/// timestamp being correct, so there is no best-effort mode.
pub struct RecordNormalizer<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Normalizes every row of the table, in input order.
    ///
    /// Rows whose cells are all blank are skipped but still counted, so row
    /// numbers in errors stay those of the source.
    ///
    /// # Errors
    ///
    /// - `JourneyError::Schema` if any of the four mandatory columns is absent
    /// - `JourneyError::MalformedInput` for an empty mandatory cell or an
    ///   unparseable timestamp, naming the 1-based data row
    pub fn normalize(&self, table: &RawTable) -> Result<Vec<ContactEvent>> {
        let columns = &self.config.columns;
        let idx = ColumnIndices::resolve(table, columns)?;

        let mut events = Vec::with_capacity(table.rows.len());
        for (sequence, cells) in table.rows.iter().enumerate() {
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            let row = sequence + 1;
            let cell = |i: usize| cells.get(i).map(|c| c.trim()).unwrap_or("");
            let optional = |i: Option<usize>| i.map(cell).unwrap_or("").to_string();
            let mandatory = |i: usize, name: &str| -> Result<String> {
                let value = cell(i);
                if value.is_empty() {
                    return Err(JourneyError::malformed(row, name, "required value is empty"));
                }
                Ok(value.to_string())
            };

            let employee = mandatory(idx.employee, columns.employee.as_str())?;
            let contact_type = mandatory(idx.contact_type, columns.contact_type.as_str())?;
            let customer_id = mandatory(idx.customer, columns.customer.as_str())?;
            let raw_timestamp = mandatory(idx.timestamp, columns.timestamp.as_str())?;
            let timestamp = parse_timestamp(&raw_timestamp, &self.config.timestamp_formats)
                .ok_or_else(|| {
                    JourneyError::malformed(
                        row,
                        &columns.timestamp,
                        format!("cannot parse timestamp '{}'", raw_timestamp),
                    )
                })?;

            events.push(ContactEvent {
                sequence,
                customer_id,
                employee,
                timestamp,
                contact_type,
                postal_code: optional(idx.postal_code),
                city: optional(idx.city),
                report_owner: optional(idx.report_owner),
            });
        }

        tracing::debug!(rows = table.rows.len(), "normalized contact events");
        Ok(events)
    }
}

/// Parses a timestamp with the given chrono formats, then RFC 3339.
///
/// Date-only formats resolve to midnight. Offsets in RFC 3339 input are
/// dropped in favour of the local wall-clock time, matching spreadsheet data.
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in formats {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.naive_local())
}
