//! Analysis configuration.
//!
//! Every knob the engine reads lives here so a run is fully described by
//! `(AnalysisConfig, input table)`. The defaults match the German CRM export
//! the tool was built for.

use crate::error::{JourneyError, Result};
use serde::{Deserialize, Serialize};

/// Default marker identifying "appointment scheduled" contact types.
pub const DEFAULT_APPOINTMENT_MARKER: &str = "Termin vereinbart";
/// Default marker identifying order outcomes.
pub const DEFAULT_ORDER_MARKER: &str = "Auftrag";
/// Sentinel follow-up label for journeys without any later contact.
pub const DEFAULT_NO_CONTACT_LABEL: &str = "no further contact";
/// Rendering format for timestamps in tabular output.
pub const TIMESTAMP_OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

fn default_appointment_marker() -> String {
    DEFAULT_APPOINTMENT_MARKER.to_string()
}

fn default_order_marker() -> String {
    DEFAULT_ORDER_MARKER.to_string()
}

fn default_no_contact_label() -> String {
    DEFAULT_NO_CONTACT_LABEL.to_string()
}

fn default_top_employees() -> usize {
    10
}

fn default_top_edges() -> usize {
    30
}

fn default_timestamp_formats() -> Vec<String> {
    [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%Y-%m-%d",
        "%d.%m.%Y",
    ]
    .iter()
    .map(|f| f.to_string())
    .collect()
}

/// Header names of the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "ColumnMapping::default_employee")]
    pub employee: String,
    #[serde(default = "ColumnMapping::default_contact_type")]
    pub contact_type: String,
    #[serde(default = "ColumnMapping::default_customer")]
    pub customer: String,
    #[serde(default = "ColumnMapping::default_timestamp")]
    pub timestamp: String,
    #[serde(default = "ColumnMapping::default_postal_code")]
    pub postal_code: String,
    #[serde(default = "ColumnMapping::default_city")]
    pub city: String,
    #[serde(default = "ColumnMapping::default_report_owner")]
    pub report_owner: String,
}

impl ColumnMapping {
    fn default_employee() -> String {
        "Mitarbeiter".to_string()
    }

    fn default_contact_type() -> String {
        "Kontaktart".to_string()
    }

    fn default_customer() -> String {
        "Kontakt".to_string()
    }

    fn default_timestamp() -> String {
        "Datum/Uhrzeit".to_string()
    }

    fn default_postal_code() -> String {
        "PLZ".to_string()
    }

    fn default_city() -> String {
        "Ort".to_string()
    }

    fn default_report_owner() -> String {
        "Berichtsinhaber".to_string()
    }

    /// The four columns a table must carry, in reporting order.
    pub fn required(&self) -> [&str; 4] {
        [
            self.employee.as_str(),
            self.contact_type.as_str(),
            self.customer.as_str(),
            self.timestamp.as_str(),
        ]
    }

    fn all(&self) -> [&str; 7] {
        [
            self.employee.as_str(),
            self.contact_type.as_str(),
            self.customer.as_str(),
            self.timestamp.as_str(),
            self.postal_code.as_str(),
            self.city.as_str(),
            self.report_owner.as_str(),
        ]
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            employee: Self::default_employee(),
            contact_type: Self::default_contact_type(),
            customer: Self::default_customer(),
            timestamp: Self::default_timestamp(),
            postal_code: Self::default_postal_code(),
            city: Self::default_city(),
            report_owner: Self::default_report_owner(),
        }
    }
}

/// Configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Case-insensitive substring that marks an "appointment scheduled" event.
    #[serde(default = "default_appointment_marker")]
    pub appointment_marker: String,
    /// Case-insensitive substring that marks an order outcome.
    #[serde(default = "default_order_marker")]
    pub order_marker: String,
    /// Follow-up label used when no contact happened after the appointment.
    #[serde(default = "default_no_contact_label")]
    pub no_contact_label: String,
    /// N for the top-employee rollups.
    #[serde(default = "default_top_employees")]
    pub top_employees: usize,
    /// K for the flow-graph edge selection.
    #[serde(default = "default_top_edges")]
    pub top_edges: usize,
    /// chrono formats tried in order when parsing timestamps.
    #[serde(default = "default_timestamp_formats")]
    pub timestamp_formats: Vec<String>,
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            appointment_marker: default_appointment_marker(),
            order_marker: default_order_marker(),
            no_contact_label: default_no_contact_label(),
            top_employees: default_top_employees(),
            top_edges: default_top_edges(),
            timestamp_formats: default_timestamp_formats(),
            columns: ColumnMapping::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.appointment_marker.trim().is_empty() {
            return Err(JourneyError::config("appointment_marker must not be empty"));
        }
        if self.order_marker.trim().is_empty() {
            return Err(JourneyError::config("order_marker must not be empty"));
        }
        if self.no_contact_label.trim().is_empty() {
            return Err(JourneyError::config("no_contact_label must not be empty"));
        }
        if self.top_employees == 0 {
            return Err(JourneyError::config("top_employees must be at least 1"));
        }
        if self.top_edges == 0 {
            return Err(JourneyError::config("top_edges must be at least 1"));
        }
        if self.timestamp_formats.is_empty() {
            return Err(JourneyError::config(
                "timestamp_formats must list at least one format",
            ));
        }
        if self.columns.all().iter().any(|c| c.trim().is_empty()) {
            return Err(JourneyError::config("column names must not be empty"));
        }
        Ok(())
    }

    /// Whether a contact type denotes a scheduled appointment.
    pub fn is_appointment(&self, contact_type: &str) -> bool {
        contains_marker(contact_type, &self.appointment_marker)
    }

    /// Whether a contact type or terminal status denotes an order.
    pub fn is_order(&self, label: &str) -> bool {
        contains_marker(label, &self.order_marker)
    }

    /// Whether a label is the no-further-contact sentinel.
    pub fn is_no_contact(&self, label: &str) -> bool {
        label == self.no_contact_label
    }
}

/// Case-insensitive substring match.
///
/// Contact types are free text, so any variant containing the marker matches.
pub fn contains_marker(text: &str, marker: &str) -> bool {
    text.to_lowercase().contains(&marker.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.top_employees, 10);
        assert_eq!(config.top_edges, 30);
        assert_eq!(config.columns.required()[3], "Datum/Uhrzeit");
    }

    #[test]
    fn test_marker_match_is_case_insensitive_substring() {
        let config = AnalysisConfig::default();
        assert!(config.is_appointment("Termin vereinbart"));
        assert!(config.is_appointment("TERMIN VEREINBART (telefonisch)"));
        assert!(config.is_appointment("Erst-termin Vereinbart"));
        assert!(!config.is_appointment("Termin abgesagt"));
        assert!(config.is_order("Auftrag erteilt"));
        assert!(config.is_order("kein auftrag"));
        assert!(!config.is_order("Angebot"));
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = AnalysisConfig::default();
        config.top_edges = 0;
        assert!(config.validate().unwrap_err().is_config());

        let mut config = AnalysisConfig::default();
        config.columns.customer = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            order_marker = "order"
            [columns]
            customer = "Customer"
            "#,
        )
        .unwrap();
        assert_eq!(config.order_marker, "order");
        assert_eq!(config.appointment_marker, DEFAULT_APPOINTMENT_MARKER);
        assert_eq!(config.columns.customer, "Customer");
        assert_eq!(config.columns.employee, "Mitarbeiter");
        assert!(!config.timestamp_formats.is_empty());
    }
}
