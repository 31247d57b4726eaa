//! Appointment Selector: the anchoring appointment per customer.

use crate::config::AnalysisConfig;
use crate::contact::ContactEvent;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Anchoring appointment per customer id, ordered by customer id.
pub type AppointmentSelection<'e> = BTreeMap<&'e str, &'e ContactEvent>;

/// Picks the earliest "appointment scheduled" event of every customer.
///
/// Later appointment events of the same customer do not start journeys of
/// their own; they show up in the anchor's follow-up chain instead.
pub struct AppointmentSelector<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> AppointmentSelector<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Returns the anchoring appointment for every customer that has one.
    ///
    /// Among several matches the minimum timestamp wins; identical
    /// timestamps fall back to input order. Customers without any match are
    /// absent from the result.
    pub fn select<'e>(&self, events: &'e [ContactEvent]) -> AppointmentSelection<'e> {
        let mut selection = AppointmentSelection::new();

        for event in events
            .iter()
            .filter(|e| self.config.is_appointment(&e.contact_type))
        {
            match selection.entry(event.customer_id.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(event);
                }
                Entry::Occupied(mut slot) => {
                    if event.order_key() < slot.get().order_key() {
                        slot.insert(event);
                    }
                }
            }
        }

        tracing::debug!(
            customers = selection.len(),
            "selected anchoring appointments"
        );
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_selects_earliest_matching_event() {
        let config = AnalysisConfig::default();
        let events = vec![
            ContactEvent::new(0, "A", "X", at(3, 9), "Termin vereinbart"),
            ContactEvent::new(1, "A", "Y", at(1, 9), "termin VEREINBART per Mail"),
            ContactEvent::new(2, "A", "Z", at(1, 8), "Telefonat"),
        ];

        let selection = AppointmentSelector::new(&config).select(&events);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection["A"].sequence, 1);
        assert_eq!(selection["A"].employee, "Y");
    }

    #[test]
    fn test_identical_timestamps_keep_input_order() {
        let config = AnalysisConfig::default();
        let events = vec![
            ContactEvent::new(0, "A", "First", at(2, 9), "Termin vereinbart"),
            ContactEvent::new(1, "A", "Second", at(2, 9), "Termin vereinbart"),
        ];

        let selection = AppointmentSelector::new(&config).select(&events);

        assert_eq!(selection["A"].employee, "First");
    }

    #[test]
    fn test_customers_without_appointment_are_excluded() {
        let config = AnalysisConfig::default();
        let events = vec![
            ContactEvent::new(0, "A", "X", at(1, 9), "Telefonat"),
            ContactEvent::new(1, "B", "X", at(1, 9), "Termin vereinbart"),
        ];

        let selection = AppointmentSelector::new(&config).select(&events);

        assert!(!selection.contains_key("A"));
        assert!(selection.contains_key("B"));
    }
}
