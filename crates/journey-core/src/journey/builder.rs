//! Journey Builder: follow-up chain after each anchoring appointment.

use super::model::Journey;
use super::selector::AppointmentSelection;
use crate::config::AnalysisConfig;
use crate::contact::ContactEvent;
use std::collections::HashMap;

/// Builds one [`Journey`] per selected appointment.
pub struct JourneyBuilder<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> JourneyBuilder<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Builds journeys in the selection's customer order.
    ///
    /// Follow-ups are every event of the same customer with a timestamp
    /// strictly after the appointment, oldest first, input order on ties.
    pub fn build(
        &self,
        selection: &AppointmentSelection<'_>,
        events: &[ContactEvent],
    ) -> Vec<Journey> {
        let mut by_customer: HashMap<&str, Vec<&ContactEvent>> = HashMap::new();
        for event in events {
            by_customer
                .entry(event.customer_id.as_str())
                .or_default()
                .push(event);
        }

        let journeys: Vec<Journey> = selection
            .values()
            .map(|appointment| {
                let later = by_customer
                    .get(appointment.customer_id.as_str())
                    .map(|history| {
                        let mut later: Vec<&ContactEvent> = history
                            .iter()
                            .copied()
                            .filter(|e| e.timestamp > appointment.timestamp)
                            .collect();
                        later.sort_by_key(|e| e.order_key());
                        later
                    })
                    .unwrap_or_default();
                self.journey_from(appointment, &later)
            })
            .collect();

        tracing::debug!(journeys = journeys.len(), "built customer journeys");
        journeys
    }

    fn journey_from(&self, appointment: &ContactEvent, later: &[&ContactEvent]) -> Journey {
        let (follow_up_types, last_contact_timestamp, last_contact_owner): (Vec<String>, _, _) =
            match later.last() {
                Some(last) => (
                    later.iter().map(|e| e.contact_type.clone()).collect(),
                    last.timestamp,
                    last.report_owner.clone(),
                ),
                None => (
                    vec![self.config.no_contact_label.clone()],
                    appointment.timestamp,
                    appointment.report_owner.clone(),
                ),
            };
        let terminal_status = follow_up_types
            .last()
            .cloned()
            .unwrap_or_else(|| self.config.no_contact_label.clone());

        Journey {
            employee: appointment.employee.clone(),
            customer_id: appointment.customer_id.clone(),
            appointment_timestamp: appointment.timestamp,
            appointment_type: appointment.contact_type.clone(),
            follow_up_types,
            follow_up_count: later.len(),
            last_contact_timestamp,
            last_contact_owner,
            terminal_status,
            postal_code: appointment.postal_code.clone(),
            city: appointment.city.clone(),
        }
    }
}
