//! Journey domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Separator used when a follow-up chain is rendered as one string.
pub const CHAIN_SEPARATOR: &str = " → ";

/// The path of one customer from their first scheduled appointment onward.
///
/// Created once per customer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    /// Employee who scheduled the anchoring appointment.
    pub employee: String,
    pub customer_id: String,
    pub appointment_timestamp: NaiveDateTime,
    pub appointment_type: String,
    /// Contact types after the appointment, oldest first.
    ///
    /// Never empty: a journey without later contacts holds the single
    /// no-further-contact label.
    pub follow_up_types: Vec<String>,
    /// Number of real contact events behind `follow_up_types` (0 for the sentinel case).
    pub follow_up_count: usize,
    pub last_contact_timestamp: NaiveDateTime,
    pub last_contact_owner: String,
    /// Always the last element of `follow_up_types`.
    pub terminal_status: String,
    /// Postal code of the appointment event, if the input carried one.
    #[serde(default)]
    pub postal_code: String,
    /// City of the appointment event, if the input carried one.
    #[serde(default)]
    pub city: String,
}

impl Journey {
    /// Follow-up types joined with [`CHAIN_SEPARATOR`].
    pub fn chain(&self) -> String {
        self.follow_up_types.join(CHAIN_SEPARATOR)
    }

    /// `[appointment_type, follow_up_types...]`, the node path used by the flow graph.
    pub fn label_sequence(&self) -> Vec<&str> {
        std::iter::once(self.appointment_type.as_str())
            .chain(self.follow_up_types.iter().map(String::as_str))
            .collect()
    }
}
