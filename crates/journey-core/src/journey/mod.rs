//! Journey domain module.
//!
//! This module derives one customer journey per customer from the flat list
//! of contact events.
//!
//! # Module Structure
//!
//! - `model`: `Journey`
//! - `selector`: `AppointmentSelector`, the anchoring appointment per customer
//! - `builder`: `JourneyBuilder`, the follow-up chain after the anchor
//!
//! # Usage
//!
//! ```ignore
//! use journey_core::journey::{AppointmentSelector, JourneyBuilder};
//!
//! let anchors = AppointmentSelector::new(&config).select(&events);
//! let journeys = JourneyBuilder::new(&config).build(&anchors, &events);
//! ```

mod builder;
mod model;
mod selector;

pub use builder::JourneyBuilder;
pub use model::{CHAIN_SEPARATOR, Journey};
pub use selector::{AppointmentSelection, AppointmentSelector};
