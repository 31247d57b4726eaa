//! Per-employee statistics over built journeys.
//!
//! # Module Structure
//!
//! - `model`: `EmployeeStats`, `Overview`, `RankedEmployee`, `StatsReport`
//! - `aggregator`: `AggregationEngine`

mod aggregator;
mod model;

pub use aggregator::{AggregationEngine, conversion_rate};
pub use model::{EmployeeStats, Overview, RankedEmployee, StatsReport};
