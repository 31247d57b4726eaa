//! Statistics domain models.
//!
//! All of these are recomputed from the journey list on every run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStats {
    pub employee: String,
    /// Journeys anchored on an appointment this employee scheduled.
    pub total_appointments: usize,
    /// Journeys whose terminal status is not the no-contact sentinel.
    pub with_follow_up: usize,
    /// Journeys whose terminal status is an order.
    pub orders: usize,
    /// Journey count per exact terminal status.
    pub status_histogram: BTreeMap<String, usize>,
    /// `orders / total_appointments * 100`, 0.0 when there are no appointments.
    pub conversion_rate: f64,
}

impl EmployeeStats {
    pub fn new(employee: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            total_appointments: 0,
            with_follow_up: 0,
            orders: 0,
            status_histogram: BTreeMap::new(),
            conversion_rate: 0.0,
        }
    }
}

/// Dataset-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub total_journeys: usize,
    pub employees: usize,
    pub with_follow_up: usize,
    pub ended_with_order: usize,
}

/// One line of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEmployee {
    pub employee: String,
    pub count: usize,
}

/// Everything the aggregation engine derives from a journey list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub overview: Overview,
    /// Ordered by `total_appointments` descending, first appearance on ties.
    pub employees: Vec<EmployeeStats>,
    pub top_by_appointments: Vec<RankedEmployee>,
    /// Only employees with at least one order.
    pub top_by_orders: Vec<RankedEmployee>,
}

impl StatsReport {
    /// Looks up the statistics for one employee.
    pub fn employee(&self, name: &str) -> Option<&EmployeeStats> {
        self.employees.iter().find(|s| s.employee == name)
    }
}
