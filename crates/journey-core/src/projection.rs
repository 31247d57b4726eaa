//! Flat tabular projections of the analysis results.
//!
//! Column order is fixed by field order and spelled out in each row type's
//! `HEADERS`, so exports of an empty result still carry a header line.

use crate::config::TIMESTAMP_OUTPUT_FORMAT;
use crate::flow::{FlowEdge, FlowGraph, NodeCategory};
use crate::journey::Journey;
use crate::stats::EmployeeStats;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Renders a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_OUTPUT_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyRow {
    pub employee: String,
    pub customer_id: String,
    pub appointment_timestamp: String,
    pub appointment_type: String,
    pub follow_up_types: String,
    pub follow_up_count: usize,
    pub last_contact_timestamp: String,
    pub last_contact_owner: String,
    pub terminal_status: String,
    pub postal_code: String,
    pub city: String,
}

impl JourneyRow {
    pub const HEADERS: &'static [&'static str] = &[
        "employee",
        "customer_id",
        "appointment_timestamp",
        "appointment_type",
        "follow_up_types",
        "follow_up_count",
        "last_contact_timestamp",
        "last_contact_owner",
        "terminal_status",
        "postal_code",
        "city",
    ];
}

impl From<&Journey> for JourneyRow {
    fn from(journey: &Journey) -> Self {
        Self {
            employee: journey.employee.clone(),
            customer_id: journey.customer_id.clone(),
            appointment_timestamp: format_timestamp(&journey.appointment_timestamp),
            appointment_type: journey.appointment_type.clone(),
            follow_up_types: journey.chain(),
            follow_up_count: journey.follow_up_count,
            last_contact_timestamp: format_timestamp(&journey.last_contact_timestamp),
            last_contact_owner: journey.last_contact_owner.clone(),
            terminal_status: journey.terminal_status.clone(),
            postal_code: journey.postal_code.clone(),
            city: journey.city.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRow {
    pub employee: String,
    pub total_appointments: usize,
    pub with_follow_up: usize,
    pub orders: usize,
    /// Percentage with two decimals.
    pub conversion_rate: String,
    /// `status=count` pairs joined by `"; "`.
    pub status_histogram: String,
}

impl EmployeeRow {
    pub const HEADERS: &'static [&'static str] = &[
        "employee",
        "total_appointments",
        "with_follow_up",
        "orders",
        "conversion_rate",
        "status_histogram",
    ];
}

impl From<&EmployeeStats> for EmployeeRow {
    fn from(stats: &EmployeeStats) -> Self {
        let status_histogram = stats
            .status_histogram
            .iter()
            .map(|(status, count)| format!("{}={}", status, count))
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            employee: stats.employee.clone(),
            total_appointments: stats.total_appointments,
            with_follow_up: stats.with_follow_up,
            orders: stats.orders,
            conversion_rate: format!("{:.2}", stats.conversion_rate),
            status_histogram,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdgeRow {
    pub source: String,
    pub target: String,
    pub weight: usize,
    pub source_category: NodeCategory,
    pub target_category: NodeCategory,
}

impl FlowEdgeRow {
    pub const HEADERS: &'static [&'static str] =
        &["source", "target", "weight", "source_category", "target_category"];

    /// Projects an edge of `graph`; labels outside the graph count as `Other`.
    pub fn from_edge(edge: &FlowEdge, graph: &FlowGraph) -> Self {
        let category = |label: &str| graph.category_of(label).unwrap_or(NodeCategory::Other);
        Self {
            source: edge.source_label.clone(),
            target: edge.target_label.clone(),
            weight: edge.weight,
            source_category: category(&edge.source_label),
            target_category: category(&edge.target_label),
        }
    }
}

/// Rows for every journey, in report order.
pub fn journey_rows<'a, I>(journeys: I) -> Vec<JourneyRow>
where
    I: IntoIterator<Item = &'a Journey>,
{
    journeys.into_iter().map(JourneyRow::from).collect()
}

pub fn employee_rows(stats: &[EmployeeStats]) -> Vec<EmployeeRow> {
    stats.iter().map(EmployeeRow::from).collect()
}

pub fn flow_rows(graph: &FlowGraph) -> Vec<FlowEdgeRow> {
    graph
        .edges
        .iter()
        .map(|edge| FlowEdgeRow::from_edge(edge, graph))
        .collect()
}
