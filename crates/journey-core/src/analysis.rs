//! One-pass analysis: normalizer → selector → builder → {aggregation, flow}.

use crate::config::AnalysisConfig;
use crate::contact::{ContactEvent, RawTable, RecordNormalizer};
use crate::error::Result;
use crate::flow::{FlowGraph, FlowGraphBuilder};
use crate::journey::{AppointmentSelector, Journey, JourneyBuilder};
use crate::stats::{AggregationEngine, StatsReport};
use serde::{Deserialize, Serialize};

/// Non-fatal conditions the caller should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// No customer had a qualifying appointment; every result set is empty.
    EmptyResult,
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyResult => write!(f, "no customer has a qualifying appointment"),
        }
    }
}

/// Complete output of one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of contact events fed into the run.
    pub event_count: usize,
    /// One journey per customer with an appointment, ordered by customer id.
    pub journeys: Vec<Journey>,
    pub stats: StatsReport,
    pub flow: FlowGraph,
    #[serde(default)]
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }

    pub fn has_warning(&self, warning: AnalysisWarning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Journeys anchored by one employee, in report order.
    pub fn journeys_for(&self, employee: &str) -> Vec<&Journey> {
        self.journeys
            .iter()
            .filter(|j| j.employee == employee)
            .collect()
    }
}

/// Runs the whole derivation for one dataset.
///
/// Holds nothing but its configuration: every call is independent and the
/// same input always yields the same report.
#[derive(Debug, Clone)]
pub struct JourneyAnalyzer {
    config: AnalysisConfig,
}

impl JourneyAnalyzer {
    /// Creates an analyzer after validating the configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Normalizes a raw table and analyzes the resulting events.
    pub fn analyze_table(&self, table: &RawTable) -> Result<AnalysisReport> {
        let events = RecordNormalizer::new(&self.config).normalize(table)?;
        Ok(self.analyze_events(&events))
    }

    /// Analyzes already typed events.
    ///
    /// `events` must be in input order; `sequence` only breaks timestamp ties.
    pub fn analyze_events(&self, events: &[ContactEvent]) -> AnalysisReport {
        let selection = AppointmentSelector::new(&self.config).select(events);
        let journeys = JourneyBuilder::new(&self.config).build(&selection, events);
        let stats = AggregationEngine::new(&self.config).aggregate(&journeys);
        let flow = FlowGraphBuilder::new(&self.config).build(&journeys);

        let mut warnings = Vec::new();
        if journeys.is_empty() {
            tracing::warn!(events = events.len(), "{}", AnalysisWarning::EmptyResult);
            warnings.push(AnalysisWarning::EmptyResult);
        } else {
            tracing::info!(
                events = events.len(),
                journeys = journeys.len(),
                employees = stats.overview.employees,
                orders = stats.overview.ended_with_order,
                "analysis complete"
            );
        }

        AnalysisReport {
            event_count: events.len(),
            journeys,
            stats,
            flow,
            warnings,
        }
    }
}
