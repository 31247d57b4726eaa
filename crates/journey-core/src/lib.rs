//! Customer journey derivation engine.
//!
//! Takes a flat list of customer contact events, anchors every customer on
//! their first scheduled appointment, rebuilds the chain of contacts that
//! followed, and derives per-employee statistics plus a flow graph of
//! contact-type transitions.
//!
//! The engine is a pure batch transformation with no I/O. Reading
//! spreadsheets and writing exports lives in `journey-infrastructure`.
//!
//! # Example
//!
//! ```
//! use journey_core::{AnalysisConfig, ContactEvent, JourneyAnalyzer};
//! use chrono::NaiveDate;
//!
//! let at = |h| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let events = vec![
//!     ContactEvent::new(0, "A", "X", at(9), "Termin vereinbart"),
//!     ContactEvent::new(1, "A", "X", at(10), "Auftrag erteilt"),
//! ];
//!
//! let analyzer = JourneyAnalyzer::new(AnalysisConfig::default()).unwrap();
//! let report = analyzer.analyze_events(&events);
//! assert_eq!(report.journeys[0].terminal_status, "Auftrag erteilt");
//! assert_eq!(report.stats.employees[0].conversion_rate, 100.0);
//! ```

pub mod analysis;
pub mod config;
pub mod contact;
pub mod error;
pub mod flow;
pub mod journey;
pub mod projection;
pub mod stats;

pub use analysis::{AnalysisReport, AnalysisWarning, JourneyAnalyzer};
pub use config::{AnalysisConfig, ColumnMapping};
pub use contact::{ContactEvent, RawTable, RecordNormalizer};
pub use error::{JourneyError, Result};
pub use flow::{FlowEdge, FlowGraph, FlowGraphBuilder, FlowNode, NodeCategory};
pub use journey::{AppointmentSelector, Journey, JourneyBuilder};
pub use stats::{AggregationEngine, EmployeeStats, Overview, RankedEmployee, StatsReport};
