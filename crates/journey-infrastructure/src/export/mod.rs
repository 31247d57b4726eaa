//! Exporters for analysis results.
//!
//! # Module Structure
//!
//! - `csv_export`: CSV rendering of the core projections
//! - `report_exporter`: file layout of an export run

mod csv_export;
mod report_exporter;

pub use csv_export::{render_csv, render_employees_csv, render_flow_csv, render_journeys_csv};
pub use report_exporter::{ExportManifest, ReportExporter, sanitize_file_component};
