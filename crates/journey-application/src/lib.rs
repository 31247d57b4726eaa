//! Application layer for the journey tool.
//!
//! Coordinates table sources, the core engine and the exporters so the CLI
//! only deals with argument parsing and terminal output.

pub mod analysis_usecase;
pub mod summary;

pub use analysis_usecase::{AnalysisUseCase, ExportScope};
pub use summary::{render_employees, render_flow, render_overview};
