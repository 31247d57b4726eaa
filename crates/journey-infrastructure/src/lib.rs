//! I/O around the journey engine: table sources, exporters, configuration
//! storage and platform paths.

pub mod config_service;
pub mod export;
pub mod paths;
pub mod source;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::export::{ExportManifest, ReportExporter};
pub use crate::paths::JourneyPaths;
pub use crate::source::{CsvTableSource, JsonTableSource, TableSource, open_source};
