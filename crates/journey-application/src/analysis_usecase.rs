//! Analysis use case.
//!
//! Reads a contact table from a [`TableSource`], runs the journey engine and
//! hands the report to a [`ReportExporter`].

use anyhow::{Context, Result};
use chrono::NaiveDate;
use journey_core::{AnalysisConfig, AnalysisReport, JourneyAnalyzer};
use journey_infrastructure::source::{TableSource, open_source};
use journey_infrastructure::{ConfigService, ExportManifest, ReportExporter};
use std::path::Path;

/// Which files an export run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Journeys, employee statistics, flow edges and the JSON report.
    Full,
    /// The overall journeys file plus one journeys file per employee.
    PerEmployee,
}

/// Use case for deriving journeys from one dataset.
pub struct AnalysisUseCase {
    analyzer: JourneyAnalyzer,
}

impl AnalysisUseCase {
    /// Creates a use case for an explicit configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let analyzer = JourneyAnalyzer::new(config).context("invalid analysis configuration")?;
        Ok(Self { analyzer })
    }

    /// Creates a use case from the configuration file behind `service`.
    pub fn from_config_service(service: &ConfigService) -> Result<Self> {
        let config = service
            .load()
            .with_context(|| format!("failed to load config from {}", service.path().display()))?;
        Self::new(config)
    }

    pub fn config(&self) -> &AnalysisConfig {
        self.analyzer.config()
    }

    /// Reads the whole table from `source` and analyzes it.
    ///
    /// An empty result is not an error: the report carries
    /// [`journey_core::AnalysisWarning::EmptyResult`], which the engine has already logged.
    pub fn analyze(&self, source: &dyn TableSource) -> Result<AnalysisReport> {
        let origin = source.describe();
        tracing::debug!(source = %origin, "reading contact table");

        let table = source
            .read_table()
            .with_context(|| format!("failed to read {}", origin))?;
        tracing::debug!(rows = table.len(), columns = table.headers.len(), "table loaded");

        self.analyzer
            .analyze_table(&table)
            .with_context(|| format!("failed to analyze {}", origin))
    }

    /// Opens `path` by extension (`.json` or CSV with `delimiter`) and analyzes it.
    pub fn analyze_path(&self, path: &Path, delimiter: u8) -> Result<AnalysisReport> {
        let source = open_source(path, delimiter);
        self.analyze(source.as_ref())
    }

    /// Writes the report into `out_dir`, naming files after `date`.
    pub fn export(
        &self,
        report: &AnalysisReport,
        out_dir: &Path,
        date: NaiveDate,
        scope: ExportScope,
    ) -> Result<ExportManifest> {
        let exporter = ReportExporter::new(out_dir, date);
        let manifest = match scope {
            ExportScope::Full => exporter.export_all(report),
            ExportScope::PerEmployee => exporter.export_employee_journeys(report),
        }
        .with_context(|| format!("failed to export to {}", out_dir.display()))?;
        Ok(manifest)
    }
}
