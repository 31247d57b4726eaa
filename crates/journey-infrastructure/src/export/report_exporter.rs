//! File layout of an export run.
//!
//! Every file name carries the run date as `YYYYMMDD`:
//!
//! ```text
//! <out_dir>/
//! ├── journeys_all_20240401.csv
//! ├── journeys_<employee>_20240401.csv   # `employees` subcommand only
//! ├── employees_20240401.csv
//! ├── flow_20240401.csv
//! └── report_20240401.json
//! ```

use super::csv_export::{render_employees_csv, render_flow_csv, render_journeys_csv};
use crate::storage::write_atomic;
use chrono::NaiveDate;
use journey_core::{AnalysisReport, Result};
use std::path::{Path, PathBuf};

const OVERALL_JOURNEYS_STEM: &str = "journeys_all";

/// Paths written by one export call, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportManifest {
    pub files: Vec<PathBuf>,
}

impl ExportManifest {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn push(&mut self, path: PathBuf) {
        self.files.push(path);
    }
}

/// Replaces everything except letters, digits, `-` and `_` with `_`.
///
/// Returns `"unknown"` when nothing usable is left.
pub fn sanitize_file_component(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_matches('_');
    if sanitized.is_empty() {
        "unknown".to_string()
    } else {
        sanitized.to_string()
    }
}

/// Writes analysis results into a directory.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    out_dir: PathBuf,
    date: NaiveDate,
}

impl ReportExporter {
    pub fn new(out_dir: impl Into<PathBuf>, date: NaiveDate) -> Self {
        Self {
            out_dir: out_dir.into(),
            date,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// `<out_dir>/<stem>_<YYYYMMDD>.<extension>`
    pub fn file_path(&self, stem: &str, extension: &str) -> PathBuf {
        self.out_dir.join(format!(
            "{}_{}.{}",
            stem,
            self.date.format("%Y%m%d"),
            extension
        ))
    }

    pub fn export_journeys(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let path = self.file_path(OVERALL_JOURNEYS_STEM, "csv");
        self.write(&path, &render_journeys_csv(&report.journeys)?)?;
        Ok(path)
    }

    pub fn export_employees(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let path = self.file_path("employees", "csv");
        self.write(&path, &render_employees_csv(&report.stats.employees)?)?;
        Ok(path)
    }

    pub fn export_flow(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let path = self.file_path("flow", "csv");
        self.write(&path, &render_flow_csv(&report.flow)?)?;
        Ok(path)
    }

    /// Writes the whole report as pretty-printed JSON.
    pub fn export_json(&self, report: &AnalysisReport) -> Result<PathBuf> {
        let path = self.file_path("report", "json");
        let mut json = serde_json::to_vec_pretty(report)?;
        json.push(b'\n');
        self.write(&path, &json)?;
        Ok(path)
    }

    /// Writes one journeys file per employee, in employee ranking order.
    ///
    /// A name that maps onto an already used file (the overall
    /// `journeys_all` file or another employee's) gets a `_2`, `_3`, ...
    /// suffix instead.
    pub fn export_per_employee(&self, report: &AnalysisReport) -> Result<Vec<PathBuf>> {
        let mut taken = vec![self.file_path(OVERALL_JOURNEYS_STEM, "csv")];
        let mut paths = Vec::with_capacity(report.stats.employees.len());
        for stats in &report.stats.employees {
            let base = format!("journeys_{}", sanitize_file_component(&stats.employee));
            let mut path = self.file_path(&base, "csv");
            let mut suffix = 1;
            while taken.contains(&path) {
                suffix += 1;
                path = self.file_path(&format!("{}_{}", base, suffix), "csv");
            }
            if suffix > 1 {
                tracing::warn!(
                    employee = %stats.employee,
                    path = %path.display(),
                    "employee file name already in use, writing with a suffix"
                );
            }

            let journeys = report.journeys_for(&stats.employee);
            self.write(&path, &render_journeys_csv(journeys)?)?;
            taken.push(path.clone());
            paths.push(path);
        }
        Ok(paths)
    }

    /// Journeys, employee statistics, flow edges and the JSON report.
    pub fn export_all(&self, report: &AnalysisReport) -> Result<ExportManifest> {
        let mut manifest = ExportManifest::default();
        manifest.push(self.export_journeys(report)?);
        manifest.push(self.export_employees(report)?);
        manifest.push(self.export_flow(report)?);
        manifest.push(self.export_json(report)?);
        tracing::info!(
            out_dir = %self.out_dir.display(),
            files = manifest.len(),
            "exported analysis"
        );
        Ok(manifest)
    }

    /// The overall journeys file plus one file per employee.
    pub fn export_employee_journeys(&self, report: &AnalysisReport) -> Result<ExportManifest> {
        let mut manifest = ExportManifest::default();
        manifest.push(self.export_journeys(report)?);
        for path in self.export_per_employee(report)? {
            manifest.push(path);
        }
        tracing::info!(
            out_dir = %self.out_dir.display(),
            files = manifest.len(),
            "exported per-employee journeys"
        );
        Ok(manifest)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        write_atomic(path, contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote export file");
        Ok(())
    }
}
