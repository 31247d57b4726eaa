//! Table sources: where raw contact rows come from.
//!
//! Sources only produce a [`RawTable`]; typing and validation happen in the
//! core normalizer.

mod csv_source;
mod json_source;

pub use csv_source::CsvTableSource;
pub use json_source::JsonTableSource;

use journey_core::{RawTable, Result};
use std::path::Path;

/// Anything that can hand the engine a rectangular table.
pub trait TableSource {
    /// Reads the complete table.
    fn read_table(&self) -> Result<RawTable>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Picks a source by file extension: `.json` reads JSON, anything else CSV.
pub fn open_source(path: &Path, delimiter: u8) -> Box<dyn TableSource> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Box::new(JsonTableSource::new(path.to_path_buf()))
    } else {
        Box::new(CsvTableSource::new(path.to_path_buf()).with_delimiter(delimiter))
    }
}
