use super::TableSource;
use journey_core::{JourneyError, RawTable, Result};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Reads a CSV file with a header row.
///
/// Rows may be shorter or longer than the header; missing cells read as empty.
/// Records whose cells are all blank are kept so row numbers in errors match
/// the file; the normalizer skips them.
pub struct CsvTableSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parses CSV from any reader.
    pub fn read_from<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(RawTable::new(headers, rows))
    }
}

impl TableSource for CsvTableSource {
    fn read_table(&self) -> Result<RawTable> {
        let file = File::open(&self.path).map_err(|e| {
            JourneyError::io(format!("cannot open {}: {}", self.path.display(), e))
        })?;
        let table = Self::read_from(file, self.delimiter)?;
        tracing::debug!(
            path = %self.path.display(),
            columns = table.headers.len(),
            rows = table.rows.len(),
            "read CSV table"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_semicolon_csv_with_ragged_rows() {
        let input = "Mitarbeiter;Kontaktart;Kontakt;Datum/Uhrzeit;Ort\n\
                     Anna;Termin vereinbart;Kunde A;2024-03-01 09:30\n\
                     ;;;;\n\
                     Ben;Telefonat;Kunde A;2024-03-02 10:00;Köln\n";

        let table = CsvTableSource::read_from(input.as_bytes(), b';').unwrap();

        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0].len(), 4);
        assert_eq!(table.rows[2][4], "Köln");
    }

    #[test]
    fn test_bad_row_after_blank_record_keeps_its_row_number() {
        let input = "Mitarbeiter,Kontaktart,Kontakt,Datum/Uhrzeit\n\
                     X,Termin vereinbart,A,2024-04-01 09:00\n\
                     ,,,\n\
                     X,Telefonat,A,garbage\n";

        let table = CsvTableSource::read_from(input.as_bytes(), b',').unwrap();
        let err = journey_core::JourneyAnalyzer::new(journey_core::AnalysisConfig::default())
            .unwrap()
            .analyze_table(&table)
            .unwrap_err();

        assert!(err.is_malformed_input());
        assert_eq!(err.row(), Some(3));
    }

    #[test]
    fn test_quoted_cells_keep_delimiters() {
        let input = "Kontaktart,Kontakt\n\"Termin vereinbart, vor Ort\",A\n";

        let table = CsvTableSource::read_from(input.as_bytes(), b',').unwrap();

        assert_eq!(table.rows[0][0], "Termin vereinbart, vor Ort");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvTableSource::new(PathBuf::from("/nonexistent/contacts.csv"));
        assert!(source.read_table().unwrap_err().is_io());
    }
}
