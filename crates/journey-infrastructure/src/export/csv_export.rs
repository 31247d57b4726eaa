use journey_core::projection::{
    EmployeeRow, FlowEdgeRow, JourneyRow, employee_rows, flow_rows, journey_rows,
};
use journey_core::{EmployeeStats, FlowGraph, Journey, JourneyError, Result};
use serde::Serialize;

/// Serializes rows as CSV below an explicit header line.
///
/// The header is written even when `rows` is empty.
pub fn render_csv<T: Serialize>(headers: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| JourneyError::internal(format!("flushing CSV buffer: {}", e)))
}

pub fn render_journeys_csv<'a, I>(journeys: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Journey>,
{
    render_csv(JourneyRow::HEADERS, &journey_rows(journeys))
}

pub fn render_employees_csv(stats: &[EmployeeStats]) -> Result<Vec<u8>> {
    render_csv(EmployeeRow::HEADERS, &employee_rows(stats))
}

pub fn render_flow_csv(graph: &FlowGraph) -> Result<Vec<u8>> {
    render_csv(FlowEdgeRow::HEADERS, &flow_rows(graph))
}
