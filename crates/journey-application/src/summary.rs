//! Plain-text summaries for terminal output.

use journey_core::{AnalysisReport, FlowGraph, RankedEmployee, StatsReport};
use std::fmt::Write;

/// Dataset counters plus both top-N rankings.
pub fn render_overview(report: &AnalysisReport) -> String {
    let overview = &report.stats.overview;
    let mut out = String::new();
    let _ = writeln!(out, "Contact events:       {}", report.event_count);
    let _ = writeln!(out, "Journeys:             {}", overview.total_journeys);
    let _ = writeln!(out, "Employees:            {}", overview.employees);
    let _ = writeln!(out, "With follow-up:       {}", overview.with_follow_up);
    let _ = writeln!(out, "Ended with order:     {}", overview.ended_with_order);

    render_ranking(&mut out, "Top by appointments", &report.stats.top_by_appointments);
    render_ranking(&mut out, "Top by orders", &report.stats.top_by_orders);
    out
}

fn render_ranking(out: &mut String, title: &str, ranking: &[RankedEmployee]) {
    let _ = writeln!(out, "\n{}:", title);
    if ranking.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (i, entry) in ranking.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {} ({})", i + 1, entry.employee, entry.count);
    }
}

/// One line per employee in ranking order.
pub fn render_employees(stats: &StatsReport) -> String {
    let mut out = String::new();
    for s in &stats.employees {
        let _ = writeln!(
            out,
            "{}: {} appointments, {} with follow-up, {} orders, {:.2}% conversion",
            s.employee, s.total_appointments, s.with_follow_up, s.orders, s.conversion_rate
        );
        for (status, count) in &s.status_histogram {
            let _ = writeln!(out, "    {} = {}", status, count);
        }
    }
    out
}

/// Edges heaviest first, with the graph totals underneath.
pub fn render_flow(graph: &FlowGraph) -> String {
    let mut out = String::new();
    for edge in &graph.edges {
        let _ = writeln!(
            out,
            "{:>5}  {} -> {}",
            edge.weight, edge.source_label, edge.target_label
        );
    }
    let _ = writeln!(
        out,
        "{} of {} distinct transitions shown, {} transitions in total",
        graph.edges.len(),
        graph.distinct_edges,
        graph.total_weight
    );
    out
}
