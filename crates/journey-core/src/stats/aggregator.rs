//! Aggregation Engine: per-employee counts, conversion rates and rankings.

use super::model::{EmployeeStats, Overview, RankedEmployee, StatsReport};
use crate::config::AnalysisConfig;
use crate::journey::Journey;
use std::collections::HashMap;

/// Percentage of `orders` in `total`, guarded against an empty denominator.
pub fn conversion_rate(orders: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    orders as f64 / total as f64 * 100.0
}

pub struct AggregationEngine<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> AggregationEngine<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Aggregates journeys into per-employee statistics and rankings.
    ///
    /// Ties in every ordering are broken by the employee's first appearance
    /// in `journeys`. Rankings are truncated to `top_employees` entries.
    pub fn aggregate(&self, journeys: &[Journey]) -> StatsReport {
        let mut employees: Vec<EmployeeStats> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut overview = Overview::default();

        for journey in journeys {
            let slot = *index.entry(journey.employee.as_str()).or_insert_with(|| {
                employees.push(EmployeeStats::new(journey.employee.clone()));
                employees.len() - 1
            });
            let stats = &mut employees[slot];
            let is_order = self.config.is_order(&journey.terminal_status);

            stats.total_appointments += 1;
            *stats
                .status_histogram
                .entry(journey.terminal_status.clone())
                .or_insert(0) += 1;
            if !self.config.is_no_contact(&journey.terminal_status) {
                stats.with_follow_up += 1;
                overview.with_follow_up += 1;
            }
            if is_order {
                stats.orders += 1;
                overview.ended_with_order += 1;
            }
        }

        for stats in &mut employees {
            stats.conversion_rate = conversion_rate(stats.orders, stats.total_appointments);
        }

        overview.total_journeys = journeys.len();
        overview.employees = employees.len();

        // Stable sort keeps first-appearance order among equal counts.
        employees.sort_by(|a, b| b.total_appointments.cmp(&a.total_appointments));

        let limit = self.config.top_employees;
        let top_by_appointments = employees
            .iter()
            .take(limit)
            .map(|s| RankedEmployee {
                employee: s.employee.clone(),
                count: s.total_appointments,
            })
            .collect();

        let mut by_orders: Vec<&EmployeeStats> = employees.iter().filter(|s| s.orders > 0).collect();
        by_orders.sort_by(|a, b| {
            b.orders
                .cmp(&a.orders)
                .then_with(|| index[a.employee.as_str()].cmp(&index[b.employee.as_str()]))
        });
        let top_by_orders = by_orders
            .into_iter()
            .take(limit)
            .map(|s| RankedEmployee {
                employee: s.employee.clone(),
                count: s.orders,
            })
            .collect();

        tracing::debug!(
            employees = overview.employees,
            orders = overview.ended_with_order,
            "aggregated employee statistics"
        );

        StatsReport {
            overview,
            employees,
            top_by_appointments,
            top_by_orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn journey(employee: &str, customer: &str, chain: &[&str]) -> Journey {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        let (follow_up_types, follow_up_count) = if chain.is_empty() {
            (vec!["no further contact".to_string()], 0)
        } else {
            (chain.iter().map(|s| s.to_string()).collect::<Vec<_>>(), chain.len())
        };
        Journey {
            employee: employee.to_string(),
            customer_id: customer.to_string(),
            appointment_timestamp: ts,
            appointment_type: "Termin vereinbart".to_string(),
            terminal_status: follow_up_types.last().cloned().unwrap(),
            follow_up_types,
            follow_up_count,
            last_contact_timestamp: ts,
            last_contact_owner: String::new(),
            postal_code: String::new(),
            city: String::new(),
        }
    }

    #[test]
    fn test_conversion_rate_guards_zero() {
        assert_eq!(conversion_rate(0, 0), 0.0);
        assert_eq!(conversion_rate(1, 4), 25.0);
        assert_eq!(conversion_rate(3, 3), 100.0);
    }

    #[test]
    fn test_aggregate_counts_and_histogram() {
        let config = AnalysisConfig::default();
        let journeys = vec![
            journey("X", "A", &["Telefonat", "Auftrag erteilt"]),
            journey("X", "B", &[]),
            journey("Y", "C", &["Telefonat"]),
            journey("X", "D", &["Auftrag erteilt"]),
        ];

        let report = AggregationEngine::new(&config).aggregate(&journeys);

        let x = report.employee("X").unwrap();
        assert_eq!(x.total_appointments, 3);
        assert_eq!(x.with_follow_up, 2);
        assert_eq!(x.orders, 2);
        assert_eq!(x.status_histogram["Auftrag erteilt"], 2);
        assert_eq!(x.status_histogram["no further contact"], 1);
        assert!((x.conversion_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(x.status_histogram.values().sum::<usize>(), x.total_appointments);

        assert_eq!(
            report.overview,
            Overview {
                total_journeys: 4,
                employees: 2,
                with_follow_up: 3,
                ended_with_order: 2,
            }
        );
    }

    #[test]
    fn test_follow_up_means_terminal_status_is_not_the_sentinel() {
        let config = AnalysisConfig::default();
        let journeys = vec![
            journey("X", "A", &["Telefonat", "no further contact"]),
            journey("X", "B", &["Telefonat"]),
            journey("X", "C", &[]),
        ];

        let report = AggregationEngine::new(&config).aggregate(&journeys);

        assert_eq!(report.employee("X").unwrap().with_follow_up, 1);
        assert_eq!(report.overview.with_follow_up, 1);
    }

    #[test]
    fn test_rankings_break_ties_by_first_appearance() {
        let config = AnalysisConfig {
            top_employees: 2,
            ..AnalysisConfig::default()
        };
        let journeys = vec![
            journey("Late", "A", &["Telefonat"]),
            journey("Early", "B", &["Auftrag"]),
            journey("Other", "C", &["Auftrag"]),
            journey("Early", "D", &[]),
            journey("Late", "E", &[]),
        ];

        let report = AggregationEngine::new(&config).aggregate(&journeys);

        let names: Vec<&str> = report
            .top_by_appointments
            .iter()
            .map(|r| r.employee.as_str())
            .collect();
        assert_eq!(names, vec!["Late", "Early"]);

        let order_names: Vec<&str> = report
            .top_by_orders
            .iter()
            .map(|r| r.employee.as_str())
            .collect();
        assert_eq!(order_names, vec!["Early", "Other"]);
        assert_eq!(report.employees.len(), 3);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let config = AnalysisConfig::default();
        let report = AggregationEngine::new(&config).aggregate(&[]);
        assert!(report.employees.is_empty());
        assert!(report.top_by_orders.is_empty());
        assert_eq!(report.overview.total_journeys, 0);
    }
}
