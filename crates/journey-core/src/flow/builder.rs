//! Flow Graph Builder: weighted label transitions across journeys.

use super::model::{FlowEdge, FlowGraph, FlowNode, NodeCategory};
use crate::config::AnalysisConfig;
use crate::journey::Journey;
use std::collections::{HashMap, HashSet};

pub struct FlowGraphBuilder<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> FlowGraphBuilder<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Classifies a label for styling.
    pub fn categorize(&self, label: &str) -> NodeCategory {
        if self.config.is_no_contact(label) {
            NodeCategory::NoFurtherContact
        } else if self.config.is_order(label) {
            NodeCategory::Order
        } else if self.config.is_appointment(label) {
            NodeCategory::Appointment
        } else {
            NodeCategory::Other
        }
    }

    /// Every distinct `(source, target)` pair with its summed weight, in
    /// first-seen order.
    ///
    /// Each journey contributes one unit per consecutive pair of its label
    /// sequence, starting with the appointment type.
    pub fn aggregate_edges(&self, journeys: &[Journey]) -> Vec<FlowEdge> {
        let mut edges: Vec<FlowEdge> = Vec::new();
        let mut index: HashMap<(&str, &str), usize> = HashMap::new();

        for journey in journeys {
            let labels = journey.label_sequence();
            for pair in labels.windows(2) {
                let (source, target) = (pair[0], pair[1]);
                match index.get(&(source, target)) {
                    Some(&i) => edges[i].weight += 1,
                    None => {
                        index.insert((source, target), edges.len());
                        edges.push(FlowEdge {
                            source_label: source.to_string(),
                            target_label: target.to_string(),
                            weight: 1,
                        });
                    }
                }
            }
        }

        edges
    }

    /// Builds the graph from the `top_edges` heaviest edges.
    ///
    /// Edges of equal weight keep first-seen order. Edges beyond the limit
    /// are dropped without error.
    pub fn build(&self, journeys: &[Journey]) -> FlowGraph {
        let mut edges = self.aggregate_edges(journeys);
        let distinct_edges = edges.len();
        let total_weight: usize = edges.iter().map(|e| e.weight).sum();

        edges.sort_by(|a, b| b.weight.cmp(&a.weight));
        edges.truncate(self.config.top_edges);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut nodes = Vec::new();
        for edge in &edges {
            for label in [edge.source_label.as_str(), edge.target_label.as_str()] {
                if seen.insert(label) {
                    nodes.push(FlowNode {
                        label: label.to_string(),
                        category: self.categorize(label),
                    });
                }
            }
        }

        tracing::debug!(
            distinct_edges,
            selected = edges.len(),
            nodes = nodes.len(),
            "built flow graph"
        );

        FlowGraph {
            nodes,
            edges,
            distinct_edges,
            total_weight,
        }
    }
}
