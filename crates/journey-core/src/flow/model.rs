//! Flow graph domain models.

use serde::{Deserialize, Serialize};

/// Coarse classification of a label, for renderers choosing node styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// An "appointment scheduled" contact type.
    Appointment,
    /// An order outcome.
    Order,
    /// The no-further-contact sentinel.
    NoFurtherContact,
    /// Any other contact type.
    Other,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Order => "order",
            Self::NoFurtherContact => "no_further_contact",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, weighted transition between two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source_label: String,
    pub target_label: String,
    pub weight: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub label: String,
    pub category: NodeCategory,
}

/// The selected edges plus every node they touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    /// Distinct labels of the selected edges, in first-seen order.
    pub nodes: Vec<FlowNode>,
    /// Top edges by weight, descending.
    pub edges: Vec<FlowEdge>,
    /// Number of distinct edges before truncation.
    pub distinct_edges: usize,
    /// Summed weight of all edges before truncation.
    pub total_weight: usize,
}

impl FlowGraph {
    /// Category of a node label, if the label is part of the graph.
    pub fn category_of(&self, label: &str) -> Option<NodeCategory> {
        self.nodes
            .iter()
            .find(|n| n.label == label)
            .map(|n| n.category)
    }

    /// Index of a node label in `nodes`, as Sankey-style renderers expect.
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.label == label)
    }
}
