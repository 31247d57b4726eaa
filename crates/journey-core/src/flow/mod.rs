//! Flow graph between consecutive contact-type labels.
//!
//! # Module Structure
//!
//! - `model`: `FlowEdge`, `FlowNode`, `NodeCategory`, `FlowGraph`
//! - `builder`: `FlowGraphBuilder`

mod builder;
mod model;

pub use builder::FlowGraphBuilder;
pub use model::{FlowEdge, FlowGraph, FlowNode, NodeCategory};
