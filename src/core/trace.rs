// trace model: source element <-> generated element
use serde::{Deserialize, Serialize};

use crate::core::types::NodeId;

/// One record per source flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowElement {
    pub flow_id: String,
    pub source_id: NodeId,
    pub destination_id: NodeId,
}

/// Pairs a source node with the processing generated from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub node_id: NodeId,
    pub processing_id: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceModel {
    pub flows: Vec<FlowElement>,
    pub traces: Vec<Trace>,
}

impl TraceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace_for_node(&self, node_id: &str) -> Option<&Trace> {
        self.traces.iter().find(|t| t.node_id == node_id)
    }

    pub fn flow_element(&self, flow_id: &str) -> Option<&FlowElement> {
        self.flows.iter().find(|f| f.flow_id == flow_id)
    }
}
