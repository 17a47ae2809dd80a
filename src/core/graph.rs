// source data-flow diagram (read-only during a transformation)
use serde::{Deserialize, Serialize};

use crate::core::error::TransformError;
use crate::core::types::{LabelId, NodeId, NodeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    /// ids of dictionary labels attached to this node, in authoring order
    #[serde(default)]
    pub labels: Vec<LabelId>,
}

impl Node {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            labels: Vec::new(),
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }
}

/// Directed edge between two nodes, addressed by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub source: NodeId,
    pub destination: NodeId,
}

impl Flow {
    pub fn new(id: impl Into<String>, source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFlowDiagram {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub flows: Vec<Flow>,
}

impl DataFlowDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_flow(&mut self, flow: Flow) -> &mut Self {
        self.flows.push(flow);
        self
    }

    pub fn from_toon(input: &str) -> Result<Self, TransformError> {
        toon_format::decode_default(input).map_err(|e| TransformError::Codec(e.to_string()))
    }
}
