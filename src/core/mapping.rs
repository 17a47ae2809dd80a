// node -> processing mapping
use std::collections::HashMap;

use crate::core::error::TransformError;
use crate::core::types::NodeId;

/// Records which processing (index into `LegalAssessmentFacts::processing`) each source node produced.
//1. each node maps to exactly one processing
//2. no silent overwrites: remapping to a different processing is an error
//3. iteration follows insertion order so traces are reproducible
#[derive(Debug, Default)]
pub struct NodeProcessingMap {
    maps_to: HashMap<NodeId, usize>,
    order: Vec<(NodeId, usize)>,
}

impl NodeProcessingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mapping(&mut self, node: &str, processing: usize) -> Result<(), TransformError> {
        match self.maps_to.get(node).copied() {
            None => {
                self.maps_to.insert(node.to_string(), processing);
                self.order.push((node.to_string(), processing));
                Ok(())
            }
            Some(old) if old == processing => Ok(()), //identical mapping is a no-op
            Some(_) => Err(TransformError::DuplicateNode(node.to_string())),
        }
    }

    pub fn get_processing(&self, node: &str) -> Option<usize> {
        self.maps_to.get(node).copied()
    }

    //flow endpoints must already be mapped
    pub fn expect_processing(&self, node: &str) -> Result<usize, TransformError> {
        self.get_processing(node)
            .ok_or_else(|| TransformError::dangling("flow endpoint", node))
    }

    pub fn is_mapped(&self, node: &str) -> bool {
        self.maps_to.contains_key(node)
    }

    pub fn mapping_len(&self) -> usize {
        self.maps_to.len()
    }

    //for traces
    pub fn iter_mapping(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(|(n, p)| (n.as_str(), *p))
    }
}
