use tracing::debug;

use crate::core::error::TransformError;
use crate::core::facts::LegalAssessmentFacts;
use crate::core::graph::Flow;
use crate::core::mapping::NodeProcessingMap;
use crate::core::trace::{FlowElement, Trace, TraceModel};

impl LegalAssessmentFacts {
    /// Project one source flow onto the processing graph.
    ///
    /// Steps:
    /// 1) Map both endpoints through `map` (either unmapped => `DanglingReference`, nothing is touched)
    /// 2) Append the destination processing to the source processing's `following`
    /// 3) Return the flow's trace record
    ///
    /// Repeated flows in the same direction append repeatedly.
    pub fn propagate_flow(&mut self, map: &NodeProcessingMap, flow: &Flow) -> Result<FlowElement, TransformError> {
        let from = map.expect_processing(&flow.source)?;
        let to = map.expect_processing(&flow.destination)?;

        let destination_id = self
            .processing
            .get(to)
            .map(|p| p.id.clone())
            .ok_or_else(|| TransformError::dangling("processing", &flow.destination))?;

        let source = self
            .processing
            .get_mut(from)
            .ok_or_else(|| TransformError::dangling("processing", &flow.source))?;
        source.following.push(destination_id);

        debug!(flow = %flow.id, from = %flow.source, to = %flow.destination, "wired following processing");

        Ok(FlowElement {
            flow_id: flow.id.clone(),
            source_id: flow.source.clone(),
            destination_id: flow.destination.clone(),
        })
    }

    /// Wire every flow and collect one `FlowElement` per flow, in flow order.
    pub fn propagate_flows<'f>(
        &mut self,
        map: &NodeProcessingMap,
        flows: impl IntoIterator<Item = &'f Flow>,
    ) -> Result<Vec<FlowElement>, TransformError> {
        flows.into_iter().map(|flow| self.propagate_flow(map, flow)).collect()
    }
}

impl TraceModel {
    /// One `Trace` per mapped node, in mapping order.
    pub fn record_nodes(&mut self, facts: &LegalAssessmentFacts, map: &NodeProcessingMap) -> Result<(), TransformError> {
        for (node, idx) in map.iter_mapping() {
            let processing = facts
                .processing
                .get(idx)
                .ok_or_else(|| TransformError::dangling("processing", node))?;
            self.traces.push(Trace {
                node_id: node.to_string(),
                processing_id: processing.id.clone(),
            });
        }
        Ok(())
    }
}

/*
What the tests below pin down:

    1. a flow A -> B puts B into A.following and yields a FlowElement with matching ids
    2. the same direction twice is kept twice (multiplicity many)
    3. an endpoint with no processing fails with DanglingReference and leaves the graph untouched
    4. traces pair every mapped node with the processing carrying its id
*/
