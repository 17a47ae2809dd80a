/*
Inputs:

    DataFlowDiagram (nodes + flows, labels referenced by id)

    DataDictionary (label types + labels)

    TransformConfig

Outputs:

    LegalAssessmentFacts (processing, legal bases, data, purposes, parties)

    TraceModel (one FlowElement per flow, one Trace per node)

    pruned DataDictionary

    the DataFlowDiagram, untouched

Order matters:

    1. every node -> processing (kind, element labels, link labels)

    2. every flow -> following edge + FlowElement (needs the complete node map)

    3. every node -> Trace

    4. prune the GDPR label types
*/
use std::collections::HashSet;

use tracing::info;

use crate::config::TransformConfig;
use crate::core::dictionary::{DataDictionary, LabelEntry, LabelIndex};
use crate::core::error::TransformError;
use crate::core::facts::LegalAssessmentFacts;
use crate::core::graph::{DataFlowDiagram, Node};
use crate::core::mapping::NodeProcessingMap;
use crate::core::registry::EntityRegistry;
use crate::core::trace::TraceModel;

/// Everything a transformation hands to persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub facts: LegalAssessmentFacts,
    pub dictionary: DataDictionary,
    pub trace: TraceModel,
    pub dfd: DataFlowDiagram,
}

/// State of one transformation run. Resolvers in `mapping::*` add their steps as `impl` blocks.
pub struct Transformation<'a> {
    pub(crate) config: &'a TransformConfig,
    pub(crate) labels: LabelIndex<'a>,
    pub(crate) facts: LegalAssessmentFacts,
    pub(crate) registry: EntityRegistry,
    pub(crate) node_processing: NodeProcessingMap,
    /// ids of link labels already applied
    pub(crate) resolved_links: HashSet<&'a str>,
}

impl<'a> Transformation<'a> {
    pub fn new(dictionary: &'a DataDictionary, config: &'a TransformConfig) -> Result<Self, TransformError> {
        Ok(Self {
            config,
            labels: LabelIndex::build(dictionary)?,
            facts: LegalAssessmentFacts::new(),
            registry: EntityRegistry::new(),
            node_processing: NodeProcessingMap::new(),
            resolved_links: HashSet::new(),
        })
    }

    fn node_labels(&self, node: &Node) -> Result<Vec<LabelEntry<'a>>, TransformError> {
        node.labels.iter().map(|id| self.labels.get(id)).collect()
    }

    /// Turn one node into its processing: kind, then element labels, then link labels.
    pub fn resolve_node(&mut self, node: &Node) -> Result<(), TransformError> {
        let labels = self.node_labels(node)?;

        let mut processing = self.resolve_processing_kind(node, &labels)?;
        self.node_processing.set_mapping(&node.id, self.facts.processing.len())?;

        self.resolve_element_labels(&mut processing, &labels)?;
        self.resolve_link_labels(&labels)?;

        self.facts.processing.push(processing);
        Ok(())
    }

    /// Run all steps over `dfd`. On error nothing is returned, so no partial output escapes.
    pub fn run(mut self, dfd: &DataFlowDiagram) -> Result<(LegalAssessmentFacts, TraceModel), TransformError> {
        for node in &dfd.nodes {
            self.resolve_node(node)?;
        }

        let mut trace = TraceModel::new();
        trace.flows = self.facts.propagate_flows(&self.node_processing, &dfd.flows)?;
        trace.record_nodes(&self.facts, &self.node_processing)?;

        info!(
            processing = self.facts.processing.len(),
            entities = self.registry.len(),
            links = self.resolved_links.len(),
            flows = trace.flows.len(),
            traces = trace.traces.len(),
            "transformed data-flow diagram"
        );

        Ok((self.facts, trace))
    }
}

/// Transform `dfd` + `dictionary` into legal-assessment facts, a trace model and a pruned dictionary.
pub fn transform(
    dfd: DataFlowDiagram,
    mut dictionary: DataDictionary,
    config: &TransformConfig,
) -> Result<TransformOutput, TransformError> {
    let (facts, trace) = Transformation::new(&dictionary, config)?.run(&dfd)?;

    let removed = dictionary.prune(&config.pruned_label_types);
    info!(removed = ?removed, remaining = dictionary.label_types.len(), "pruned label dictionary");

    Ok(TransformOutput { facts, dictionary, trace, dfd })
}
