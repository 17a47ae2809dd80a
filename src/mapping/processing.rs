// processing-kind resolution
use tracing::{debug, warn};

use crate::core::dictionary::LabelEntry;
use crate::core::error::TransformError;
use crate::core::facts::Processing;
use crate::core::graph::Node;
use crate::core::label::{parse_processing_kind, processing_override};
use crate::core::types::ProcessingKind;
use crate::mapping::generator::Transformation;

impl<'a> Transformation<'a> {
    /// Build the processing for `node`.
    ///
    /// The first `GDPR::ofType:` label decides the kind; without one the node's structural
    /// kind does (Store -> Storing, External -> Collecting, Process -> Processing).
    pub fn resolve_processing_kind(&self, node: &Node, labels: &[LabelEntry<'a>]) -> Result<Processing, TransformError> {
        let overrides: Vec<(&str, &str)> = labels
            .iter()
            .filter_map(|l| processing_override(l.value).map(|name| (l.value, name)))
            .collect();

        if overrides.len() > 1 {
            warn!(node = %node.id, overrides = ?overrides, "several ofType labels, using the first");
        }

        let kind = match overrides.first() {
            Some(&(raw, name)) => parse_processing_kind(name, raw)?,
            None => ProcessingKind::default_for(node.kind),
        };

        debug!(node = %node.id, kind = ?kind, "resolved processing kind");
        Ok(Processing::new(node.id.clone(), node.name.clone(), kind))
    }
}
