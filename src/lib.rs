//! Transformation of annotated data-flow diagrams into GDPR legal-assessment facts.
//!
//! The engine reads a [`DataFlowDiagram`] plus its [`DataDictionary`], resolves the `GDPR::` label
//! grammar attached to every node, and produces [`LegalAssessmentFacts`], a [`TraceModel`] linking
//! source and target elements, and a dictionary pruned of the transformation-private label types.

pub mod config;
pub mod core;
pub mod export;
pub mod mapping;

pub use crate::config::TransformConfig;
pub use crate::core::dictionary::{DataDictionary, Label, LabelType};
pub use crate::core::error::TransformError;
pub use crate::core::facts::LegalAssessmentFacts;
pub use crate::core::graph::{DataFlowDiagram, Flow, Node};
pub use crate::core::trace::TraceModel;
pub use crate::core::types::NodeKind;
pub use crate::mapping::generator::{TransformOutput, transform};
