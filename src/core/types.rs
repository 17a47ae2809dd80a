// shared identifiers and closed kind sets
use serde::{Deserialize, Serialize};

pub type NodeId = String;
pub type EntityId = String;
pub type LabelId = String;

/// Structural kind of a data-flow node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Process,
    Store,
    External,
}

/// The five processing-activity variants a node can turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessingKind {
    Collecting,
    Useage,
    Storing,
    Transfering,
    /// plain `Processing`, used for process nodes without an override
    Generic,
}

impl ProcessingKind {
    //default when the node carries no ofType override
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Store => ProcessingKind::Storing,
            NodeKind::External => ProcessingKind::Collecting,
            NodeKind::Process => ProcessingKind::Generic,
        }
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Collecting" => Some(ProcessingKind::Collecting),
            "Useage" => Some(ProcessingKind::Useage),
            "Storing" => Some(ProcessingKind::Storing),
            "Transfering" => Some(ProcessingKind::Transfering),
            "Processing" => Some(ProcessingKind::Generic),
            _ => None,
        }
    }
}

/// Concrete entity type named by the first field of an entity-reference token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Consent,
    PerformanceOfContract,
    Obligation,
    ExerciceOfPublicAuthority,
    Data,
    PersonalData,
    Purpose,
    Controller,
    NaturalPerson,
    ThirdParty,
}

impl EntityType {
    pub fn from_type_name(name: &str) -> Option<Self> {
        let ty = match name {
            "Consent" => EntityType::Consent,
            "PerformanceOfContract" => EntityType::PerformanceOfContract,
            "Obligation" => EntityType::Obligation,
            "ExerciceOfPublicAuthority" => EntityType::ExerciceOfPublicAuthority,
            "Data" => EntityType::Data,
            "PersonalData" => EntityType::PersonalData,
            "Purpose" => EntityType::Purpose,
            "Controller" => EntityType::Controller,
            "NaturalPerson" => EntityType::NaturalPerson,
            "ThirdParty" => EntityType::ThirdParty,
            _ => return None,
        };
        Some(ty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Consent => "Consent",
            EntityType::PerformanceOfContract => "PerformanceOfContract",
            EntityType::Obligation => "Obligation",
            EntityType::ExerciceOfPublicAuthority => "ExerciceOfPublicAuthority",
            EntityType::Data => "Data",
            EntityType::PersonalData => "PersonalData",
            EntityType::Purpose => "Purpose",
            EntityType::Controller => "Controller",
            EntityType::NaturalPerson => "NaturalPerson",
            EntityType::ThirdParty => "ThirdParty",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_follows_node_structure() {
        assert_eq!(ProcessingKind::default_for(NodeKind::Store), ProcessingKind::Storing);
        assert_eq!(ProcessingKind::default_for(NodeKind::External), ProcessingKind::Collecting);
        assert_eq!(ProcessingKind::default_for(NodeKind::Process), ProcessingKind::Generic);
    }

    #[test]
    fn entity_type_names_are_case_sensitive() {
        assert_eq!(EntityType::from_type_name("NaturalPerson"), Some(EntityType::NaturalPerson));
        assert_eq!(EntityType::from_type_name("naturalperson"), None);
        assert_eq!(ProcessingKind::from_type_name("Processing"), Some(ProcessingKind::Generic));
        assert_eq!(ProcessingKind::from_type_name("Usage"), None);
    }
}
