// legal-assessment facts: the target graph of the transformation
use serde::{Deserialize, Serialize};

use crate::core::error::TransformError;
use crate::core::label::EntityRef;
use crate::core::types::{EntityId, EntityType, NodeId, ProcessingKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processing {
    pub id: NodeId,
    pub entity_name: String,
    pub kind: ProcessingKind,
    pub input_data: Vec<EntityId>,
    pub output_data: Vec<EntityId>,
    pub on_the_basis_of: Vec<EntityId>,
    pub purposes: Vec<EntityId>,
    pub responsible: Option<EntityId>,
    /// successor processing ids, one entry per outgoing flow
    pub following: Vec<NodeId>,
}

impl Processing {
    pub fn new(id: impl Into<String>, entity_name: impl Into<String>, kind: ProcessingKind) -> Self {
        Self {
            id: id.into(),
            entity_name: entity_name.into(),
            kind,
            input_data: Vec::new(),
            output_data: Vec::new(),
            on_the_basis_of: Vec::new(),
            purposes: Vec::new(),
            responsible: None,
            following: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegalBasisKind {
    Consent { consentee: Option<EntityId> },
    PerformanceOfContract { contracting_parties: Vec<EntityId> },
    Obligation,
    ExerciceOfPublicAuthority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalBasis {
    pub id: EntityId,
    pub entity_name: String,
    pub kind: LegalBasisKind,
    pub for_purpose: Vec<EntityId>,
    /// unset until a ForData link is applied; absence is legitimate
    pub personal_data: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataKind {
    Plain,
    Personal { data_references: Vec<EntityId> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    pub id: EntityId,
    pub entity_name: String,
    pub kind: DataKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    pub id: EntityId,
    pub entity_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Controller,
    NaturalPerson,
    ThirdParty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub entity_name: String,
    /// display name of the party
    pub name: String,
    pub kind: RoleKind,
}

/// Position of a materialized entity inside its owning collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityHandle {
    LegalBasis(usize),
    Data(usize),
    Purpose(usize),
    Role(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAssessmentFacts {
    pub processing: Vec<Processing>,
    pub legal_bases: Vec<LegalBasis>,
    pub data: Vec<Data>,
    pub purposes: Vec<Purpose>,
    pub involved_parties: Vec<Role>,
}

impl LegalAssessmentFacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the entity named by `r` and append it to its collection.
    /// Does not dedup; that is the registry's job.
    pub fn materialize(&mut self, r: &EntityRef<'_>) -> EntityHandle {
        let id = r.id.to_string();
        let entity_name = r.name.to_string();

        let basis = |kind| LegalBasis {
            id: id.clone(),
            entity_name: entity_name.clone(),
            kind,
            for_purpose: Vec::new(),
            personal_data: None,
        };
        let role = |kind| Role {
            id: id.clone(),
            entity_name: entity_name.clone(),
            name: entity_name.clone(),
            kind,
        };

        match r.entity_type {
            EntityType::Consent => self.push_legal_basis(basis(LegalBasisKind::Consent { consentee: None })),
            EntityType::PerformanceOfContract => self.push_legal_basis(basis(
                LegalBasisKind::PerformanceOfContract { contracting_parties: Vec::new() },
            )),
            EntityType::Obligation => self.push_legal_basis(basis(LegalBasisKind::Obligation)),
            EntityType::ExerciceOfPublicAuthority => {
                self.push_legal_basis(basis(LegalBasisKind::ExerciceOfPublicAuthority))
            }
            EntityType::Data => self.push_data(Data { id, entity_name, kind: DataKind::Plain }),
            EntityType::PersonalData => self.push_data(Data {
                id,
                entity_name,
                kind: DataKind::Personal { data_references: Vec::new() },
            }),
            EntityType::Purpose => {
                self.purposes.push(Purpose { id, entity_name });
                EntityHandle::Purpose(self.purposes.len() - 1)
            }
            EntityType::Controller => self.push_role(role(RoleKind::Controller)),
            EntityType::NaturalPerson => self.push_role(role(RoleKind::NaturalPerson)),
            EntityType::ThirdParty => self.push_role(role(RoleKind::ThirdParty)),
        }
    }

    fn push_legal_basis(&mut self, basis: LegalBasis) -> EntityHandle {
        self.legal_bases.push(basis);
        EntityHandle::LegalBasis(self.legal_bases.len() - 1)
    }

    fn push_data(&mut self, data: Data) -> EntityHandle {
        self.data.push(data);
        EntityHandle::Data(self.data.len() - 1)
    }

    fn push_role(&mut self, role: Role) -> EntityHandle {
        self.involved_parties.push(role);
        EntityHandle::Role(self.involved_parties.len() - 1)
    }

    pub fn entity_id(&self, handle: EntityHandle) -> &str {
        match handle {
            EntityHandle::LegalBasis(i) => &self.legal_bases[i].id,
            EntityHandle::Data(i) => &self.data[i].id,
            EntityHandle::Purpose(i) => &self.purposes[i].id,
            EntityHandle::Role(i) => &self.involved_parties[i].id,
        }
    }

    /// Concrete type name of the entity behind `handle`.
    pub fn type_name(&self, handle: EntityHandle) -> &'static str {
        match handle {
            EntityHandle::LegalBasis(i) => match self.legal_bases[i].kind {
                LegalBasisKind::Consent { .. } => "Consent",
                LegalBasisKind::PerformanceOfContract { .. } => "PerformanceOfContract",
                LegalBasisKind::Obligation => "Obligation",
                LegalBasisKind::ExerciceOfPublicAuthority => "ExerciceOfPublicAuthority",
            },
            EntityHandle::Data(i) => match self.data[i].kind {
                DataKind::Plain => "Data",
                DataKind::Personal { .. } => "PersonalData",
            },
            EntityHandle::Purpose(_) => "Purpose",
            EntityHandle::Role(i) => match self.involved_parties[i].kind {
                RoleKind::Controller => "Controller",
                RoleKind::NaturalPerson => "NaturalPerson",
                RoleKind::ThirdParty => "ThirdParty",
            },
        }
    }

    pub fn incompatible(&self, handle: EntityHandle, relation: &'static str, expected: &'static str) -> TransformError {
        TransformError::IncompatibleReference {
            id: self.entity_id(handle).to_string(),
            relation,
            expected,
            found: self.type_name(handle),
        }
    }

    pub fn entity_count(&self) -> usize {
        self.legal_bases.len() + self.data.len() + self.purposes.len() + self.involved_parties.len()
    }

    pub fn processing_by_id(&self, id: &str) -> Option<&Processing> {
        self.processing.iter().find(|p| p.id == id)
    }

    pub fn legal_basis_by_id(&self, id: &str) -> Option<&LegalBasis> {
        self.legal_bases.iter().find(|b| b.id == id)
    }

    pub fn data_by_id(&self, id: &str) -> Option<&Data> {
        self.data.iter().find(|d| d.id == id)
    }

    pub fn role_by_id(&self, id: &str) -> Option<&Role> {
        self.involved_parties.iter().find(|r| r.id == id)
    }
}
