// id -> materialized entity, single source of truth for dedup
use std::collections::HashMap;

use tracing::debug;

use crate::core::facts::{EntityHandle, LegalAssessmentFacts};
use crate::core::label::EntityRef;
use crate::core::types::EntityId;

#[derive(Debug, Default)]
pub struct EntityRegistry {
    by_id: HashMap<EntityId, EntityHandle>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<EntityHandle> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Return the entity registered under `r.id`, creating it in `facts` on first sight.
    ///
    /// First resolution wins: a later token with the same id but a different type or
    /// name gets the existing entity back unchanged.
    pub fn resolve_or_create(&mut self, facts: &mut LegalAssessmentFacts, r: &EntityRef<'_>) -> EntityHandle {
        if let Some(handle) = self.get(r.id) {
            return handle;
        }

        let handle = facts.materialize(r);
        debug!(id = r.id, name = r.name, entity_type = r.entity_type.as_str(), "materialized entity");
        self.by_id.insert(r.id.to_string(), handle);
        handle
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::EntityType;

    #[test]
    fn same_id_resolves_to_first_entity() {
        let mut laf = LegalAssessmentFacts::new();
        let mut reg = EntityRegistry::new();

        let first = EntityRef { entity_type: EntityType::Data, name: "RawLog", id: "d1" };
        let second = EntityRef { entity_type: EntityType::PersonalData, name: "Other", id: "d1" };

        let a = reg.resolve_or_create(&mut laf, &first);
        let b = reg.resolve_or_create(&mut laf, &second);

        assert_eq!(a, b);
        assert_eq!(reg.len(), 1);
        assert_eq!(laf.data.len(), 1);
        assert_eq!(laf.data[0].entity_name, "RawLog");
        assert_eq!(laf.type_name(b), "Data");
    }

    #[test]
    fn ids_are_shared_across_kinds() {
        let mut laf = LegalAssessmentFacts::new();
        let mut reg = EntityRegistry::new();

        let purpose = EntityRef { entity_type: EntityType::Purpose, name: "Ads", id: "x" };
        let role = EntityRef { entity_type: EntityType::Controller, name: "ACME", id: "x" };

        let a = reg.resolve_or_create(&mut laf, &purpose);
        let b = reg.resolve_or_create(&mut laf, &role);

        assert_eq!(a, EntityHandle::Purpose(0));
        assert_eq!(b, a);
        assert!(laf.involved_parties.is_empty());
        assert!(reg.contains("x"));
    }
}
