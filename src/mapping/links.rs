// link-reference labels: GDPR::<EntityRef>::<LinkRole>::<EntityRef>
use tracing::debug;

use crate::core::dictionary::LabelEntry;
use crate::core::error::TransformError;
use crate::core::facts::{DataKind, EntityHandle, LegalBasisKind};
use crate::core::label::{LinkRole, parse_link_label};
use crate::mapping::generator::Transformation;

impl<'a> Transformation<'a> {
    /// Apply every not-yet-applied link label in `labels`.
    ///
    /// Labels are shared between nodes, so each label id is applied at most once per run.
    /// Labels that do not have exactly three `::` segments are skipped and stay unmarked.
    pub fn resolve_link_labels(&mut self, labels: &[LabelEntry<'a>]) -> Result<(), TransformError> {
        for label in labels {
            if self.resolved_links.contains(label.id) {
                continue;
            }

            let Some(link) = parse_link_label(label.value)? else {
                continue;
            };

            let source = self.registry.resolve_or_create(&mut self.facts, &link.source);
            let target = self.registry.resolve_or_create(&mut self.facts, &link.target);
            self.apply_link(link.role, source, target)?;

            self.resolved_links.insert(label.id);
            debug!(label = label.id, from = link.source.id, role = link.role.as_str(), to = link.target.id, "applied link");
        }
        Ok(())
    }

    fn expect_type(&self, handle: EntityHandle, relation: &'static str, expected: &'static str) -> Result<(), TransformError> {
        if self.facts.type_name(handle) == expected {
            Ok(())
        } else {
            Err(self.facts.incompatible(handle, relation, expected))
        }
    }

    fn apply_link(&mut self, role: LinkRole, source: EntityHandle, target: EntityHandle) -> Result<(), TransformError> {
        let relation = role.as_str();
        let target_id = self.facts.entity_id(target).to_string();

        match role {
            LinkRole::Consentee => {
                self.expect_type(source, relation, "Consent")?;
                self.expect_type(target, relation, "NaturalPerson")?;
                if let EntityHandle::LegalBasis(i) = source
                    && let LegalBasisKind::Consent { consentee } = &mut self.facts.legal_bases[i].kind
                {
                    *consentee = Some(target_id);
                }
            }
            LinkRole::ContractParty => {
                self.expect_type(source, relation, "PerformanceOfContract")?;
                if !matches!(target, EntityHandle::Role(_)) {
                    return Err(self.facts.incompatible(target, relation, "Role"));
                }
                if let EntityHandle::LegalBasis(i) = source
                    && let LegalBasisKind::PerformanceOfContract { contracting_parties } =
                        &mut self.facts.legal_bases[i].kind
                {
                    contracting_parties.push(target_id);
                }
            }
            LinkRole::ForPurpose => {
                self.expect_type(target, relation, "Purpose")?;
                let EntityHandle::LegalBasis(i) = source else {
                    return Err(self.facts.incompatible(source, relation, "LegalBasis"));
                };
                self.facts.legal_bases[i].for_purpose.push(target_id);
            }
            LinkRole::ForData => {
                self.expect_type(target, relation, "PersonalData")?;
                let EntityHandle::LegalBasis(i) = source else {
                    return Err(self.facts.incompatible(source, relation, "LegalBasis"));
                };
                self.facts.legal_bases[i].personal_data = Some(target_id);
            }
            LinkRole::Reference => {
                self.expect_type(source, relation, "PersonalData")?;
                self.expect_type(target, relation, "NaturalPerson")?;
                if let EntityHandle::Data(i) = source
                    && let DataKind::Personal { data_references } = &mut self.facts.data[i].kind
                {
                    data_references.push(target_id);
                }
            }
        }
        Ok(())
    }
}
