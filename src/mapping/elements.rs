// element-reference labels: GDPR::<Role>::<Type>:<Name>:<Id>
use tracing::debug;

use crate::core::dictionary::LabelEntry;
use crate::core::error::TransformError;
use crate::core::facts::{EntityHandle, Processing};
use crate::core::label::{ElementRole, parse_element_label};
use crate::mapping::generator::Transformation;

impl<'a> Transformation<'a> {
    /// Attach every element label of the configured element type to `processing`,
    /// materializing the referenced entities on first sight.
    pub fn resolve_element_labels(
        &mut self,
        processing: &mut Processing,
        labels: &[LabelEntry<'a>],
    ) -> Result<(), TransformError> {
        let config = self.config;
        for label in labels.iter().filter(|l| l.type_name == config.element_label_type) {
            let element = parse_element_label(label.value)?;
            let handle = self.registry.resolve_or_create(&mut self.facts, &element.target);
            self.attach_element(processing, element.role, handle)?;
            debug!(processing = %processing.id, label = label.id, role = ?element.role, "attached element");
        }
        Ok(())
    }

    fn attach_element(
        &self,
        processing: &mut Processing,
        role: ElementRole,
        handle: EntityHandle,
    ) -> Result<(), TransformError> {
        let id = self.facts.entity_id(handle).to_string();
        match (role, handle) {
            (ElementRole::InputData, EntityHandle::Data(_)) => processing.input_data.push(id),
            (ElementRole::OutputData, EntityHandle::Data(_)) => processing.output_data.push(id),
            (ElementRole::LegalBasis, EntityHandle::LegalBasis(_)) => processing.on_the_basis_of.push(id),
            (ElementRole::Purpose, EntityHandle::Purpose(_)) => processing.purposes.push(id),
            //single-valued, last write wins
            (ElementRole::Responsible, EntityHandle::Role(_)) => processing.responsible = Some(id),
            (ElementRole::InputData, _) => return Err(self.facts.incompatible(handle, "InputData", "Data")),
            (ElementRole::OutputData, _) => return Err(self.facts.incompatible(handle, "OutputData", "Data")),
            (ElementRole::LegalBasis, _) => return Err(self.facts.incompatible(handle, "LegalBasis", "LegalBasis")),
            (ElementRole::Purpose, _) => return Err(self.facts.incompatible(handle, "Purpose", "Purpose")),
            (ElementRole::Responsible, _) => return Err(self.facts.incompatible(handle, "Responsible", "Role")),
        }
        Ok(())
    }
}
