//! Grammar of the `GDPR::` labels attached to data-flow nodes.
//!
//! ```text
//! processing override : GDPR::ofType:<TypeName>
//! element reference   : GDPR::<ElementRole>::<EntityRef>
//! link reference      : GDPR::<EntityRef>::<LinkRole>::<EntityRef>
//! entity reference    : <TypeName>:<DisplayName>:<Id>
//! ```
//!
//! Type names may carry an `Impl` suffix, which is ignored.

use crate::core::error::TransformError;
use crate::core::types::{EntityType, ProcessingKind};

pub const GDPR_PREFIX: &str = "GDPR::";
pub const OF_TYPE_PREFIX: &str = "GDPR::ofType:";
const SEGMENT_SEPARATOR: &str = "::";
const IMPL_SUFFIX: &str = "Impl";

fn strip_impl(name: &str) -> &str {
    name.strip_suffix(IMPL_SUFFIX).unwrap_or(name)
}

//trailing empty pieces are dropped, so `Data:X:d1:` still has three fields
fn split_fields<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = s.split(sep).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

/// `<TypeName>:<DisplayName>:<Id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef<'a> {
    pub entity_type: EntityType,
    pub name: &'a str,
    pub id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    InputData,
    OutputData,
    LegalBasis,
    Purpose,
    Responsible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLabel<'a> {
    pub role: ElementRole,
    pub target: EntityRef<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    Consentee,
    ContractParty,
    ForPurpose,
    ForData,
    Reference,
}

impl LinkRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRole::Consentee => "Consentee",
            LinkRole::ContractParty => "ContractParty",
            LinkRole::ForPurpose => "ForPurpose",
            LinkRole::ForData => "ForData",
            LinkRole::Reference => "Reference",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkLabel<'a> {
    pub source: EntityRef<'a>,
    pub role: LinkRole,
    pub target: EntityRef<'a>,
}

/// Parse an entity-reference token. `label` is the full raw label, used for error context.
pub fn parse_entity_ref<'a>(token: &'a str, label: &str) -> Result<EntityRef<'a>, TransformError> {
    let fields = split_fields(token, ":");
    let [type_name, name, id] = *fields.as_slice() else {
        return Err(TransformError::malformed(label, "entity reference must be <Type>:<Name>:<Id>"));
    };

    let type_name = strip_impl(type_name);
    let entity_type = EntityType::from_type_name(type_name)
        .ok_or_else(|| TransformError::unsupported("entity type", type_name, label))?;

    Ok(EntityRef { entity_type, name, id })
}

/// Returns the (suffix-stripped) type name if `raw` is a processing override label.
pub fn processing_override(raw: &str) -> Option<&str> {
    raw.strip_prefix(OF_TYPE_PREFIX).map(strip_impl)
}

/// Resolve the type name of an override label (as returned by [`processing_override`]).
pub fn parse_processing_kind(name: &str, raw: &str) -> Result<ProcessingKind, TransformError> {
    ProcessingKind::from_type_name(name).ok_or_else(|| TransformError::unsupported("processing type", name, raw))
}

/// Element labels are only parsed for labels of the element label type, so a missing
/// prefix or a wrong segment count is an authoring error.
pub fn parse_element_label(raw: &str) -> Result<ElementLabel<'_>, TransformError> {
    let body = raw
        .strip_prefix(GDPR_PREFIX)
        .ok_or_else(|| TransformError::malformed(raw, "element label must start with GDPR::"))?;

    let segments = split_fields(body, SEGMENT_SEPARATOR);
    let [role, token] = *segments.as_slice() else {
        return Err(TransformError::malformed(raw, "element label must be GDPR::<Role>::<Type>:<Name>:<Id>"));
    };

    let role = match role {
        "InputData" => ElementRole::InputData,
        "OutputData" => ElementRole::OutputData,
        "LegalBasis" => ElementRole::LegalBasis,
        "Purpose" => ElementRole::Purpose,
        "Responsible" => ElementRole::Responsible,
        other => return Err(TransformError::unsupported("element role", other, raw)),
    };

    Ok(ElementLabel { role, target: parse_entity_ref(token, raw)? })
}

/// `Ok(None)` means "not a link label": no `GDPR::` prefix or not exactly three segments.
pub fn parse_link_label(raw: &str) -> Result<Option<LinkLabel<'_>>, TransformError> {
    let Some(body) = raw.strip_prefix(GDPR_PREFIX) else {
        return Ok(None);
    };

    let segments = split_fields(body, SEGMENT_SEPARATOR);
    let [source, role, target] = *segments.as_slice() else {
        return Ok(None);
    };

    let role = match role {
        "Consentee" => LinkRole::Consentee,
        "ContractParty" => LinkRole::ContractParty,
        "ForPurpose" => LinkRole::ForPurpose,
        "ForData" => LinkRole::ForData,
        "Reference" => LinkRole::Reference,
        other => return Err(TransformError::unsupported("link role", other, raw)),
    };

    Ok(Some(LinkLabel {
        source: parse_entity_ref(source, raw)?,
        role,
        target: parse_entity_ref(target, raw)?,
    }))
}
