// label dictionary + id index used to resolve node label references
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::error::TransformError;
use crate::core::types::LabelId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    /// raw label string, e.g. `GDPR::Purpose::Purpose:Billing:p7`
    pub value: String,
}

impl Label {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id: id.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelType {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl LabelType {
    pub fn new(name: impl Into<String>, labels: Vec<Label>) -> Self {
        let name = name.into();
        Self { id: name.clone(), name, labels }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDictionary {
    #[serde(default)]
    pub label_types: Vec<LabelType>,
}

impl DataDictionary {
    pub fn new(label_types: Vec<LabelType>) -> Self {
        Self { label_types }
    }

    pub fn label_type(&self, name: &str) -> Option<&LabelType> {
        self.label_types.iter().find(|lt| lt.name == name)
    }

    /// Remove every label type whose name is in `names`, keeping the order of the rest.
    /// Returns the names that were removed.
    pub fn prune(&mut self, names: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        self.label_types.retain(|lt| {
            if names.iter().any(|n| n == &lt.name) {
                removed.push(lt.name.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn from_toon(input: &str) -> Result<Self, TransformError> {
        toon_format::decode_default(input).map_err(|e| TransformError::Codec(e.to_string()))
    }
}

/// A label together with the name of the type that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelEntry<'a> {
    pub id: &'a str,
    pub value: &'a str,
    pub type_name: &'a str,
}

/// Label id -> (owning type, raw value). Stands in for the label's back-reference to its type.
#[derive(Debug, Default)]
pub struct LabelIndex<'a> {
    by_id: HashMap<&'a str, LabelEntry<'a>>,
}

impl<'a> LabelIndex<'a> {
    pub fn build(dictionary: &'a DataDictionary) -> Result<Self, TransformError> {
        let mut by_id = HashMap::new();
        for lt in &dictionary.label_types {
            for label in &lt.labels {
                let entry = LabelEntry {
                    id: &label.id,
                    value: &label.value,
                    type_name: &lt.name,
                };
                if by_id.insert(label.id.as_str(), entry).is_some() {
                    return Err(TransformError::DuplicateLabel(label.id.clone()));
                }
            }
        }
        Ok(Self { by_id })
    }

    pub fn get(&self, id: &str) -> Result<LabelEntry<'a>, TransformError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| TransformError::dangling("label", id))
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

    fn mk_dictionary() -> DataDictionary {
        DataDictionary::new(vec![
            LabelType::new("GDPRElement", vec![Label::new("e1", "GDPR::Purpose::Purpose:Billing:p1")]),
            LabelType::new("Sensitivity", vec![Label::new("s1", "high"), Label::new("s2", "low")]),
            LabelType::new("GDPRLink", vec![]),
            LabelType::new("GDPRNode", vec![Label::new("o1", "GDPR::ofType:Storing")]),
        ])
    }

    #[test]
    fn dictionary_decodes_from_its_toon_encoding() {
        let dd = mk_dictionary();
        let text = toon_format::encode_default(&dd).unwrap();

        let decoded = DataDictionary::from_toon(&text).unwrap();

        assert_eq!(decoded, dd);
        assert!(decoded.label_type("GDPRLink").unwrap().labels.is_empty());
        assert_eq!(decoded.label_type("GDPRElement").unwrap().labels[0].value, "GDPR::Purpose::Purpose:Billing:p1");
    }

    #[test]
    fn index_resolves_label_and_owning_type() {
        let dd = mk_dictionary();
        let index = LabelIndex::build(&dd).unwrap();

        assert_eq!(index.len(), 4);
        let entry = index.get("s2").unwrap();
        assert_eq!(entry.type_name, "Sensitivity");
        assert_eq!(entry.value, "low");
    }

    #[test]
    fn index_rejects_unknown_and_duplicate_ids() {
        let dd = mk_dictionary();
        let index = LabelIndex::build(&dd).unwrap();
        assert_eq!(
            index.get("nope").unwrap_err(),
            TransformError::DanglingReference { what: "label", id: "nope".into() }
        );

        let dup = DataDictionary::new(vec![
            LabelType::new("A", vec![Label::new("x", "one")]),
            LabelType::new("B", vec![Label::new("x", "two")]),
        ]);
        assert_eq!(LabelIndex::build(&dup).unwrap_err(), TransformError::DuplicateLabel("x".into()));
    }

    #[test]
    fn prune_removes_only_named_types_and_keeps_order() {
        let mut dd = mk_dictionary();
        let names: Vec<String> = ["GDPRElement", "GDPRNode", "GDPRLink"].iter().map(|s| s.to_string()).collect();

        let removed = dd.prune(&names);

        assert_eq!(removed, vec!["GDPRElement", "GDPRLink", "GDPRNode"]);
        assert_eq!(dd.label_types.len(), 1);
        assert_eq!(dd.label_types[0], mk_dictionary().label_types[1]);
    }
}
