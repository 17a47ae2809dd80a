use serde::{Deserialize, Serialize};

use crate::core::error::TransformError;

pub const ELEMENT_LABEL_TYPE: &str = "GDPRElement";
pub const NODE_LABEL_TYPE: &str = "GDPRNode";
pub const LINK_LABEL_TYPE: &str = "GDPRLink";

/// Knobs of a transformation run. `Default` gives the standard GDPR label layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// label type whose labels are read as element references
    pub element_label_type: String,
    /// label types dropped from the dictionary once the transformation has consumed them
    pub pruned_label_types: Vec<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            element_label_type: ELEMENT_LABEL_TYPE.to_string(),
            pruned_label_types: vec![
                ELEMENT_LABEL_TYPE.to_string(),
                NODE_LABEL_TYPE.to_string(),
                LINK_LABEL_TYPE.to_string(),
            ],
        }
    }
}

impl TransformConfig {
    pub fn from_toon(input: &str) -> Result<Self, TransformError> {
        toon_format::decode_default(input).map_err(|e| TransformError::Codec(e.to_string()))
    }

    pub fn to_toon(&self) -> Result<String, TransformError> {
        toon_format::encode_default(self).map_err(|e| TransformError::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prunes_the_three_gdpr_types() {
        let cfg = TransformConfig::default();
        assert_eq!(cfg.element_label_type, "GDPRElement");
        assert_eq!(cfg.pruned_label_types, vec!["GDPRElement", "GDPRNode", "GDPRLink"]);
    }

    #[test]
    fn config_survives_toon() {
        let cfg = TransformConfig {
            element_label_type: "Elements".into(),
            pruned_label_types: vec!["Elements".into(), "Links".into()],
        };

        let text = cfg.to_toon().unwrap();
        assert_eq!(TransformConfig::from_toon(&text).unwrap(), cfg);
    }
}
