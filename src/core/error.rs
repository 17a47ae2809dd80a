use thiserror::Error;

/// Everything that can abort a transformation.
///
/// All variants are fatal: the driver returns the first one it meets and no output is produced.
/// Link labels with the wrong number of segments are not errors; they are skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("malformed label `{label}`: {reason}")]
    MalformedLabel { label: String, reason: &'static str },

    #[error("unsupported {category} `{name}` in label `{label}`")]
    UnsupportedLabelKind {
        category: &'static str,
        name: String,
        label: String,
    },

    #[error("dangling {what} reference `{id}`")]
    DanglingReference { what: &'static str, id: String },

    #[error("`{id}` is a {found}, but {relation} expects {expected}")]
    IncompatibleReference {
        id: String,
        relation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("node `{0}` is already mapped to a processing")]
    DuplicateNode(String),

    #[error("label id `{0}` is defined more than once in the dictionary")]
    DuplicateLabel(String),

    #[error("toon codec: {0}")]
    Codec(String),
}

impl TransformError {
    pub(crate) fn malformed(label: &str, reason: &'static str) -> Self {
        TransformError::MalformedLabel { label: label.to_string(), reason }
    }

    pub(crate) fn unsupported(category: &'static str, name: &str, label: &str) -> Self {
        TransformError::UnsupportedLabelKind {
            category,
            name: name.to_string(),
            label: label.to_string(),
        }
    }

    pub(crate) fn dangling(what: &'static str, id: &str) -> Self {
        TransformError::DanglingReference { what, id: id.to_string() }
    }
}
