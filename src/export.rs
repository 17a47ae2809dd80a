// TOON encoding of the transformation artifacts; writing them anywhere is the caller's business
use serde::Serialize;

use crate::core::error::TransformError;
use crate::mapping::generator::TransformOutput;

fn encode<T: Serialize>(value: &T) -> Result<String, TransformError> {
    toon_format::encode_default(value).map_err(|e| TransformError::Codec(e.to_string()))
}

impl TransformOutput {
    pub fn facts_to_toon(&self) -> Result<String, TransformError> {
        encode(&self.facts)
    }

    pub fn trace_to_toon(&self) -> Result<String, TransformError> {
        encode(&self.trace)
    }

    pub fn dictionary_to_toon(&self) -> Result<String, TransformError> {
        encode(&self.dictionary)
    }

    pub fn dfd_to_toon(&self) -> Result<String, TransformError> {
        encode(&self.dfd)
    }
}
