use crate::{ReferencePart, RestApiError};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// A citation backing a statement: an ordered list of snaks and a content hash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reference {
    hash: String,
    parts: Vec<ReferencePart>,
}

impl Reference {
    /// Creates a new reference for writing. The hash is assigned by the server.
    pub const fn new(parts: Vec<ReferencePart>) -> Self {
        Self {
            hash: String::new(),
            parts,
        }
    }

    /// Creates a new Reference object from a JSON structure
    /// # Errors
    /// Returns an error if the hash or the parts are missing, or a part cannot be decoded.
    pub fn from_json(j: &Value) -> Result<Self, RestApiError> {
        let hash = j["hash"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("hash", j))?
            .to_string();
        let parts = j["parts"]
            .as_array()
            .ok_or_else(|| RestApiError::missing_field("parts", j))?
            .iter()
            .map(ReferencePart::from_json)
            .collect::<Result<Vec<_>, RestApiError>>()?;
        Ok(Self { hash, parts })
    }

    /// Returns the parts of the reference, in wire order
    pub fn parts(&self) -> &[ReferencePart] {
        &self.parts
    }

    /// Returns the hash of the reference; empty for references not yet saved
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub(crate) fn check_writable(&self) -> Result<(), RestApiError> {
        self.parts.iter().try_for_each(ReferencePart::check_writable)
    }
}

/// Only the parts are written; the server computes the hash.
#[cfg(not(tarpaulin_include))] // tarpaulin can't handle the Serialize trait
impl Serialize for Reference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Reference", 1)?;
        s.serialize_field("parts", &self.parts)?;
        s.end()
    }
}
