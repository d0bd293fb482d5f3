use crate::{data_value::ValueContent, RestApiError};
use serde_json::{json, Value};

/// A reference to another entity, like `Q5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikibaseItem {
    id: String,
}

impl WikibaseItem {
    /// Creates a reference to an entity ID. The ID is not validated, since
    /// references may point to entity types other than items.
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The numeric part of the ID, if there is one.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .parse()
            .ok()
    }

    /// The entity type, derived from the ID prefix.
    pub fn entity_type(&self) -> &'static str {
        match self.id.chars().next() {
            Some('Q') => "item",
            Some('P') => "property",
            Some('L') => "lexeme",
            _ => "unknown",
        }
    }
}

impl ValueContent for WikibaseItem {
    /// Accepts a plain ID string, or an object with an `id` or a `numeric-id` key.
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        if let Some(id) = j.as_str() {
            return Ok(Self::new(id));
        }
        if let Some(id) = j["id"].as_str() {
            return Ok(Self::new(id));
        }
        match j["numeric-id"].as_u64() {
            Some(numeric_id) => Ok(Self::new(format!("Q{numeric_id}"))),
            None => Err(RestApiError::missing_field("id", j)),
        }
    }

    fn to_content(&self) -> Value {
        json!(self.id)
    }
}
