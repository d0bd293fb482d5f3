use crate::RestApiError;
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Whether a snak has a value, no value, or an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SnakType {
    #[default]
    Value,
    NoValue,
    SomeValue,
}

impl SnakType {
    /// Reads the `type` field of a value object.
    /// # Errors
    /// Returns an error if `type` is missing or unknown.
    pub fn from_json(j: &Value) -> Result<Self, RestApiError> {
        j["type"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("type", j))?
            .parse()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SnakType::Value => "value",
            SnakType::NoValue => "novalue",
            SnakType::SomeValue => "somevalue",
        }
    }
}

impl FromStr for SnakType {
    type Err = RestApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(SnakType::Value),
            "novalue" => Ok(SnakType::NoValue),
            "somevalue" => Ok(SnakType::SomeValue),
            other => Err(RestApiError::UnknownSnakType(other.into())),
        }
    }
}

impl fmt::Display for SnakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
