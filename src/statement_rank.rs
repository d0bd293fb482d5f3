use crate::RestApiError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Copy)]
pub enum StatementRank {
    #[default]
    Normal,
    Preferred,
    Deprecated,
}

impl StatementRank {
    /// Create a new `StatementRank` from a string, ignoring case
    /// # Errors
    /// Returns `InvalidRank` for anything but normal, preferred, or deprecated.
    pub fn new<S: Into<String>>(s: S) -> Result<Self, RestApiError> {
        let s = s.into();
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(StatementRank::Normal),
            "preferred" => Ok(StatementRank::Preferred),
            "deprecated" => Ok(StatementRank::Deprecated),
            _ => Err(RestApiError::InvalidRank(s)),
        }
    }

    /// Returns the `StatementRank` as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            StatementRank::Normal => "normal",
            StatementRank::Preferred => "preferred",
            StatementRank::Deprecated => "deprecated",
        }
    }
}

impl FromStr for StatementRank {
    type Err = RestApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
