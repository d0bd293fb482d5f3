use crate::{config::WIKIDATA_CONFIG, Config, RestApiError};
use nutype::nutype;
use std::fmt;

/// Checks for `letter` followed by one or more ASCII digits.
fn is_entity_id(id: &str, letter: char) -> bool {
    match id.strip_prefix(letter) {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

/// An item ID, like `Q42`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item ID from an integer, a string of digits, or a `Q123`-style string,
    /// using the default Wikidata configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikibase_datamodel::ItemId;
    /// assert_eq!(ItemId::new(123).unwrap().as_str(), "Q123");
    /// assert_eq!(ItemId::new("123").unwrap().as_str(), "Q123");
    /// assert_eq!(ItemId::new("Q123").unwrap().as_str(), "Q123");
    /// ```
    pub fn new<S: ToString>(id: S) -> Result<Self, RestApiError> {
        Self::new_from_config(id, &WIKIDATA_CONFIG)
    }

    /// Creates a new item ID, using a bespoke configuration.
    pub fn new_from_config<S: ToString>(id: S, config: &Config) -> Result<Self, RestApiError> {
        let raw = id.to_string();
        let id = Config::prefixed(config.item_letter(), &raw);
        if is_entity_id(&id, config.item_letter()) {
            Ok(Self(id))
        } else {
            Err(RestApiError::InvalidItemId(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric part of the ID.
    pub fn numeric_id(&self) -> u64 {
        self.0
            .trim_start_matches(|c: char| !c.is_ascii_digit())
            .parse()
            .unwrap_or_default()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ItemId> for String {
    fn from(val: ItemId) -> Self {
        val.0
    }
}

/// A property ID, like `P31`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(String);

impl PropertyId {
    /// Creates a new property ID from an integer, a string of digits, or a `P123`-style string,
    /// using the default Wikidata configuration.
    pub fn new<S: ToString>(id: S) -> Result<Self, RestApiError> {
        Self::new_from_config(id, &WIKIDATA_CONFIG)
    }

    /// Creates a new property ID, using a bespoke configuration.
    pub fn new_from_config<S: ToString>(id: S, config: &Config) -> Result<Self, RestApiError> {
        let raw = id.to_string();
        let id = Config::prefixed(config.property_letter(), &raw);
        if is_entity_id(&id, config.property_letter()) {
            Ok(Self(id))
        } else {
            Err(RestApiError::InvalidPropertyId(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PropertyId> for String {
    fn from(val: PropertyId) -> Self {
        val.0
    }
}

/// A statement ID, like `Q42$F078E5B3-F9A8-480E-B7AC-D97778CBBEF9`.
#[nutype(
    sanitize(trim),
    validate(regex = "^Q[0-9]+[$][\\w-]+$"),
    derive(Debug, Display, Clone, PartialEq, Eq, Hash, AsRef)
)]
pub struct StatementId(String);

impl StatementId {
    /// Validates a statement ID.
    pub fn new<S: Into<String>>(id: S) -> Result<Self, RestApiError> {
        let id = id.into();
        Self::try_new(id.clone()).map_err(|_| RestApiError::InvalidStatementId(id))
    }

    /// Returns the ID of the item the statement belongs to.
    pub fn item_id(&self) -> Result<ItemId, RestApiError> {
        let s: &str = self.as_ref();
        let (item, _) = s
            .split_once('$')
            .ok_or_else(|| RestApiError::InvalidStatementId(s.to_string()))?;
        ItemId::new(item)
    }
}
