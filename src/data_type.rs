use crate::RestApiError;
use std::{fmt, str::FromStr};

/// The data type a property declares for its values, as named on the wire.
///
/// Several data types share the same value encoding (a plain string), so the declared
/// data type, not the shape of the value, decides which `DataValue` variant is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    #[default]
    String,
    ExternalId,
    Url,
    CommonsMedia,
    Quantity,
    Time,
    GlobeCoordinate,
    MonolingualText,
    WikibaseItem,
}

impl DataType {
    /// Returns the wire name of the data type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::ExternalId => "external-id",
            DataType::Url => "url",
            DataType::CommonsMedia => "commonsMedia",
            DataType::Quantity => "quantity",
            DataType::Time => "time",
            DataType::GlobeCoordinate => "globe-coordinate",
            DataType::MonolingualText => "monolingualtext",
            DataType::WikibaseItem => "wikibase-item",
        }
    }
}

impl FromStr for DataType {
    type Err = RestApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(DataType::String),
            "external-id" => Ok(DataType::ExternalId),
            "url" => Ok(DataType::Url),
            "commonsMedia" => Ok(DataType::CommonsMedia),
            "quantity" => Ok(DataType::Quantity),
            "time" => Ok(DataType::Time),
            "globe-coordinate" => Ok(DataType::GlobeCoordinate),
            "monolingualtext" => Ok(DataType::MonolingualText),
            "wikibase-item" => Ok(DataType::WikibaseItem),
            other => Err(RestApiError::UnknownDataType(other.into())),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
