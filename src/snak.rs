use crate::{DataType, DataValue, PropertyId, RestApiError, SnakType};
use serde::ser::{Error, Serialize, SerializeStruct, Serializer};
use serde_json::{json, Value};

/// A property paired with a value. Qualifiers and reference parts are snaks as well.
#[derive(Debug, Clone, PartialEq)]
pub struct Snak {
    property: PropertyId,
    data_type: Option<String>,
    value: Option<DataValue>,
}

/// A snak qualifying a statement.
pub type Qualifier = Snak;

/// A snak that is part of a reference.
pub type ReferencePart = Snak;

impl Snak {
    pub fn new(property: PropertyId, value: DataValue) -> Self {
        Self {
            property,
            data_type: value.data_type().map(|dt| dt.as_str().to_string()),
            value: Some(value),
        }
    }

    /// Decodes a snak of the form `{"property": {"id", "data_type"}, "value": {"type", "content"}}`.
    /// # Errors
    /// Returns an error if the property ID is missing or invalid, or the value cannot be decoded.
    pub fn from_json(j: &Value) -> Result<Self, RestApiError> {
        Self::from_json_with_property(j, None)
    }

    /// Like `from_json`, but falls back to `property` when the snak does not name its property,
    /// as in property-keyed mappings.
    pub(crate) fn from_json_with_property(
        j: &Value,
        property: Option<&str>,
    ) -> Result<Self, RestApiError> {
        let property_id = j["property"]["id"]
            .as_str()
            .or(property)
            .ok_or_else(|| RestApiError::missing_field("property", j))?;
        let property = PropertyId::new(property_id)?;
        let data_type = j["property"]["data_type"]
            .as_str()
            .or_else(|| j["property"]["data-type"].as_str())
            .map(|s| s.to_string());
        let value = DataValue::from_json(data_type.as_deref(), property.as_str(), &j["value"])?;
        Ok(Self {
            property,
            data_type,
            value,
        })
    }

    pub const fn property_id(&self) -> &PropertyId {
        &self.property
    }

    /// The data type declared by the property, as named on the wire.
    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    /// The declared data type, if this crate supports it.
    pub fn known_data_type(&self) -> Option<DataType> {
        self.data_type.as_deref().and_then(|s| s.parse().ok())
    }

    /// The value, or `None` if its data type is not supported.
    pub const fn value(&self) -> Option<&DataValue> {
        self.value.as_ref()
    }

    pub fn snak_type(&self) -> SnakType {
        self.value
            .as_ref()
            .map_or(SnakType::Value, DataValue::snak_type)
    }

    /// Returns an error if the value cannot be written back.
    pub(crate) fn check_writable(&self) -> Result<(), RestApiError> {
        match self.value {
            Some(_) => Ok(()),
            None => Err(RestApiError::UnsupportedValue(self.property.to_string())),
        }
    }
}

/// Serializes the write shape, `{"property": {"id"}, "value": {"type", "content"}}`.
#[cfg(not(tarpaulin_include))] // tarpaulin can't handle the Serialize trait
impl Serialize for Snak {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.value.as_ref().ok_or_else(|| {
            S::Error::custom(RestApiError::UnsupportedValue(self.property.to_string()))
        })?;
        let mut s = serializer.serialize_struct("Snak", 2)?;
        s.serialize_field("property", &json!({"id": self.property.as_str()}))?;
        s.serialize_field("value", value)?;
        s.end()
    }
}
