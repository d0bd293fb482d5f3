use crate::{
    quantity::NO_UNIT, DataType, GlobeCoordinate, MonolingualText, Quantity, RestApiError,
    SnakType, Time, WikibaseItem,
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{json, Value};
use tracing::warn;

/// Decoding and encoding of the `content` part of a value.
pub trait ValueContent: Sized {
    /// Decodes the `content` JSON of a value.
    /// # Errors
    /// Returns an error if a required field is missing or has the wrong type.
    fn from_content(j: &Value) -> Result<Self, RestApiError>;

    /// Encodes the value as the `content` JSON of a write request.
    fn to_content(&self) -> Value;
}

/// Shared by all data types that are encoded as a plain string.
impl ValueContent for String {
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        j.as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| RestApiError::WrongType {
                field: "content".into(),
                j: j.to_owned(),
            })
    }

    fn to_content(&self) -> Value {
        json!(self)
    }
}

/// A typed value of a snak.
///
/// `NoValue` and `SomeValue` carry no content. The four string variants share a wire
/// encoding but remain distinct, according to the data type declared by the property.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    NoValue,
    SomeValue,
    String(String),
    ExternalId(String),
    Url(String),
    CommonsMedia(String),
    Quantity(Quantity),
    Time(Time),
    GlobeCoordinate(GlobeCoordinate),
    MonolingualText(MonolingualText),
    WikibaseItem(WikibaseItem),
}

impl DataValue {
    /// Decodes the `value` object of a snak.
    ///
    /// The `type` of the value is checked first; `novalue` and `somevalue` need no data type.
    /// Otherwise `data_type` (as declared by the property) picks the variant. A missing or
    /// unsupported data type is logged and yields `Ok(None)`, so the rest of an entity can
    /// still be decoded.
    /// # Errors
    /// Returns an error if the value type is unknown, or the content does not match the data type.
    pub fn from_json(
        data_type: Option<&str>,
        property: &str,
        j: &Value,
    ) -> Result<Option<Self>, RestApiError> {
        match SnakType::from_json(j)? {
            SnakType::NoValue => return Ok(Some(Self::NoValue)),
            SnakType::SomeValue => return Ok(Some(Self::SomeValue)),
            SnakType::Value => {}
        }
        let data_type = match data_type {
            Some(data_type) => data_type,
            None => {
                warn!(property, "value without a data type, skipping");
                return Ok(None);
            }
        };
        match data_type.parse::<DataType>() {
            Ok(data_type) => Self::from_content(data_type, &j["content"]).map(Some),
            Err(_) => {
                warn!(property, data_type, "unsupported data type, skipping value");
                Ok(None)
            }
        }
    }

    /// Decodes `content` JSON as a value of the given data type.
    /// # Errors
    /// Returns an error if the content does not match the data type.
    pub fn from_content(data_type: DataType, j: &Value) -> Result<Self, RestApiError> {
        Ok(match data_type {
            DataType::String => Self::String(String::from_content(j)?),
            DataType::ExternalId => Self::ExternalId(String::from_content(j)?),
            DataType::Url => Self::Url(String::from_content(j)?),
            DataType::CommonsMedia => Self::CommonsMedia(String::from_content(j)?),
            DataType::Quantity => Self::Quantity(Quantity::from_content(j)?),
            DataType::Time => Self::Time(Time::from_content(j)?),
            DataType::GlobeCoordinate => Self::GlobeCoordinate(GlobeCoordinate::from_content(j)?),
            DataType::MonolingualText => Self::MonolingualText(MonolingualText::from_content(j)?),
            DataType::WikibaseItem => Self::WikibaseItem(WikibaseItem::from_content(j)?),
        })
    }

    /// Returns the `content` JSON, or `None` for `NoValue` and `SomeValue`.
    pub fn to_content(&self) -> Option<Value> {
        match self {
            Self::NoValue | Self::SomeValue => None,
            Self::String(s) | Self::ExternalId(s) | Self::Url(s) | Self::CommonsMedia(s) => {
                Some(s.to_content())
            }
            Self::Quantity(v) => Some(v.to_content()),
            Self::Time(v) => Some(v.to_content()),
            Self::GlobeCoordinate(v) => Some(v.to_content()),
            Self::MonolingualText(v) => Some(v.to_content()),
            Self::WikibaseItem(v) => Some(v.to_content()),
        }
    }

    /// The data type of the value; `None` for `NoValue` and `SomeValue`.
    pub const fn data_type(&self) -> Option<DataType> {
        match self {
            Self::NoValue | Self::SomeValue => None,
            Self::String(_) => Some(DataType::String),
            Self::ExternalId(_) => Some(DataType::ExternalId),
            Self::Url(_) => Some(DataType::Url),
            Self::CommonsMedia(_) => Some(DataType::CommonsMedia),
            Self::Quantity(_) => Some(DataType::Quantity),
            Self::Time(_) => Some(DataType::Time),
            Self::GlobeCoordinate(_) => Some(DataType::GlobeCoordinate),
            Self::MonolingualText(_) => Some(DataType::MonolingualText),
            Self::WikibaseItem(_) => Some(DataType::WikibaseItem),
        }
    }

    pub const fn snak_type(&self) -> SnakType {
        match self {
            Self::NoValue => SnakType::NoValue,
            Self::SomeValue => SnakType::SomeValue,
            _ => SnakType::Value,
        }
    }

    /// A symbolic name for the kind of value, like `external_id` or `no_value`.
    pub const fn value_type(&self) -> &'static str {
        match self {
            Self::NoValue => "no_value",
            Self::SomeValue => "some_value",
            Self::String(_) => "string",
            Self::ExternalId(_) => "external_id",
            Self::Url(_) => "url",
            Self::CommonsMedia(_) => "commons_media",
            Self::Quantity(_) => "quantity",
            Self::Time(_) => "time",
            Self::GlobeCoordinate(_) => "globe_coordinate",
            Self::MonolingualText(_) => "monolingual_text",
            Self::WikibaseItem(_) => "wikibase_item",
        }
    }

    /// A short, human-readable rendering of the value.
    pub fn humanized(&self) -> String {
        match self {
            Self::NoValue => "no value".to_string(),
            Self::SomeValue => "unknown value".to_string(),
            Self::String(s) | Self::ExternalId(s) | Self::Url(s) | Self::CommonsMedia(s) => {
                s.to_owned()
            }
            Self::Quantity(q) if q.unit() == NO_UNIT => q.amount().to_string(),
            Self::Quantity(q) => format!("{} {}", q.amount(), q.unit()),
            Self::Time(t) => t.time().to_string(),
            Self::GlobeCoordinate(c) => format!("{}, {}", c.latitude(), c.longitude()),
            Self::MonolingualText(m) => m.text().to_string(),
            Self::WikibaseItem(w) => w.id().to_string(),
        }
    }

    pub fn new_string<S: Into<String>>(s: S) -> Self {
        Self::String(s.into())
    }

    pub fn new_external_id<S: Into<String>>(s: S) -> Self {
        Self::ExternalId(s.into())
    }

    pub fn new_url<S: Into<String>>(s: S) -> Self {
        Self::Url(s.into())
    }

    pub fn new_commons_media<S: Into<String>>(s: S) -> Self {
        Self::CommonsMedia(s.into())
    }

    pub fn new_wikibase_item<S: Into<String>>(id: S) -> Self {
        Self::WikibaseItem(WikibaseItem::new(id))
    }

    pub fn new_monolingual_text<S1: Into<String>, S2: Into<String>>(
        language: S1,
        text: S2,
    ) -> Self {
        Self::MonolingualText(MonolingualText::new(language, text))
    }
}

impl From<Quantity> for DataValue {
    fn from(v: Quantity) -> Self {
        Self::Quantity(v)
    }
}

impl From<Time> for DataValue {
    fn from(v: Time) -> Self {
        Self::Time(v)
    }
}

impl From<GlobeCoordinate> for DataValue {
    fn from(v: GlobeCoordinate) -> Self {
        Self::GlobeCoordinate(v)
    }
}

impl From<MonolingualText> for DataValue {
    fn from(v: MonolingualText) -> Self {
        Self::MonolingualText(v)
    }
}

impl From<WikibaseItem> for DataValue {
    fn from(v: WikibaseItem) -> Self {
        Self::WikibaseItem(v)
    }
}

#[cfg(not(tarpaulin_include))] // tarpaulin can't handle the Serialize trait
impl Serialize for DataValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_content() {
            Some(content) => {
                let mut s = serializer.serialize_struct("DataValue", 2)?;
                s.serialize_field("type", self.snak_type().as_str())?;
                s.serialize_field("content", &content)?;
                s.end()
            }
            None => {
                let mut s = serializer.serialize_struct("DataValue", 1)?;
                s.serialize_field("type", self.snak_type().as_str())?;
                s.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TimePrecision, GREGORIAN_CALENDAR};

    fn decode(data_type: &str, j: Value) -> Option<DataValue> {
        DataValue::from_json(Some(data_type), "P1", &j).unwrap()
    }

    #[test]
    fn test_string_types_stay_distinct() {
        let j = json!({"type": "value", "content": "foo"});
        assert_eq!(decode("string", j.clone()), Some(DataValue::new_string("foo")));
        assert_eq!(
            decode("external-id", j.clone()),
            Some(DataValue::new_external_id("foo"))
        );
        assert_eq!(decode("url", j.clone()), Some(DataValue::new_url("foo")));
        assert_eq!(
            decode("commonsMedia", j),
            Some(DataValue::new_commons_media("foo"))
        );
        assert_eq!(DataValue::new_url("foo").value_type(), "url");
        assert_eq!(DataValue::new_external_id("foo").data_type(), Some(DataType::ExternalId));
    }

    #[test]
    fn test_snak_type_checked_first() {
        let j = json!({"type": "novalue"});
        assert_eq!(decode("quantity", j), Some(DataValue::NoValue));
        let j = json!({"type": "somevalue"});
        assert_eq!(
            DataValue::from_json(None, "P1", &j).unwrap(),
            Some(DataValue::SomeValue)
        );
        assert_eq!(DataValue::SomeValue.value_type(), "some_value");
        assert_eq!(DataValue::NoValue.data_type(), None);
    }

    #[test]
    fn test_unsupported_data_type() {
        let j = json!({"type": "value", "content": "x^2"});
        assert_eq!(decode("math", j.clone()), None);
        assert_eq!(DataValue::from_json(None, "P1", &j).unwrap(), None);
    }

    #[test]
    fn test_unknown_value_type() {
        let j = json!({"type": "whatever", "content": "foo"});
        assert!(matches!(
            DataValue::from_json(Some("string"), "P1", &j),
            Err(RestApiError::UnknownSnakType(_))
        ));
    }

    #[test]
    fn test_content_mismatch() {
        let j = json!({"type": "value", "content": {"amount": "+1"}});
        assert!(DataValue::from_json(Some("string"), "P1", &j).is_err());
        assert!(DataValue::from_json(Some("quantity"), "P1", &j).is_err());
    }

    #[test]
    fn test_round_trip_all_variants() {
        let values = vec![
            DataValue::new_string("foo"),
            DataValue::new_external_id("0000-0002-1825-0097"),
            DataValue::new_url("https://example.com"),
            DataValue::new_commons_media("Foo.jpg"),
            Quantity::new("+10.38", NO_UNIT).into(),
            Time::gregorian("+2022-08-12T00:00:00Z", TimePrecision::Day).into(),
            GlobeCoordinate::on_earth(52.5, 13.4, 0.1).into(),
            DataValue::new_monolingual_text("en", "Foobar"),
            DataValue::new_wikibase_item("Q1234"),
        ];
        for v in values {
            let data_type = v.data_type().unwrap();
            let j = json!(v);
            let decoded = DataValue::from_json(Some(data_type.as_str()), "P1", &j).unwrap();
            assert_eq!(decoded, Some(v));
        }
        for v in [DataValue::NoValue, DataValue::SomeValue] {
            let j = json!(v);
            assert_eq!(DataValue::from_json(None, "P1", &j).unwrap(), Some(v));
        }
    }

    #[test]
    fn test_serialize_omits_content() {
        assert_eq!(json!(DataValue::NoValue), json!({"type": "novalue"}));
        assert_eq!(json!(DataValue::SomeValue), json!({"type": "somevalue"}));
        assert_eq!(
            json!(DataValue::new_wikibase_item("Q1234")),
            json!({"type": "value", "content": "Q1234"})
        );
        assert_eq!(
            json!(DataValue::from(Time::gregorian(
                "+2021-01-01T00:00:00Z",
                TimePrecision::Day
            ))),
            json!({"type": "value", "content": {"time": "+2021-01-01T00:00:00Z", "precision": 11, "calendarmodel": GREGORIAN_CALENDAR}})
        );
    }

    #[test]
    fn test_humanized() {
        assert_eq!(DataValue::new_string("foo").humanized(), "foo");
        assert_eq!(DataValue::NoValue.humanized(), "no value");
        assert_eq!(DataValue::SomeValue.humanized(), "unknown value");
        assert_eq!(
            DataValue::from(Quantity::new("+5", NO_UNIT)).humanized(),
            "+5"
        );
        assert_eq!(
            DataValue::from(Quantity::new("+5", "http://www.wikidata.org/entity/Q11573"))
                .humanized(),
            "+5 http://www.wikidata.org/entity/Q11573"
        );
        assert_eq!(DataValue::new_monolingual_text("en", "Bar").humanized(), "Bar");
    }
}
