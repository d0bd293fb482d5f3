use crate::{
    DataValue, PropertyId, Qualifier, Reference, RestApiError, Snak, StatementRank,
};
use serde::ser::{Error, Serialize, SerializeStruct, Serializer};
use serde_json::{json, Value};

/// One property assertion on an item, with qualifiers, references, and a rank.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    statement_id: Option<String>,
    main: Snak,
    qualifiers: Vec<Qualifier>,
    references: Vec<Reference>,
    rank: StatementRank,
}

impl Statement {
    /// Creates a new statement with normal rank, for writing.
    ///
    /// # Examples
    ///
    /// ```
    /// use wikibase_datamodel::prelude::*;
    /// let statement = Statement::new(PropertyId::new(31).unwrap(), DataValue::new_wikibase_item("Q5"))
    ///     .with_rank(StatementRank::Preferred);
    /// assert_eq!(statement.property_id().as_str(), "P31");
    /// ```
    pub fn new(property: PropertyId, value: DataValue) -> Self {
        Self {
            statement_id: None,
            main: Snak::new(property, value),
            qualifiers: vec![],
            references: vec![],
            rank: StatementRank::default(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn with_qualifiers(mut self, qualifiers: Vec<Qualifier>) -> Self {
        self.qualifiers.extend(qualifiers);
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_references(mut self, references: Vec<Reference>) -> Self {
        self.references.extend(references);
        self
    }

    pub const fn with_rank(mut self, rank: StatementRank) -> Self {
        self.rank = rank;
        self
    }

    /// Decodes a statement object, as returned by `/statements/{id}`.
    /// # Errors
    /// Returns an error if a required field is missing, or a snak cannot be decoded.
    pub fn from_json(j: &Value) -> Result<Self, RestApiError> {
        Self::from_json_with_property(j, None)
    }

    /// Like `from_json`, with a fallback for the property ID, for statements listed under their property.
    pub(crate) fn from_json_with_property(
        j: &Value,
        property: Option<&str>,
    ) -> Result<Self, RestApiError> {
        let rank_text = j["rank"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("rank", j))?;
        Ok(Self {
            statement_id: j["id"].as_str().map(|s| s.to_string()),
            main: Snak::from_json_with_property(j, property)?,
            qualifiers: Self::qualifiers_from_json(&j["qualifiers"])?,
            references: Self::references_from_json(&j["references"])?,
            rank: StatementRank::new(rank_text)?,
        })
    }

    /// Decodes statements grouped by property, `{"P31": [...], ...}`, into a flat list.
    /// Order within a property is kept.
    pub(crate) fn list_from_json(j: &Value) -> Result<Vec<Self>, RestApiError> {
        let map = match j {
            Value::Null => return Ok(vec![]),
            Value::Object(map) => map,
            _ => {
                return Err(RestApiError::WrongType {
                    field: "statements".into(),
                    j: j.to_owned(),
                })
            }
        };
        let mut ret = vec![];
        for (property, statements) in map {
            let statements = statements
                .as_array()
                .ok_or_else(|| RestApiError::missing_field(property.as_str(), j))?;
            for statement in statements {
                ret.push(Self::from_json_with_property(statement, Some(property.as_str()))?);
            }
        }
        Ok(ret)
    }

    /// Qualifiers come either as a flat list, or grouped by property.
    fn qualifiers_from_json(j: &Value) -> Result<Vec<Qualifier>, RestApiError> {
        match j {
            Value::Null => Ok(vec![]),
            Value::Array(array) => array.iter().map(Qualifier::from_json).collect(),
            Value::Object(map) => {
                let mut ret = vec![];
                for (property, qualifiers) in map {
                    let array = qualifiers.as_array().ok_or_else(|| RestApiError::WrongType {
                        field: property.to_owned(),
                        j: qualifiers.to_owned(),
                    })?;
                    for qualifier in array {
                        ret.push(Qualifier::from_json_with_property(qualifier, Some(property.as_str()))?);
                    }
                }
                Ok(ret)
            }
            _ => Err(RestApiError::WrongType {
                field: "qualifiers".into(),
                j: j.to_owned(),
            }),
        }
    }

    fn references_from_json(j: &Value) -> Result<Vec<Reference>, RestApiError> {
        if j.is_null() {
            return Ok(vec![]);
        }
        j.as_array()
            .ok_or_else(|| RestApiError::WrongType {
                field: "references".into(),
                j: j.to_owned(),
            })?
            .iter()
            .map(Reference::from_json)
            .collect()
    }

    /// Returns the statement ID; `None` for statements not yet saved
    pub fn id(&self) -> Option<&str> {
        self.statement_id.as_deref()
    }

    pub const fn property_id(&self) -> &PropertyId {
        self.main.property_id()
    }

    /// Returns the main value, or `None` if its data type is not supported
    pub const fn value(&self) -> Option<&DataValue> {
        self.main.value()
    }

    /// The property and main value, as a snak
    pub const fn main_snak(&self) -> &Snak {
        &self.main
    }

    pub fn qualifiers(&self) -> &[Qualifier] {
        &self.qualifiers
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub const fn rank(&self) -> StatementRank {
        self.rank
    }

    /// Checks that every value in the statement can be written.
    pub(crate) fn check_writable(&self) -> Result<(), RestApiError> {
        self.main.check_writable()?;
        self.qualifiers.iter().try_for_each(Qualifier::check_writable)?;
        self.references.iter().try_for_each(Reference::check_writable)
    }
}

/// Serializes the write shape: `{property, value, qualifiers, references, rank}`.
#[cfg(not(tarpaulin_include))] // tarpaulin can't handle the Serialize trait
impl Serialize for Statement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.value().ok_or_else(|| {
            S::Error::custom(RestApiError::UnsupportedValue(
                self.property_id().to_string(),
            ))
        })?;
        let mut s = serializer.serialize_struct("Statement", 5)?;
        s.serialize_field("property", &json!({"id": self.property_id().as_str()}))?;
        s.serialize_field("value", value)?;
        s.serialize_field("qualifiers", &self.qualifiers)?;
        s.serialize_field("references", &self.references)?;
        s.serialize_field("rank", self.rank.as_str())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantity, SnakType};

    fn statement_json() -> Value {
        let v = std::fs::read_to_string("test_data/statement.json").unwrap();
        serde_json::from_str(&v).unwrap()
    }

    #[test]
    fn test_from_json() {
        let statement = Statement::from_json(&statement_json()).unwrap();
        assert_eq!(
            statement.id(),
            Some("Q42$F078E5B3-F9A8-480E-B7AC-D97778CBBEF9")
        );
        assert_eq!(statement.property_id().as_str(), "P31");
        assert_eq!(statement.value(), Some(&DataValue::new_wikibase_item("Q5")));
        assert_eq!(statement.rank(), StatementRank::Preferred);
        assert_eq!(statement.qualifiers().len(), 2);
        assert_eq!(statement.qualifiers()[0].property_id().as_str(), "P580");
        assert_eq!(statement.qualifiers()[1].snak_type(), SnakType::SomeValue);
        assert_eq!(statement.references().len(), 1);
        assert_eq!(statement.references()[0].parts().len(), 2);
    }

    #[test]
    fn test_qualifiers_grouped_by_property() {
        let mut j = statement_json();
        j["qualifiers"] = json!({
            "P585": [
                {"value": {"type": "value", "content": {"time": "+1952-03-11T00:00:00Z", "precision": 11, "calendarmodel": "http://www.wikidata.org/entity/Q1985727"}},
                 "property": {"id": "P585", "data_type": "time"}}
            ],
            "P1545": [
                {"value": {"type": "value", "content": "1"}, "property": {"data_type": "string"}},
                {"value": {"type": "value", "content": "2"}, "property": {"data_type": "string"}}
            ]
        });
        let statement = Statement::from_json(&j).unwrap();
        let properties: Vec<&str> = statement
            .qualifiers()
            .iter()
            .map(|q| q.property_id().as_str())
            .collect();
        assert_eq!(properties, vec!["P585", "P1545", "P1545"]);
        assert_eq!(
            statement
                .qualifiers()
                .iter()
                .filter_map(|q| q.value())
                .skip(1)
                .cloned()
                .collect::<Vec<_>>(),
            vec![DataValue::new_string("1"), DataValue::new_string("2")]
        );
    }

    #[test]
    fn test_list_from_json_keeps_property_order() {
        let j: Value = serde_json::from_str(
            r#"{
                "P585": [{"rank": "normal", "property": {"data_type": "string"}, "value": {"type": "value", "content": "a"}}],
                "P1545": [
                    {"rank": "normal", "property": {"data_type": "string"}, "value": {"type": "value", "content": "b"}},
                    {"rank": "normal", "property": {"data_type": "string"}, "value": {"type": "value", "content": "c"}}
                ]
            }"#,
        )
        .unwrap();
        let statements = Statement::list_from_json(&j).unwrap();
        let values: Vec<&DataValue> = statements.iter().filter_map(|s| s.value()).collect();
        assert_eq!(
            values,
            vec![
                &DataValue::new_string("a"),
                &DataValue::new_string("b"),
                &DataValue::new_string("c"),
            ]
        );
        assert_eq!(statements[0].property_id().as_str(), "P585");
    }

    #[test]
    fn test_missing_qualifiers_and_references() {
        let mut j = statement_json();
        j.as_object_mut().unwrap().remove("qualifiers");
        j.as_object_mut().unwrap().remove("references");
        let statement = Statement::from_json(&j).unwrap();
        assert!(statement.qualifiers().is_empty());
        assert!(statement.references().is_empty());
    }

    #[test]
    fn test_bad_rank() {
        let mut j = statement_json();
        j["rank"] = json!("best");
        assert!(matches!(
            Statement::from_json(&j),
            Err(RestApiError::InvalidRank(_))
        ));
    }

    #[test]
    fn test_serialize() {
        let statement = Statement::new(
            PropertyId::new("P1082").unwrap(),
            Quantity::new("+1000", "1").into(),
        )
        .with_qualifier(Qualifier::new(
            PropertyId::new("P585").unwrap(),
            DataValue::SomeValue,
        ))
        .with_rank(StatementRank::Deprecated);
        assert_eq!(
            json!(statement),
            json!({
                "property": {"id": "P1082"},
                "value": {"type": "value", "content": {"amount": "+1000", "unit": "1"}},
                "qualifiers": [{"property": {"id": "P585"}, "value": {"type": "somevalue"}}],
                "references": [],
                "rank": "deprecated"
            })
        );
        assert_eq!(statement.id(), None);
        assert!(statement.check_writable().is_ok());
    }

    #[test]
    fn test_unsupported_value_not_writable() {
        let mut j = statement_json();
        j["property"]["data_type"] = json!("math");
        let statement = Statement::from_json(&j).unwrap();
        assert_eq!(statement.value(), None);
        assert!(matches!(
            statement.check_writable(),
            Err(RestApiError::UnsupportedValue(p)) if p == "P31"
        ));
        assert!(serde_json::to_value(&statement).is_err());
    }
}
