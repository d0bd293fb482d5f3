use crate::{data_value::ValueContent, RestApiError};
use serde::Serialize;
use serde_json::{json, Value};

/// The unit of a dimensionless quantity.
pub const NO_UNIT: &str = "1";

/// A decimal amount with a unit and optional bounds.
///
/// Amounts and bounds are kept as the sign-prefixed decimal strings of the wire format,
/// so no precision is lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quantity {
    amount: String,
    unit: String,
    #[serde(rename = "upperBound", skip_serializing_if = "Option::is_none")]
    upper_bound: Option<String>,
    #[serde(rename = "lowerBound", skip_serializing_if = "Option::is_none")]
    lower_bound: Option<String>,
}

impl Quantity {
    pub fn new<S1: Into<String>, S2: Into<String>>(amount: S1, unit: S2) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
            upper_bound: None,
            lower_bound: None,
        }
    }

    pub fn with_bounds<S1: Into<String>, S2: Into<String>>(mut self, upper: S1, lower: S2) -> Self {
        self.upper_bound = Some(upper.into());
        self.lower_bound = Some(lower.into());
        self
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn upper_bound(&self) -> Option<&str> {
        self.upper_bound.as_deref()
    }

    pub fn lower_bound(&self) -> Option<&str> {
        self.lower_bound.as_deref()
    }
}

impl ValueContent for Quantity {
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        let amount = j["amount"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("amount", j))?;
        let unit = j["unit"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("unit", j))?;
        Ok(Self {
            amount: amount.to_string(),
            unit: unit.to_string(),
            upper_bound: j["upperBound"].as_str().map(|s| s.to_string()),
            lower_bound: j["lowerBound"].as_str().map(|s| s.to_string()),
        })
    }

    fn to_content(&self) -> Value {
        json!(self)
    }
}
