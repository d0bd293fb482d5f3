use crate::{data_value::ValueContent, RestApiError};
use serde::Serialize;
use serde_json::{json, Value};

/// The globe of coordinates on Earth.
pub const EARTH: &str = "http://www.wikidata.org/entity/Q2";

/// A position on a globe, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobeCoordinate {
    latitude: f64,
    longitude: f64,
    // Some older values carry no precision at all
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<f64>,
    globe: String,
}

impl GlobeCoordinate {
    pub fn new<S: Into<String>>(latitude: f64, longitude: f64, precision: f64, globe: S) -> Self {
        Self {
            latitude,
            longitude,
            precision: Some(precision),
            globe: globe.into(),
        }
    }

    /// A coordinate on Earth.
    pub fn on_earth(latitude: f64, longitude: f64, precision: f64) -> Self {
        Self::new(latitude, longitude, precision, EARTH)
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub const fn precision(&self) -> Option<f64> {
        self.precision
    }

    pub fn globe(&self) -> &str {
        &self.globe
    }
}

impl ValueContent for GlobeCoordinate {
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        let latitude = j["latitude"]
            .as_f64()
            .ok_or_else(|| RestApiError::missing_field("latitude", j))?;
        let longitude = j["longitude"]
            .as_f64()
            .ok_or_else(|| RestApiError::missing_field("longitude", j))?;
        let globe = j["globe"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("globe", j))?;
        Ok(Self {
            latitude,
            longitude,
            precision: j["precision"].as_f64(),
            globe: globe.to_string(),
        })
    }

    fn to_content(&self) -> Value {
        json!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content() {
        let j = json!({
            "latitude": 52.516666666667,
            "longitude": 13.383333333333,
            "precision": 0.016666666666667,
            "globe": "https://wikidata.org/entity/Q2"
        });
        let c = GlobeCoordinate::from_content(&j).unwrap();
        assert_eq!(c.latitude(), 52.516666666667);
        assert_eq!(c.longitude(), 13.383333333333);
        assert_eq!(c.precision(), Some(0.016666666666667));
        assert_eq!(c.globe(), "https://wikidata.org/entity/Q2");
        assert_eq!(c.to_content(), j);
    }

    #[test]
    fn test_null_precision() {
        let j = json!({"latitude": 1.5, "longitude": -2.25, "precision": null, "globe": EARTH});
        let c = GlobeCoordinate::from_content(&j).unwrap();
        assert_eq!(c.precision(), None);
        assert_eq!(
            c.to_content(),
            json!({"latitude": 1.5, "longitude": -2.25, "globe": EARTH})
        );
    }

    #[test]
    fn test_on_earth() {
        let c = GlobeCoordinate::on_earth(37.786971, -122.399677, 0.0001);
        assert_eq!(c.globe(), EARTH);
        assert_eq!(GlobeCoordinate::from_content(&c.to_content()).unwrap(), c);
    }

    #[test]
    fn test_missing_latitude() {
        let j = json!({"longitude": 1.0, "precision": 0.1, "globe": EARTH});
        assert!(GlobeCoordinate::from_content(&j).is_err());
    }
}
