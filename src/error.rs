use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};
use thiserror::Error;

/// The error body returned by the REST API for a non-2xx response.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct RestApiErrorPayload {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    context: HashMap<String, Value>,
}

impl RestApiErrorPayload {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn context(&self) -> &HashMap<String, Value> {
        &self.context
    }
}

impl Display for RestApiErrorPayload {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.code,
            self.message,
            json!(self.context)
        )
    }
}

#[derive(Debug, Error)]
pub enum RestApiError {
    #[error("{status} {status_text} / {payload}")]
    ApiError {
        status: reqwest::StatusCode,
        status_text: String,
        payload: RestApiErrorPayload,
    },
    #[error("{0:?} is an invalid Wikibase QID. Must be an integer, a string representation of an integer, or in the format 'Q123'.")]
    InvalidItemId(String),
    #[error("{0:?} is an invalid Wikibase PID. Must be an integer, a string representation of an integer, or in the format 'P123'.")]
    InvalidPropertyId(String),
    #[error("{0:?} is an invalid Wikibase Statement ID. Must be a string in the format 'Q123$f004ec2b-4857-3b69-b370-e8124f5bd3ac'.")]
    InvalidStatementId(String),
    #[error("{0:?} is an invalid rank. Must be normal, preferred, or deprecated.")]
    InvalidRank(String),
    #[error("Invalid time precision {0}, must be between 0 and 14")]
    InvalidPrecision(u64),
    #[error("Value for property {0} has an unsupported data type and cannot be written")]
    UnsupportedValue(String),
    #[error("Wikibase URL must not end with a `/`, got {0:?}.")]
    WikibaseUrlTrailingSlash(String),
    #[error("Invalid Wikibase URL {0:?}")]
    InvalidWikibaseUrl(String),
    #[error("No authentication provided. If you want to perform unauthenticated edits and are comfortable exposing your IP address publicly, set `allow_ip_edits` to true when building your client.")]
    DisallowedIpEdit,
    #[error("No authentication provided, but attempted to edit as a bot. You cannot make edits as a bot unless you have authenticated as a user with the Bot flag.")]
    DisallowedBotEdit,
    #[error("{}", missing_or_invalid(.field, .j))]
    MissingOrInvalidField { field: String, j: Value },
    #[error("Wrong type for {field}: {j}")]
    WrongType { field: String, j: Value },
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),
    #[error("Unknown snak type: {0}")]
    UnknownSnakType(String),
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(reqwest::Method),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

fn missing_or_invalid(field: &str, j: &Value) -> String {
    if j.get(field).is_none() {
        format!("Missing field {field}: {j}")
    } else {
        format!("Invalid field type for {field}: {j}")
    }
}

impl RestApiError {
    /// Builds an `ApiError` from a failed response. A body that is not a REST API error
    /// object results in an empty payload.
    pub fn from_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let status_text = status.canonical_reason().unwrap_or_default().to_owned();
        let payload = serde_json::from_slice(body).unwrap_or_default();
        RestApiError::ApiError {
            status,
            status_text,
            payload,
        }
    }

    /// Shorthand used by the JSON decoders.
    pub(crate) fn missing_field<S: Into<String>>(field: S, j: &Value) -> Self {
        RestApiError::MissingOrInvalidField {
            field: field.into(),
            j: j.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_rest_api_error_payload() {
        let payload = RestApiErrorPayload {
            code: "code".to_owned(),
            message: "message".to_owned(),
            context: [("key".to_owned(), json!("value"))]
                .iter()
                .cloned()
                .collect(),
        };
        assert_eq!(payload.code(), "code");
        assert_eq!(payload.message(), "message");
        assert_eq!(payload.context().get("key").unwrap(), &json!("value"));
        assert_eq!(format!("{payload}"), "code: message / {\"key\":\"value\"}");
    }

    #[test]
    fn test_from_status() {
        let body = br#"{"code":"statement-not-found","message":"Could not find a statement"}"#;
        let error = RestApiError::from_status(reqwest::StatusCode::NOT_FOUND, body);
        assert_eq!(
            error.to_string(),
            "404 Not Found Not Found / statement-not-found: Could not find a statement / {}"
        );
    }

    #[test]
    fn test_from_status_garbage_body() {
        let error = RestApiError::from_status(reqwest::StatusCode::BAD_GATEWAY, b"<html>");
        match error {
            RestApiError::ApiError { status, payload, .. } => {
                assert_eq!(status, 502);
                assert_eq!(payload, RestApiErrorPayload::default());
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_invalid_id_messages() {
        assert_eq!(
            RestApiError::InvalidItemId("bad id".into()).to_string(),
            "\"bad id\" is an invalid Wikibase QID. Must be an integer, a string representation of an integer, or in the format 'Q123'."
        );
        assert_eq!(
            RestApiError::InvalidStatementId("bad id".into()).to_string(),
            "\"bad id\" is an invalid Wikibase Statement ID. Must be a string in the format 'Q123$f004ec2b-4857-3b69-b370-e8124f5bd3ac'."
        );
        assert_eq!(
            RestApiError::InvalidRank("foobar".into()).to_string(),
            "\"foobar\" is an invalid rank. Must be normal, preferred, or deprecated."
        );
    }

    #[test]
    fn test_missing_or_invalid_field() {
        let j = json!({"id": 123});
        let missing = RestApiError::missing_field("rank", &j);
        assert_eq!(missing.to_string(), "Missing field rank: {\"id\":123}");
        let invalid = RestApiError::missing_field("id", &j);
        assert_eq!(invalid.to_string(), "Invalid field type for id: {\"id\":123}");
    }

    #[test]
    fn test_invalid_header_value() {
        let error = HeaderValue::from_str("\u{0}").unwrap_err();
        let rest_api_error: RestApiError = error.into();
        assert_eq!(rest_api_error.to_string(), "failed to parse header value");
    }

    #[test]
    fn test_from_serde_json_error() {
        let error = serde_json::from_str::<Value>("{").unwrap_err();
        let rest_api_error: RestApiError = error.into();
        assert_eq!(
            rest_api_error.to_string(),
            "EOF while parsing an object at line 1 column 1"
        );
    }
}
