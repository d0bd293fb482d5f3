use crate::{data_value::ValueContent, RestApiError};
use serde::Serialize;
use serde_json::{json, Value};

/// A text in one specific language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonolingualText {
    language: String,
    text: String,
}

impl MonolingualText {
    pub fn new<S1: Into<String>, S2: Into<String>>(language: S1, text: S2) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ValueContent for MonolingualText {
    fn from_content(j: &Value) -> Result<Self, RestApiError> {
        let language = j["language"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("language", j))?;
        let text = j["text"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("text", j))?;
        Ok(Self::new(language, text))
    }

    fn to_content(&self) -> Value {
        json!(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let j = json!({"language": "en", "text": "Foobar"});
        let m = MonolingualText::from_content(&j).unwrap();
        assert_eq!(m, MonolingualText::new("en", "Foobar"));
        assert_eq!(m.to_content(), j);
    }

    #[test]
    fn test_missing_text() {
        assert!(MonolingualText::from_content(&json!({"language": "en"})).is_err());
    }
}
