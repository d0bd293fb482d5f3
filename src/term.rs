use crate::RestApiError;
use nutype::nutype;
use serde_json::Value;

/// A language code, trimmed and lowercased.
#[nutype(
    sanitize(trim, lowercase),
    derive(Debug, Display, Clone, PartialEq, Eq, Hash, AsRef)
)]
pub struct Language(String);

impl Language {
    /// Normalizes a language code, e.g. `"EN "` becomes `"en"`.
    pub fn from_code<S: AsRef<str>>(code: S) -> Self {
        Language::new(code.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        let s: &str = self.as_ref();
        s
    }
}

/// A label, description, or alias in one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    language: Language,
    value: String,
}

impl Term {
    /// Constructs a new `Term` from a language code and a string.
    pub fn new<S1: AsRef<str>, S2: Into<String>>(language: S1, value: S2) -> Term {
        Term {
            language: Language::from_code(language),
            value: value.into(),
        }
    }

    /// Returns the language code of the term.
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    /// Returns the text of the term.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the term is in `language` (compared after normalization).
    pub fn is_in<S: AsRef<str>>(&self, language: S) -> bool {
        self.language == Language::from_code(language)
    }

    /// Decodes a `{"en": "text", ...}` mapping, as used for labels and descriptions.
    /// Terms keep the order of the mapping.
    /// # Errors
    /// Returns an error if `j` is not an object, or a value is not a string.
    pub fn list_from_json(j: &Value, field: &str) -> Result<Vec<Term>, RestApiError> {
        if j.is_null() {
            return Ok(vec![]);
        }
        j.as_object()
            .ok_or_else(|| RestApiError::WrongType {
                field: field.to_string(),
                j: j.to_owned(),
            })?
            .iter()
            .map(|(language, v)| {
                let value = v.as_str().ok_or_else(|| RestApiError::WrongType {
                    field: format!("{field}.{language}"),
                    j: v.to_owned(),
                })?;
                Ok(Term::new(language, value))
            })
            .collect()
    }

    /// Decodes a `{"en": ["alias 1", "alias 2"], ...}` mapping into one `Term` per alias.
    /// # Errors
    /// Returns an error if `j` is not an object, or an entry is not a list of strings.
    pub fn aliases_from_json(j: &Value) -> Result<Vec<Term>, RestApiError> {
        if j.is_null() {
            return Ok(vec![]);
        }
        let mut ret = vec![];
        let map = j.as_object().ok_or_else(|| RestApiError::WrongType {
            field: "aliases".into(),
            j: j.to_owned(),
        })?;
        for (language, values) in map {
            let values = values.as_array().ok_or_else(|| RestApiError::WrongType {
                field: format!("aliases.{language}"),
                j: values.to_owned(),
            })?;
            for v in values {
                let value = v.as_str().ok_or_else(|| RestApiError::WrongType {
                    field: format!("aliases.{language}"),
                    j: v.to_owned(),
                })?;
                ret.push(Term::new(language, value));
            }
        }
        Ok(ret)
    }
}
