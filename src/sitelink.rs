use crate::RestApiError;
use serde_json::Value;

/// A link from an item to a page on another wiki.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sitelink {
    site: String,
    title: String,
    badges: Vec<String>,
    url: Option<String>,
}

impl Sitelink {
    /// Create a new sitelink with the given site and title
    pub fn new<S1: Into<String>, S2: Into<String>>(site: S1, title: S2) -> Self {
        Self {
            site: site.into(),
            title: title.into(),
            badges: vec![],
            url: None,
        }
    }

    pub fn with_badges(mut self, badges: Vec<String>) -> Self {
        self.badges = badges;
        self
    }

    /// Create a new sitelink from a JSON object. `site` is the key the sitelink is listed under;
    /// a `site` field in the object takes precedence.
    /// # Errors
    /// Returns an error if the title is missing.
    pub fn from_json(site: &str, j: &Value) -> Result<Self, RestApiError> {
        let title = j["title"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("title", j))?;
        let badges = j["badges"]
            .as_array()
            .map(|badges| {
                badges
                    .iter()
                    .filter_map(|b| b.as_str())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self {
            site: j["site"].as_str().unwrap_or(site).to_string(),
            title: title.to_string(),
            badges,
            url: j["url"].as_str().map(|s| s.to_string()),
        })
    }

    /// Decodes a mapping from site to sitelink, in the order of the mapping.
    pub(crate) fn list_from_json(j: &Value) -> Result<Vec<Self>, RestApiError> {
        match j {
            Value::Null => Ok(vec![]),
            Value::Object(map) => map
                .iter()
                .map(|(site, sitelink)| Self::from_json(site, sitelink))
                .collect(),
            _ => Err(RestApiError::WrongType {
                field: "sitelinks".into(),
                j: j.to_owned(),
            }),
        }
    }

    /// Returns the site code, like `enwiki`
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the page title on the site
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the badge item IDs, in wire order
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    /// Returns the page URL, if the server provided one
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
