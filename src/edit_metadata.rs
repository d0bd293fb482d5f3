use serde_json::{json, Value};

/// Tags and an edit summary attached to a write request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditMetadata {
    comment: Option<String>,
    tags: Vec<String>,
}

impl EditMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Adds `bot`, and `tags` and `comment` where present, to a request body.
    pub(crate) fn add_to_json(&self, j: &mut Value, bot: bool) {
        j["bot"] = json!(bot);
        if !self.tags.is_empty() {
            j["tags"] = json!(self.tags);
        }
        if let Some(comment) = &self.comment {
            j["comment"] = json!(comment);
        }
    }
}
