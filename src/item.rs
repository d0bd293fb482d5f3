use crate::{ItemId, PropertyId, RestApiError, Sitelink, Statement, Term};
use serde_json::Value;

/// An item, with its terms, statements, and sitelinks.
///
/// All queries are read-only; an empty filter returns everything.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    labels: Vec<Term>,
    descriptions: Vec<Term>,
    aliases: Vec<Term>,
    statements: Vec<Statement>,
    sitelinks: Vec<Sitelink>,
}

impl Item {
    /// Decodes an item document, as returned by `/entities/items/{id}`.
    /// Values of unsupported data types are skipped, the rest of the item is still decoded.
    /// # Errors
    /// Returns an error if the ID is missing or invalid, or a part of the item is malformed.
    pub fn from_json(j: &Value) -> Result<Self, RestApiError> {
        let id = j["id"]
            .as_str()
            .ok_or_else(|| RestApiError::missing_field("id", j))?;
        Ok(Self {
            id: ItemId::new(id)?,
            labels: Term::list_from_json(&j["labels"], "labels")?,
            descriptions: Term::list_from_json(&j["descriptions"], "descriptions")?,
            aliases: Term::aliases_from_json(&j["aliases"])?,
            statements: Statement::list_from_json(&j["statements"])?,
            sitelinks: Sitelink::list_from_json(&j["sitelinks"])?,
        })
    }

    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the label in `language`, if there is one.
    pub fn label(&self, language: &str) -> Option<&Term> {
        self.labels.iter().find(|term| term.is_in(language))
    }

    /// Returns the labels in the given languages; all labels if `languages` is empty.
    pub fn labels(&self, languages: &[&str]) -> Vec<&Term> {
        Self::terms_in(&self.labels, languages)
    }

    pub fn description(&self, language: &str) -> Option<&Term> {
        self.descriptions.iter().find(|term| term.is_in(language))
    }

    pub fn descriptions(&self, languages: &[&str]) -> Vec<&Term> {
        Self::terms_in(&self.descriptions, languages)
    }

    /// Returns the aliases in the given languages; there may be several per language.
    pub fn aliases(&self, languages: &[&str]) -> Vec<&Term> {
        Self::terms_in(&self.aliases, languages)
    }

    pub fn sitelink(&self, site: &str) -> Option<&Sitelink> {
        self.sitelinks.iter().find(|sitelink| sitelink.site() == site)
    }

    pub fn sitelinks(&self, sites: &[&str]) -> Vec<&Sitelink> {
        self.sitelinks
            .iter()
            .filter(|sitelink| sites.is_empty() || sites.iter().any(|s| *s == sitelink.site()))
            .collect()
    }

    /// Returns the statements for the given properties, like `"P31"` or `"31"`;
    /// all statements if `properties` is empty. Invalid property IDs match nothing.
    pub fn statements(&self, properties: &[&str]) -> Vec<&Statement> {
        let unfiltered = properties.is_empty();
        let properties: Vec<PropertyId> = properties
            .iter()
            .filter_map(|p| PropertyId::new(p).ok())
            .collect();
        self.statements
            .iter()
            .filter(|statement| unfiltered || properties.contains(statement.property_id()))
            .collect()
    }

    fn terms_in<'a>(terms: &'a [Term], languages: &[&str]) -> Vec<&'a Term> {
        terms
            .iter()
            .filter(|term| languages.is_empty() || languages.iter().any(|l| term.is_in(l)))
            .collect()
    }
}
