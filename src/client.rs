use crate::{
    ClientBuilder, EditMetadata, HttpRequest, HttpResponse, HttpTransport, Item, ItemId,
    PropertyId, RestApiError, Sitelink, Statement, StatementId, Term,
};
use reqwest::{header::HeaderMap, Method};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// A client for the items and statements of a Wikibase REST API.
///
/// Reads never check the edit policy. Writes validate their input and the edit policy
/// before anything is sent.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    wikibase_url: String,
    user_agent: String,
    bot: bool,
    allow_ip_edits: bool,
    api_version: u8,
}

impl Client {
    /// Returns a `ClientBuilder` for the Wikibase at `wikibase_url`, like `https://www.wikidata.org`.
    /// # Errors
    /// Returns an error if the URL ends with a `/`, or is not a valid URL.
    pub fn builder<S: Into<String>>(wikibase_url: S) -> Result<ClientBuilder, RestApiError> {
        ClientBuilder::new(wikibase_url)
    }

    /// Returns a `Client` for Wikidata, with default settings.
    /// # Errors
    /// Returns an error if the client cannot be built.
    pub fn wikidata() -> Result<Self, RestApiError> {
        Ok(Self::builder("https://www.wikidata.org")?.build())
    }

    pub(crate) fn new(
        transport: Arc<dyn HttpTransport>,
        wikibase_url: String,
        user_agent: String,
        bot: bool,
        allow_ip_edits: bool,
        api_version: u8,
    ) -> Self {
        Self {
            transport,
            wikibase_url,
            user_agent,
            bot,
            allow_ip_edits,
            api_version,
        }
    }

    pub fn wikibase_url(&self) -> &str {
        &self.wikibase_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub const fn bot(&self) -> bool {
        self.bot
    }

    pub const fn allow_ip_edits(&self) -> bool {
        self.allow_ip_edits
    }

    pub const fn api_version(&self) -> u8 {
        self.api_version
    }

    /// The root of the REST API, `<wikibase_url>/w/rest.php/wikibase/v<version>`.
    pub fn base_url(&self) -> String {
        format!(
            "{}/w/rest.php/wikibase/v{}",
            self.wikibase_url, self.api_version
        )
    }

    /// Whether the client is logged in. Authentication is not supported yet.
    pub const fn authenticated(&self) -> bool {
        false
    }

    /// Fetches an item.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wikibase_datamodel::prelude::*;
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::wikidata().unwrap();
    ///     let item = client.get_item("Q42").await.unwrap();
    ///     println!("{:?}", item.label("en"));
    /// }
    /// ```
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_item<S: ToString>(&self, id: S) -> Result<Item, RestApiError> {
        let id = ItemId::new(id)?;
        let j = self.get(&format!("/entities/items/{id}")).await?;
        Item::from_json(&j)
    }

    /// Fetches a single statement by its ID.
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_statement<S: Into<String>>(&self, id: S) -> Result<Statement, RestApiError> {
        let id = StatementId::new(id)?;
        let j = self.get(&format!("/statements/{id}")).await?;
        Statement::from_json(&j)
    }

    /// Fetches the labels of an item.
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_labels<S: ToString>(&self, id: S) -> Result<Vec<Term>, RestApiError> {
        let id = ItemId::new(id)?;
        let j = self.get(&format!("/entities/items/{id}/labels")).await?;
        Term::list_from_json(&j, "labels")
    }

    /// Fetches the descriptions of an item.
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_descriptions<S: ToString>(&self, id: S) -> Result<Vec<Term>, RestApiError> {
        let id = ItemId::new(id)?;
        let j = self
            .get(&format!("/entities/items/{id}/descriptions"))
            .await?;
        Term::list_from_json(&j, "descriptions")
    }

    /// Fetches the aliases of an item, one `Term` per alias.
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_aliases<S: ToString>(&self, id: S) -> Result<Vec<Term>, RestApiError> {
        let id = ItemId::new(id)?;
        let j = self.get(&format!("/entities/items/{id}/aliases")).await?;
        Term::aliases_from_json(&j)
    }

    /// Fetches the sitelinks of an item.
    /// # Errors
    /// Returns an error if the ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_sitelinks<S: ToString>(&self, id: S) -> Result<Vec<Sitelink>, RestApiError> {
        let id = ItemId::new(id)?;
        let j = self.get(&format!("/entities/items/{id}/sitelinks")).await?;
        Sitelink::list_from_json(&j)
    }

    /// Fetches the statements of an item, optionally only those for one property.
    /// # Errors
    /// Returns an error if an ID is invalid, the request fails, or the response cannot be decoded.
    pub async fn get_statements<S: ToString>(
        &self,
        id: S,
        property: Option<&str>,
    ) -> Result<Vec<Statement>, RestApiError> {
        let id = ItemId::new(id)?;
        let path = match property {
            Some(property) => {
                let property = PropertyId::new(property)?;
                format!("/entities/items/{id}/statements?property={property}")
            }
            None => format!("/entities/items/{id}/statements"),
        };
        let j = self.get(&path).await?;
        Statement::list_from_json(&j)
    }

    /// Adds a statement to an item, and returns the statement as saved, with its new ID.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wikibase_datamodel::prelude::*;
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = Client::builder("https://test.wikidata.org")
    ///         .unwrap()
    ///         .with_bot(false)
    ///         .with_allow_ip_edits(true)
    ///         .build();
    ///     let statement = Statement::new(PropertyId::new("P31").unwrap(), DataValue::new_wikibase_item("Q5"));
    ///     let em = EditMetadata::new().with_comment("instance of human");
    ///     let saved = client.add_statement("Q13406268", &statement, &em).await.unwrap();
    ///     println!("{:?}", saved.id());
    /// }
    /// ```
    /// # Errors
    /// Returns an error if the item ID is invalid, a value cannot be written, the edit policy
    /// forbids the edit, or the request fails.
    pub async fn add_statement<S: ToString>(
        &self,
        item_id: S,
        statement: &Statement,
        em: &EditMetadata,
    ) -> Result<Statement, RestApiError> {
        let item_id = ItemId::new(item_id)?;
        statement.check_writable()?;
        self.check_edit_policy()?;
        let mut body = json!({ "statement": serde_json::to_value(statement)? });
        em.add_to_json(&mut body, self.bot);
        let response = self
            .send(
                Method::POST,
                &format!("/entities/items/{item_id}/statements"),
                Some(body),
            )
            .await?;
        Statement::from_json(&response.json()?)
    }

    /// Deletes a statement.
    /// # Errors
    /// Returns an error if the ID is invalid, the edit policy forbids the edit, or the request fails.
    pub async fn delete_statement<S: Into<String>>(
        &self,
        id: S,
        em: &EditMetadata,
    ) -> Result<(), RestApiError> {
        let id = StatementId::new(id)?;
        self.check_edit_policy()?;
        let mut body = json!({});
        em.add_to_json(&mut body, self.bot);
        self.send(Method::DELETE, &format!("/statements/{id}"), Some(body))
            .await?;
        Ok(())
    }

    /// Without authentication, edits need `allow_ip_edits`, and cannot be bot edits.
    fn check_edit_policy(&self) -> Result<(), RestApiError> {
        if self.authenticated() {
            return Ok(());
        }
        if !self.allow_ip_edits {
            return Err(RestApiError::DisallowedIpEdit);
        }
        if self.bot {
            return Err(RestApiError::DisallowedBotEdit);
        }
        Ok(())
    }

    fn headers(&self) -> Result<HeaderMap, RestApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, self.user_agent.parse()?);
        headers.insert(reqwest::header::CONTENT_TYPE, "application/json".parse()?);
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);
        Ok(headers)
    }

    async fn get(&self, path: &str) -> Result<Value, RestApiError> {
        self.send(Method::GET, path, None).await?.json()
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, RestApiError> {
        let request = HttpRequest {
            method,
            url: format!("{}{path}", self.base_url()),
            headers: self.headers()?,
            body,
        };
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = %response.status, "received response");
        response.error_for_status()
    }
}
