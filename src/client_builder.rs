use crate::{Client, HttpTransport, ReqwestTransport, RestApiError};
use std::sync::Arc;

/// The default user agent
const DEFAULT_USER_AGENT: &str = "Rust Wikibase data model";

/// The default version of the Wikibase REST API
const WIKIBASE_REST_API_VERSION: u8 = 0;

#[derive(Debug)]
pub struct ClientBuilder {
    wikibase_url: String,
    client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    user_agent: Option<String>,
    bot: bool,
    allow_ip_edits: bool,
    api_version: Option<u8>,
}

impl ClientBuilder {
    /// Sets the Wikibase URL, like `https://www.wikidata.org`. This is mandatory.
    /// # Errors
    /// Returns an error if the URL ends with a `/`, or is not a valid URL.
    pub fn new<S: Into<String>>(wikibase_url: S) -> Result<Self, RestApiError> {
        let wikibase_url = Self::validate_wikibase_url(wikibase_url.into())?;
        Ok(Self {
            wikibase_url,
            client: None,
            transport: None,
            user_agent: None,
            bot: true,
            allow_ip_edits: false,
            api_version: None,
        })
    }

    /// Sets the user agent. By default, the user agent is "Rust Wikibase data model; {`package_name`}/{`package_version`}"
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whether edits are flagged as bot edits. Default is true.
    pub const fn with_bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// Whether unauthenticated edits, attributed to the public IP address, are allowed. Default is false.
    pub const fn with_allow_ip_edits(mut self, allow_ip_edits: bool) -> Self {
        self.allow_ip_edits = allow_ip_edits;
        self
    }

    /// Sets the API version (u8). Default is 0.
    pub const fn with_api_version(mut self, api_version: u8) -> Self {
        self.api_version = Some(api_version);
        self
    }

    /// Sets the `reqwest::Client`. By default, a new `reqwest::Client` is created.
    /// Ignored if a transport is set.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the transport that sends the requests. By default, a `ReqwestTransport` is used.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the `Client`. The builder gets consumed by this operation.
    pub fn build(self) -> Client {
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.client.unwrap_or_default())),
        };
        Client::new(
            transport,
            self.wikibase_url,
            self.user_agent.unwrap_or_else(Self::default_user_agent),
            self.bot,
            self.allow_ip_edits,
            self.api_version.unwrap_or(WIKIBASE_REST_API_VERSION),
        )
    }

    fn validate_wikibase_url(wikibase_url: String) -> Result<String, RestApiError> {
        if wikibase_url.ends_with('/') {
            return Err(RestApiError::WikibaseUrlTrailingSlash(wikibase_url));
        }
        match reqwest::Url::parse(&wikibase_url) {
            Ok(_) => Ok(wikibase_url),
            Err(_) => Err(RestApiError::InvalidWikibaseUrl(wikibase_url)),
        }
    }

    /// Returns the default user agent, a versioned string based on `DEFAULT_USER_AGENT`.
    fn default_user_agent() -> String {
        format!(
            "{DEFAULT_USER_AGENT}; {}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent() {
        let user_agent = ClientBuilder::default_user_agent();
        assert!(user_agent.starts_with(DEFAULT_USER_AGENT));
        assert!(user_agent.contains(env!("CARGO_PKG_NAME")));
        assert!(user_agent.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_trailing_slash() {
        let err = ClientBuilder::new("https://example.com/").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wikibase URL must not end with a `/`, got \"https://example.com/\"."
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            ClientBuilder::new("foobar"),
            Err(RestApiError::InvalidWikibaseUrl(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let client = ClientBuilder::new("https://www.wikidata.org").unwrap().build();
        assert_eq!(client.wikibase_url(), "https://www.wikidata.org");
        assert!(client.bot());
        assert!(!client.allow_ip_edits());
        assert_eq!(client.api_version(), 0);
        assert_eq!(client.user_agent(), ClientBuilder::default_user_agent());
        assert_eq!(
            client.base_url(),
            "https://www.wikidata.org/w/rest.php/wikibase/v0"
        );
    }

    #[test]
    fn test_with_options() {
        let client = ClientBuilder::new("https://test.wikidata.org")
            .unwrap()
            .with_user_agent("Test Agent")
            .with_bot(false)
            .with_allow_ip_edits(true)
            .with_api_version(1)
            .with_client(reqwest::Client::new())
            .build();
        assert_eq!(client.user_agent(), "Test Agent");
        assert!(!client.bot());
        assert!(client.allow_ip_edits());
        assert_eq!(
            client.base_url(),
            "https://test.wikidata.org/w/rest.php/wikibase/v1"
        );
    }
}
