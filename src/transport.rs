use crate::RestApiError;
use async_trait::async_trait;
use reqwest::{header::HeaderMap, Method, StatusCode};
use serde_json::Value;

/// A request to the REST API.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

/// The status and raw body of a REST API response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns the response, or an `ApiError` carrying the error payload for a non-2xx status.
    /// # Errors
    /// Returns an error if the status is not a success.
    pub fn error_for_status(self) -> Result<Self, RestApiError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(RestApiError::from_status(self.status, &self.body))
        }
    }

    /// Parses the body as JSON.
    /// # Errors
    /// Returns an error if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, RestApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends GET, POST, and DELETE requests. Connection handling, TLS, retries, and timeouts
/// are up to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RestApiError>;
}

/// The default transport, using a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RestApiError> {
        let builder = match request.method {
            Method::GET => self.client.get(&request.url),
            Method::POST => self.client.post(&request.url),
            Method::DELETE => self.client.delete(&request.url),
            method => return Err(RestApiError::UnsupportedMethod(method)),
        };
        let mut builder = builder.headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(method: Method, url: String, body: Option<Value>) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: HeaderMap::new(),
            body,
        }
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore)]
    async fn test_get() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"a": 1})))
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::default();
        let response = transport
            .execute(request(Method::GET, mock_server.uri() + "/foo", None))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json().unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    #[cfg_attr(miri, ignore)]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/foo"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"bot": false})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;
        let transport = ReqwestTransport::new(reqwest::Client::new());
        let response = transport
            .execute(request(
                Method::POST,
                mock_server.uri() + "/foo",
                Some(json!({"bot": false})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let transport = ReqwestTransport::default();
        let result = transport
            .execute(request(Method::PATCH, "http://localhost/".into(), None))
            .await;
        assert!(matches!(result, Err(RestApiError::UnsupportedMethod(m)) if m == Method::PATCH));
    }

    #[test]
    fn test_error_for_status() {
        let response = HttpResponse {
            status: StatusCode::NOT_FOUND,
            body: br#"{"code":"item-not-found","message":"Could not find an item"}"#.to_vec(),
        };
        match response.error_for_status() {
            Err(RestApiError::ApiError { status, payload, .. }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(payload.code(), "item-not-found");
            }
            other => panic!("Unexpected result {other:?}"),
        }
        let response = HttpResponse {
            status: StatusCode::OK,
            body: b"[]".to_vec(),
        };
        assert_eq!(response.error_for_status().unwrap().json().unwrap(), json!([]));
    }
}
