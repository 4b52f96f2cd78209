//! HTTP client for the Dropstab API
//!
//! [`ApiClient`] wraps a `reqwest::Client` bound to a base URL. Every request
//! goes through [`ApiClient::apply_auth`], which resolves the current access
//! token from the [`TokenManager`] and attaches it as a bearer token. Response
//! bodies are decoded into the caller's type; any failure is returned as is.

use crate::{
    auth::TokenManager,
    endpoints::{Endpoint, HttpMethod},
    error::{ApiError, Result},
    logging::Logger,
};
use reqwest::{header, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Default timeout in seconds for API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the underlying `reqwest::Client` shared by auth and resource calls
pub(crate) fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {e}")))
}

/// Decode a 2xx body, or turn anything else into [`ApiError::Status`]
pub(crate) async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        let body = response.bytes().await?;
        decode_body(&body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }
}

/// Body passthrough: JSON as is, an empty body as `null`, and anything that
/// is not JSON as a string
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    match serde_json::from_slice(body) {
        Ok(decoded) => Ok(decoded),
        Err(e) if e.is_syntax() || e.is_eof() => {
            let text = String::from_utf8_lossy(body).into_owned();
            serde_json::from_value(Value::String(text)).map_err(|_| ApiError::Decode(e))
        }
        Err(e) => Err(ApiError::Decode(e)),
    }
}

/// Authenticated HTTP client
#[derive(Debug)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
    token_manager: Arc<TokenManager>,
    logger: Logger,
}

impl ApiClient {
    pub fn new(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        token_manager: Arc<TokenManager>,
        logger: Logger,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            token_manager,
            logger,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Generic GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<(), T>(HttpMethod::Get, path, None).await
    }

    /// Generic POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// Dispatch a call for an endpoint from the endpoint table
    ///
    /// `path` is the endpoint path after placeholder substitution.
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        self.request(endpoint.method, path, body).await
    }

    async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let request = match method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => {
                let request = self.http_client.post(&url);
                match body {
                    Some(body) => request.json(body),
                    None => request,
                }
            }
        };
        let request = self.apply_auth(request).await?;

        self.logger.debug(format_args!("{method:?} {url}"));
        let response = request.send().await?;
        decode_response(response).await
    }

    /// Apply authentication to request
    async fn apply_auth(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token_manager.get_access_token().await?;
        Ok(request.bearer_auth(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use crate::endpoints::PORTFOLIO_GROUP_ITEM;
    use crate::logging::LogLevels;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(base_url: &str, session: Session) -> ApiClient {
        let logger = Logger::new("ApiClient", LogLevels::none());
        let http_client = build_http_client(Duration::from_secs(5)).unwrap();
        let token_manager = Arc::new(TokenManager::with_session(
            http_client.clone(),
            base_url,
            session,
            logger.for_component("AuthService"),
        ));
        ApiClient::new(http_client, base_url, token_manager, logger)
    }

    #[tokio::test]
    async fn test_get_attaches_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::new("test-token", "refresh-token"));
        let body: Value = client.get("/things").await.unwrap();

        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/things"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(json!({ "name": "x" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::new("test-token", "refresh-token"));
        let body: Value = client.post("/things", &json!({ "name": "x" })).await.unwrap();

        assert_eq!(body, json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn test_send_dispatches_on_endpoint_method() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/portfolio/api/portfolioGroup/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::new("t", "r"));
        let path = PORTFOLIO_GROUP_ITEM.resolve(&[("id", "5")]);
        let body: Value = client
            .send::<(), _>(PORTFOLIO_GROUP_ITEM, &path, None)
            .await
            .unwrap();

        assert_eq!(body["id"], 5);
    }

    #[tokio::test]
    async fn test_refreshes_before_request_when_no_access_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/portfolio/refreshToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": "fresh",
                "refreshToken": "R2",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .and(header("Authorization", "Bearer fresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::from_refresh_token("R1"));
        let _: Value = client.get("/things").await.unwrap();
        let _: Value = client.get("/things").await.unwrap();
    }

    #[tokio::test]
    async fn test_request_without_session_is_unauthenticated() {
        let mock_server = MockServer::start().await;

        let client = client(&mock_server.uri(), Session::default());
        let err = client.get::<Value>("/things").await.unwrap_err();

        assert!(err.is_unauthenticated());
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_decode_body_passthrough() {
        assert_eq!(decode_body::<Value>(b"").unwrap(), Value::Null);
        assert_eq!(decode_body::<Value>(b" \n").unwrap(), Value::Null);
        assert_eq!(decode_body::<Option<i64>>(b"").unwrap(), None);
        assert_eq!(decode_body::<Value>(b"OK").unwrap(), json!("OK"));
        assert_eq!(decode_body::<Value>(b"{\"a\":1}").unwrap(), json!({ "a": 1 }));
    }

    #[test]
    fn test_decode_body_shape_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Typed {
            #[allow(dead_code)]
            id: i64,
        }

        assert!(matches!(
            decode_body::<Typed>(b"{\"name\":\"x\"}"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(decode_body::<Typed>(b""), Err(ApiError::Decode(_))));
        assert!(matches!(
            decode_body::<Typed>(b"<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_and_text_bodies_pass_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/text"))
            .respond_with(ResponseTemplate::new(200).set_body_string("created"))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::new("t", "r"));
        let empty: Value = client.post("/empty", &json!({})).await.unwrap();
        let text: Value = client.get("/text").await.unwrap();

        assert_eq!(empty, Value::Null);
        assert_eq!(text, json!("created"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_propagated() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/things"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server.uri(), Session::new("stale", "r"));
        let err = client.get::<Value>("/things").await.unwrap_err();

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert_eq!(body, "token expired");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
