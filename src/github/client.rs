//! GitHub REST API client.
//!
//! Issues a single GET per call against `<api_base>/repos/<owner>/<name>[/<resource>]`
//! with the versioned JSON media type, a client identifier and, when configured,
//! a bearer token. Status codes are returned to the caller untouched; only
//! transport failures are turned into errors here.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::{header, Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "Git-Log-Analyzer";

/// Configuration for the upstream client, fixed at startup.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the REST API (e.g., https://api.github.com)
    pub api_base: String,

    /// Optional access token sent as a bearer credential
    pub token: Option<String>,

    /// Bound on each request, connect to last body byte
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Raw upstream outcome: the HTTP status and the parsed JSON body.
///
/// Non-JSON bodies on non-200 responses are represented as `Value::Null`.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    /// GET `/repos/<identifier>` when `resource` is `None`, otherwise
    /// `/repos/<identifier>/<resource>`.
    pub async fn get(
        &self,
        identifier: &str,
        resource: Option<&str>,
        params: &[(&str, String)],
    ) -> Result<UpstreamResponse> {
        let url = self.repo_url(identifier, resource)?;
        debug!(%url, ?params, "Requesting upstream");

        let mut request = self
            .http
            .get(url.clone())
            .query(params)
            .header(header::ACCEPT, ACCEPT)
            .header(header::USER_AGENT, USER_AGENT);

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;

        debug!(%url, status, "Upstream responded");

        let body = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) if status != 200 => Value::Null,
            Err(e) => {
                return Err(AppError::Internal(format!(
                    "Invalid JSON from upstream: {}",
                    e
                )))
            }
        };

        Ok(UpstreamResponse { status, body })
    }

    /// Each identifier segment is appended as its own percent-encoded path
    /// segment, so `?`, `#` and `%` cannot leave the path.
    fn repo_url(&self, identifier: &str, resource: Option<&str>) -> Result<Url> {
        let segments =
            identifier_segments(identifier).ok_or(AppError::InvalidRepositoryFormat)?;

        let mut url = Url::parse(&self.config.api_base)
            .map_err(|e| AppError::Internal(format!("Invalid API base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Internal("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("repos")
            .extend(segments)
            .extend(resource);

        Ok(url)
    }
}

/// Splits `owner/name` into path segments.
///
/// Returns `None` when any segment is empty, `.` or `..`.
pub fn identifier_segments(identifier: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = identifier.split('/').collect();
    if segments
        .iter()
        .any(|segment| segment.is_empty() || *segment == "." || *segment == "..")
    {
        return None;
    }
    Some(segments)
}

pub type SharedClient = Arc<UpstreamClient>;

fn transport_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::UpstreamTimeout
    } else {
        AppError::UpstreamUnreachable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, token: Option<&str>) -> UpstreamClient {
        UpstreamClient::new(UpstreamConfig {
            api_base: server.uri(),
            token: token.map(str::to_string),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_repo_url() {
        let client = UpstreamClient::new(UpstreamConfig {
            api_base: "https://api.example.com/".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();

        assert_eq!(
            client.repo_url("rust-lang/rust", Some("commits")).unwrap().as_str(),
            "https://api.example.com/repos/rust-lang/rust/commits"
        );
        assert_eq!(
            client.repo_url("rust-lang/rust", None).unwrap().as_str(),
            "https://api.example.com/repos/rust-lang/rust"
        );
    }

    #[test]
    fn test_repo_url_encodes_reserved_characters() {
        let client = UpstreamClient::new(UpstreamConfig {
            api_base: "https://api.example.com".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();

        let url = client
            .repo_url("octo/hello?sha=evil&x=", Some("commits"))
            .unwrap();
        assert_eq!(url.path(), "/repos/octo/hello%3Fsha=evil&x=/commits");
        assert!(url.query().is_none());

        let url = client.repo_url("octo/hello#frag", None).unwrap();
        assert_eq!(url.path(), "/repos/octo/hello%23frag");
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_repo_url_rejects_dot_segments() {
        let client = UpstreamClient::new(UpstreamConfig::default()).unwrap();

        for identifier in ["../evil", "octo/..", "./hello", "octo//hello", ""] {
            assert!(
                matches!(
                    client.repo_url(identifier, Some("commits")),
                    Err(AppError::InvalidRepositoryFormat)
                ),
                "expected {:?} to be rejected",
                identifier
            );
        }
    }

    #[test]
    fn test_identifier_segments() {
        assert_eq!(identifier_segments("octo/hello"), Some(vec!["octo", "hello"]));
        assert_eq!(identifier_segments("a/b/c"), Some(vec!["a", "b", "c"]));
        assert_eq!(identifier_segments("octo/.."), None);
        assert_eq!(identifier_segments("/hello"), None);
    }

    #[tokio::test]
    async fn test_dot_segments_never_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret"));
        let err = client
            .get("../evil", Some("commits"), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRepositoryFormat));
    }

    #[tokio::test]
    async fn test_sends_standard_headers_and_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello/commits"))
            .and(header("accept", ACCEPT))
            .and(header("user-agent", USER_AGENT))
            .and(query_param("per_page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let response = client
            .get("octo/hello", Some("commits"), &[("per_page", "5".to_string())])
            .await
            .unwrap();

        assert!(response.is_ok());
        assert_eq!(response.body, json!([]));
        assert!(!client.has_token());
    }

    #[tokio::test]
    async fn test_sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/hello"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret"));
        let response = client.get("octo/hello", None, &[]).await.unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_non_success_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let response = client.get("octo/hello", None, &[]).await.unwrap();
        assert_eq!(response.status, 502);
        assert_eq!(response.body, Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_json_on_success_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client.get("octo/hello", None, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = UpstreamClient::new(UpstreamConfig {
            api_base: server.uri(),
            token: None,
            timeout: Duration::from_millis(50),
        })
        .unwrap();

        let err = client.get("octo/hello", None, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamTimeout));
    }

    #[tokio::test]
    async fn test_unreachable() {
        // Nothing listens on port 1
        let client = UpstreamClient::new(UpstreamConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();

        let err = client.get("octo/hello", None, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnreachable(_)));
    }
}
