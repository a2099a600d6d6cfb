// src/crtsh/client.rs
use anyhow::Context;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::types::{extract_wildcard_names, CertEntry};
use crate::error::FetchError;

pub const DEFAULT_ENDPOINT: &str = "https://crt.sh/";

/// Source of raw wildcard-derived names for a domain
#[async_trait]
pub trait CertSource: Send + Sync {
    /// Look up `domain` and return every wildcard-derived name, unfiltered
    async fn fetch_names(&self, domain: &str) -> Result<Vec<String>, FetchError>;
}

/// HTTP client for the crt.sh JSON search endpoint
pub struct CrtShClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl CrtShClient {
    /// Create a client for `endpoint` (normally [`DEFAULT_ENDPOINT`])
    ///
    /// With `timeout` set to `None` the HTTP client default applies.
    pub fn new(endpoint: &str, timeout: Option<Duration>, user_agent: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid crt.sh endpoint: {}", endpoint))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Lookup URL: `{endpoint}?q={domain}&output=json`
    pub fn lookup_url(&self, domain: &str) -> Result<Url, FetchError> {
        let url = Url::parse_with_params(
            self.endpoint.as_str(),
            &[("q", domain), ("output", "json")],
        )?;
        Ok(url)
    }

    /// Fetch and decode the certificate entries for `domain`
    pub async fn fetch_entries(&self, domain: &str) -> Result<Vec<CertEntry>, FetchError> {
        let url = self.lookup_url(domain)?;

        debug!("Querying {}", url);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        let entries: Vec<CertEntry> = serde_json::from_slice(&body)?;

        debug!("Received {} certificate entries for {}", entries.len(), domain);

        Ok(entries)
    }
}

#[async_trait]
impl CertSource for CrtShClient {
    async fn fetch_names(&self, domain: &str) -> Result<Vec<String>, FetchError> {
        let entries = self.fetch_entries(domain).await?;
        Ok(extract_wildcard_names(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CrtShClient {
        CrtShClient::new(&format!("{}/", server.uri()), Some(Duration::from_secs(5)), "test-agent").unwrap()
    }

    #[test]
    fn test_lookup_url_default_endpoint() {
        let client = CrtShClient::new(DEFAULT_ENDPOINT, None, "test-agent").unwrap();
        let url = client.lookup_url("example.com").unwrap();
        assert_eq!(url.as_str(), "https://crt.sh/?q=example.com&output=json");
    }

    #[test]
    fn test_lookup_url_encodes_domain() {
        let client = CrtShClient::new(DEFAULT_ENDPOINT, None, "test-agent").unwrap();
        let url = client.lookup_url("a b&c").unwrap();
        assert_eq!(url.as_str(), "https://crt.sh/?q=a+b%26c&output=json");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        assert!(CrtShClient::new("not a url", None, "test-agent").is_err());
    }

    #[tokio::test]
    async fn test_fetch_names_extracts_wildcards() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "example.com"))
            .and(query_param("output", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"common_name": "*.api.example.com", "name_value": "api.example.com"},
                {"common_name": "www.example.com", "name_value": "*.dev.example.com\n*.other.org"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let names = client_for(&server).fetch_names("example.com").await.unwrap();
        assert_eq!(names, vec!["api.example.com", "dev.example.com", "other.org"]);
    }

    #[tokio::test]
    async fn test_fetch_empty_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let names = client_for(&server).fetch_names("example.com").await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_names("example.com").await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch_names("example.com").await;
        match result {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 502),
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
