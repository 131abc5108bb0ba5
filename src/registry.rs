//! HTTP access to the package repository
//!
//! A thin wrapper around a blocking reqwest client. Every call issues a
//! single GET: no retry, no explicit timeout, no redirect handling beyond
//! what the transport does by default.

use crate::error::FetchError;
use reqwest::blocking::Client;

/// User-Agent header sent with every request.
const USER_AGENT: &str = concat!("nudeps/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Perform a single GET request and return the response body as text.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, status.as_u16()));
        }

        response
            .text()
            .map_err(|e| FetchError::network(url, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("nudeps/"));
    }

    #[test]
    fn test_get_text_returns_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/feed/doc.xml")
            .with_status(200)
            .with_body("<doc/>")
            .create();

        let client = HttpClient::new().unwrap();
        let body = client
            .get_text(&format!("{}/feed/doc.xml", server.url()))
            .unwrap();
        assert_eq!(body, "<doc/>");
    }

    #[test]
    fn test_get_text_maps_error_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing").with_status(404).create();

        let err = client_err(&server.url(), "/missing");
        match err {
            FetchError::HttpStatus { status, .. } => assert_eq!(status, 404),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_get_text_maps_server_error_status() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/broken").with_status(500).create();

        let err = client_err(&server.url(), "/broken");
        assert!(matches!(err, FetchError::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn test_get_text_maps_transport_failure() {
        // Port 1 on loopback refuses the connection immediately.
        let client = HttpClient::new().unwrap();
        let err = client
            .get_text("http://127.0.0.1:1/feed/doc.xml")
            .unwrap_err();
        assert!(matches!(err, FetchError::Network { .. }));
    }

    fn client_err(base: &str, path: &str) -> FetchError {
        let client = HttpClient::new().unwrap();
        client.get_text(&format!("{}{}", base, path)).unwrap_err()
    }
}
