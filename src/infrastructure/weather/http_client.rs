use std::time::Duration;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Longest provider error body kept in an error message
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                DomainError::provider("http", format!("Request failed: {}", e.without_url()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                "http",
                format!("HTTP {}: {}", status, truncate(&error_body, MAX_ERROR_BODY_CHARS)),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| {
                DomainError::provider(
                    "http",
                    format!("Failed to parse response: {}", e.without_url()),
                )
            })
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...[truncated]", &s[..idx]),
        None => s.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 5), "hello...[truncated]");
        assert_eq!(truncate("héllo", 2), "hé...[truncated]");
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("q", "Paris"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/current.json", server.uri());
        let value = client.get_json(&url, &[("q", "Paris")]).await.unwrap();

        assert_eq!(value, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_get_json_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("q", "Rio de Janeiro & Co"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/current.json", server.uri());
        let result = client.get_json(&url, &[("q", "Rio de Janeiro & Co")]).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_json_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string(r#"{"error":{"code":1006,"message":"No matching location found."}}"#),
            )
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/current.json", server.uri());
        let err = client.get_json(&url, &[("q", "Atlantis")]).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains("No matching location found."));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/current.json", server.uri());
        let err = client
            .get_json(&url, &[("key", "SECRET-KEY"), ("q", "Paris")])
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Failed to parse response"));
        assert!(!message.contains("SECRET-KEY"));
    }

    #[tokio::test]
    async fn test_get_json_connection_error_hides_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new();
        let url = format!("http://{}/current.json", addr);
        let err = client
            .get_json(&url, &[("key", "SECRET-KEY"), ("q", "Paris")])
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Request failed"));
        assert!(!message.contains("SECRET-KEY"));
        assert!(!message.contains("current.json"));
    }

    #[tokio::test]
    async fn test_get_json_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_millis(50)).unwrap();
        let url = format!("{}/current.json", server.uri());
        let err = client
            .get_json(&url, &[("key", "SECRET-KEY")])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
        assert!(!err.to_string().contains("SECRET-KEY"));
    }
}
