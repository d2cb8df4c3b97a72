use super::NewsSource;
use async_trait::async_trait;
use futures::stream::StreamExt;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching the news document.
///
/// Every variant is document-level: the caller shows the error state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection refused, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Body was received but is not valid JSON
    #[error("Malformed news payload: {0}")]
    Parse(#[from] serde_json::Error),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

/// Issues the single GET against the news endpoint.
///
/// No retries. No timeout unless [`Fetcher::with_timeout`] sets one; the
/// timeout then covers the whole exchange, body included.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl Fetcher {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetches and parses the news document.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] - Connection, DNS or TLS failure
    /// - [`FetchError::HttpStatus`] - Non-2xx HTTP response
    /// - [`FetchError::Timeout`] - Configured timeout elapsed
    /// - [`FetchError::ResponseTooLarge`] - Body exceeded 10MB
    /// - [`FetchError::IncompleteResponse`] - Body shorter than Content-Length
    /// - [`FetchError::Parse`] - Body is not valid JSON
    pub async fn fetch_json(&self) -> Result<Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching news payload");

        let bytes = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetch_bytes())
                .await
                .map_err(|_| FetchError::Timeout)??,
            None => self.fetch_bytes().await?,
        };

        let value = serde_json::from_slice(&bytes)?;
        tracing::debug!(endpoint = %self.endpoint, bytes = bytes.len(), "Received news payload");
        Ok(value)
    }

    async fn fetch_bytes(&self) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = %status,
                "News endpoint returned an error status"
            );
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        read_limited_bytes(response, MAX_PAYLOAD_SIZE).await
    }
}

#[async_trait]
impl NewsSource for Fetcher {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        self.fetch_json().await
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Capture Content-Length for completeness check
    let expected_length = response.content_length();

    // Fast path: check Content-Length header
    if let Some(len) = expected_length {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    // A short body is an error, never a partial payload
    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(FetchError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_JSON: &str = r#"{
        "Quantum Computing": [{"url": "https://example.org/a1", "title": "Article One"}],
        "Cryptography": []
    }"#;

    fn fetcher_for(server: &MockServer) -> Fetcher {
        let endpoint = Url::parse(&format!("{}/news", server.uri())).unwrap();
        Fetcher::new(reqwest::Client::new(), endpoint)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_JSON)
                    .insert_header("Content-Type", "application/json"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let value = fetcher_for(&mock_server).fetch_json().await.unwrap();
        assert!(value.is_object());
        assert_eq!(value["Quantum Computing"][0]["title"], "Article One");
    }

    #[tokio::test]
    async fn test_fetch_404_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        match fetcher_for(&mock_server).fetch_json().await.unwrap_err() {
            FetchError::HttpStatus(404) => {}
            e => panic!("Expected HttpStatus(404), got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_500_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1) // Single request, no retry
            .mount(&mock_server)
            .await;

        let err = fetcher_for(&mock_server).fetch_json().await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus(500)));
        assert_eq!(err.to_string(), "HTTP error: status 500");
    }

    #[tokio::test]
    async fn test_malformed_json_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Quantum": [{"url": "#))
            .mount(&mock_server)
            .await;

        match fetcher_for(&mock_server).fetch_json().await.unwrap_err() {
            FetchError::Parse(_) => {}
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_non_object_json_is_returned_as_is() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
            .mount(&mock_server)
            .await;

        let value = fetcher_for(&mock_server).fetch_json().await.unwrap();
        assert!(value.is_array());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so nothing accepts on the port
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let fetcher = Fetcher::new(
            reqwest::Client::new(),
            Url::parse(&format!("http://127.0.0.1:{port}/news")).unwrap(),
        );

        match fetcher.fetch_json().await.unwrap_err() {
            FetchError::Network(_) => {}
            e => panic!("Expected Network error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_timeout_when_configured() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_JSON)
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server).with_timeout(Duration::from_millis(100));
        match fetcher.fetch_json().await.unwrap_err() {
            FetchError::Timeout => {}
            e => panic!("Expected Timeout, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_news_source_reports_endpoint() {
        let mock_server = MockServer::start().await;
        let fetcher = fetcher_for(&mock_server);
        assert_eq!(
            NewsSource::endpoint(&fetcher),
            format!("{}/news", mock_server.uri())
        );
    }
}
