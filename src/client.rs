//! HTTP transport client for issuing single payload exchanges
//!
//! The transport owns the connection pool (keep-alive by default) and maps
//! failures into the transport/protocol error taxonomy. HTTP status codes,
//! including 5xx, are successful exchanges at this layer: the body is read
//! and returned untransformed.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

/// One outgoing payload exchange
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub endpoint: String,
    pub payload: Bytes,
    pub content_type: String,
    pub headers: Vec<(String, String)>,
}

impl SendRequest {
    /// Create a new send request carrying the given payload
    pub fn new(endpoint: String, payload: Bytes, content_type: String) -> Self {
        Self {
            endpoint,
            payload,
            content_type,
            headers: Vec::new(),
        }
    }

    /// Add a custom header, e.g. `Connection: close` to opt out of reuse
    pub fn with_header(mut self, name: String, value: String) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// A completed request/response exchange
#[derive(Debug, Clone)]
pub struct HttpExchange {
    pub status: u16,
    pub body: Bytes,
}

impl HttpExchange {
    /// Check if the response carries a 2xx status
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport abstraction for a single request/response exchange
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one payload to the endpoint and return the raw response body.
    ///
    /// # Errors
    ///
    /// `AppError::Transport` for network-level failures (refused, reset,
    /// timeout) and `AppError::Protocol` for malformed responses. Neither
    /// is retried here.
    async fn send(&self, request: SendRequest) -> Result<Bytes>;
}

/// reqwest-backed transport with keep-alive connection reuse
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport. `timeout` of None leaves reqwest's own
    /// defaults in charge, so a hung packet stalls the whole burst.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Issue a GET request, returning status and body.
    ///
    /// Redirects are followed automatically and `Connection: close` response
    /// headers are honored by the pool. Any HTTP status is a successful
    /// exchange.
    pub async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<HttpExchange> {
        let mut req_builder = self.client.get(url);

        for (name, value) in headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        let response = req_builder.send().await.map_err(classify_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::protocol(format!("Failed to read response body: {}", e)))?;

        Ok(HttpExchange { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: SendRequest) -> Result<Bytes> {
        let mut req_builder = self
            .client
            .post(&request.endpoint)
            .header(reqwest::header::CONTENT_TYPE, request.content_type.as_str());

        for (name, value) in &request.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        let response = req_builder
            .body(request.payload)
            .send()
            .await
            .map_err(classify_reqwest_error)?;

        // Status codes are not validated: a 500 with a body is still a
        // completed exchange from the transport's point of view.
        response
            .bytes()
            .await
            .map_err(|e| AppError::protocol(format!("Failed to read response body: {}", e)))
    }
}

/// Map a reqwest error onto the transport/protocol taxonomy
fn classify_reqwest_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::transport(format!("Request timed out: {}", error))
    } else if error.is_connect() {
        AppError::transport(format!("Connection failed: {}", error))
    } else if error.is_body() || error.is_decode() {
        AppError::protocol(format!("Malformed response: {}", error))
    } else if error.is_builder() || error.is_request() {
        AppError::validation(format!("Invalid request: {}", error))
    } else {
        AppError::transport(format!("Request failed: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_builder() {
        let request = SendRequest::new(
            "http://localhost:8080".to_string(),
            Bytes::from_static(b"\x0a\x0a"),
            "application/octet-stream".to_string(),
        )
        .with_header("Connection".to_string(), "close".to_string());

        assert_eq!(request.endpoint, "http://localhost:8080");
        assert_eq!(request.payload.len(), 2);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers[0].1, "close");
    }

    #[test]
    fn test_exchange_success_classification() {
        let ok = HttpExchange {
            status: 200,
            body: Bytes::new(),
        };
        let server_error = HttpExchange {
            status: 500,
            body: Bytes::from_static(b"Internal Server Error"),
        };
        assert!(ok.is_success());
        assert!(!server_error.is_success());
    }

    #[test]
    fn test_transport_builds_without_timeout() {
        assert!(HttpTransport::new(None).is_ok());
        assert!(HttpTransport::new(Some(Duration::from_secs(5))).is_ok());
    }
}
