//! The network seam of the client

use crate::error::TransportError;
use async_trait::async_trait;
use multiblast_core::config::ServiceConfig;
use multiblast_core::{MultiBlastError, MultiBlastResult};
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A request against a service path such as `/jobs/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes requests against the service. Implementations must tolerate
/// concurrent use; polls for distinct jobs share one transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response body of a successful call
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError>;
}

/// HTTP transport backed by [`reqwest`]
pub struct HttpTransport {
    base_url: String,
    auth_key: Option<String>,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ServiceConfig) -> MultiBlastResult<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            MultiBlastError::Configuration(format!(
                "Invalid service URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| MultiBlastError::Network(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_key: config.auth_key.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Vec<u8>, TransportError> {
        let url = self.url(&request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(auth_key) = &self.auth_key {
            builder = builder.header("Auth-Key", auth_key);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Http {
                status: status.as_u16(),
                body: format!("{} {}", status.canonical_reason().unwrap_or(""), body)
                    .trim()
                    .to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ServiceConfig {
            base_url: "not a url".to_string(),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(&config),
            Err(MultiBlastError::Configuration(_))
        ));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ServiceConfig {
            base_url: "http://localhost:8080/blast/".to_string(),
            ..ServiceConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.url("/jobs"), "http://localhost:8080/blast/jobs");
    }

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::post("/reports").with_json(serde_json::json!({"jobID": "j1"}));
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/reports");
        assert!(request.body.is_some());
        assert_eq!(ApiRequest::get("/jobs").body, None);
    }
}
