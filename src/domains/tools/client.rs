//! Remote client - one GET per call against the financial-data API.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ToolError;
use crate::core::config::ApiConfig;
use crate::core::{Error, Result};

/// Executes a request against the remote API.
///
/// `path` is relative to the configured base URL and may carry a query
/// string. Implementations make exactly one attempt.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn execute(&self, path: &str) -> std::result::Result<Value, ToolError>;
}

/// `reqwest`-backed client for the financial-data API.
#[derive(Debug, Clone)]
pub struct FinanceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl FinanceClient {
    /// Build a client from its API configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base = reqwest::Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid API base URL {}: {}", config.base_url, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "API base URL must be http(s): {}",
                config.base_url
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RemoteApi for FinanceClient {
    async fn execute(&self, path: &str) -> std::result::Result<Value, ToolError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let mut request = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Request to {} failed before a response: {}", url, e);
            transport_error(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            transport_error(e)
        })?;

        if !status.is_success() {
            warn!("API returned {} for {}", status, url);
            return Err(ToolError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ToolError::unexpected(format!("failed to parse API response: {}", e)))
    }
}

/// Map a `reqwest` failure to a transport error that keeps the whole cause chain.
///
/// reqwest's own message stops at "error sending request", so the underlying
/// DNS, connect or timeout cause is appended.
fn transport_error(error: reqwest::Error) -> ToolError {
    let mut message = error.to_string();
    let mut source = StdError::source(&error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    if error.is_timeout() {
        ToolError::transport(format!("request timed out: {}", message))
    } else if error.is_connect() {
        ToolError::transport(format!("connection failed: {}", message))
    } else {
        ToolError::transport(message)
    }
}
