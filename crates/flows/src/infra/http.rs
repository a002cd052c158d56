//! HTTP API Client
//!
//! `reqwest`-backed implementation of the [`ApiClient`] collaborator. The
//! only module that knows the concrete transport.

use serde_json::Value;
use url::Url;

use crate::domain::gateway::{ApiClient, ApiResponse};
use crate::error::ApiError;

/// JSON-over-HTTP client bound to the authentication API's base URL
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_client(base_url: Url, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }
}

impl ApiClient for HttpApiClient {
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // 204 and error pages may carry empty or non-JSON bodies
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            return Err(ApiError::Server { status, body });
        }

        Ok(ApiResponse { status, body })
    }
}
