//! Collaborator Traits
//!
//! Interfaces for the HTTP transport and the router. The flows are written
//! against these; the HTTP implementation is in the infrastructure layer,
//! the router is provided by the host application.

use http::StatusCode;
use serde_json::Value;

use crate::error::ApiError;

/// Successful (2xx) response from the authentication API
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Parsed JSON body; `Null` for empty bodies (e.g. 204)
    pub body: Value,
}

impl ApiResponse {
    /// Empty-body success, the shape of a 204 reply
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: Value::Null,
        }
    }
}

/// Authentication API transport
///
/// `post` resolves only for 2xx responses; non-2xx statuses and transport
/// failures are reported as [`ApiError`].
#[trait_variant::make(ApiClient: Send)]
pub trait LocalApiClient {
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError>;
}

/// Current-URL query access and programmatic navigation
pub trait Router: Send + Sync {
    /// Query string of the current URL, with or without the leading `?`
    fn query_string(&self) -> String;

    /// Navigate to the given path
    fn navigate(&self, path: &str);
}
