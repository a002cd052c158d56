//! Session Store
//!
//! Holds the current authenticated identity (or none) and exposes the
//! sign-in operation. Memory-only: nothing survives the process.

use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::json;

use crate::domain::gateway::ApiClient;
use crate::domain::identity::Identity;
use crate::error::ApiError;

/// Sign-in credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// In-memory session state over the API collaborator
pub struct SessionStore<A>
where
    A: ApiClient,
{
    api: Arc<A>,
    current: Mutex<Option<Identity>>,
}

impl<A> SessionStore<A>
where
    A: ApiClient,
{
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            current: Mutex::new(None),
        }
    }

    /// Authenticate against the API and store the resulting identity.
    ///
    /// Failures propagate the collaborator's error unchanged. Concurrent
    /// calls are independent requests; the last one to resolve wins the
    /// stored identity.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, ApiError> {
        let response = self
            .api
            .post(
                "/sessions",
                json!({
                    "email": credentials.email,
                    "password": credentials.password,
                }),
            )
            .await?;

        let status = response.status;
        let identity: Identity =
            serde_json::from_value(response.body.clone()).map_err(|_| ApiError::Server {
                // 2xx with a body that is not identity-shaped is a broken
                // server contract, reported with what was received
                status,
                body: response.body,
            })?;

        *self.lock_current() = Some(identity.clone());
        tracing::info!(user = %identity.name, "User signed in");

        Ok(identity)
    }

    /// Currently authenticated identity, if any
    pub fn current(&self) -> Option<Identity> {
        self.lock_current().clone()
    }

    /// Clear the current identity
    pub fn sign_out(&self) {
        let previous = self.lock_current().take();
        if let Some(identity) = previous {
            tracing::info!(user = %identity.name, "User signed out");
        }
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<Identity>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
