//! Reset Password Flow
//!
//! Sets a new password using the reset token carried in the current URL's
//! query string. Validation always runs before the token-presence check, so
//! bad passwords with a missing token report as a (silent) validation
//! failure rather than a token error.

use std::sync::Arc;

use serde_json::json;
use toasts::{ToastCenter, ToastDraft};

use crate::application::FlowOutcome;
use crate::domain::gateway::{ApiClient, Router};
use crate::domain::validation::{FormValues, Rule, Schema};
use crate::error::FlowError;

/// Reset password form input
#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub password: String,
    pub password_confirmation: String,
}

/// Reset password flow
pub struct ResetPasswordFlow<A, R>
where
    A: ApiClient,
    R: Router,
{
    api: Arc<A>,
    toasts: ToastCenter,
    router: Arc<R>,
}

impl<A, R> ResetPasswordFlow<A, R>
where
    A: ApiClient,
    R: Router,
{
    pub fn new(api: Arc<A>, toasts: ToastCenter, router: Arc<R>) -> Self {
        Self { api, toasts, router }
    }

    pub async fn execute(&self, input: ResetPasswordInput) -> FlowOutcome {
        // Read the token at flow start; immutable from here on
        let token = reset_token(&self.router.query_string());

        let schema = Schema::new()
            .field("password", [Rule::Required, Rule::MinLength(6)])
            .field(
                "password_confirmation",
                [Rule::Required, Rule::EqualsField("password")],
            );
        let values = FormValues::new()
            .set("password", input.password.clone())
            .set("password_confirmation", input.password_confirmation.clone());

        if let Err(errors) = schema.validate(&values) {
            return FlowOutcome::Invalid(errors);
        }

        let Some(token) = token else {
            tracing::warn!("Password reset attempted without a token");
            self.toasts
                .notify(ToastDraft::error("Erro ao resetar senha").description("token ausente"));
            return FlowOutcome::Failed(FlowError::MissingToken);
        };

        let request = json!({
            "password": input.password,
            "password_confirmation": input.password_confirmation,
            "token": token,
        });

        match self.api.post("/password/reset", request).await {
            Ok(_) => {
                self.router.navigate("/");
                FlowOutcome::Completed
            }
            Err(error) => {
                tracing::warn!(error = %error, "Password reset failed");
                self.toasts.notify(
                    ToastDraft::error("Erro ao resetar senha")
                        .description("Ocorreu um erro ao resetar sua senha, tente novamente."),
                );
                FlowOutcome::Failed(error.into())
            }
        }
    }
}

/// Extract a non-empty `token` parameter from a query string, with or
/// without the leading `?`
fn reset_token(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, value)| key == "token" && !value.is_empty())
        .map(|(_, value)| value.into_owned())
}
