//! Sign In Flow
//!
//! Validates credentials and authenticates through the session store.
//! Success shows no toast (the session update is the visible effect);
//! failures surface exactly one error toast.

use std::sync::Arc;

use toasts::{ToastCenter, ToastDraft};

use crate::application::session::{Credentials, SessionStore};
use crate::application::FlowOutcome;
use crate::domain::gateway::ApiClient;
use crate::domain::validation::{FormValues, Rule, Schema};

/// Sign in form input
#[derive(Debug, Clone)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in flow
pub struct SignInFlow<A>
where
    A: ApiClient,
{
    session: Arc<SessionStore<A>>,
    toasts: ToastCenter,
}

impl<A> SignInFlow<A>
where
    A: ApiClient,
{
    pub fn new(session: Arc<SessionStore<A>>, toasts: ToastCenter) -> Self {
        Self { session, toasts }
    }

    pub async fn execute(&self, input: SignInInput) -> FlowOutcome {
        let schema = Schema::new()
            .field("email", [Rule::Required, Rule::EmailFormat])
            .field("password", [Rule::Required]);
        let values = FormValues::new()
            .set("email", input.email.clone())
            .set("password", input.password.clone());

        // Invalid form: no API call, no toast (inline errors are the
        // presentation layer's job)
        if let Err(errors) = schema.validate(&values) {
            return FlowOutcome::Invalid(errors);
        }

        let credentials = Credentials {
            email: input.email,
            password: input.password,
        };

        match self.session.sign_in(&credentials).await {
            Ok(_) => FlowOutcome::Completed,
            Err(error) => {
                tracing::warn!(error = %error, "Sign in failed");
                self.toasts.notify(
                    ToastDraft::error("Erro na autenticação")
                        .description("Ocorreu um erro ao fazer login, cheque as credenciais."),
                );
                FlowOutcome::Failed(error.into())
            }
        }
    }
}
