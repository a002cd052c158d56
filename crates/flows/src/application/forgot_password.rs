//! Forgot Password Flow
//!
//! Requests a password-recovery e-mail. Both outcomes of a submitted
//! request produce exactly one toast; an invalid form produces none.

use std::sync::Arc;

use serde_json::json;
use toasts::{ToastCenter, ToastDraft};

use crate::application::FlowOutcome;
use crate::domain::gateway::ApiClient;
use crate::domain::validation::{FormValues, Rule, Schema};

/// Forgot password form input
#[derive(Debug, Clone)]
pub struct ForgotPasswordInput {
    pub email: String,
}

/// Forgot password flow
pub struct ForgotPasswordFlow<A>
where
    A: ApiClient,
{
    api: Arc<A>,
    toasts: ToastCenter,
}

impl<A> ForgotPasswordFlow<A>
where
    A: ApiClient,
{
    pub fn new(api: Arc<A>, toasts: ToastCenter) -> Self {
        Self { api, toasts }
    }

    pub async fn execute(&self, input: ForgotPasswordInput) -> FlowOutcome {
        let schema = Schema::new().field("email", [Rule::Required, Rule::EmailFormat]);
        let values = FormValues::new().set("email", input.email.clone());

        if let Err(errors) = schema.validate(&values) {
            return FlowOutcome::Invalid(errors);
        }

        let request = json!({ "email": input.email });
        match self.api.post("/password/forgot", request).await {
            Ok(_) => {
                self.toasts.notify(
                    ToastDraft::success("E-mail de recuperação enviado").description(
                        "Enviamos um e-mail para confirmar a recuperação de senha, \
                         cheque sua caixa de entrada.",
                    ),
                );
                FlowOutcome::Completed
            }
            Err(error) => {
                tracing::warn!(error = %error, "Password recovery request failed");
                self.toasts.notify(
                    ToastDraft::error("Erro na recuperação de senha").description(
                        "Ocorreu um erro ao tentar realizar a recuperação de senha, \
                         tente novamente.",
                    ),
                );
                FlowOutcome::Failed(error.into())
            }
        }
    }
}
