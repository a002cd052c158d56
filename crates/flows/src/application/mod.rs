//! Application Layer
//!
//! The session store and one submit-handling flow per authentication form.
//! Each flow composes the validation engine, the API collaborator, the
//! notification center and (where needed) the router into a single
//! submission cycle.

pub mod forgot_password;
pub mod reset_password;
pub mod session;
pub mod sign_in;

use crate::domain::validation::ValidationErrors;
use crate::error::FlowError;

// Re-exports
pub use forgot_password::{ForgotPasswordFlow, ForgotPasswordInput};
pub use reset_password::{ResetPasswordFlow, ResetPasswordInput};
pub use session::{Credentials, SessionStore};
pub use sign_in::{SignInFlow, SignInInput};

/// Result of one submission cycle
///
/// Every submission resolves to exactly one outcome; flows never return an
/// error. `Invalid` carries the field errors for inline display by the
/// presentation layer and is otherwise silent (no API call, no toast).
#[derive(Debug)]
pub enum FlowOutcome {
    /// Submission went through; any toast/navigation already happened
    Completed,
    /// Form validation failed; nothing was submitted
    Invalid(ValidationErrors),
    /// Submission was attempted (or short-circuited) and failed; the user
    /// was notified via a toast
    Failed(FlowError),
}

impl FlowOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, FlowOutcome::Completed)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, FlowOutcome::Invalid(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FlowOutcome::Failed(_))
    }
}
