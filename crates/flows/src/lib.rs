//! Flows Crate - Client-side Authentication Flows
//!
//! Clean Architecture structure:
//! - `domain/` - Value objects, validation engine, collaborator traits
//! - `application/` - Session store and submit-handling flows
//! - `infra/` - HTTP implementation of the API collaborator
//!
//! ## Features
//! - Sign-in against an authentication API, identity held in memory
//! - Forgot-password request and token-based password reset
//! - Declarative form validation (required, email shape, length, equality)
//! - Failure outcomes surfaced as toasts via the `toasts` crate
//!
//! ## Failure Model
//! - Validation failures are field-scoped and returned to the caller for
//!   inline display; they never produce a toast or an API call
//! - API failures are caught inside each flow and converted to exactly one
//!   error toast; no error escapes a flow

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::forgot_password::{ForgotPasswordFlow, ForgotPasswordInput};
pub use application::reset_password::{ResetPasswordFlow, ResetPasswordInput};
pub use application::session::{Credentials, SessionStore};
pub use application::sign_in::{SignInFlow, SignInInput};
pub use application::FlowOutcome;
pub use domain::gateway::{ApiClient, ApiResponse, Router};
pub use domain::identity::Identity;
pub use error::{ApiError, FlowError};
pub use infra::http::HttpApiClient;
