//! Toasts Crate - Transient Notifications
//!
//! Process-wide store of ephemeral user-facing messages (toasts):
//! - `ToastCenter` - owned store with add / dismiss / auto-expire semantics
//! - Observer feed so presentation layers re-render on every mutation
//! - Per-kind default display durations, overridable per call
//!
//! The store is the only shared mutable state of the client core; it is
//! safe under concurrent `notify`/`dismiss` calls from unrelated tasks and
//! `dismiss` is idempotent.

pub mod center;
pub mod config;
pub mod toast;

// Re-exports for convenience
pub use center::{ToastCenter, ToastEvent};
pub use config::ToastConfig;
pub use toast::{ToastDraft, ToastId, ToastKind, ToastMessage, Ttl};
