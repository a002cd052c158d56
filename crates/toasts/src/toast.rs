//! Toast Types
//!
//! Value types exchanged with the notification center: the draft callers
//! submit and the stamped message the center stores.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual/semantic category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

/// Unique toast identifier (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(Uuid);

impl ToastId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display lifetime requested for a single toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Auto-dismiss after the given duration
    After(Duration),
    /// Keep until explicitly dismissed
    Never,
}

/// What a caller submits to [`crate::ToastCenter::notify`]
///
/// `ttl` of `None` means "use the center's default for this kind".
#[derive(Debug, Clone)]
pub struct ToastDraft {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub ttl: Option<Ttl>,
}

impl ToastDraft {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            ttl: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the display lifetime for this toast only
    pub fn ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Keep this toast until the user dismisses it
    pub fn sticky(self) -> Self {
        self.ttl(Ttl::Never)
    }
}

/// A stamped, active toast as stored by the center
#[derive(Debug, Clone, Serialize)]
pub struct ToastMessage {
    /// Unique id, fresh per `notify` call
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
