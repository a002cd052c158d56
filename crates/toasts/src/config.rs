//! Toast Configuration
//!
//! Default display durations per toast kind. Callers can override per toast
//! via [`crate::ToastDraft::ttl`].

use std::time::Duration;

use crate::toast::ToastKind;

/// Default display durations for the notification center
#[derive(Debug, Clone)]
pub struct ToastConfig {
    /// How long success toasts stay visible
    pub success_ttl: Duration,
    /// How long info toasts stay visible
    pub info_ttl: Duration,
    /// How long error toasts stay visible; `None` keeps them until dismissed
    pub error_ttl: Option<Duration>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ttl: Duration::from_secs(3),
            info_ttl: Duration::from_secs(3),
            error_ttl: Some(Duration::from_secs(8)),
        }
    }
}

impl ToastConfig {
    /// Config where error toasts never auto-expire
    pub fn sticky_errors() -> Self {
        Self {
            error_ttl: None,
            ..Default::default()
        }
    }

    /// Default lifetime for a toast of the given kind
    pub fn ttl_for(&self, kind: ToastKind) -> Option<Duration> {
        match kind {
            ToastKind::Success => Some(self.success_ttl),
            ToastKind::Info => Some(self.info_ttl),
            ToastKind::Error => self.error_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls_are_finite_for_success_and_info() {
        let config = ToastConfig::default();
        assert!(config.ttl_for(ToastKind::Success).is_some());
        assert!(config.ttl_for(ToastKind::Info).is_some());
        assert!(config.ttl_for(ToastKind::Error).is_some());
    }

    #[test]
    fn test_sticky_errors() {
        let config = ToastConfig::sticky_errors();
        assert_eq!(config.ttl_for(ToastKind::Error), None);
        assert!(config.ttl_for(ToastKind::Success).is_some());
    }
}
