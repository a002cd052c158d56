//! Toast Center
//!
//! Owned store of active toasts with observer semantics. Cloning a
//! [`ToastCenter`] yields a handle to the same store, so independent test
//! instances never share state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;

use crate::config::ToastConfig;
use crate::toast::{ToastDraft, ToastId, ToastMessage, Ttl};

/// Capacity of the observer channel; lagged observers resync via `active()`
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Store mutation observed by presentation layers
#[derive(Debug, Clone)]
pub enum ToastEvent {
    Added(ToastMessage),
    Dismissed(ToastId),
}

#[derive(Default)]
struct State {
    /// Active toasts in insertion order
    active: Vec<ToastMessage>,
    /// Pending auto-dismiss timers, keyed by toast id
    timers: HashMap<ToastId, AbortHandle>,
}

struct Inner {
    config: ToastConfig,
    state: Mutex<State>,
    events: broadcast::Sender<ToastEvent>,
}

/// Process-wide notification store
#[derive(Clone)]
pub struct ToastCenter {
    inner: Arc<Inner>,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::with_config(ToastConfig::default())
    }

    pub fn with_config(config: ToastConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                config,
                state: Mutex::new(State::default()),
                events,
            }),
        }
    }

    /// Add a toast and schedule its auto-dismissal.
    ///
    /// Must be called from within a Tokio runtime when the resolved lifetime
    /// is finite, since the auto-dismiss timer is a spawned task.
    pub fn notify(&self, draft: ToastDraft) -> ToastId {
        let ttl = match draft.ttl {
            Some(Ttl::After(duration)) => Some(duration),
            Some(Ttl::Never) => None,
            None => self.inner.config.ttl_for(draft.kind),
        };

        let message = ToastMessage {
            id: ToastId::generate(),
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            created_at: Utc::now(),
        };
        let id = message.id;

        {
            let mut state = self.lock_state();
            state.active.push(message.clone());
            if let Some(duration) = ttl {
                state.timers.insert(id, self.spawn_timer(id, duration));
            }
        }

        tracing::debug!(toast_id = %id, kind = %message.kind, "Toast added");
        let _ = self.inner.events.send(ToastEvent::Added(message));

        id
    }

    /// Remove a toast by id, cancelling its pending timer.
    ///
    /// Idempotent: dismissing an unknown or already-dismissed id is a no-op
    /// and emits no event.
    pub fn dismiss(&self, id: ToastId) {
        let removed = {
            let mut state = self.lock_state();
            if let Some(timer) = state.timers.remove(&id) {
                timer.abort();
            }
            match state.active.iter().position(|message| message.id == id) {
                Some(index) => {
                    state.active.remove(index);
                    true
                }
                None => false,
            }
        };

        if removed {
            tracing::debug!(toast_id = %id, "Toast dismissed");
            let _ = self.inner.events.send(ToastEvent::Dismissed(id));
        }
    }

    /// Snapshot of currently active toasts in insertion order
    pub fn active(&self) -> Vec<ToastMessage> {
        self.lock_state().active.clone()
    }

    /// Subscribe to store mutations; every `Added`/`Dismissed` is delivered
    /// once per observer
    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.inner.events.subscribe()
    }

    fn spawn_timer(&self, id: ToastId, duration: Duration) -> AbortHandle {
        let center = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            center.dismiss(id);
        });
        handle.abort_handle()
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        // Held only for plain-data mutation, never across an await
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn fast_config() -> ToastConfig {
        ToastConfig {
            success_ttl: Duration::from_millis(20),
            info_ttl: Duration::from_millis(20),
            error_ttl: Some(Duration::from_millis(20)),
        }
    }

    fn drain(receiver: &mut broadcast::Receiver<ToastEvent>) -> Vec<ToastEvent> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_notify_preserves_insertion_order_with_distinct_ids() {
        let center = ToastCenter::new();

        let first = center.notify(ToastDraft::info("first"));
        let second = center.notify(ToastDraft::info("second"));

        assert_ne!(first, second);
        let active = center.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, first);
        assert_eq!(active[1].id, second);
    }

    #[tokio::test]
    async fn test_dismiss_removes_only_the_given_toast() {
        let center = ToastCenter::new();

        let first = center.notify(ToastDraft::info("first"));
        let second = center.notify(ToastDraft::info("second"));

        center.dismiss(first);

        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, second);
    }

    #[tokio::test]
    async fn test_dismiss_is_idempotent() {
        let center = ToastCenter::new();
        let mut events = center.subscribe();

        let id = center.notify(ToastDraft::error("boom"));
        center.dismiss(id);
        center.dismiss(id);

        let dismissals = drain(&mut events)
            .into_iter()
            .filter(|event| matches!(event, ToastEvent::Dismissed(_)))
            .count();
        assert_eq!(dismissals, 1);
        assert!(center.active().is_empty());
    }

    #[tokio::test]
    async fn test_toasts_auto_expire() {
        let center = ToastCenter::with_config(fast_config());

        center.notify(ToastDraft::success("done"));
        center.notify(ToastDraft::error("boom"));
        assert_eq!(center.active().len(), 2);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(center.active().is_empty());
    }

    #[tokio::test]
    async fn test_sticky_toast_outlives_default_ttl() {
        let center = ToastCenter::with_config(fast_config());

        let id = center.notify(ToastDraft::error("boom").sticky());

        tokio::time::sleep(Duration::from_millis(100)).await;
        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, id);

        center.dismiss(id);
        assert!(center.active().is_empty());
    }

    #[tokio::test]
    async fn test_manual_dismiss_cancels_timer() {
        let center = ToastCenter::with_config(fast_config());
        let mut events = center.subscribe();

        let id = center.notify(ToastDraft::success("done"));
        center.dismiss(id);

        // Past the ttl: the aborted timer must not produce a second event
        tokio::time::sleep(Duration::from_millis(100)).await;

        let dismissals = drain(&mut events)
            .into_iter()
            .filter(|event| matches!(event, ToastEvent::Dismissed(_)))
            .count();
        assert_eq!(dismissals, 1);
    }

    #[tokio::test]
    async fn test_observers_see_every_mutation() {
        let center = ToastCenter::new();
        let mut events = center.subscribe();

        let id = center.notify(
            ToastDraft::success("E-mail de recuperação enviado").description("cheque sua caixa"),
        );
        center.dismiss(id);

        let events = drain(&mut events);
        assert_eq!(events.len(), 2);
        match &events[0] {
            ToastEvent::Added(message) => {
                assert_eq!(message.id, id);
                assert_eq!(message.kind, ToastKind::Success);
            }
            other => panic!("expected Added, got {other:?}"),
        }
        match &events[1] {
            ToastEvent::Dismissed(dismissed) => assert_eq!(*dismissed, id),
            other => panic!("expected Dismissed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let center = ToastCenter::new();
        let handle = center.clone();

        let id = center.notify(ToastDraft::info("shared"));
        assert_eq!(handle.active().len(), 1);

        handle.dismiss(id);
        assert!(center.active().is_empty());
    }
}
