//! Shared test doubles for the flow tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use http::StatusCode;
use serde_json::Value;

use flows::{ApiClient, ApiError, ApiResponse};
use toasts::{ToastCenter, ToastKind, ToastMessage};

/// Records every POST and answers from a scripted reply queue.
///
/// An empty queue answers 204, so "no call expected" tests fail on the
/// recorded calls rather than on a missing script.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<(String, Value)>>,
    replies: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_ok(self, status: u16, body: Value) -> Self {
        self.push(Ok(ApiResponse {
            status: StatusCode::from_u16(status).expect("valid status"),
            body,
        }));
        self
    }

    pub fn reply_server_error(self, status: u16) -> Self {
        self.push(Err(ApiError::Server {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: Value::Null,
        }));
        self
    }

    pub fn reply_network_error(self) -> Self {
        self.push(Err(ApiError::Network("connection refused".into())));
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, reply: Result<ApiResponse, ApiError>) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

impl ApiClient for FakeApi {
    async fn post(&self, path: &str, body: Value) -> Result<ApiResponse, ApiError> {
        self.calls.lock().unwrap().push((path.to_string(), body));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::no_content()))
    }
}

/// Active toasts of the given kind, in insertion order
pub fn toasts_of(center: &ToastCenter, kind: ToastKind) -> Vec<ToastMessage> {
    center
        .active()
        .into_iter()
        .filter(|toast| toast.kind == kind)
        .collect()
}
