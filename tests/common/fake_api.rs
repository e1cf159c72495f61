//! In-process `UserApi` doubles.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{oneshot, Mutex};

use user_state::{ApiError, UserApi, UserEnvelope, UserProfile};

/// Returns scripted results in order, then keeps repeating the last one.
pub struct ScriptedApi {
    results: Mutex<VecDeque<Result<UserProfile, String>>>,
    calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new(results: Vec<Result<UserProfile, String>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(user: UserProfile) -> Self {
        Self::new(vec![Ok(user)])
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserApi for ScriptedApi {
    async fn fetch_user(&self) -> Result<UserEnvelope, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut results = self.results.lock().await;
        let next = if results.len() > 1 {
            results.pop_front()
        } else {
            results.front().cloned()
        };

        match next.expect("ScriptedApi needs at least one result") {
            Ok(data) => Ok(UserEnvelope { data }),
            Err(message) => Err(ApiError::Other(message)),
        }
    }
}

/// Blocks until the test releases it, so in-flight state can be observed.
pub struct GatedApi {
    gate: Mutex<Option<oneshot::Receiver<Result<UserProfile, u16>>>>,
}

impl GatedApi {
    pub fn new() -> (Self, oneshot::Sender<Result<UserProfile, u16>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl UserApi for GatedApi {
    async fn fetch_user(&self) -> Result<UserEnvelope, ApiError> {
        let rx = self.gate.lock().await.take().expect("GatedApi used twice");
        match rx.await.expect("gate sender dropped") {
            Ok(data) => Ok(UserEnvelope { data }),
            Err(status) => Err(ApiError::Status {
                status,
                message: "gated failure".to_string(),
            }),
        }
    }
}
