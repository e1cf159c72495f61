//! The state container that owns the current-user slice.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::UserApi;
use crate::mvi::Reducer;
use crate::user::{FetchOutcome, UserIntent, UserProfile, UserReducer, UserState};

/// Shared handle to the current-user state.
///
/// Clones point at the same state. Every intent goes through
/// [`UserReducer`] under the channel's write lock, so transitions are
/// applied one at a time in dispatch order.
#[derive(Clone)]
pub struct UserStore {
    tx: Arc<watch::Sender<UserState>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create a store holding the initial user state.
    pub fn new() -> Self {
        Self::with_state(UserState::default())
    }

    pub fn with_state(state: UserState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    /// Run `intent` through the reducer and store the result.
    pub fn dispatch(&self, intent: UserIntent) {
        tracing::debug!(?intent, "dispatching user intent");
        self.tx.send_modify(|state| {
            *state = UserReducer::reduce(std::mem::take(state), intent);
        });
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UserState {
        self.tx.borrow().clone()
    }

    /// Apply a selector to a snapshot of the current state.
    ///
    /// No lock is held while `selector` runs, so it may dispatch.
    pub fn select<T>(&self, selector: impl FnOnce(&UserState) -> T) -> T {
        selector(&self.state())
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.tx.subscribe()
    }

    /// Fetch the current user from `api` and fold the outcome into state.
    ///
    /// Errors from `api` never escape: their message lands in
    /// `last_error` and the returned outcome is `Rejected`.
    pub async fn fetch_user<A>(&self, api: &A) -> FetchOutcome
    where
        A: UserApi + ?Sized,
    {
        self.dispatch(FetchOutcome::Pending.into());

        let outcome = match api.fetch_user().await {
            Ok(envelope) => {
                tracing::info!("current user fetched");
                FetchOutcome::Fulfilled(envelope.data)
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "failed to fetch current user");
                FetchOutcome::Rejected(err.to_string())
            }
        };

        self.dispatch(outcome.clone().into());
        outcome
    }

    pub fn replace_user(&self, user: UserProfile) {
        self.dispatch(UserIntent::Replace { user });
    }

    pub fn set_authorized(&self, authorized: bool) {
        self.dispatch(UserIntent::SetAuthorized { authorized });
    }
}
