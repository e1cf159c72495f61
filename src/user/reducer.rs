//! Reducer for the user state.

use crate::mvi::Reducer;

use super::intent::UserIntent;
use super::state::{FetchStatus, UserState};

/// Reducer for user state transitions.
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Intent = UserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UserIntent::FetchPending => UserState {
                status: FetchStatus::Loading,
                last_error: String::new(),
                ..state
            },

            UserIntent::FetchFulfilled { user } => UserState {
                data: user,
                status: FetchStatus::Idle,
                last_error: String::new(),
                ..state
            },

            // Data stays as it was before the fetch.
            UserIntent::FetchRejected { message } => UserState {
                status: FetchStatus::Idle,
                last_error: message,
                ..state
            },

            UserIntent::Replace { user } => UserState { data: user, ..state },

            UserIntent::SetAuthorized { authorized } => {
                tracing::debug!(authorized, "user authorization changed");
                UserState { authorized, ..state }
            }
        }
    }
}
