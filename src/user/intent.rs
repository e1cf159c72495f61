//! Intents accepted by the user state container.

use crate::mvi::Intent;

use super::state::UserProfile;

/// Intents that can be dispatched to the user state.
#[derive(Debug, Clone)]
pub enum UserIntent {
    /// A fetch was dispatched and has not resolved yet.
    FetchPending,

    /// The fetch resolved with a user payload.
    FetchFulfilled {
        /// Payload extracted from the response envelope.
        user: UserProfile,
    },

    /// The fetch failed.
    FetchRejected {
        /// Error message.
        message: String,
    },

    /// Overwrite the user record unconditionally.
    Replace { user: UserProfile },

    SetAuthorized { authorized: bool },
}

impl Intent for UserIntent {}

/// The three outcomes of the fetch thunk.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Pending,
    Fulfilled(UserProfile),
    Rejected(String),
}

impl FetchOutcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }
}

impl From<FetchOutcome> for UserIntent {
    fn from(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Pending => UserIntent::FetchPending,
            FetchOutcome::Fulfilled(user) => UserIntent::FetchFulfilled { user },
            FetchOutcome::Rejected(message) => UserIntent::FetchRejected { message },
        }
    }
}
