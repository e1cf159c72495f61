//! Selectors: pure views over [`UserState`].

use super::state::{UserProfile, UserState, PLACEHOLDER_NAME};

/// The full user state, not just the profile.
pub fn select_user(state: &UserState) -> &UserState {
    state
}

pub fn select_profile(state: &UserState) -> &UserProfile {
    &state.data
}

pub fn select_is_loading(state: &UserState) -> bool {
    state.is_loading()
}

/// The last fetch failure, if the most recent fetch failed.
pub fn select_last_error(state: &UserState) -> Option<&str> {
    if state.last_error.is_empty() {
        None
    } else {
        Some(&state.last_error)
    }
}

pub fn select_is_authorized(state: &UserState) -> bool {
    state.authorized
}

/// First and last name joined by a space, or the placeholder when neither is set.
pub fn select_display_name(state: &UserState) -> String {
    let parts: Vec<&str> = [state.data.first_name(), state.data.last_name()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        parts.join(" ")
    }
}
