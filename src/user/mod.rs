//! Current-user state slice.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `UserState` and the user record
//! - `intent.rs` - update variants and the fetch outcome type
//! - `reducer.rs` - state transitions
//! - `selectors.rs` - read-only views

mod intent;
mod reducer;
mod selectors;
mod state;

pub use intent::{FetchOutcome, UserIntent};
pub use reducer::UserReducer;
pub use selectors::{
    select_display_name, select_is_authorized, select_is_loading, select_last_error,
    select_profile, select_user,
};
pub use state::{FetchStatus, UserProfile, UserState, PLACEHOLDER_NAME};
