//! Reducer trait for MVI state containers.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply an intent and return the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
