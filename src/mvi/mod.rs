//! Model-View-Intent (MVI) primitives for application state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Selector ──→ Consumer
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, replaced wholesale on every transition
//! - **Intent**: a named request to move the state forward
//! - **Reducer**: pure function mapping `(State, Intent)` to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
