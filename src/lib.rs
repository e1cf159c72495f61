//! Current-user application state: a reducer-driven container plus the
//! async fetch that fills it from a JSON API.

pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod user;

pub use api::{ApiError, HttpUserApi, UserApi, UserEnvelope};
pub use store::UserStore;
pub use user::{FetchOutcome, FetchStatus, UserIntent, UserProfile, UserState};
