//! The network collaborator that retrieves the current user.

mod client;
mod error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

pub use client::HttpUserApi;
pub use error::ApiError;

/// Response body of the user endpoint: `{ "data": { <user fields> } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub data: UserProfile,
}

/// Source of the current user.
///
/// The state container only cares about the envelope or the error; how
/// the request is made is up to the implementation.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn fetch_user(&self) -> Result<UserEnvelope, ApiError>;
}
