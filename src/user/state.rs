use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mvi::State;

/// Placeholder shown for name fields before the user has been fetched.
pub const PLACEHOLDER_NAME: &str = "-";

/// Record describing the current user.
///
/// Holds the JSON object exactly as the API or caller supplied it. Name
/// fields are read through accessors; a missing, `null` or non-string name
/// reads as `None` but stays in the record untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("first_name".to_string(), Value::String(first_name.into()));
        fields.insert("last_name".to_string(), Value::String(last_name.into()));
        Self(fields)
    }

    pub fn first_name(&self) -> Option<&str> {
        self.field("first_name").and_then(Value::as_str)
    }

    pub fn last_name(&self) -> Option<&str> {
        self.field("last_name").and_then(Value::as_str)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for UserProfile {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(PLACEHOLDER_NAME, PLACEHOLDER_NAME)
    }
}

/// Whether a fetch is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
}

/// The current-user slice of application state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserState {
    pub data: UserProfile,
    pub status: FetchStatus,
    /// Message of the most recent failed fetch; empty otherwise.
    #[serde(rename = "lastError")]
    pub last_error: String,
    #[serde(default)]
    pub authorized: bool,
}

impl State for UserState {}

impl UserState {
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}
