//! Base trait for intents dispatched to a state container.

/// Marker trait for intent objects.
///
/// Intents represent either a caller request (replace the user, flip a
/// flag) or one outcome of an asynchronous operation (request started,
/// response arrived, request failed).
pub trait Intent: Send + 'static {}
