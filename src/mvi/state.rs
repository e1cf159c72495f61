//! Base trait for state held by a container.

/// Marker trait for state objects.
///
/// `Default` provides the value the container starts with, `Clone` lets
/// readers take snapshots while the container keeps the original.
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}
