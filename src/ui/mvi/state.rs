//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned to create new states and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
