//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are key presses, validation results, or service outcomes that a
/// reducer folds into a new state.
pub trait Intent: Send + 'static {}
