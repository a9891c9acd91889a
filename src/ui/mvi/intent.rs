//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, clicks on controls, swipes)
/// - Host requests (programmatic jumps to a slide)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
