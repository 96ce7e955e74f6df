//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user actions (keystrokes, submits), completed
/// background work (an auth response), and navigation. Reducers consume
/// them to produce new states.
pub trait Intent: Send + 'static {}
