//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions (submitting a query, asking for more
/// results), and system events (fetch completions, timers). Intents are
/// processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
