/// Marker trait for intents: navigation requests, cursor moves and other
/// user actions that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
