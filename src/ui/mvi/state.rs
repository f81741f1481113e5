/// Marker trait for reducer-owned state.
///
/// `Default` is the state a screen starts in; `PartialEq` lets callers
/// detect whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
