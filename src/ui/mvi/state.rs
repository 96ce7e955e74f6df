//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are self-contained (all data needed to render their view) and
/// comparable, so redraw decisions and tests can diff them directly.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
