//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Cheap to copy or clone
/// - Comparable (PartialEq tells the controller whether anything changed)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
