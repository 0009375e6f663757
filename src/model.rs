pub mod geometry;
pub mod transition;

pub use geometry::{Point, Rect, Round, Size, lerp};
pub use transition::{TransitionDescriptor, UiState};
