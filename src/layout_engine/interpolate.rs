use serde::{Deserialize, Serialize};

use crate::layout_engine::workspaces_view::workspace_mode_for_state;
use crate::model::{Rect, TransitionDescriptor, UiState, lerp};

/// Component-wise linear interpolation between two already-computed boxes.
/// `interpolate(a, a, p) == a` for any p; endpoints are reproduced exactly.
pub fn interpolate(a: Rect, b: Rect, progress: f64) -> Rect { a.interpolate(b, progress) }

/// Scalar visual attributes applied verbatim by the renderer alongside the
/// frame's rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaneVisuals {
    pub workspace_opacity: u8,
    pub app_grid_opacity: u8,
    pub thumbnails_opacity: u8,
    pub thumbnails_scale: f64,
    /// 0 = windows rest at their desktop positions, 1 = spread for picking.
    pub workspace_mode: f64,
    /// Collapses to 0 once fully inside the app grid so the stack cannot
    /// swallow input meant for the grid.
    pub workspace_scale_y: f64,
}

impl PaneVisuals {
    pub fn for_state(state: UiState) -> Self {
        PaneVisuals::for_transition(&TransitionDescriptor::stationary(state))
    }

    pub fn for_transition(transition: &TransitionDescriptor) -> Self {
        let (from, to, progress) = if transition.transitioning {
            (transition.initial_state, transition.final_state, transition.progress)
        } else {
            (transition.final_state, transition.final_state, 1.0)
        };

        PaneVisuals {
            workspace_opacity: lerp_opacity(
                workspace_opacity(from),
                workspace_opacity(to),
                progress,
            ),
            app_grid_opacity: lerp_opacity(app_grid_opacity(from), app_grid_opacity(to), progress),
            thumbnails_opacity: 255,
            thumbnails_scale: 1.0,
            workspace_mode: lerp(
                workspace_mode_for_state(from),
                workspace_mode_for_state(to),
                progress,
            ),
            workspace_scale_y: if transition.final_state == UiState::AppGrid && progress >= 1.0 {
                0.0
            } else {
                1.0
            },
        }
    }
}

/// The workspace stack is fully visible until the app grid takes over.
pub(crate) fn workspace_opacity(state: UiState) -> u8 {
    match state {
        UiState::Hidden | UiState::WindowPicker => 255,
        UiState::AppGrid => 0,
    }
}

/// The app grid is the workspace stack's counterpart: visible exactly where
/// the stack is not.
pub(crate) fn app_grid_opacity(state: UiState) -> u8 { 255 - workspace_opacity(state) }

fn lerp_opacity(a: u8, b: u8, progress: f64) -> u8 {
    lerp(f64::from(a), f64::from(b), progress).round().clamp(0.0, 255.0) as u8
}
