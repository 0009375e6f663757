use crate::model::{Rect, Size, UiState};

/// Spacing bound keeping adjacent workspaces clear of the screen even on
/// cramped layouts.
pub const WORKSPACE_MIN_SPACING: f64 = 200.0;

/// How far the workspace layout leans towards showing every workspace at
/// once; the overview only uses the single-workspace end of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitMode(pub f64);

impl FitMode {
    pub const SINGLE: FitMode = FitMode(0.0);
    pub const ALL: FitMode = FitMode(1.0);
}

/// The box of the workspace at `index` when a single workspace fits the view
/// at a time: centered on the free axis, with the whole strip shifted so the
/// current (possibly fractional) workspace sits in the box.
pub fn fit_single_workspace_box(
    bounds: Rect,
    workspace: Size,
    spacing: f64,
    current_workspace: f64,
    index: usize,
    vertical: bool,
) -> Rect {
    let mut x = bounds.origin.x + (bounds.size.width - workspace.width) / 2.0;
    let mut y = bounds.origin.y;

    if vertical {
        y -= current_workspace * (workspace.height + spacing);
        y += index as f64 * (workspace.height + spacing);
    } else {
        x -= current_workspace * (workspace.width + spacing);
        x += index as f64 * (workspace.width + spacing);
    }

    Rect::new(x, y, workspace.width, workspace.height)
}

/// Spacing between adjacent workspace previews: whatever free space remains
/// shrinks towards zero as the fit mode approaches showing all workspaces,
/// clamped so neighbours stay off screen. `max_spacing` comes from
/// configuration, already scaled for the monitor.
pub fn workspace_spacing(
    bounds: Rect,
    workspace: Size,
    fit_mode: FitMode,
    vertical: bool,
    max_spacing: f64,
) -> f64 {
    let (workspace_size, available_space) = if vertical {
        (workspace.height, bounds.size.height)
    } else {
        (workspace.width, (bounds.size.width - workspace.width) / 2.0)
    };

    let spacing = (available_space - workspace_size * 0.4) * (1.0 - fit_mode.0);
    let min_spacing = WORKSPACE_MIN_SPACING.min(max_spacing);
    spacing.clamp(min_spacing, max_spacing)
}

/// How spread the windows inside a workspace preview are for a given
/// overview state. Spreading already while entering the app grid reads more
/// naturally than snapping afterwards.
pub fn workspace_mode_for_state(state: UiState) -> f64 {
    match state {
        UiState::Hidden => 0.0,
        UiState::WindowPicker | UiState::AppGrid => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bounds() -> Rect { Rect::new(266.0, 132.0, 1540.0, 866.0) }

    #[test]
    fn current_workspace_fills_the_box() {
        let ws = Size::new(1540.0, 866.0);
        let rect = fit_single_workspace_box(bounds(), ws, 300.0, 1.0, 1, true);
        assert_eq!(rect, Rect::new(266.0, 132.0, 1540.0, 866.0));
    }

    #[test]
    fn neighbours_offset_by_size_plus_spacing() {
        let ws = Size::new(1540.0, 866.0);
        let spacing = 300.0;
        let current = fit_single_workspace_box(bounds(), ws, spacing, 1.0, 1, true);
        let next = fit_single_workspace_box(bounds(), ws, spacing, 1.0, 2, true);
        assert_eq!(next.origin.y - current.origin.y, 866.0 + spacing);
        assert_eq!(next.origin.x, current.origin.x);
    }

    #[test]
    fn fractional_scroll_shifts_the_strip() {
        let ws = Size::new(1540.0, 866.0);
        let spacing = 300.0;
        let at_one = fit_single_workspace_box(bounds(), ws, spacing, 1.0, 1, true);
        let at_half = fit_single_workspace_box(bounds(), ws, spacing, 1.5, 1, true);
        assert_eq!(at_one.origin.y - at_half.origin.y, (866.0 + spacing) / 2.0);
    }

    #[test]
    fn horizontal_strips_shift_on_x() {
        let ws = Size::new(1000.0, 866.0);
        let a = fit_single_workspace_box(bounds(), ws, 300.0, 0.0, 0, false);
        let b = fit_single_workspace_box(bounds(), ws, 300.0, 0.0, 1, false);
        assert_eq!(b.origin.x - a.origin.x, 1300.0);
        assert_eq!(a.origin.y, b.origin.y);
    }

    #[test]
    fn spacing_clamps_to_the_configured_maximum() {
        let ws = Size::new(1540.0, 400.0);
        let spacing = workspace_spacing(bounds(), ws, FitMode::SINGLE, true, 350.0);
        assert!(spacing <= 350.0);
        assert!(spacing >= WORKSPACE_MIN_SPACING.min(350.0));
    }

    #[test]
    fn spacing_respects_a_small_maximum() {
        let ws = Size::new(1540.0, 866.0);
        let spacing = workspace_spacing(bounds(), ws, FitMode::SINGLE, true, 10.0);
        assert_eq!(spacing, 10.0);
    }

    #[test]
    fn fit_all_collapses_towards_the_minimum() {
        let ws = Size::new(1540.0, 400.0);
        let single = workspace_spacing(bounds(), ws, FitMode::SINGLE, true, 350.0);
        let all = workspace_spacing(bounds(), ws, FitMode::ALL, true, 350.0);
        assert!(all <= single);
        assert_eq!(all, WORKSPACE_MIN_SPACING.min(350.0));
    }
}
