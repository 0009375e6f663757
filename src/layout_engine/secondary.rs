use serde::{Deserialize, Serialize};

use crate::common::config::{LayoutConfig, SecondaryThumbnailsPosition};
use crate::layout_engine::{PaneSource, pane_sizer};
use crate::model::{Rect, Round, TransitionDescriptor, UiState};

/// Fraction of the monitor height the secondary workspace preview occupies.
pub const SECONDARY_WORKSPACE_SCALE: f64 = 0.80;

/// The reduced layout used on monitors other than the primary: a thumbnail
/// column and the workspace stack, no dash, search or app grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryLayout {
    pub thumbnails: Rect,
    pub workspace_stack: Rect,
    pub thumbnails_opacity: u8,
    pub thumbnails_scale: f64,
}

/// One layout pass for a secondary monitor. The thumbnail side falls back to
/// the primary configuration unless overridden, and the workspace box obeys
/// the same interpolation rules as the primary stack.
pub fn allocate_secondary(
    display: Rect,
    config: &LayoutConfig,
    transition: TransitionDescriptor,
    panes: &dyn PaneSource,
) -> SecondaryLayout {
    let display = display.sanitized();
    let transition = transition.normalized();
    if display.is_degenerate() {
        return SecondaryLayout {
            thumbnails_opacity: 255,
            thumbnails_scale: 1.0,
            ..SecondaryLayout::default()
        };
    }

    let spacing = config.spacing * panes.thumbnails_expand_fraction().clamp(0.0, 1.0);
    let (start_x, start_y) = (display.origin.x, display.origin.y);
    let (width, height) = (display.size.width, display.size.height);
    let padding = ((1.0 - SECONDARY_WORKSPACE_SCALE) * height / 2.0).round();

    let position_left = match config.secondary_thumbnails_position {
        SecondaryThumbnailsPosition::Start => Some(true),
        SecondaryThumbnailsPosition::End => Some(false),
        SecondaryThumbnailsPosition::SameAsPrimary => {
            if config.thumbnails_position.is_hidden() {
                None
            } else {
                Some(config.thumbnails_position.is_start())
            }
        }
        SecondaryThumbnailsPosition::Hidden => None,
    };

    let (thumbnails, thumbnails_width) = match position_left {
        None => (Rect::zero(), 0.0),
        Some(left) => {
            let expand = panes.thumbnails_expand_fraction().clamp(0.0, 1.0);
            let preferred = pane_sizer::thumbnails_preferred_width(
                height,
                panes.porthole(),
                panes.workspace_count(),
                spacing,
                config.max_thumbnail_scale,
            );
            let thumb_width = (preferred * expand)
                .min(width * config.max_thumbnail_scale)
                .max(0.0);

            let porthole = panes.porthole();
            let scale = if porthole.width > 0.0 { thumb_width / porthole.width } else { 0.0 };
            let natural_height = panes.workspace_count() as f64 * porthole.height * scale
                + panes.workspace_count().saturating_sub(1) as f64 * spacing;
            let thumb_height = natural_height.min((height - 2.0 * spacing).max(0.0));

            let x = if left {
                start_x + spacing
            } else {
                start_x + width - spacing - thumb_width
            };
            let y = start_y + padding.min((height - thumb_height) / 2.0);
            (
                Rect::new(x, y, thumb_width, thumb_height).round(),
                thumb_width,
            )
        }
    };

    let workspace_box_for_state = |state: UiState| -> Rect {
        match state {
            UiState::Hidden => display,
            UiState::WindowPicker | UiState::AppGrid => {
                let x = if position_left == Some(true) {
                    start_x + 2.0 * spacing + thumbnails_width
                } else {
                    start_x + spacing
                };
                Rect::new(
                    x,
                    start_y + padding,
                    (width - thumbnails_width - spacing).max(0.0),
                    (height - 1.7 * padding).max(0.0),
                )
                .round()
            }
        }
    };

    let workspace_stack = if transition.transitioning {
        workspace_box_for_state(transition.initial_state)
            .interpolate(workspace_box_for_state(transition.final_state), transition.progress)
    } else {
        workspace_box_for_state(transition.current_state())
    };

    SecondaryLayout {
        thumbnails,
        workspace_stack,
        thumbnails_opacity: 255,
        thumbnails_scale: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::config::{Config, ThumbnailsPosition};
    use crate::model::Size;

    struct Panes;

    impl PaneSource for Panes {
        fn porthole(&self) -> Size { Size::new(1280.0, 1024.0) }

        fn workspace_count(&self) -> usize { 4 }

        fn dash_preferred_height(&self, _for_width: f64) -> f64 { 0.0 }

        fn dash_preferred_width(&self, _for_height: f64) -> f64 { 0.0 }

        fn search_preferred_height(&self, _for_width: f64) -> f64 { 0.0 }
    }

    fn display() -> Rect { Rect::new(0.0, 0.0, 1280.0, 1024.0) }

    #[test]
    fn same_as_primary_follows_the_primary_side() {
        let mut config = Config::default().resolve();
        config.thumbnails_position = ThumbnailsPosition::Right;
        let layout = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::WindowPicker),
            &Panes,
        );
        assert!(layout.thumbnails.origin.x > 1280.0 / 2.0);
        assert_eq!(layout.workspace_stack.origin.x, config.spacing);
    }

    #[test]
    fn secondary_override_beats_the_primary_side() {
        let mut config = Config::default().resolve();
        config.thumbnails_position = ThumbnailsPosition::Right;
        config.secondary_thumbnails_position = SecondaryThumbnailsPosition::Start;
        let layout = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::WindowPicker),
            &Panes,
        );
        assert_eq!(layout.thumbnails.origin.x, config.spacing);
        assert!(layout.workspace_stack.origin.x >= layout.thumbnails.max_x());
    }

    #[test]
    fn hidden_secondary_thumbnails_free_the_width() {
        let mut config = Config::default().resolve();
        config.secondary_thumbnails_position = SecondaryThumbnailsPosition::Hidden;
        let layout = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::WindowPicker),
            &Panes,
        );
        assert_eq!(layout.thumbnails, Rect::zero());
        assert_eq!(layout.workspace_stack.size.width, 1280.0 - config.spacing);
    }

    #[test]
    fn hidden_state_fills_the_monitor() {
        let config = Config::default().resolve();
        let layout = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::Hidden),
            &Panes,
        );
        assert_eq!(layout.workspace_stack, display());
    }

    #[test]
    fn transition_interpolates_the_workspace_box() {
        let config = Config::default().resolve();
        let hidden = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::Hidden),
            &Panes,
        );
        let picker = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::stationary(UiState::WindowPicker),
            &Panes,
        );
        let mid = allocate_secondary(
            display(),
            &config,
            TransitionDescriptor::between(UiState::Hidden, UiState::WindowPicker, 0.5),
            &Panes,
        );
        assert_eq!(
            mid.workspace_stack,
            hidden.workspace_stack.interpolate(picker.workspace_stack, 0.5)
        );
    }

    #[test]
    fn degenerate_monitor_yields_zero_layout() {
        let config = Config::default().resolve();
        let layout = allocate_secondary(
            Rect::new(0.0, 0.0, 0.0, 768.0),
            &config,
            TransitionDescriptor::stationary(UiState::WindowPicker),
            &Panes,
        );
        assert_eq!(layout.thumbnails, Rect::zero());
        assert_eq!(layout.workspace_stack, Rect::zero());
    }
}
