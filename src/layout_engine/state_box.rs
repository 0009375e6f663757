use crate::common::config::LayoutConfig;
use crate::model::{Rect, Round, Size, UiState};

/// Fraction of the remaining space the workspace box may fill; the margin
/// keeps it from touching the surrounding panes.
pub const WORKSPACE_FIT_MARGIN: f64 = 0.94;

/// Fixed pane measurements a state box computation starts from. Everything in
/// here was produced by earlier steps of the same pass and is read-only.
#[derive(Clone, Copy)]
pub(crate) struct StateBoxInputs<'a> {
    pub(crate) display: Rect,
    pub(crate) config: &'a LayoutConfig,
    pub(crate) dash: Size,
    pub(crate) dash_vertical: bool,
    pub(crate) thumbnails: Size,
    pub(crate) search_height: f64,
}

impl StateBoxInputs<'_> {
    /// Height consumed by a horizontal dash; a vertical dock consumes width
    /// instead.
    fn dash_height(&self) -> f64 {
        if self.dash_vertical { 0.0 } else { self.dash.height }
    }

    fn dash_width(&self) -> f64 {
        if self.dash_vertical { self.dash.width } else { 0.0 }
    }

    /// Width consumed by a vertically oriented thumbnail column.
    fn thumbnails_width(&self) -> f64 {
        if self.config.thumbnails_position.is_vertical() {
            self.thumbnails.width
        } else {
            0.0
        }
    }

    /// Height consumed by a horizontally oriented thumbnail column.
    fn thumbnails_height(&self) -> f64 {
        if self.config.thumbnails_position.is_vertical() {
            0.0
        } else {
            self.thumbnails.height
        }
    }

    fn thumbnails_leading(&self) -> bool { self.config.thumbnails_position.is_start() }
}

/// The workspace-stack box for one state in isolation. WindowPicker and
/// AppGrid share the same box; the app-grid state only fades the stack out.
pub(crate) fn workspace_box_for_state(state: UiState, inputs: &StateBoxInputs<'_>) -> Rect {
    match state {
        UiState::Hidden => inputs.display,
        UiState::WindowPicker | UiState::AppGrid => picker_workspace_box(inputs),
    }
}

fn picker_workspace_box(inputs: &StateBoxInputs<'_>) -> Rect {
    let config = inputs.config;
    let spacing = config.spacing;
    let display = inputs.display;
    let (start_x, start_y) = (display.origin.x, display.origin.y);
    let Size { width, height } = display.size;

    let dash_height = inputs.dash_height();
    let dash_width = inputs.dash_width();
    let thumb_width = inputs.thumbnails_width();
    let thumb_height = inputs.thumbnails_height();
    let dash_top = config.dash_position.is_top();

    let horizontal_dash_offset = if inputs.dash_vertical {
        dash_width + spacing
    } else {
        spacing
    };
    let available_width = (width - horizontal_dash_offset - thumb_width - spacing).max(1.0);
    let vertical_dash_consumed = if inputs.dash_vertical {
        spacing
    } else {
        dash_height + 2.0 * spacing
    };
    let vertical_thumb_consumed = if thumb_height > 0.0 {
        thumb_height + spacing
    } else {
        0.0
    };
    let mut available_height =
        (height - vertical_dash_consumed - vertical_thumb_consumed).max(1.0);

    let ratio = width / height;
    let scale =
        available_width / (ratio * available_height) * WORKSPACE_FIT_MARGIN
            * config.ws_preview_scale;

    // With a dash on screen the box sits one gap under the search entry;
    // without one the leftover space is split to keep the stack visually
    // balanced between the screen edges.
    let y_offset = if dash_height > 0.0 {
        spacing
    } else {
        (available_height - available_height * scale.min(1.0)) / 4.0
            + (height - available_height - dash_height - inputs.search_height) / 3.0
    };

    if scale < 1.0 {
        available_height *= scale;
    }
    let box_width = (available_height * ratio).round();

    // Center on the display, then clamp so the box can never overlap the
    // thumbnail column or a vertical dock, whatever the centering math said.
    let left_reserved = start_x
        + if inputs.dash_vertical { dash_width + spacing } else { 0.0 }
        + if thumb_width > 0.0 && inputs.thumbnails_leading() {
            thumb_width + spacing
        } else {
            spacing
        };
    let right_limit = start_x + width
        - if thumb_width > 0.0 && !inputs.thumbnails_leading() {
            thumb_width + spacing
        } else {
            spacing
        };
    let centered_x = start_x + (width - box_width) / 2.0;
    let x = centered_x.clamp(left_reserved, (right_limit - box_width).max(left_reserved));

    let y = start_y
        + y_offset
        + if dash_height > 0.0 && dash_top { dash_height } else { 3.0 * spacing }
        + if inputs.search_height > 0.0 {
            inputs.search_height + spacing
        } else {
            0.0
        }
        + if thumb_height > 0.0 && inputs.thumbnails_leading() {
            thumb_height + spacing
        } else {
            0.0
        };

    Rect::new(x, y, box_width, available_height).round()
}

/// The app-grid box for one state. Outside the AppGrid state the box keeps
/// its size but parks just below the display area so transitions slide it in.
pub(crate) fn app_grid_box_for_state(state: UiState, inputs: &StateBoxInputs<'_>) -> Rect {
    let config = inputs.config;
    let spacing = config.spacing;
    let display = inputs.display;
    let (start_x, start_y) = (display.origin.x, display.origin.y);
    let Size { width, height } = display.size;

    let dash_height = inputs.dash_height();
    let dash_width = inputs.dash_width();
    let thumb_width = inputs.thumbnails_width();
    let thumb_height = inputs.thumbnails_height();
    let dash_top = config.dash_position.is_top();

    let leading_thumb = if thumb_width > 0.0 && inputs.thumbnails_leading() {
        thumb_width
    } else {
        0.0
    };
    let leading_dock = if inputs.dash_vertical { dash_width + spacing } else { 0.0 };
    let leading_width = leading_thumb + leading_dock;

    let (x, grid_width) = if config.center_app_grid {
        let margin = spacing + thumb_width + dash_width;
        (start_x + margin, (width - 2.0 * margin).max(0.0))
    } else {
        (
            start_x + spacing + leading_width,
            (width - spacing - thumb_width - dash_width).max(0.0),
        )
    };
    let grid_height = (height
        - dash_height
        - 2.0 * spacing
        - if thumb_height > 0.0 { thumb_height + spacing } else { 0.0 })
    .max(0.0);

    let y = match state {
        // Parked off screen below the display area.
        UiState::Hidden | UiState::WindowPicker => display.max_y(),
        UiState::AppGrid => {
            start_y
                + if dash_height > 0.0 && dash_top { dash_height } else { spacing }
                + if thumb_height > 0.0 && inputs.thumbnails_leading() {
                    thumb_height + spacing
                } else {
                    0.0
                }
        }
    };

    Rect::new(x, y, grid_width, grid_height).round()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::config::{Config, ThumbnailsPosition};

    fn inputs<'a>(config: &'a LayoutConfig) -> StateBoxInputs<'a> {
        StateBoxInputs {
            display: Rect::new(0.0, 0.0, 1920.0, 1080.0),
            config,
            dash: Size::new(600.0, 60.0),
            dash_vertical: false,
            thumbnails: Size::new(200.0, 988.0),
            search_height: 40.0,
        }
    }

    #[test]
    fn hidden_state_fills_the_display() {
        let config = Config::default().resolve();
        let inputs = inputs(&config);
        assert_eq!(
            workspace_box_for_state(UiState::Hidden, &inputs),
            inputs.display
        );
    }

    #[test]
    fn window_picker_box_avoids_thumbnails_and_centers() {
        let config = Config::default().resolve();
        let inputs = inputs(&config);
        let ws = workspace_box_for_state(UiState::WindowPicker, &inputs);

        // Clear of a left thumbnail column plus one gap.
        assert!(ws.origin.x >= 200.0 + config.spacing);
        // Below the top dash and the search entry.
        assert!(ws.origin.y >= 60.0 + 40.0);
        // Fits in the display with the configured margin.
        assert!(ws.max_x() <= 1920.0);
        assert!(ws.max_y() <= 1080.0);
        // Preserves the display aspect ratio.
        let ratio = ws.size.width / ws.size.height;
        assert!((ratio - 1920.0 / 1080.0).abs() < 0.01);
    }

    #[test]
    fn window_picker_and_app_grid_share_the_workspace_box() {
        let config = Config::default().resolve();
        let inputs = inputs(&config);
        assert_eq!(
            workspace_box_for_state(UiState::WindowPicker, &inputs),
            workspace_box_for_state(UiState::AppGrid, &inputs)
        );
    }

    #[test]
    fn hiding_the_dash_grows_the_picker_box_but_not_the_hidden_box() {
        // Hidden thumbnails and a tall dash make the height constraint bind,
        // so the dash's contribution is visible in the resulting box.
        let mut config = Config::default().resolve();
        config.thumbnails_position = ThumbnailsPosition::HiddenVertical;
        let with_dash = StateBoxInputs {
            dash: Size::new(600.0, 140.0),
            thumbnails: Size::zero(),
            ..inputs(&config)
        };
        let without_dash = StateBoxInputs {
            dash: Size::zero(),
            ..with_dash
        };

        assert_eq!(
            workspace_box_for_state(UiState::Hidden, &with_dash),
            workspace_box_for_state(UiState::Hidden, &without_dash)
        );

        let picker_with = workspace_box_for_state(UiState::WindowPicker, &with_dash);
        let picker_without = workspace_box_for_state(UiState::WindowPicker, &without_dash);
        assert!(picker_without.size.height > picker_with.size.height);
    }

    #[test]
    fn preview_scale_shrinks_the_picker_box() {
        let mut config = Config::default().resolve();
        let full = workspace_box_for_state(UiState::WindowPicker, &inputs(&config));
        config.ws_preview_scale = 0.5;
        let scaled = workspace_box_for_state(UiState::WindowPicker, &inputs(&config));
        assert!(scaled.size.height < full.size.height);
        assert!(scaled.size.width < full.size.width);
    }

    #[test]
    fn right_thumbnails_clamp_from_the_right() {
        let mut config = Config::default().resolve();
        config.thumbnails_position = ThumbnailsPosition::Right;
        let inputs = inputs(&config);
        let ws = workspace_box_for_state(UiState::WindowPicker, &inputs);
        assert!(ws.max_x() <= 1920.0 - 200.0 - config.spacing);
    }

    #[test]
    fn app_grid_parks_off_screen_outside_its_state() {
        let config = Config::default().resolve();
        let inputs = inputs(&config);
        for state in [UiState::Hidden, UiState::WindowPicker] {
            let grid = app_grid_box_for_state(state, &inputs);
            assert_eq!(grid.origin.y, 1080.0);
        }
    }

    #[test]
    fn app_grid_anchors_under_a_top_dash() {
        let config = Config::default().resolve();
        let inputs = inputs(&config);
        let grid = app_grid_box_for_state(UiState::AppGrid, &inputs);
        assert_eq!(grid.origin.y, 60.0);
        assert_eq!(grid.origin.x, config.spacing + 200.0);
    }

    #[test]
    fn centered_app_grid_is_symmetric_on_the_display() {
        let mut config = Config::default().resolve();
        config.center_app_grid = true;
        let inputs = inputs(&config);
        let grid = app_grid_box_for_state(UiState::AppGrid, &inputs);
        let left = grid.origin.x;
        let right = 1920.0 - grid.max_x();
        assert!((left - right).abs() < 1.0);
    }
}
