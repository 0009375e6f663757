use crate::common::config::LayoutConfig;
use crate::layout_engine::PaneSource;
use crate::model::{Rect, Size};

pub fn max_dash_height(display: &Rect, config: &LayoutConfig) -> f64 {
    (display.size.height * config.dash_max_height_ratio).round()
}

/// Clamped dash size. A horizontal dash reports its preferred height for the
/// full display width, capped by the max-height ratio; a vertical dock is the
/// transpose. Hidden panes size to zero and release their axis to later
/// siblings.
pub fn size_dash(display: &Rect, config: &LayoutConfig, panes: &dyn PaneSource) -> Size {
    if !config.dash_enabled() || !panes.dash_visible() {
        return Size::zero();
    }
    let spacing = config.spacing;
    if panes.dash_vertical() {
        let max_width = (display.size.width * config.dash_max_height_ratio).round();
        let width = panes.dash_preferred_width(display.size.height).min(max_width).max(0.0);
        let height = panes
            .dash_preferred_height(width)
            .min((display.size.height - 2.0 * spacing).max(0.0))
            .max(0.0);
        Size::new(width, height)
    } else {
        let max_height = max_dash_height(display, config);
        let height = panes.dash_preferred_height(display.size.width).min(max_height).max(0.0);
        let width = panes
            .dash_preferred_width(height)
            .min((display.size.width - 2.0 * spacing).max(0.0))
            .max(0.0);
        Size::new(width, height)
    }
}

/// Preferred width of a vertical thumbnail column given the height budget:
/// the per-workspace share of the budget sets the scale, clamped to
/// `max_scale`, and the width follows from the porthole aspect ratio.
pub fn thumbnails_preferred_width(
    for_height: f64,
    porthole: Size,
    workspaces: usize,
    spacing: f64,
    max_scale: f64,
) -> f64 {
    if workspaces == 0 || porthole.height <= 0.0 {
        return 0.0;
    }
    let total_spacing = (workspaces - 1) as f64 * spacing;
    let available = ((for_height - total_spacing) / workspaces as f64).max(0.0);
    let scale = (available / porthole.height).min(max_scale);
    (porthole.width * scale).round()
}

/// Transpose of [`thumbnails_preferred_width`] for the horizontal orientation.
pub fn thumbnails_preferred_height(
    for_width: f64,
    porthole: Size,
    workspaces: usize,
    spacing: f64,
    max_scale: f64,
) -> f64 {
    if workspaces == 0 || porthole.width <= 0.0 {
        return 0.0;
    }
    let total_spacing = (workspaces - 1) as f64 * spacing;
    let available = ((for_width - total_spacing) / workspaces as f64).max(0.0);
    let scale = (available / porthole.width).min(max_scale);
    (porthole.height * scale).round()
}

/// Clamped size of the thumbnail column. `dash_consumed` is the space the
/// dash takes on the column's long axis (height for the vertical orientation,
/// width for the horizontal one).
pub fn size_thumbnails(
    display: &Rect,
    config: &LayoutConfig,
    panes: &dyn PaneSource,
    dash_consumed: f64,
) -> Size {
    if config.thumbnails_position.is_hidden() {
        return Size::zero();
    }
    let spacing = config.spacing;
    let expand = panes.thumbnails_expand_fraction().clamp(0.0, 1.0);
    let porthole = panes.porthole();
    let workspaces = panes.workspace_count();

    if config.thumbnails_position.is_vertical() {
        let height = (display.size.height - 2.0 * spacing - dash_consumed).max(0.0);
        let preferred = thumbnails_preferred_width(
            height,
            porthole,
            workspaces,
            spacing,
            config.max_thumbnail_scale,
        );
        let width = (preferred * expand)
            .min(display.size.width * config.max_thumbnail_scale)
            .round()
            .max(0.0);
        Size::new(width, height)
    } else {
        let width = (display.size.width - 2.0 * spacing - dash_consumed).max(0.0);
        let preferred = thumbnails_preferred_height(
            width,
            porthole,
            workspaces,
            spacing,
            config.max_thumbnail_scale,
        );
        let height = (preferred * expand)
            .min(display.size.height * config.max_thumbnail_scale)
            .round()
            .max(0.0);
        Size::new(width, height)
    }
}

/// Search entry size. A disabled entry keeps its width but collapses to zero
/// height so the boxes below it move up.
pub fn size_search(
    display: &Rect,
    config: &LayoutConfig,
    panes: &dyn PaneSource,
    thumbnails: Size,
) -> Size {
    let spacing = config.spacing;
    let thumb_width = if config.thumbnails_position.is_vertical() {
        thumbnails.width
    } else {
        0.0
    };
    let width = if config.center_search {
        display.size.width
    } else {
        (display.size.width - 2.0 * spacing - thumb_width).max(0.0)
    };
    let height = if config.show_search_entry {
        panes.search_preferred_height(width).max(0.0)
    } else {
        0.0
    };
    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::common::config::{Config, PanelVisibility, ThumbnailsPosition};

    struct Panes {
        porthole: Size,
        workspaces: usize,
        dash_item: f64,
        dash_visible: bool,
    }

    impl Default for Panes {
        fn default() -> Self {
            Panes {
                porthole: Size::new(1920.0, 1080.0),
                workspaces: 4,
                dash_item: 64.0,
                dash_visible: true,
            }
        }
    }

    impl PaneSource for Panes {
        fn porthole(&self) -> Size { self.porthole }

        fn workspace_count(&self) -> usize { self.workspaces }

        fn dash_visible(&self) -> bool { self.dash_visible }

        fn dash_preferred_height(&self, _for_width: f64) -> f64 { self.dash_item + 16.0 }

        fn dash_preferred_width(&self, for_height: f64) -> f64 {
            self.workspaces as f64 * 3.0 * for_height
        }

        fn search_preferred_height(&self, _for_width: f64) -> f64 { 36.0 }
    }

    fn display() -> Rect { Rect::new(0.0, 0.0, 1920.0, 1080.0) }

    #[test]
    fn dash_height_is_capped_by_ratio() {
        let config = Config::default().resolve();
        let panes = Panes {
            dash_item: 400.0,
            ..Panes::default()
        };
        let size = size_dash(&display(), &config, &panes);
        assert_eq!(size.height, max_dash_height(&display(), &config));
    }

    #[test]
    fn hidden_dash_sizes_to_zero() {
        let mut config = Config::default().resolve();
        config.panel_visibility = PanelVisibility::AlwaysHidden;
        assert_eq!(size_dash(&display(), &config, &Panes::default()), Size::zero());

        let config = Config::default().resolve();
        let panes = Panes {
            dash_visible: false,
            ..Panes::default()
        };
        assert_eq!(size_dash(&display(), &config, &panes), Size::zero());
    }

    #[test]
    fn thumbnail_width_follows_porthole_aspect() {
        let porthole = Size::new(1920.0, 1080.0);
        // Plenty of room: the max-scale clamp binds.
        let width = thumbnails_preferred_width(2000.0, porthole, 2, 16.0, 0.13);
        assert_eq!(width, (1920.0_f64 * 0.13).round());

        // Tight budget: the per-workspace share binds instead.
        let width = thumbnails_preferred_width(400.0, porthole, 8, 16.0, 0.13);
        let share: f64 = (400.0 - 7.0 * 16.0) / 8.0;
        assert_eq!(width, (1920.0 * (share / 1080.0)).round());
    }

    #[test]
    fn hidden_thumbnails_size_to_zero() {
        let mut config = Config::default().resolve();
        config.thumbnails_position = ThumbnailsPosition::HiddenVertical;
        let size = size_thumbnails(&display(), &config, &Panes::default(), 80.0);
        assert_eq!(size, Size::zero());
    }

    #[test]
    fn thumbnails_never_exceed_max_scale_of_display() {
        let config = Config::default().resolve();
        let panes = Panes {
            workspaces: 1,
            ..Panes::default()
        };
        let size = size_thumbnails(&display(), &config, &panes, 0.0);
        assert!(size.width <= (1920.0f64 * config.max_thumbnail_scale).round());
    }

    #[test]
    fn search_collapses_when_disabled() {
        let mut config = Config::default().resolve();
        config.show_search_entry = false;
        let size = size_search(&display(), &config, &Panes::default(), Size::new(200.0, 900.0));
        assert_eq!(size.height, 0.0);
    }

    #[test]
    fn centered_search_spans_full_width() {
        let mut config = Config::default().resolve();
        config.center_search = true;
        let size = size_search(&display(), &config, &Panes::default(), Size::new(200.0, 900.0));
        assert_eq!(size.width, 1920.0);
    }
}
