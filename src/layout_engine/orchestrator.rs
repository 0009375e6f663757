use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::warn;

use crate::common::config::LayoutConfig;
use crate::layout_engine::state_box::{StateBoxInputs, app_grid_box_for_state, workspace_box_for_state};
use crate::layout_engine::{PaneKind, PaneSource, PaneVisuals, interpolate, pane_sizer};
use crate::model::{Rect, Round, Size, TransitionDescriptor, UiState};

/// One rectangle per pane, the unit a renderer applies to its actors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectangleSet {
    pub dash: Rect,
    pub thumbnails: Rect,
    pub search_bar: Rect,
    pub workspace_stack: Rect,
    pub app_grid: Rect,
}

impl RectangleSet {
    pub fn zero() -> Self { RectangleSet::default() }

    /// Plain data lookup by pane kind; collaborators index into the set
    /// instead of holding back-pointers into each other.
    pub fn get(&self, pane: PaneKind) -> Rect {
        match pane {
            PaneKind::Dash => self.dash,
            PaneKind::ThumbnailColumn => self.thumbnails,
            PaneKind::SearchBar => self.search_bar,
            PaneKind::WorkspaceStack => self.workspace_stack,
            PaneKind::AppGrid => self.app_grid,
        }
    }
}

/// Everything a frame needs: the rectangles plus the scalar visuals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    pub rects: RectangleSet,
    pub visuals: PaneVisuals,
}

/// Per-state boxes for the two state-dependent panes, rebuilt once per pass.
/// All three states are filled even when only one is needed: either endpoint
/// can become an interpolation target at any time without notice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CachedStateBoxes {
    workspace: [Rect; 3],
    app_grid: [Rect; 3],
}

impl CachedStateBoxes {
    fn compute(inputs: &StateBoxInputs<'_>) -> Self {
        let mut cached = CachedStateBoxes {
            workspace: [Rect::zero(); 3],
            app_grid: [Rect::zero(); 3],
        };
        for state in UiState::iter() {
            let slot = u8::from(state) as usize;
            cached.workspace[slot] = workspace_box_for_state(state, inputs);
            cached.app_grid[slot] = app_grid_box_for_state(state, inputs);
        }
        cached
    }

    pub fn workspace(&self, state: UiState) -> Rect { self.workspace[u8::from(state) as usize] }

    pub fn app_grid(&self, state: UiState) -> Rect { self.app_grid[u8::from(state) as usize] }
}

/// Top-level allocator. Owns the resolved configuration for its lifetime
/// (constructed when the overview engine starts, dropped when it stops) and
/// computes one `FrameLayout` per allocation pass. Holds no other state:
/// every pass is a pure function of its arguments plus the config.
#[derive(Clone, Debug)]
pub struct LayoutOrchestrator {
    config: LayoutConfig,
}

impl LayoutOrchestrator {
    pub fn new(config: LayoutConfig) -> Self { LayoutOrchestrator { config } }

    pub fn config(&self) -> &LayoutConfig { &self.config }

    /// Explicit invalidation point for configuration changes; nothing else
    /// survives between passes.
    pub fn set_config(&mut self, config: LayoutConfig) { self.config = config; }

    /// One layout pass. Sizing runs in dependency order -- dash, thumbnail
    /// column, search bar, then the state-dependent boxes -- because each
    /// pane consumes the space left by the ones before it.
    pub fn allocate(
        &self,
        display: Rect,
        transition: TransitionDescriptor,
        panes: &dyn PaneSource,
    ) -> FrameLayout {
        let display = display.sanitized();
        let transition = transition.normalized();
        let visuals = PaneVisuals::for_transition(&transition);

        if display.is_degenerate() {
            let area = &display;
            warn!(display = ?area, "degenerate display area, emitting zero layout");
            return FrameLayout {
                rects: RectangleSet::zero(),
                visuals,
            };
        }

        let config = &self.config;
        let spacing = config.spacing;
        let (start_x, start_y) = (display.origin.x, display.origin.y);

        // 1. Dash: independent of everything else.
        let dash_vertical = panes.dash_vertical();
        let dash_size = pane_sizer::size_dash(&display, config, panes);
        let dash = place_dash(&display, config, dash_size, dash_vertical);
        let dash_height = if dash_vertical { 0.0 } else { dash_size.height };
        let dash_width = if dash_vertical { dash_size.width } else { 0.0 };

        // 2. Thumbnail column: consumes what the dash left on its long axis.
        let dash_consumed = if config.thumbnails_position.is_vertical() {
            dash_height
        } else {
            dash_width
        };
        let thumb_size = pane_sizer::size_thumbnails(&display, config, panes, dash_consumed);
        let thumbnails = place_thumbnails(&display, config, thumb_size, dash_height);

        // 3. Search entry: offset past a leading thumbnail column.
        let search_size = pane_sizer::size_search(&display, config, panes, thumb_size);
        let search_bar = {
            let x = if config.center_search {
                start_x
            } else {
                start_x
                    + spacing
                    + if config.thumbnails_position.is_vertical()
                        && config.thumbnails_position.is_start()
                    {
                        thumb_size.width + spacing
                    } else {
                        0.0
                    }
            };
            let y = start_y
                + if config.dash_position.is_top() && dash_height > 0.0 {
                    (dash_height - spacing).max(0.0)
                } else {
                    spacing
                };
            Rect::new(x, y, search_size.width, search_size.height).round()
        };

        // 4. Per-state boxes, all three states, cached for this pass only.
        let inputs = StateBoxInputs {
            display,
            config,
            dash: dash_size,
            dash_vertical,
            thumbnails: thumb_size,
            search_height: search_size.height,
        };
        let cached = CachedStateBoxes::compute(&inputs);

        // 5. Resolve the transition against the cached boxes.
        let (workspace_stack, app_grid) = if transition.transitioning {
            let progress = transition.progress;
            (
                interpolate(
                    cached.workspace(transition.initial_state),
                    cached.workspace(transition.final_state),
                    progress,
                ),
                interpolate(
                    cached.app_grid(transition.initial_state),
                    cached.app_grid(transition.final_state),
                    progress,
                ),
            )
        } else {
            let state = transition.current_state();
            (cached.workspace(state), cached.app_grid(state))
        };

        // 6. Emit. The caller reads the set only after the pass completes.
        FrameLayout {
            rects: RectangleSet {
                dash,
                thumbnails,
                search_bar,
                workspace_stack,
                app_grid,
            },
            visuals,
        }
    }

    /// The per-pass state boxes without transition resolution, for callers
    /// that need both endpoints of an upcoming transition.
    pub fn state_boxes(
        &self,
        display: Rect,
        panes: &dyn PaneSource,
    ) -> CachedStateBoxes {
        let display = display.sanitized();
        if display.is_degenerate() {
            return CachedStateBoxes {
                workspace: [Rect::zero(); 3],
                app_grid: [Rect::zero(); 3],
            };
        }
        let config = &self.config;
        let dash_vertical = panes.dash_vertical();
        let dash_size = pane_sizer::size_dash(&display, config, panes);
        let dash_height = if dash_vertical { 0.0 } else { dash_size.height };
        let dash_consumed = if config.thumbnails_position.is_vertical() {
            dash_height
        } else if dash_vertical {
            dash_size.width
        } else {
            0.0
        };
        let thumb_size = pane_sizer::size_thumbnails(&display, config, panes, dash_consumed);
        let search_size = pane_sizer::size_search(&display, config, panes, thumb_size);
        CachedStateBoxes::compute(&StateBoxInputs {
            display,
            config,
            dash: dash_size,
            dash_vertical,
            thumbnails: thumb_size,
            search_height: search_size.height,
        })
    }
}

fn place_dash(display: &Rect, config: &LayoutConfig, size: Size, vertical: bool) -> Rect {
    if size.area() == 0.0 {
        return Rect::zero();
    }
    let spacing = config.spacing;
    let (start_x, start_y) = (display.origin.x, display.origin.y);
    let Size { width, height } = display.size;

    if vertical {
        // Third-party docks report verticality but not an edge; they dock on
        // the leading edge.
        let y = start_y + (height - size.height) / 2.0;
        return Rect::new(start_x, y, size.width, size.height).round();
    }

    let (x, dash_width) = if config.dash_position.is_centered() {
        (start_x, width)
    } else if config.dash_position.is_start() {
        (start_x + spacing, size.width)
    } else {
        (start_x + width - spacing - size.width, size.width)
    };
    let y = if config.dash_position.is_top() {
        start_y
    } else {
        start_y + height - size.height
    };
    Rect::new(x, y, dash_width, size.height).round()
}

fn place_thumbnails(display: &Rect, config: &LayoutConfig, size: Size, dash_height: f64) -> Rect {
    if size.area() == 0.0 {
        return Rect::zero();
    }
    let spacing = config.spacing;
    let (start_x, start_y) = (display.origin.x, display.origin.y);
    let Size { width, height } = display.size;
    let dash_top = config.dash_position.is_top();

    if config.thumbnails_position.is_vertical() {
        let x = if config.thumbnails_position.is_start() {
            start_x + spacing
        } else {
            start_x + width - spacing - size.width
        };
        let y = start_y
            + if dash_top && dash_height > 0.0 {
                dash_height
            } else {
                3.0 * spacing
            };
        Rect::new(x, y, size.width, size.height).round()
    } else {
        let x = start_x + spacing;
        let y = if config.thumbnails_position.is_start() {
            start_y
                + if dash_top && dash_height > 0.0 {
                    dash_height
                } else {
                    3.0 * spacing
                }
        } else {
            start_y + height
                - size.height
                - if !dash_top && dash_height > 0.0 {
                    dash_height
                } else {
                    3.0 * spacing
                }
        };
        Rect::new(x, y, size.width, size.height).round()
    }
}
