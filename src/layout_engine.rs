pub mod interpolate;
pub mod orchestrator;
pub mod pane_sizer;
pub mod secondary;
pub mod state_box;
pub mod thumbnails;
pub mod workspaces_view;

use serde::{Deserialize, Serialize};

use crate::model::Size;

pub use interpolate::{PaneVisuals, interpolate};
pub use orchestrator::{CachedStateBoxes, FrameLayout, LayoutOrchestrator, RectangleSet};
pub use secondary::{SecondaryLayout, allocate_secondary};

/// The five layout-managed regions of the overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneKind {
    Dash,
    ThumbnailColumn,
    SearchBar,
    WorkspaceStack,
    AppGrid,
}

/// Natural-size queries answered by the rendering layer. The layout engine
/// never measures actors itself; everything it needs from the renderer comes
/// through this trait, once per layout pass.
pub trait PaneSource {
    /// Natural unscaled size of one workspace preview, the basis for all
    /// thumbnail scaling.
    fn porthole(&self) -> Size;

    fn workspace_count(&self) -> usize;

    fn dash_visible(&self) -> bool { true }

    /// Explicit capability flag for vertically oriented (third-party) docks.
    /// Supplied by the collaborator, never inferred from the dash geometry.
    fn dash_vertical(&self) -> bool { false }

    fn dash_preferred_height(&self, for_width: f64) -> f64;

    fn dash_preferred_width(&self, for_height: f64) -> f64;

    fn search_preferred_height(&self, for_width: f64) -> f64;

    /// 0..1 grow-in factor for the thumbnail column while the overview opens.
    fn thumbnails_expand_fraction(&self) -> f64 { 1.0 }
}
