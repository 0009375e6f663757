use crate::model::{Rect, Size, lerp};

/// Inputs for laying out the workspace thumbnails inside the column box the
/// orchestrator assigned. `collapse_fractions` carries one 0..1 value per
/// workspace (1 = fully collapsed, mid-removal); `scroll_position` is the
/// fractional index of the active workspace the indicator tracks.
#[derive(Clone, Copy, Debug)]
pub struct ThumbnailColumnParams<'a> {
    pub bounds: Rect,
    pub porthole: Size,
    pub spacing: f64,
    pub max_scale: f64,
    pub expand_fraction: f64,
    pub scroll_position: f64,
    pub collapse_fractions: &'a [f64],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThumbnailColumnLayout {
    pub thumbnails: Vec<Rect>,
    pub indicator: Rect,
    /// The uniform scale the thumbnails were laid out at.
    pub scale: f64,
}

/// Lays out a vertical thumbnail column. Each thumbnail shares one scale
/// computed from the column bounds; origins are rounded per thumbnail so the
/// rounded boxes still tile the column without accumulating drift.
pub fn layout_thumbnail_column(params: &ThumbnailColumnParams<'_>) -> ThumbnailColumnLayout {
    let n = params.collapse_fractions.len();
    if n == 0 || params.porthole.height <= 0.0 || params.porthole.width <= 0.0 {
        return ThumbnailColumnLayout::default();
    }

    let bounds = params.bounds;
    let spacing = params.spacing;
    let expand = params.expand_fraction.clamp(0.0, 1.0);

    let total_spacing = (n - 1) as f64 * spacing;
    let available_height = (bounds.size.height - total_spacing) / n as f64;
    let h_scale = bounds.size.width / params.porthole.width;
    let v_scale = available_height / params.porthole.height;
    let scale = h_scale.min(v_scale).min(params.max_scale).max(0.0);

    let ratio = params.porthole.width / params.porthole.height;
    let thumbnail_full_height = (params.porthole.height * scale).round();
    let thumbnail_width = (thumbnail_full_height * ratio).round();
    let thumbnail_height = thumbnail_full_height * expand;

    let indicator_lower = params.scroll_position.floor() as usize;
    let indicator_upper = params.scroll_position.ceil() as usize;
    let indicator_fraction = params.scroll_position.fract();
    let mut indicator_lower_box = Rect::zero();
    let mut indicator_upper_box = Rect::zero();

    let mut thumbnails = Vec::with_capacity(n);
    let mut y = bounds.origin.y;
    for (i, collapse) in params.collapse_fractions.iter().enumerate() {
        let collapse = collapse.clamp(0.0, 1.0);
        if i > 0 {
            y += spacing - (collapse * spacing).round();
        }

        let y1 = y.round();
        let y2 = (y + thumbnail_height).round();
        let rect = Rect::new(bounds.origin.x, y1, thumbnail_width, y2 - y1);
        thumbnails.push(rect);

        if i == indicator_lower {
            indicator_lower_box = rect;
        }
        if i == indicator_upper {
            indicator_upper_box = rect;
        }

        // Round the collapsing portion only; the uncollapsed portion stays
        // exact so the non-animating total still adds up.
        y += thumbnail_height - (thumbnail_height * collapse).round();
    }

    let indicator = Rect::new(
        bounds.origin.x,
        lerp(indicator_lower_box.origin.y, indicator_upper_box.origin.y, indicator_fraction),
        thumbnail_width,
        lerp(
            indicator_lower_box.size.height,
            indicator_upper_box.size.height,
            indicator_fraction,
        ),
    );

    ThumbnailColumnLayout {
        thumbnails,
        indicator,
        scale,
    }
}
