use std::path::{Path, PathBuf};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The dash always spans one horizontal edge; the variant picks the edge and
/// how the dash aligns along it.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum DashPosition {
    TopLeft = 0,
    #[default]
    TopCenter = 1,
    TopRight = 2,
    BottomLeft = 3,
    BottomCenter = 4,
    BottomRight = 5,
}

impl DashPosition {
    pub fn is_top(self) -> bool {
        matches!(
            self,
            DashPosition::TopLeft | DashPosition::TopCenter | DashPosition::TopRight
        )
    }

    pub fn is_centered(self) -> bool {
        matches!(self, DashPosition::TopCenter | DashPosition::BottomCenter)
    }

    pub fn is_start(self) -> bool {
        matches!(self, DashPosition::TopLeft | DashPosition::BottomLeft)
    }
}

/// Placement of the workspace thumbnail column. Left/Right/HiddenVertical
/// select the vertical orientation, the rest the horizontal one; the active
/// orientation decides which axis the column consumes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailsPosition {
    #[default]
    Left = 0,
    Right = 1,
    HiddenVertical = 4,
    Top = 5,
    Bottom = 6,
    HiddenHorizontal = 9,
}

impl ThumbnailsPosition {
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            ThumbnailsPosition::Left | ThumbnailsPosition::Right | ThumbnailsPosition::HiddenVertical
        )
    }

    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            ThumbnailsPosition::HiddenVertical | ThumbnailsPosition::HiddenHorizontal
        )
    }

    /// Whether the column sits on the leading edge of its axis (left or top).
    pub fn is_start(self) -> bool {
        matches!(self, ThumbnailsPosition::Left | ThumbnailsPosition::Top)
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryThumbnailsPosition {
    Start = 0,
    End = 1,
    #[default]
    SameAsPrimary = 2,
    Hidden = 3,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum PanelPosition {
    #[default]
    Top = 0,
    Bottom = 1,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "snake_case")]
pub enum PanelVisibility {
    #[default]
    Always = 0,
    OverviewOnly = 1,
    AlwaysHidden = 2,
}

pub const SPACING_RANGE: (f64, f64) = (10.0, 500.0);
pub const WS_THUMBNAIL_SCALE_RANGE: (u8, u8) = (5, 30);
pub const WS_PREVIEW_SCALE_RANGE: (u8, u8) = (30, 100);
pub const ANIMATION_SPEED_RANGE: (u32, u32) = (1, 500);

/// Fraction of the display height the dash may occupy at most.
pub const DASH_MAX_HEIGHT_RATIO: f64 = 0.15;

pub fn config_file() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".overlook.toml")
}

/// Raw option record as stored on disk. Values are kept verbatim;
/// `resolve` clamps them into a [`LayoutConfig`] and `validate` /
/// `auto_fix_values` report and repair out-of-range entries.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct RawOptions {
    #[serde(default = "default_dash_position")]
    pub dash_position: u8,
    #[serde(default)]
    pub ws_thumbnails_position: u8,
    #[serde(default = "default_secondary_position")]
    pub secondary_ws_thumbnails_position: u8,
    #[serde(default = "default_ws_thumbnail_scale")]
    pub ws_thumbnail_scale: u8,
    #[serde(default = "default_ws_preview_scale")]
    pub ws_preview_scale: u8,
    #[serde(default = "default_ws_max_spacing")]
    pub ws_max_spacing: f64,
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    #[serde(default)]
    pub panel_position: u8,
    #[serde(default)]
    pub panel_visibility: u8,
    #[serde(default)]
    pub center_app_grid: bool,
    #[serde(default)]
    pub center_search: bool,
    #[serde(default = "yes")]
    pub show_search_entry: bool,
    #[serde(default = "default_animation_speed_factor")]
    pub animation_speed_factor: u32,
}

impl Default for RawOptions {
    fn default() -> Self { Config::default().options }
}

impl RawOptions {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if DashPosition::try_from(self.dash_position).is_err() {
            issues.push(format!("dash_position {} is not a known value", self.dash_position));
        }
        if ThumbnailsPosition::try_from(self.ws_thumbnails_position).is_err() {
            issues.push(format!(
                "ws_thumbnails_position {} is not a known value",
                self.ws_thumbnails_position
            ));
        }
        if SecondaryThumbnailsPosition::try_from(self.secondary_ws_thumbnails_position).is_err() {
            issues.push(format!(
                "secondary_ws_thumbnails_position {} is not a known value",
                self.secondary_ws_thumbnails_position
            ));
        }
        if PanelPosition::try_from(self.panel_position).is_err() {
            issues.push(format!(
                "panel_position {} is not a known value",
                self.panel_position
            ));
        }
        if PanelVisibility::try_from(self.panel_visibility).is_err() {
            issues.push(format!(
                "panel_visibility {} is not a known value",
                self.panel_visibility
            ));
        }

        let (lo, hi) = WS_THUMBNAIL_SCALE_RANGE;
        if !(lo..=hi).contains(&self.ws_thumbnail_scale) {
            issues.push(format!(
                "ws_thumbnail_scale must be within {}..={}, got {}",
                lo, hi, self.ws_thumbnail_scale
            ));
        }
        let (lo, hi) = WS_PREVIEW_SCALE_RANGE;
        if !(lo..=hi).contains(&self.ws_preview_scale) {
            issues.push(format!(
                "ws_preview_scale must be within {}..={}, got {}",
                lo, hi, self.ws_preview_scale
            ));
        }
        let (lo, hi) = SPACING_RANGE;
        if !self.ws_max_spacing.is_finite() || self.ws_max_spacing < lo || self.ws_max_spacing > hi
        {
            issues.push(format!(
                "ws_max_spacing must be within {}..={}, got {}",
                lo, hi, self.ws_max_spacing
            ));
        }
        if !self.spacing.is_finite() || self.spacing < lo || self.spacing > hi {
            issues.push(format!("spacing must be within {}..={}, got {}", lo, hi, self.spacing));
        }
        let (lo, hi) = ANIMATION_SPEED_RANGE;
        if !(lo..=hi).contains(&self.animation_speed_factor) {
            issues.push(format!(
                "animation_speed_factor must be within {}..={}, got {}",
                lo, hi, self.animation_speed_factor
            ));
        }

        issues
    }

    /// Repairs every issue `validate` reports, substituting defaults for
    /// unknown enum values and clamping numeric ranges. Returns the number of
    /// fixes applied.
    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;

        if DashPosition::try_from(self.dash_position).is_err() {
            self.dash_position = DashPosition::default().into();
            fixes += 1;
        }
        if ThumbnailsPosition::try_from(self.ws_thumbnails_position).is_err() {
            self.ws_thumbnails_position = ThumbnailsPosition::default().into();
            fixes += 1;
        }
        if SecondaryThumbnailsPosition::try_from(self.secondary_ws_thumbnails_position).is_err() {
            self.secondary_ws_thumbnails_position = SecondaryThumbnailsPosition::default().into();
            fixes += 1;
        }
        if PanelPosition::try_from(self.panel_position).is_err() {
            self.panel_position = PanelPosition::default().into();
            fixes += 1;
        }
        if PanelVisibility::try_from(self.panel_visibility).is_err() {
            self.panel_visibility = PanelVisibility::default().into();
            fixes += 1;
        }

        let (lo, hi) = WS_THUMBNAIL_SCALE_RANGE;
        if !(lo..=hi).contains(&self.ws_thumbnail_scale) {
            self.ws_thumbnail_scale = self.ws_thumbnail_scale.clamp(lo, hi);
            fixes += 1;
        }
        let (lo, hi) = WS_PREVIEW_SCALE_RANGE;
        if !(lo..=hi).contains(&self.ws_preview_scale) {
            self.ws_preview_scale = self.ws_preview_scale.clamp(lo, hi);
            fixes += 1;
        }
        let (lo, hi) = SPACING_RANGE;
        if !self.ws_max_spacing.is_finite() || self.ws_max_spacing < lo || self.ws_max_spacing > hi
        {
            self.ws_max_spacing = if self.ws_max_spacing.is_finite() {
                self.ws_max_spacing.clamp(lo, hi)
            } else {
                default_ws_max_spacing()
            };
            fixes += 1;
        }
        if !self.spacing.is_finite() || self.spacing < lo || self.spacing > hi {
            self.spacing = if self.spacing.is_finite() {
                self.spacing.clamp(lo, hi)
            } else {
                default_spacing()
            };
            fixes += 1;
        }
        let (lo, hi) = ANIMATION_SPEED_RANGE;
        if !(lo..=hi).contains(&self.animation_speed_factor) {
            self.animation_speed_factor = self.animation_speed_factor.clamp(lo, hi);
            fixes += 1;
        }

        fixes
    }

    /// Normalizes the raw record into the immutable per-pass configuration.
    /// Never fails: unknown enum values fall back to their defaults and
    /// numeric values are clamped to their documented ranges.
    pub fn resolve(&self) -> LayoutConfig {
        let (spacing_lo, spacing_hi) = SPACING_RANGE;
        let clamp_spacing = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(spacing_lo, spacing_hi)
            } else {
                fallback
            }
        };

        let (tmb_lo, tmb_hi) = WS_THUMBNAIL_SCALE_RANGE;
        let (prev_lo, prev_hi) = WS_PREVIEW_SCALE_RANGE;
        let (speed_lo, speed_hi) = ANIMATION_SPEED_RANGE;

        LayoutConfig {
            spacing: clamp_spacing(self.spacing, default_spacing()),
            dash_position: DashPosition::try_from(self.dash_position).unwrap_or_default(),
            thumbnails_position: ThumbnailsPosition::try_from(self.ws_thumbnails_position)
                .unwrap_or_default(),
            secondary_thumbnails_position: SecondaryThumbnailsPosition::try_from(
                self.secondary_ws_thumbnails_position,
            )
            .unwrap_or_default(),
            max_thumbnail_scale: f64::from(self.ws_thumbnail_scale.clamp(tmb_lo, tmb_hi)) / 100.0,
            ws_preview_scale: f64::from(self.ws_preview_scale.clamp(prev_lo, prev_hi)) / 100.0,
            ws_max_spacing: clamp_spacing(self.ws_max_spacing, default_ws_max_spacing()),
            dash_max_height_ratio: DASH_MAX_HEIGHT_RATIO,
            panel_position: PanelPosition::try_from(self.panel_position).unwrap_or_default(),
            panel_visibility: PanelVisibility::try_from(self.panel_visibility).unwrap_or_default(),
            center_app_grid: self.center_app_grid,
            center_search: self.center_search,
            show_search_entry: self.show_search_entry,
            animation_speed_factor: f64::from(
                self.animation_speed_factor.clamp(speed_lo, speed_hi),
            ) / 100.0,
        }
    }
}

/// Normalized configuration consumed by the layout engine. Built once per
/// configuration change, never mutated during a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub spacing: f64,
    pub dash_position: DashPosition,
    pub thumbnails_position: ThumbnailsPosition,
    pub secondary_thumbnails_position: SecondaryThumbnailsPosition,
    /// Largest fraction of the display width (or height, horizontal
    /// orientation) the thumbnail column may take.
    pub max_thumbnail_scale: f64,
    /// Extra shrink factor applied to the workspace preview box.
    pub ws_preview_scale: f64,
    /// Upper bound on the spacing between adjacent workspace previews.
    pub ws_max_spacing: f64,
    pub dash_max_height_ratio: f64,
    pub panel_position: PanelPosition,
    pub panel_visibility: PanelVisibility,
    pub center_app_grid: bool,
    pub center_search: bool,
    pub show_search_entry: bool,
    /// Multiplier on the base transition duration; 1.0 is default speed.
    pub animation_speed_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self { RawOptions::default().resolve() }
}

impl LayoutConfig {
    /// Whether the dash contributes space to the overview at all.
    pub fn dash_enabled(&self) -> bool {
        self.panel_visibility != PanelVisibility::AlwaysHidden
    }

    pub fn transition_duration(&self, base: std::time::Duration) -> std::time::Duration {
        base.mul_f64(self.animation_speed_factor)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "bundled_options")]
    pub options: RawOptions,
}

fn bundled_options() -> RawOptions { Config::default().options }

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = std::fs::read_to_string(path)?;
        Ok(Self::parse(&buf)?)
    }

    pub fn default() -> Config {
        Self::parse(include_str!("../../overlook.default.toml")).unwrap()
    }

    pub fn parse(buf: &str) -> Result<Config, ConfigError> { Ok(toml::from_str(buf)?) }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    pub fn validate(&self) -> Vec<String> { self.options.validate() }

    pub fn auto_fix_values(&mut self) -> usize { self.options.auto_fix_values() }

    pub fn resolve(&self) -> LayoutConfig { self.options.resolve() }
}

fn yes() -> bool { true }

fn default_dash_position() -> u8 { DashPosition::TopCenter.into() }

fn default_secondary_position() -> u8 { SecondaryThumbnailsPosition::SameAsPrimary.into() }

fn default_ws_thumbnail_scale() -> u8 { 13 }

fn default_ws_preview_scale() -> u8 { 100 }

fn default_ws_max_spacing() -> f64 { 350.0 }

fn default_spacing() -> f64 { 16.0 }

fn default_animation_speed_factor() -> u32 { 100 }
