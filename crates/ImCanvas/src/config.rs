//! # Configuration
//!
//! Tunables for tessellation and input. All structs deserialize with
//! per-field defaults, so a host can supply a partial JSON document.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Point;

bitflags! {
    /// Per-list rendering switches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct DrawListFlags: u8 {
        /// Strokes get a 1px alpha fringe on each outer edge.
        const ANTI_ALIASED_LINES = 1 << 0;
        /// Convex fills get a 1px alpha fringe around their outline.
        const ANTI_ALIASED_FILL = 1 << 1;
    }
}

impl Default for DrawListFlags {
    fn default() -> Self {
        Self::ANTI_ALIASED_LINES | Self::ANTI_ALIASED_FILL
    }
}

/// Tessellation quality settings used to build [`SharedData`](crate::shared_data::SharedData).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationConfig {
    /// Maximum sagitta, in pixels, between a circle and its polygon. Default: 0.30.
    pub circle_segment_max_error: f32,
    /// Maximum deviation, in pixels, between a Bezier curve and its polyline. Default: 1.25.
    pub curve_tessellation_tolerance: f32,
    /// Flags every new draw list starts with.
    pub flags: DrawListFlags,
    /// Width of the anti-aliasing fringe in pixels. Default: 1.0.
    pub fringe_scale: f32,
    /// UV of a fully opaque white texel in the default texture.
    pub tex_uv_white_pixel: Point,
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            circle_segment_max_error: 0.30,
            curve_tessellation_tolerance: 1.25,
            flags: DrawListFlags::default(),
            fringe_scale: 1.0,
            tex_uv_white_pixel: Vec2::ZERO,
        }
    }
}

/// Double-click thresholds for [`Mouse`](crate::input::Mouse).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Max seconds between two clicks to register a double-click. Default: 0.30.
    pub double_click_interval: f32,
    /// Max cursor travel in pixels between two clicks of a double-click. Default: 6.0.
    pub double_click_distance: f32,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            double_click_interval: 0.30,
            double_click_distance: 6.0,
        }
    }
}
