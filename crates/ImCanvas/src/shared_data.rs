//! # Shared Tessellation Data
//!
//! Tables computed once and read by every draw list: adaptive circle segment
//! counts for small radii and the canonical 48-point unit circle used by fast
//! arcs and rounded rectangles.

use std::f64::consts::PI;

use glam::Vec2;

use crate::config::{DrawListFlags, TessellationConfig};
use crate::error::{DrawError, contract_violation};
use crate::math::Point;

pub const CIRCLE_AUTO_SEGMENT_MIN: u16 = 4;
pub const CIRCLE_AUTO_SEGMENT_MAX: u16 = 512;
/// Radii `0..CIRCLE_SEGMENT_TABLE_LEN` are served from the cached table.
pub const CIRCLE_SEGMENT_TABLE_LEN: usize = 64;
/// Number of points on the canonical unit circle.
pub const ARC_FAST_SAMPLE_COUNT: usize = 48;

/// Chord-to-arc distance of a regular `n`-gon inscribed in a circle of `radius`.
pub fn sagitta(radius: f32, segments: u16) -> f32 {
    let n = f64::from(segments.max(1));
    (f64::from(radius) * (1.0 - (PI / n).cos())) as f32
}

/// Smallest segment count whose sagitta stays within `max_error`, clamped to
/// `[CIRCLE_AUTO_SEGMENT_MIN, CIRCLE_AUTO_SEGMENT_MAX]`.
pub fn circle_segment_count_for(radius: f32, max_error: f32) -> u16 {
    if radius <= 0.0 {
        return CIRCLE_AUTO_SEGMENT_MIN;
    }
    if max_error <= 0.0 {
        return CIRCLE_AUTO_SEGMENT_MAX;
    }
    let r = f64::from(radius);
    let e = f64::from(max_error);
    if e >= 2.0 * r {
        return CIRCLE_AUTO_SEGMENT_MIN;
    }

    let within = |n: u32| r * (1.0 - (PI / f64::from(n)).cos()) <= e;

    // Closed form first, then nudge so rounding never skips past the bound.
    let half_angle = (1.0 - e / r).clamp(-1.0, 1.0).acos();
    let ceiling = u32::from(CIRCLE_AUTO_SEGMENT_MAX) + 1;
    let mut n = ((PI / half_angle).ceil().min(f64::from(ceiling)) as u32).max(1);
    while n > 1 && within(n - 1) {
        n -= 1;
    }
    while n < ceiling && !within(n) {
        n += 1;
    }

    n.clamp(
        u32::from(CIRCLE_AUTO_SEGMENT_MIN),
        u32::from(CIRCLE_AUTO_SEGMENT_MAX),
    ) as u16
}

/// Radius up to which the 48-point table keeps the sagitta within `max_error`.
pub fn arc_fast_radius_cutoff_for(max_error: f32) -> f32 {
    let step = PI / ARC_FAST_SAMPLE_COUNT as f64;
    (f64::from(max_error) / (1.0 - step.cos())) as f32
}

/// Precomputed tessellation tables.
///
/// Build one per configuration and share it (usually via `Arc`) between
/// draw lists. Setters rebuild the affected tables immediately.
#[derive(Clone, Debug)]
pub struct SharedData {
    circle_segment_max_error: f32,
    curve_tessellation_tolerance: f32,
    arc_fast_radius_cutoff: f32,
    circle_segment_counts: [u8; CIRCLE_SEGMENT_TABLE_LEN],
    vertex_sample_points: [Point; ARC_FAST_SAMPLE_COUNT],
    initial_flags: DrawListFlags,
    fringe_scale: f32,
    tex_uv_white_pixel: Point,
}

impl Default for SharedData {
    fn default() -> Self {
        Self::new(&TessellationConfig::default())
    }
}

impl SharedData {
    pub fn new(config: &TessellationConfig) -> Self {
        let mut data = Self {
            circle_segment_max_error: config.circle_segment_max_error,
            curve_tessellation_tolerance: config.curve_tessellation_tolerance,
            arc_fast_radius_cutoff: 0.0,
            circle_segment_counts: [0; CIRCLE_SEGMENT_TABLE_LEN],
            vertex_sample_points: [Vec2::ZERO; ARC_FAST_SAMPLE_COUNT],
            initial_flags: config.flags,
            fringe_scale: config.fringe_scale,
            tex_uv_white_pixel: config.tex_uv_white_pixel,
        };
        data.build_sample_points();
        data.rebuild_circle_tables();
        data
    }

    fn build_sample_points(&mut self) {
        for (i, p) in self.vertex_sample_points.iter_mut().enumerate() {
            let a = (i as f64 * 2.0 * PI) / ARC_FAST_SAMPLE_COUNT as f64;
            *p = Vec2::new(a.cos() as f32, a.sin() as f32);
        }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(max_error = self.circle_segment_max_error))]
    fn rebuild_circle_tables(&mut self) {
        let max_error = self.circle_segment_max_error;
        for (radius, slot) in self.circle_segment_counts.iter_mut().enumerate() {
            let count = circle_segment_count_for(radius as f32, max_error);
            // The table is byte-sized; larger counts saturate.
            *slot = count.min(u16::from(u8::MAX)) as u8;
        }
        self.arc_fast_radius_cutoff = arc_fast_radius_cutoff_for(max_error);
        tracing::debug!(cutoff = self.arc_fast_radius_cutoff, "rebuilt circle tables");
    }

    /// Segment count for a full circle of `radius` that keeps the sagitta
    /// within `circle_segment_max_error`.
    pub fn auto_segment_count(&self, radius: f32) -> u16 {
        let index = radius.max(0.0).ceil();
        if index < CIRCLE_SEGMENT_TABLE_LEN as f32 {
            let cached = u16::from(self.circle_segment_counts[index as usize]);
            if cached < u16::from(u8::MAX) {
                return cached;
            }
        }
        circle_segment_count_for(radius, self.circle_segment_max_error)
    }

    /// Point `i` of the canonical unit circle, at angle `2π·i/48`.
    pub fn sample_point(&self, i: usize) -> &Point {
        if i >= ARC_FAST_SAMPLE_COUNT {
            contract_violation(DrawError::SampleIndexOutOfRange(i));
            return &self.vertex_sample_points[i % ARC_FAST_SAMPLE_COUNT];
        }
        &self.vertex_sample_points[i]
    }

    pub fn sample_points(&self) -> &[Point; ARC_FAST_SAMPLE_COUNT] {
        &self.vertex_sample_points
    }

    pub fn circle_segment_counts(&self) -> &[u8; CIRCLE_SEGMENT_TABLE_LEN] {
        &self.circle_segment_counts
    }

    pub fn circle_segment_max_error(&self) -> f32 {
        self.circle_segment_max_error
    }

    pub fn curve_tessellation_tolerance(&self) -> f32 {
        self.curve_tessellation_tolerance
    }

    pub fn arc_fast_radius_cutoff(&self) -> f32 {
        self.arc_fast_radius_cutoff
    }

    pub fn initial_flags(&self) -> DrawListFlags {
        self.initial_flags
    }

    pub fn fringe_scale(&self) -> f32 {
        self.fringe_scale
    }

    pub fn tex_uv_white_pixel(&self) -> Point {
        self.tex_uv_white_pixel
    }

    /// Changes the circle error bound and rebuilds the segment table and fast-arc cutoff.
    pub fn set_circle_segment_max_error(&mut self, max_error: f32) {
        if (self.circle_segment_max_error - max_error).abs() <= f32::EPSILON {
            return;
        }
        self.circle_segment_max_error = max_error;
        self.rebuild_circle_tables();
    }

    pub fn set_curve_tessellation_tolerance(&mut self, tolerance: f32) {
        self.curve_tessellation_tolerance = tolerance.max(f32::EPSILON);
    }

    /// Lowers the fast-arc cutoff. Values above the bound derived from
    /// `circle_segment_max_error` are clamped to it.
    pub fn set_arc_fast_radius_cutoff(&mut self, cutoff: f32) {
        let bound = arc_fast_radius_cutoff_for(self.circle_segment_max_error);
        self.arc_fast_radius_cutoff = cutoff.clamp(0.0, bound);
    }

    pub fn set_initial_flags(&mut self, flags: DrawListFlags) {
        self.initial_flags = flags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form_is_never_one_too_many() {
        for r in 1..200 {
            let n = circle_segment_count_for(r as f32, 0.3);
            if n > CIRCLE_AUTO_SEGMENT_MIN {
                assert!(sagitta(r as f32, n - 1) >= 0.3, "radius {r} could use {}", n - 1);
            }
        }
    }

    #[test]
    fn zero_radius_uses_minimum() {
        assert_eq!(circle_segment_count_for(0.0, 0.3), CIRCLE_AUTO_SEGMENT_MIN);
    }
}
