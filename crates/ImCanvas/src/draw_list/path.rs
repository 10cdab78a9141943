//! Path builder. Points accumulate in a scratch buffer owned by the list and
//! are consumed by [`DrawList::path_stroke`] or [`DrawList::path_fill_convex`].

use std::f32::consts::TAU;

use glam::Vec2;

use super::DrawList;
use crate::color::Color;
use crate::error::{DrawError, contract_violation};
use crate::math::{self, Corners, Ellipse, Point};
use crate::shared_data::ARC_FAST_SAMPLE_COUNT;

/// Subdivision depth cap for adaptive curves (at most 1024 chords per curve).
const BEZIER_MAX_LEVEL: u32 = 10;

impl DrawList {
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn path_clear(&mut self) {
        self.path.clear();
    }

    pub fn path_line_to(&mut self, p: Point) {
        self.path.push(p);
    }

    /// Appends an arc from angle `a_min` to `a_max` (radians, clockwise on
    /// screen). `segments == 0` derives the count from the circle error bound.
    pub fn path_arc_to(
        &mut self,
        center: Point,
        radius: f32,
        a_min: f32,
        a_max: f32,
        segments: u16,
    ) {
        if radius < 0.0 {
            contract_violation(DrawError::NegativeRadius(radius));
            return;
        }
        if a_max < a_min {
            contract_violation(DrawError::InvalidArc { a_min, a_max });
            return;
        }
        if radius == 0.0 {
            self.path.push(center);
            return;
        }

        let segments = if segments == 0 {
            let full = f32::from(self.shared.auto_segment_count(radius));
            ((full * (a_max - a_min) / TAU).ceil() as u16).max(1)
        } else {
            segments
        };

        self.path.reserve(usize::from(segments) + 1);
        for i in 0..=segments {
            let a = a_min + (f32::from(i) / f32::from(segments)) * (a_max - a_min);
            self.path.push(center + Vec2::new(a.cos(), a.sin()) * radius);
        }
    }

    /// Appends an arc through the canonical 48-point circle, from sample
    /// `sample_min` to `sample_max` inclusive. Indices past 47 wrap around.
    /// Radii above the fast-arc cutoff fall back to [`DrawList::path_arc_to`].
    pub fn path_arc_to_fast(
        &mut self,
        center: Point,
        radius: f32,
        sample_min: usize,
        sample_max: usize,
    ) {
        if radius < 0.0 {
            contract_violation(DrawError::NegativeRadius(radius));
            return;
        }
        if sample_max < sample_min {
            contract_violation(DrawError::InvalidArc {
                a_min: sample_min as f32,
                a_max: sample_max as f32,
            });
            return;
        }
        if radius == 0.0 {
            self.path.push(center);
            return;
        }
        if radius > self.shared.arc_fast_radius_cutoff() {
            let step = TAU / ARC_FAST_SAMPLE_COUNT as f32;
            self.path_arc_to(
                center,
                radius,
                sample_min as f32 * step,
                sample_max as f32 * step,
                0,
            );
            return;
        }

        self.path.reserve(sample_max - sample_min + 1);
        let samples = self.shared.sample_points();
        for i in sample_min..=sample_max {
            self.path
                .push(center + samples[i % ARC_FAST_SAMPLE_COUNT] * radius);
        }
    }

    /// Appends a cubic Bezier starting at the last path point.
    /// `segments == 0` subdivides adaptively until every chord is within
    /// `curve_tessellation_tolerance` of the curve.
    pub fn path_bezier_cubic_curve_to(&mut self, p2: Point, p3: Point, p4: Point, segments: u16) {
        let Some(&p1) = self.path.last() else {
            contract_violation(DrawError::PathNotStarted);
            return;
        };
        if segments == 0 {
            let tolerance = self.shared.curve_tessellation_tolerance();
            bezier_cubic_adaptive(&mut self.path, p1, p2, p3, p4, tolerance, 0);
        } else {
            self.path.reserve(usize::from(segments));
            for i in 1..=segments {
                let t = f32::from(i) / f32::from(segments);
                self.path.push(math::bezier_cubic_calc(p1, p2, p3, p4, t));
            }
        }
    }

    pub fn path_bezier_quadratic_curve_to(&mut self, p2: Point, p3: Point, segments: u16) {
        let Some(&p1) = self.path.last() else {
            contract_violation(DrawError::PathNotStarted);
            return;
        };
        if segments == 0 {
            let tolerance = self.shared.curve_tessellation_tolerance();
            bezier_quadratic_adaptive(&mut self.path, p1, p2, p3, tolerance, 0);
        } else {
            self.path.reserve(usize::from(segments));
            for i in 1..=segments {
                let t = f32::from(i) / f32::from(segments);
                self.path.push(math::bezier_quadratic_calc(p1, p2, p3, t));
            }
        }
    }

    /// Appends a rectangle outline, clockwise from the top-left corner.
    /// Rounded corners come from the fast-arc table.
    pub fn path_rect(&mut self, min: Point, max: Point, rounding: f32, corners: Corners) {
        if !Self::check_rect(min, max) {
            return;
        }
        let rounding = clamp_rounding(min, max, rounding, corners);
        if rounding <= 0.5 || corners.is_empty() {
            self.path.extend_from_slice(&[
                min,
                Vec2::new(max.x, min.y),
                max,
                Vec2::new(min.x, max.y),
            ]);
            return;
        }

        let r = |corner: Corners| {
            if corners.contains(corner) {
                rounding
            } else {
                0.0
            }
        };
        let (tl, tr, br, bl) = (
            r(Corners::TOP_LEFT),
            r(Corners::TOP_RIGHT),
            r(Corners::BOTTOM_RIGHT),
            r(Corners::BOTTOM_LEFT),
        );
        self.path_arc_to_fast(Vec2::new(min.x + tl, min.y + tl), tl, 24, 36);
        self.path_arc_to_fast(Vec2::new(max.x - tr, min.y + tr), tr, 36, 48);
        self.path_arc_to_fast(Vec2::new(max.x - br, max.y - br), br, 0, 12);
        self.path_arc_to_fast(Vec2::new(min.x + bl, max.y - bl), bl, 12, 24);
    }

    /// Appends a closed ellipse outline (without repeating the first point).
    pub fn path_ellipse(&mut self, ellipse: &Ellipse, segments: u16) {
        if ellipse.radii.x < 0.0 || ellipse.radii.y < 0.0 {
            contract_violation(DrawError::NegativeRadius(ellipse.radii.min_element()));
            return;
        }
        let segments = if segments == 0 {
            self.shared.auto_segment_count(ellipse.radii.max_element())
        } else {
            segments.max(3)
        };
        self.path.reserve(usize::from(segments));
        for i in 0..segments {
            let t = TAU * f32::from(i) / f32::from(segments);
            self.path.push(ellipse.point_at(t));
        }
    }

    /// Appends a full circle with `segments` points (no closing duplicate).
    /// Uses the sample table when the radius is under the fast-arc cutoff
    /// and `segments` divides 48.
    pub(crate) fn path_circle(&mut self, center: Point, radius: f32, segments: u16) {
        let n = usize::from(segments);
        if n == 0 {
            return;
        }
        self.path.reserve(n);
        if radius <= self.shared.arc_fast_radius_cutoff() && ARC_FAST_SAMPLE_COUNT % n == 0 {
            let step = ARC_FAST_SAMPLE_COUNT / n;
            let samples = self.shared.sample_points();
            for i in 0..n {
                self.path.push(center + samples[i * step] * radius);
            }
        } else {
            for i in 0..n {
                let a = TAU * i as f32 / n as f32;
                self.path.push(center + Vec2::new(a.cos(), a.sin()) * radius);
            }
        }
    }

    /// Strokes the current path, then clears it.
    pub fn path_stroke(&mut self, color: Color, closed: bool, thickness: f32) {
        let path = std::mem::take(&mut self.path);
        self.add_polyline(&path, color, closed, thickness);
        self.path = path;
        self.path.clear();
    }

    /// Fills the current path as a convex polygon, then clears it.
    pub fn path_fill_convex(&mut self, color: Color) {
        let path = std::mem::take(&mut self.path);
        self.add_convex_fill(&path, color, None);
        self.path = path;
        self.path.clear();
    }
}

/// Limits rounding so opposite corners on the same edge never overlap.
fn clamp_rounding(min: Point, max: Point, rounding: f32, corners: Corners) -> f32 {
    let width = (max.x - min.x).abs();
    let height = (max.y - min.y).abs();
    let fx = if corners.contains(Corners::TOP) || corners.contains(Corners::BOTTOM) {
        0.5
    } else {
        1.0
    };
    let fy = if corners.contains(Corners::LEFT) || corners.contains(Corners::RIGHT) {
        0.5
    } else {
        1.0
    };
    rounding.max(0.0).min(width * fx).min(height * fy)
}

fn bezier_cubic_adaptive(
    out: &mut Vec<Point>,
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
    tolerance: f32,
    level: u32,
) {
    let deviation =
        math::distance_to_segment(p2, p1, p4).max(math::distance_to_segment(p3, p1, p4));
    if deviation <= tolerance || level >= BEZIER_MAX_LEVEL {
        out.push(p4);
        return;
    }
    let p12 = (p1 + p2) * 0.5;
    let p23 = (p2 + p3) * 0.5;
    let p34 = (p3 + p4) * 0.5;
    let p123 = (p12 + p23) * 0.5;
    let p234 = (p23 + p34) * 0.5;
    let mid = (p123 + p234) * 0.5;
    bezier_cubic_adaptive(out, p1, p12, p123, mid, tolerance, level + 1);
    bezier_cubic_adaptive(out, mid, p234, p34, p4, tolerance, level + 1);
}

fn bezier_quadratic_adaptive(
    out: &mut Vec<Point>,
    p1: Point,
    p2: Point,
    p3: Point,
    tolerance: f32,
    level: u32,
) {
    if math::distance_to_segment(p2, p1, p3) <= tolerance || level >= BEZIER_MAX_LEVEL {
        out.push(p3);
        return;
    }
    let p12 = (p1 + p2) * 0.5;
    let p23 = (p2 + p3) * 0.5;
    let mid = (p12 + p23) * 0.5;
    bezier_quadratic_adaptive(out, p1, p12, mid, tolerance, level + 1);
    bezier_quadratic_adaptive(out, mid, p23, p3, tolerance, level + 1);
}
