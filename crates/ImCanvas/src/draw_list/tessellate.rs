//! Stroke and fill tessellation.
//!
//! Strokes are built from cross-sections: every path point gets one section
//! (a miter) or two (a bevel), and each section carries the same profile of
//! offsets along its normal. Consecutive sections are joined by quads. With
//! anti-aliasing the profile adds a transparent fringe on both outer edges.

use std::mem;

use glam::Vec2;

use super::{DrawList, POINT_MERGE_EPSILON, Section};
use crate::color::Color;
use crate::config::DrawListFlags;
use crate::math::Point;

/// A miter longer than this many stroke widths becomes a bevel.
pub(crate) const MITER_LIMIT: f32 = 2.0;

/// Offsets along the section normal and the color at each offset.
struct Profile {
    offsets: [f32; 4],
    colors: [Color; 4],
    len: usize,
}

impl Profile {
    fn new(color: Color, thickness: f32, anti_aliased: bool, fringe: f32) -> Self {
        let clear = color.transparent();
        if !anti_aliased {
            let half = thickness * 0.5;
            Self {
                offsets: [-half, half, 0.0, 0.0],
                colors: [color, color, clear, clear],
                len: 2,
            }
        } else if thickness <= fringe {
            // Thin stroke: total width stays thickness + fringe, spine alpha scaled by width.
            let spine = color.with_alpha_scaled(thickness / fringe);
            let edge = (thickness + fringe) * 0.5;
            Self {
                offsets: [-edge, 0.0, edge, 0.0],
                colors: [clear, spine, clear, clear],
                len: 3,
            }
        } else {
            let core = (thickness - fringe) * 0.5;
            let outer = core + fringe;
            Self {
                offsets: [-outer, -core, core, outer],
                colors: [clear, color, color, clear],
                len: 4,
            }
        }
    }

    fn half_width(&self) -> f32 {
        self.offsets[self.len - 1]
    }
}

/// Copies `points` into `out`, dropping consecutive duplicates (and the
/// closing duplicate of a closed loop).
fn dedup_points(points: &[Point], closed: bool, out: &mut Vec<Point>) {
    out.clear();
    let eps2 = POINT_MERGE_EPSILON * POINT_MERGE_EPSILON;
    for &p in points {
        if out.last().is_none_or(|last| last.distance_squared(p) > eps2) {
            out.push(p);
        }
    }
    if closed && out.len() > 1 && out[0].distance_squared(out[out.len() - 1]) <= eps2 {
        out.pop();
    }
}

/// Unit normal of the segment `a -> b`.
fn segment_normal(a: Point, b: Point) -> Vec2 {
    let d = (b - a).normalize_or_zero();
    Vec2::new(d.y, -d.x)
}

impl DrawList {
    /// Strokes a polyline. Joins are mitered unless the miter would exceed
    /// [`MITER_LIMIT`] stroke widths, in which case they are beveled.
    pub(crate) fn add_polyline(
        &mut self,
        points: &[Point],
        color: Color,
        closed: bool,
        thickness: f32,
    ) {
        if color.is_transparent() || thickness <= 0.0 || points.len() < 2 {
            return;
        }

        let mut pts = mem::take(&mut self.scratch_points);
        let mut sections = mem::take(&mut self.scratch_sections);
        dedup_points(points, closed, &mut pts);

        if pts.len() >= 2 {
            let closed = closed && pts.len() > 2;
            let anti_aliased = self.flags.contains(DrawListFlags::ANTI_ALIASED_LINES);
            let profile = Profile::new(color, thickness, anti_aliased, self.shared.fringe_scale());
            build_sections(&pts, closed, profile.half_width(), thickness, &mut sections);
            self.emit_sections(&sections, &profile, closed);
        }

        self.scratch_points = pts;
        self.scratch_sections = sections;
    }

    fn emit_sections(&mut self, sections: &[Section], profile: &Profile, closed: bool) {
        let k = profile.len;
        let links = sections.len() - 1 + usize::from(closed);
        let vertex_count = sections.len() * k;
        let index_count = links * (k - 1) * 6;
        if !self.prim_reserve(index_count, vertex_count) {
            return;
        }

        let uv = self.shared.tex_uv_white_pixel();
        let base = self.next_index();
        for section in sections {
            for j in 0..k {
                let pos = section.point + section.normal * profile.offsets[j];
                self.push_vertex(pos, uv, profile.colors[j]);
            }
        }

        let k32 = k as u32;
        let count = sections.len() as u32;
        for link in 0..links as u32 {
            let a = base + link * k32;
            let b = base + ((link + 1) % count) * k32;
            for j in 0..k32 - 1 {
                self.push_quad(a + j, a + j + 1, b + j + 1, b + j);
            }
        }
        self.prim_commit();
    }

    /// Fills a convex polygon. With `anchor` the interior is a fan around that
    /// point (one triangle per edge); otherwise a fan from the first vertex.
    pub(crate) fn add_convex_fill(&mut self, points: &[Point], color: Color, anchor: Option<Point>) {
        if color.is_transparent() || points.len() < 3 {
            return;
        }
        let mut pts = mem::take(&mut self.scratch_points);
        dedup_points(points, true, &mut pts);
        if pts.len() >= 3 {
            if self.flags.contains(DrawListFlags::ANTI_ALIASED_FILL) {
                self.emit_convex_fill_aa(&pts, color, anchor);
            } else {
                self.emit_convex_fill(&pts, color, anchor);
            }
        }
        self.scratch_points = pts;
    }

    fn emit_convex_fill(&mut self, pts: &[Point], color: Color, anchor: Option<Point>) {
        let n = pts.len();
        let (vertex_count, index_count) = match anchor {
            Some(_) => (n + 1, n * 3),
            None => (n, (n - 2) * 3),
        };
        if !self.prim_reserve(index_count, vertex_count) {
            return;
        }
        let uv = self.shared.tex_uv_white_pixel();
        let base = self.next_index();
        for &p in pts {
            self.push_vertex(p, uv, color);
        }
        let n = n as u32;
        match anchor {
            Some(center) => {
                let hub = base + n;
                self.push_vertex(center, uv, color);
                for i in 0..n {
                    self.push_triangle(hub, base + i, base + (i + 1) % n);
                }
            }
            None => {
                for i in 1..n - 1 {
                    self.push_triangle(base, base + i, base + i + 1);
                }
            }
        }
        self.prim_commit();
    }

    fn emit_convex_fill_aa(&mut self, pts: &[Point], color: Color, anchor: Option<Point>) {
        let n = pts.len();
        let interior = match anchor {
            Some(_) => n * 3,
            None => (n - 2) * 3,
        };
        let vertex_count = n * 2 + usize::from(anchor.is_some());
        if !self.prim_reserve(interior + n * 6, vertex_count) {
            return;
        }

        // Outward normals regardless of winding.
        let area: f32 = (0..n).map(|i| pts[i].perp_dot(pts[(i + 1) % n])).sum();
        let outward = if area >= 0.0 { 1.0 } else { -1.0 };
        let half_fringe = self.shared.fringe_scale() * 0.5;
        let uv = self.shared.tex_uv_white_pixel();
        let clear = color.transparent();

        let base = self.next_index();
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let n_in = segment_normal(prev, pts[i]) * outward;
            let n_out = segment_normal(pts[i], next) * outward;
            let dm = (n_in + n_out) * 0.5;
            let len2 = dm.length_squared();
            let dm = if len2 > 1e-6 { dm * (1.0 / len2).min(100.0) } else { n_out };
            self.push_vertex(pts[i] - dm * half_fringe, uv, color);
            self.push_vertex(pts[i] + dm * half_fringe, uv, clear);
        }

        let n = n as u32;
        let inner = |i: u32| base + 2 * (i % n);
        let outer = |i: u32| base + 2 * (i % n) + 1;
        match anchor {
            Some(center) => {
                let hub = base + 2 * n;
                self.push_vertex(center, uv, color);
                for i in 0..n {
                    self.push_triangle(hub, inner(i), inner(i + 1));
                }
            }
            None => {
                for i in 1..n - 1 {
                    self.push_triangle(inner(0), inner(i), inner(i + 1));
                }
            }
        }
        for i in 0..n {
            self.push_quad(inner(i), inner(i + 1), outer(i + 1), outer(i));
        }
        self.prim_commit();
    }
}

/// Computes the cross-sections of a deduplicated polyline.
fn build_sections(
    pts: &[Point],
    closed: bool,
    half_width: f32,
    thickness: f32,
    out: &mut Vec<Section>,
) {
    out.clear();
    let n = pts.len();
    let segment_count = if closed { n } else { n - 1 };
    let normal = |i: usize| segment_normal(pts[i], pts[(i + 1) % n]);

    for i in 0..n {
        let point = pts[i];
        if !closed && i == 0 {
            out.push(Section {
                point,
                normal: normal(0),
            });
            continue;
        }
        if !closed && i == n - 1 {
            out.push(Section {
                point,
                normal: normal(segment_count - 1),
            });
            continue;
        }

        let n_in = normal((i + segment_count - 1) % segment_count);
        let n_out = normal(i % segment_count);
        let dm = (n_in + n_out) * 0.5;
        let len2 = dm.length_squared();
        if len2 > 1e-6 {
            let miter = dm / len2;
            if miter.length() * half_width <= MITER_LIMIT * thickness {
                out.push(Section {
                    point,
                    normal: miter,
                });
                continue;
            }
        }
        // Bevel: the quads linking these two sections fill the outer wedge.
        out.push(Section {
            point,
            normal: n_in,
        });
        out.push(Section {
            point,
            normal: n_out,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_is_mitered() {
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let mut sections = Vec::new();
        build_sections(&pts, false, 1.0, 2.0, &mut sections);
        assert_eq!(sections.len(), 3);
        // A 90 degree miter is sqrt(2) long.
        assert!((sections[1].normal.length() - 2.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn hairpin_turn_is_beveled() {
        let pts = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 0.5)];
        let mut sections = Vec::new();
        build_sections(&pts, false, 1.0, 2.0, &mut sections);
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn closed_loop_drops_repeated_start() {
        let mut out = Vec::new();
        let pts = [
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::ZERO,
        ];
        dedup_points(&pts, true, &mut out);
        assert_eq!(out.len(), 3);
    }
}
