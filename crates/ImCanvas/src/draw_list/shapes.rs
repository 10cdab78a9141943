//! Public drawing primitives.

use glam::Vec2;

use super::DrawList;
use crate::color::Color;
use crate::error::{DrawError, contract_violation};
use crate::font::Font;
use crate::math::{Corners, Ellipse, Point, Rect};
use crate::render::TextureId;

impl DrawList {
    pub fn line(&mut self, a: Point, b: Point, color: Color, thickness: f32) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_line_to(a);
        self.path_line_to(b);
        self.path_stroke(color, false, thickness);
    }

    pub fn rect(
        &mut self,
        min: Point,
        max: Point,
        color: Color,
        rounding: f32,
        corners: Corners,
        thickness: f32,
    ) {
        if !Self::check_rect(min, max) || color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_rect(min, max, rounding, corners);
        self.path_stroke(color, true, thickness);
    }

    /// Sharp-cornered fills are emitted as a single quad (4 vertices, 6 indices).
    pub fn rect_filled(
        &mut self,
        min: Point,
        max: Point,
        color: Color,
        rounding: f32,
        corners: Corners,
    ) {
        if !Self::check_rect(min, max) || color.is_transparent() {
            return;
        }
        if rounding <= 0.5 || corners.is_empty() {
            self.prim_rect(min, max, color);
        } else {
            self.path_clear();
            self.path_rect(min, max, rounding, corners);
            self.path_fill_convex(color);
        }
    }

    /// Axis-aligned quad with a color per corner, interpolated across.
    pub fn rect_filled_multicolor(
        &mut self,
        min: Point,
        max: Point,
        top_left: Color,
        top_right: Color,
        bottom_right: Color,
        bottom_left: Color,
    ) {
        if !Self::check_rect(min, max) || !self.prim_reserve(6, 4) {
            return;
        }
        let uv = self.shared.tex_uv_white_pixel();
        let base = self.next_index();
        self.push_vertex(min, uv, top_left);
        self.push_vertex(Vec2::new(max.x, min.y), uv, top_right);
        self.push_vertex(max, uv, bottom_right);
        self.push_vertex(Vec2::new(min.x, max.y), uv, bottom_left);
        self.push_quad(base, base + 1, base + 2, base + 3);
        self.prim_commit();
    }

    pub fn triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Color, thickness: f32) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path.extend_from_slice(&[p1, p2, p3]);
        self.path_stroke(color, true, thickness);
    }

    pub fn triangle_filled(&mut self, p1: Point, p2: Point, p3: Point, color: Color) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path.extend_from_slice(&[p1, p2, p3]);
        self.path_fill_convex(color);
    }

    /// Strokes a circle. `segments == 0` picks the count from the shared tables.
    pub fn circle(
        &mut self,
        center: Point,
        radius: f32,
        color: Color,
        segments: u16,
        thickness: f32,
    ) {
        let Some(segments) = self.circle_segments(radius, color, segments) else {
            return;
        };
        self.path_clear();
        self.path_circle(center, radius, segments);
        self.path_stroke(color, true, thickness);
    }

    /// Fills a circle as a fan of `segments` triangles around its center.
    pub fn circle_filled(&mut self, center: Point, radius: f32, color: Color, segments: u16) {
        let Some(segments) = self.circle_segments(radius, color, segments) else {
            return;
        };
        self.path_clear();
        self.path_circle(center, radius, segments);
        let path = std::mem::take(&mut self.path);
        self.add_convex_fill(&path, color, Some(center));
        self.path = path;
        self.path.clear();
    }

    /// Resolves the segment count of a circle, or `None` if nothing should be drawn.
    fn circle_segments(&self, radius: f32, color: Color, segments: u16) -> Option<u16> {
        if radius < 0.0 {
            contract_violation(DrawError::NegativeRadius(radius));
            return None;
        }
        if radius == 0.0 || color.is_transparent() {
            return None;
        }
        Some(if segments == 0 {
            self.shared.auto_segment_count(radius)
        } else {
            segments.max(3)
        })
    }

    /// Regular polygon outline with an explicit side count.
    pub fn ngon(&mut self, center: Point, radius: f32, color: Color, sides: u16, thickness: f32) {
        if sides < 3 {
            return;
        }
        self.circle(center, radius, color, sides, thickness);
    }

    pub fn ngon_filled(&mut self, center: Point, radius: f32, color: Color, sides: u16) {
        if sides < 3 {
            return;
        }
        self.circle_filled(center, radius, color, sides);
    }

    pub fn ellipse(&mut self, ellipse: &Ellipse, color: Color, segments: u16, thickness: f32) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_ellipse(ellipse, segments);
        self.path_stroke(color, true, thickness);
    }

    pub fn ellipse_filled(&mut self, ellipse: &Ellipse, color: Color, segments: u16) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_ellipse(ellipse, segments);
        let path = std::mem::take(&mut self.path);
        self.add_convex_fill(&path, color, Some(ellipse.center));
        self.path = path;
        self.path.clear();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn bezier_cubic(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        p4: Point,
        color: Color,
        thickness: f32,
        segments: u16,
    ) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_line_to(p1);
        self.path_bezier_cubic_curve_to(p2, p3, p4, segments);
        self.path_stroke(color, false, thickness);
    }

    pub fn bezier_quadratic(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        color: Color,
        thickness: f32,
        segments: u16,
    ) {
        if color.is_transparent() {
            return;
        }
        self.path_clear();
        self.path_line_to(p1);
        self.path_bezier_quadratic_curve_to(p2, p3, segments);
        self.path_stroke(color, false, thickness);
    }

    pub fn polyline(&mut self, points: &[Point], color: Color, closed: bool, thickness: f32) {
        self.add_polyline(points, color, closed, thickness);
    }

    /// Fills a convex polygon. Concave input is not rejected but will render incorrectly.
    pub fn convex_polygon_filled(&mut self, points: &[Point], color: Color) {
        self.add_convex_fill(points, color, None);
    }

    /// Draws `texture` stretched over `rect`, sampling `uv_min..uv_max`.
    pub fn image(
        &mut self,
        texture: TextureId,
        rect: Rect,
        uv_min: Point,
        uv_max: Point,
        color: Color,
    ) {
        if color.is_transparent() {
            return;
        }
        let switch = texture != self.current_texture();
        if switch {
            self.push_texture(texture);
        }
        self.prim_rect_uv(rect.min, rect.max, uv_min, uv_max, color);
        if switch {
            self.pop_texture();
        }
    }

    /// Lays out `text` from `pos` (top of the first line) with line height
    /// `size`, one textured quad per visible glyph. `\n` starts a new line.
    pub fn text(&mut self, font: &dyn Font, size: f32, pos: Point, color: Color, text: &str) {
        let line_height = font.line_height();
        if text.is_empty() || color.is_transparent() || size <= 0.0 || line_height <= 0.0 {
            return;
        }
        let visible = |c: char| {
            c != '\n'
                && font
                    .glyph_or_fallback(c)
                    .is_some_and(|g| g.size.x > 0.0 && g.size.y > 0.0)
        };
        let quads = text.chars().filter(|&c| visible(c)).count();
        if quads == 0 {
            return;
        }

        let texture = font.atlas_texture_id();
        let switch = texture != self.current_texture();
        if switch {
            self.push_texture(texture);
        }
        if self.prim_reserve(quads * 6, quads * 4) {
            let scale = size / line_height;
            let mut pen = pos;
            for c in text.chars() {
                if c == '\n' {
                    pen = Vec2::new(pos.x, pen.y + size);
                    continue;
                }
                let Some(glyph) = font.glyph_or_fallback(c) else {
                    continue;
                };
                if glyph.size.x > 0.0 && glyph.size.y > 0.0 {
                    let min = pen + glyph.offset * scale;
                    let max = min + glyph.size * scale;
                    self.write_rect_uv(min, max, glyph.uv_min, glyph.uv_max, color);
                }
                pen.x += glyph.advance * scale;
            }
            self.prim_commit();
        }
        if switch {
            self.pop_texture();
        }
    }
}
