//! # Geometry Primitives
//!
//! Value types shared by every drawing operation. Points and extents are
//! plain `glam::Vec2`s so componentwise arithmetic and distances come for free.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A position in screen space (pixels).
pub type Point = Vec2;

/// A width/height pair, semantically the difference of two points.
pub type Extent = Vec2;

/// Axis-aligned rectangle. Invariant: `min <= max` componentwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Covers every representable point. Used as the clip rect when the clip stack is empty.
    pub const EVERYTHING: Rect = Rect {
        min: Vec2::splat(-f32::MAX),
        max: Vec2::splat(f32::MAX),
    };

    /// Builds a rect from its corners. The caller guarantees `min <= max`.
    pub fn from_min_max(min: Point, max: Point) -> Self {
        if min.x > max.x || min.y > max.y {
            crate::error::contract_violation(crate::error::DrawError::InvertedRect);
            return Self::from_points(min, max);
        }
        Self { min, max }
    }

    /// Builds the smallest rect containing both points, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_pos_size(pos: Point, size: Extent) -> Self {
        Self::from_points(pos, pos + size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Extent {
        self.max - self.min
    }

    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// True when the rect has no area.
    pub fn is_empty(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// The overlapping region. Disjoint rects collapse to a zero-area rect so
    /// that `min <= max` still holds.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max).max(min);
        Rect { min, max }
    }

    pub fn expand(&self, amount: f32) -> Self {
        let min = self.min - Vec2::splat(amount);
        let max = (self.max + Vec2::splat(amount)).max(min);
        Self { min, max }
    }

    pub fn translate(&self, delta: Extent) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

bitflags! {
    /// Which corners of a rectangle are rounded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_LEFT = 1 << 2;
        const BOTTOM_RIGHT = 1 << 3;
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(
            self.center - Vec2::splat(self.radius),
            self.center + Vec2::splat(self.radius),
        )
    }
}

/// An ellipse with per-axis radii, rotated by `rotation` radians around its center.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub radii: Extent,
    pub rotation: f32,
}

impl Ellipse {
    pub fn new(center: Point, radii: Extent, rotation: f32) -> Self {
        Self {
            center,
            radii,
            rotation,
        }
    }

    /// Point on the outline at parametric angle `t`.
    pub fn point_at(&self, t: f32) -> Point {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let local = Vec2::new(self.radii.x * t.cos(), self.radii.y * t.sin());
        self.center
            + Vec2::new(
                local.x * cos_r - local.y * sin_r,
                local.x * sin_r + local.y * cos_r,
            )
    }
}

/// Distance from `p` to the closed segment `a..b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let d = b - a;
    let len2 = d.length_squared();
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(d) / len2).clamp(0.0, 1.0);
    p.distance(a + d * t)
}

/// Evaluates a cubic Bezier at `t`.
pub fn bezier_cubic_calc(p1: Point, p2: Point, p3: Point, p4: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let w1 = u * u * u;
    let w2 = 3.0 * u * u * t;
    let w3 = 3.0 * u * t * t;
    let w4 = t * t * t;
    p1 * w1 + p2 * w2 + p3 * w3 + p4 * w4
}

/// Evaluates a quadratic Bezier at `t`.
pub fn bezier_quadratic_calc(p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    p1 * (u * u) + p2 * (2.0 * u * t) + p3 * (t * t)
}
