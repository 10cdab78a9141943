//! # Color
//!
//! Packed 32-bit RGBA. The byte order in memory is R, G, B, A so that the
//! vertex buffer can be uploaded as `UNORM8x4` without swizzling.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgba8(0, 0, 0, 255);
    pub const WHITE: Color = Color::from_rgba8(255, 255, 255, 255);
    pub const RED: Color = Color::from_rgba8(255, 0, 0, 255);
    pub const GREEN: Color = Color::from_rgba8(0, 255, 0, 255);
    pub const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Converts from normalized channels, clamping to `[0, 1]` and rounding.
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn to_u8(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::from_rgba8(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }

    pub fn from_vec4(v: Vec4) -> Self {
        Self::from_rgba_f32(v.x, v.y, v.z, v.w)
    }

    pub fn to_vec4(self) -> Vec4 {
        let [r, g, b, a] = self.to_rgba8();
        Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
    }

    pub const fn to_rgba8(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub const fn r(self) -> u8 {
        self.to_rgba8()[0]
    }

    pub const fn g(self) -> u8 {
        self.to_rgba8()[1]
    }

    pub const fn b(self) -> u8 {
        self.to_rgba8()[2]
    }

    pub const fn a(self) -> u8 {
        self.to_rgba8()[3]
    }

    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Same RGB with alpha set to zero. Used for anti-aliasing fringes.
    pub const fn transparent(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }

    /// Scales the alpha channel by `factor` (clamped to `[0, 1]`).
    pub fn with_alpha_scaled(self, factor: f32) -> Self {
        let [r, g, b, a] = self.to_rgba8();
        let a = (a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self::from_rgba8(r, g, b, a)
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}
