//! # Font Interface
//!
//! The draw list only needs glyph metrics and atlas coordinates. Rasterising
//! glyphs and parsing font files belong to the host; anything implementing
//! [`Font`] can be drawn with [`DrawList::text`](crate::draw_list::DrawList::text).

use std::fmt::Debug;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::{Extent, Point};
use crate::render::TextureId;

/// Placement of one glyph, in font units (pixels at the font's native line height).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Top-left UV of the glyph in the atlas.
    pub uv_min: Point,
    /// Bottom-right UV of the glyph in the atlas.
    pub uv_max: Point,
    /// Offset of the glyph quad from the pen position at the top of the line.
    pub offset: Extent,
    /// Horizontal pen advance after this glyph.
    pub advance: f32,
    /// Size of the glyph quad.
    pub size: Extent,
}

pub trait Font: Send + Sync + Debug {
    fn glyph(&self, codepoint: char) -> Option<Glyph>;

    fn atlas_texture_id(&self) -> TextureId;

    fn baseline(&self) -> f32;

    fn line_height(&self) -> f32;

    fn ascent(&self) -> f32;

    fn descent(&self) -> f32;

    /// Glyph substituted for codepoints the font does not cover.
    fn fallback_char(&self) -> char {
        '?'
    }

    /// Looks up `c`, falling back to [`Font::fallback_char`].
    fn glyph_or_fallback(&self, c: char) -> Option<Glyph> {
        self.glyph(c).or_else(|| self.glyph(self.fallback_char()))
    }

    /// Bounding size of `text` laid out at line height `size`.
    fn measure(&self, size: f32, text: &str) -> Extent {
        let line_height = self.line_height();
        if line_height <= 0.0 || text.is_empty() {
            return Vec2::ZERO;
        }
        let scale = size / line_height;
        let mut widest = 0.0_f32;
        let mut lines = 0;
        for line in text.split('\n') {
            lines += 1;
            let width: f32 = line
                .chars()
                .filter_map(|c| self.glyph_or_fallback(c))
                .map(|g| g.advance * scale)
                .sum();
            widest = widest.max(width);
        }
        Vec2::new(widest, lines as f32 * size)
    }
}

/// A monospace font whose glyphs sit in a regular grid inside the atlas.
///
/// Cell `i` (row-major) holds codepoint `first_char + i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridFont {
    pub texture_id: TextureId,
    pub cell_size: Extent,
    pub columns: u32,
    pub first_char: char,
    pub glyph_count: u32,
}

impl Default for GridFont {
    /// Printable ASCII in a 16-column grid of 7x13 cells.
    fn default() -> Self {
        Self::new(TextureId::default(), Vec2::new(7.0, 13.0), 16, ' ', 95)
    }
}

impl GridFont {
    pub fn new(
        texture_id: TextureId,
        cell_size: Extent,
        columns: u32,
        first_char: char,
        glyph_count: u32,
    ) -> Self {
        Self {
            texture_id,
            cell_size,
            columns: columns.max(1),
            first_char,
            glyph_count,
        }
    }

    pub fn rows(&self) -> u32 {
        self.glyph_count.div_ceil(self.columns)
    }

    /// Atlas dimensions in pixels.
    pub fn atlas_size(&self) -> Extent {
        self.cell_size * Vec2::new(self.columns as f32, self.rows().max(1) as f32)
    }
}

impl Font for GridFont {
    fn glyph(&self, codepoint: char) -> Option<Glyph> {
        let index = u32::from(codepoint).checked_sub(u32::from(self.first_char))?;
        if index >= self.glyph_count {
            return None;
        }
        let cell = Vec2::new((index % self.columns) as f32, (index / self.columns) as f32);
        let atlas = self.atlas_size();
        let top_left = cell * self.cell_size;
        Some(Glyph {
            uv_min: top_left / atlas,
            uv_max: (top_left + self.cell_size) / atlas,
            offset: Vec2::ZERO,
            advance: self.cell_size.x,
            size: self.cell_size,
        })
    }

    fn atlas_texture_id(&self) -> TextureId {
        self.texture_id
    }

    fn baseline(&self) -> f32 {
        self.ascent()
    }

    fn line_height(&self) -> f32 {
        self.cell_size.y
    }

    fn ascent(&self) -> f32 {
        self.cell_size.y * 0.8
    }

    fn descent(&self) -> f32 {
        -self.cell_size.y * 0.2
    }
}
