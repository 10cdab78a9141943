//! # Render Output
//!
//! The draw list does not talk to a GPU. At the end of a frame it exposes a
//! vertex buffer, two index buffers and a command table; the host uploads the
//! buffers and issues one draw call per [`DrawCmd`].

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::math::{Point, Rect};

/// A renderer-defined texture handle. `TextureId::default()` is the texture
/// the host binds when nothing was pushed (normally the font atlas).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u64);

/// One vertex: `{pos.x, pos.y, uv.x, uv.y, color}`, 20 bytes, tightly packed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub pos: Point,
    pub uv: Point,
    pub color: Color,
}

const _: () = assert!(std::mem::size_of::<Vertex>() == 20);

impl Vertex {
    pub fn new(pos: Point, uv: Point, color: Color) -> Self {
        Self { pos, uv, color }
    }
}

/// Which index buffer a command reads from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    #[default]
    U16,
    U32,
}

/// A contiguous run of triangles sharing one clip rect and texture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCmd {
    /// Scissor rectangle in screen pixels.
    pub clip_rect: Rect,
    pub texture_id: TextureId,
    /// Buffer the indices live in.
    pub index_kind: IndexKind,
    /// Offset of the first index inside that buffer.
    pub index_offset: u32,
    /// Always a non-zero multiple of three once the frame has ended.
    pub index_count: u32,
}

impl DrawCmd {
    pub fn index_range(&self) -> Range<usize> {
        let start = self.index_offset as usize;
        start..start + self.index_count as usize
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count / 3
    }
}

/// Borrowed view of a finished frame.
#[derive(Clone, Copy, Debug)]
pub struct DrawData<'a> {
    pub vertices: &'a [Vertex],
    pub indices_u16: &'a [u16],
    pub indices_u32: &'a [u32],
    pub commands: &'a [DrawCmd],
}

impl<'a> DrawData<'a> {
    /// Vertex buffer as raw bytes, ready for upload.
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn index_bytes(&self, kind: IndexKind) -> &'a [u8] {
        match kind {
            IndexKind::U16 => bytemuck::cast_slice(self.indices_u16),
            IndexKind::U32 => bytemuck::cast_slice(self.indices_u32),
        }
    }

    pub fn commands(&self) -> &'a [DrawCmd] {
        self.commands
    }

    pub fn total_vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn total_index_count(&self) -> usize {
        self.indices_u16.len() + self.indices_u32.len()
    }

    /// Indices of `cmd`, widened to `u32`.
    pub fn command_indices(&self, cmd: &DrawCmd) -> Vec<u32> {
        match cmd.index_kind {
            IndexKind::U16 => self.indices_u16[cmd.index_range()]
                .iter()
                .map(|&i| u32::from(i))
                .collect(),
            IndexKind::U32 => self.indices_u32[cmd.index_range()].to_vec(),
        }
    }
}
