//! # Draw List
//!
//! Per-frame accumulator of vertices, indices and draw commands. The host
//! calls [`DrawList::begin_frame`], emits primitives, then reads the buffers
//! back through [`DrawList::end_frame`].
//!
//! Commands are created lazily: a primitive appends to the last command when
//! its clip rect, texture and index width still match, and opens a new one
//! otherwise. Stack changes that are not followed by any drawing therefore
//! never produce empty commands.

mod path;
mod shapes;
mod tessellate;

use std::sync::Arc;

use crate::color::Color;
use crate::config::DrawListFlags;
use crate::error::{DrawError, contract_violation};
use crate::math::{Point, Rect};
use crate::render::{DrawCmd, DrawData, IndexKind, TextureId, Vertex};
use crate::shared_data::SharedData;

/// Highest vertex count addressable with 16-bit indices.
pub const MAX_U16_VERTICES: usize = u16::MAX as usize + 1;

/// Distance below which two consecutive path points are treated as one.
pub(crate) const POINT_MERGE_EPSILON: f32 = 1e-4;

/// Cross-section of a stroke at one path point: the point and the
/// (possibly miter-scaled) normal the profile offsets are applied along.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Section {
    pub point: Point,
    pub normal: Point,
}

/// Per-frame geometry buffers plus the clip stack, texture stack and path
/// scratch used to fill them.
///
/// One list is usually reused across frames: [`DrawList::begin_frame`] clears
/// the contents but keeps the allocations.
pub struct DrawList {
    shared: Arc<SharedData>,
    /// Anti-aliasing switches, initialised from [`SharedData::initial_flags`].
    pub flags: DrawListFlags,
    vertices: Vec<Vertex>,
    indices_u16: Vec<u16>,
    indices_u32: Vec<u32>,
    commands: Vec<DrawCmd>,
    clip_stack: Vec<Rect>,
    texture_stack: Vec<TextureId>,
    index_kind: IndexKind,
    path: Vec<Point>,
    scratch_points: Vec<Point>,
    scratch_sections: Vec<Section>,
}

impl std::fmt::Debug for DrawList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawList")
            .field("flags", &self.flags)
            .field("vertices", &self.vertices.len())
            .field("indices_u16", &self.indices_u16.len())
            .field("indices_u32", &self.indices_u32.len())
            .field("commands", &self.commands.len())
            .field("clip_depth", &self.clip_stack.len())
            .field("texture_depth", &self.texture_stack.len())
            .finish()
    }
}

impl DrawList {
    pub fn new(shared: Arc<SharedData>) -> Self {
        let flags = shared.initial_flags();
        Self {
            shared,
            flags,
            vertices: Vec::new(),
            indices_u16: Vec::new(),
            indices_u32: Vec::new(),
            commands: Vec::new(),
            clip_stack: Vec::new(),
            texture_stack: Vec::new(),
            index_kind: IndexKind::U16,
            path: Vec::new(),
            scratch_points: Vec::new(),
            scratch_sections: Vec::new(),
        }
    }

    /// Creates a list bound to the active shared data of the global context.
    pub fn from_context() -> Self {
        Self::new(crate::context::context().shared_data())
    }

    pub fn shared_data(&self) -> &SharedData {
        &self.shared
    }

    pub fn set_shared_data(&mut self, shared: Arc<SharedData>) {
        self.shared = shared;
    }

    /// Clears all buffers and stacks. Capacity is kept for the next frame.
    pub fn begin_frame(&mut self) {
        self.flags = self.shared.initial_flags();
        self.vertices.clear();
        self.indices_u16.clear();
        self.indices_u32.clear();
        self.commands.clear();
        self.clip_stack.clear();
        self.texture_stack.clear();
        self.path.clear();
        self.index_kind = IndexKind::U16;
    }

    /// Finishes the frame and exposes its buffers.
    ///
    /// Unbalanced clip or texture stacks are contract violations; in release
    /// builds the stacks are dropped so the next frame starts clean.
    pub fn end_frame(&mut self) -> DrawData<'_> {
        if !self.clip_stack.is_empty() {
            contract_violation(DrawError::UnbalancedClipStack(self.clip_stack.len()));
            self.clip_stack.clear();
        }
        if !self.texture_stack.is_empty() {
            contract_violation(DrawError::UnbalancedTextureStack(
                self.texture_stack.len(),
            ));
            self.texture_stack.clear();
        }
        self.commands.retain(|cmd| cmd.index_count > 0);
        tracing::trace!(
            vertices = self.vertices.len(),
            commands = self.commands.len(),
            "frame ended"
        );
        self.draw_data()
    }

    pub fn draw_data(&self) -> DrawData<'_> {
        DrawData {
            vertices: &self.vertices,
            indices_u16: &self.indices_u16,
            indices_u32: &self.indices_u32,
            commands: &self.commands,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Width of the indices currently being written.
    pub fn index_kind(&self) -> IndexKind {
        self.index_kind
    }

    pub fn clip_stack_depth(&self) -> usize {
        self.clip_stack.len()
    }

    pub fn texture_stack_depth(&self) -> usize {
        self.texture_stack.len()
    }

    // Clip & texture stacks

    pub fn current_clip_rect(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or(Rect::EVERYTHING)
    }

    pub fn current_texture(&self) -> TextureId {
        self.texture_stack.last().copied().unwrap_or_default()
    }

    /// Pushes a scissor rect. With `intersect_with_current` the new clip is
    /// the overlap with the active one; a disjoint overlap culls everything
    /// drawn until the matching pop.
    pub fn push_clip_rect(&mut self, rect: Rect, intersect_with_current: bool) {
        let clip = if intersect_with_current {
            rect.intersect(&self.current_clip_rect())
        } else {
            rect
        };
        self.clip_stack.push(clip);
    }

    pub fn push_clip_rect_full_screen(&mut self) {
        self.clip_stack.push(Rect::EVERYTHING);
    }

    pub fn pop_clip_rect(&mut self) {
        if self.clip_stack.pop().is_none() {
            contract_violation(DrawError::PopEmptyClipStack);
        }
    }

    pub fn push_texture(&mut self, texture: TextureId) {
        self.texture_stack.push(texture);
    }

    pub fn pop_texture(&mut self) {
        if self.texture_stack.pop().is_none() {
            contract_violation(DrawError::PopEmptyTextureStack);
        }
    }

    // Primitive emission

    /// Reports `min > max` on either axis. Returns false if the rect is inverted.
    #[track_caller]
    pub(crate) fn check_rect(min: Point, max: Point) -> bool {
        if min.x > max.x || min.y > max.y {
            contract_violation(DrawError::InvertedRect);
            return false;
        }
        true
    }

    /// Prepares room for one primitive and makes sure the last command
    /// matches the current state. Returns false when nothing may be emitted:
    /// the primitive is culled, or the buffers cannot grow.
    pub(crate) fn prim_reserve(&mut self, index_count: usize, vertex_count: usize) -> bool {
        if index_count == 0 || vertex_count == 0 {
            return false;
        }
        let clip_rect = self.current_clip_rect();
        if clip_rect.is_empty() {
            tracing::trace!(?clip_rect, "primitive culled by empty clip rect");
            return false;
        }

        let needed = self.vertices.len() + vertex_count;
        if self.index_kind == IndexKind::U16 && needed > MAX_U16_VERTICES {
            tracing::debug!(vertices = needed, "promoting draw list to 32-bit indices");
            self.index_kind = IndexKind::U32;
        }
        if needed > u32::MAX as usize {
            contract_violation(DrawError::VertexOverflow);
            return false;
        }

        let index_room = match self.index_kind {
            IndexKind::U16 => self.indices_u16.try_reserve(index_count),
            IndexKind::U32 => self.indices_u32.try_reserve(index_count),
        };
        if index_room.is_err()
            || self.vertices.try_reserve(vertex_count).is_err()
            || self.commands.try_reserve(1).is_err()
        {
            contract_violation(DrawError::ReserveFailed);
            return false;
        }

        let texture_id = self.current_texture();
        let index_offset = self.index_len() as u32;
        let reusable = self.commands.last().is_some_and(|cmd| {
            cmd.clip_rect == clip_rect
                && cmd.texture_id == texture_id
                && cmd.index_kind == self.index_kind
                && cmd.index_offset + cmd.index_count == index_offset
        });
        if !reusable {
            self.commands.push(DrawCmd {
                clip_rect,
                texture_id,
                index_kind: self.index_kind,
                index_offset,
                index_count: 0,
            });
        }
        true
    }

    /// Extends the last command over every index written since `prim_reserve`.
    pub(crate) fn prim_commit(&mut self) {
        let len = self.index_len() as u32;
        if let Some(cmd) = self.commands.last_mut() {
            cmd.index_count = len - cmd.index_offset;
        }
    }

    fn index_len(&self) -> usize {
        match self.index_kind {
            IndexKind::U16 => self.indices_u16.len(),
            IndexKind::U32 => self.indices_u32.len(),
        }
    }

    /// Index the next pushed vertex will get.
    pub(crate) fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub(crate) fn push_vertex(&mut self, pos: Point, uv: Point, color: Color) {
        self.vertices.push(Vertex { pos, uv, color });
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        match self.index_kind {
            // Guarded by prim_reserve: in 16-bit mode every index fits.
            IndexKind::U16 => self
                .indices_u16
                .extend_from_slice(&[a as u16, b as u16, c as u16]),
            IndexKind::U32 => self.indices_u32.extend_from_slice(&[a, b, c]),
        }
    }

    pub(crate) fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    /// Writes an axis-aligned textured quad. Room must already be reserved.
    pub(crate) fn write_rect_uv(
        &mut self,
        min: Point,
        max: Point,
        uv_min: Point,
        uv_max: Point,
        color: Color,
    ) {
        let base = self.next_index();
        self.push_vertex(min, uv_min, color);
        self.push_vertex(Point::new(max.x, min.y), Point::new(uv_max.x, uv_min.y), color);
        self.push_vertex(max, uv_max, color);
        self.push_vertex(Point::new(min.x, max.y), Point::new(uv_min.x, uv_max.y), color);
        self.push_quad(base, base + 1, base + 2, base + 3);
    }

    /// Solid axis-aligned rectangle: 4 vertices, 6 indices.
    pub(crate) fn prim_rect(&mut self, min: Point, max: Point, color: Color) {
        if !self.prim_reserve(6, 4) {
            return;
        }
        let uv = self.shared.tex_uv_white_pixel();
        self.write_rect_uv(min, max, uv, uv, color);
        self.prim_commit();
    }

    pub(crate) fn prim_rect_uv(
        &mut self,
        min: Point,
        max: Point,
        uv_min: Point,
        uv_max: Point,
        color: Color,
    ) {
        if !self.prim_reserve(6, 4) {
            return;
        }
        self.write_rect_uv(min, max, uv_min, uv_max, color);
        self.prim_commit();
    }
}
