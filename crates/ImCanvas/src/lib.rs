//! # ImCanvas
//!
//! `im_canvas` is the immediate-mode 2D drawing core: a host builds each
//! frame against a [`DrawList`] and receives vertex/index buffers plus a
//! command table to render however it likes. Nothing here touches a GPU.
//!
//! ## Core Architecture
//! - **Shared data (`src/shared_data.rs`)**: circle segment tables and the 48-point unit circle.
//! - **Draw list (`src/draw_list/`)**: batching, clip/texture stacks, path builder, tessellation.
//! - **Input (`src/input.rs`)**: mouse state machine with click and double-click detection.
//! - **Context (`src/context.rs`)**: process-wide default tables and font.
//! - **Painter (`src/painter.rs`)**: theme-driven widget shapes on top of the draw list.

pub mod color;
pub mod config;
pub mod context;
pub mod draw_list;
pub mod error;
pub mod font;
pub mod input;
pub mod math;
pub mod painter;
pub mod persistence;
pub mod render;
pub mod shared_data;
pub mod theme;

// Re-exports for convenience
pub use color::Color;
pub use config::{DrawListFlags, MouseConfig, TessellationConfig};
pub use context::{Context, context, context_mut};
pub use draw_list::DrawList;
pub use error::{DrawError, ThemeError};
pub use font::{Font, Glyph, GridFont};
pub use input::{Mouse, MouseState};
pub use math::{Circle, Corners, Ellipse, Extent, Point, Rect};
pub use painter::{ButtonState, Painter};
pub use render::{DrawCmd, DrawData, IndexKind, TextureId, Vertex};
pub use shared_data::SharedData;
pub use theme::{Theme, ThemeCategory};
