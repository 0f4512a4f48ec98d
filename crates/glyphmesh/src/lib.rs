//! Glyphmesh - bitmap-font text as GPU-drawable quad meshes
//!
//! Glyphmesh turns a Unicode string plus bitmap-font metrics into a flat
//! vertex buffer ready for a single draw call:
//!
//! - **Layout**: line splitting, per-line pixel widths, alignment offsets
//! - **Packing**: six vertices per glyph at a fixed stride, position + UV
//! - **Reuse**: fixed-capacity storage, incremental re-layout, dirty flag
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use glyphmesh::prelude::*;
//!
//! let font: FontRef = Arc::new(
//!     BitmapFont::new(TextureHandle::new(1, 256, 256), 16, 0)
//!         .with_glyph('x', Glyph { width: 7, advance: 8, u0: 0, v0: 0, u1: 7, v1: 16 }),
//! );
//!
//! let block = TextBlock::new(font, "xx\nx").unwrap();
//! assert_eq!(block.draw_vertex_count(), 18);
//! ```
//!
//! The GPU side is deliberately out of scope: the consumer uploads
//! [`TextBlock::vertices`](prelude::TextBlock::vertices) whenever the
//! dirty flag is set and draws
//! [`TextBlock::draw_vertex_count`](prelude::TextBlock::draw_vertex_count)
//! vertices with the surface's blend mode and shader spec.

pub use glyphmesh_core as core;

#[cfg(feature = "render")]
pub use glyphmesh_render as render;

#[cfg(feature = "text")]
pub use glyphmesh_text as text;

/// The common imports for building and drawing text blocks.
pub mod prelude {
    pub use glyphmesh_core::geometry::{Rect, Size};
    pub use glyphmesh_core::math::Vec2;

    #[cfg(feature = "render")]
    pub use glyphmesh_render::{
        BlendMode, QuadBuffer, RenderSurface, ShaderSpec, TextureHandle, TexturedVertex,
        VERTICES_PER_QUAD,
    };

    #[cfg(feature = "text")]
    pub use glyphmesh_text::{
        BitmapFont, FontMetrics, FontRef, Glyph, TextAlign, TextBlock, TextError, TextResult,
    };
}
