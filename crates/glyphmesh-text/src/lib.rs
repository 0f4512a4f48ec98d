//! Glyphmesh Text
//!
//! Lays out multi-line strings against a pre-rasterized bitmap font and
//! packs the result into a flat vertex buffer, one quad (two triangles)
//! per glyph, ready for a single triangle-list draw call.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use glyphmesh_render::TextureHandle;
//! use glyphmesh_text::{BitmapFont, FontRef, Glyph, TextAlign, TextBlock};
//!
//! let font: FontRef = Arc::new(
//!     BitmapFont::new(TextureHandle::new(1, 256, 256), 16, 0)
//!         .with_glyph('o', Glyph { width: 8, advance: 9, u0: 0, v0: 0, u1: 8, v1: 16 }),
//! );
//!
//! let mut block = TextBlock::builder(font)
//!     .align(TextAlign::Center)
//!     .capacity(16)
//!     .build("oo\no")
//!     .unwrap();
//!
//! assert_eq!(block.line_count(), 2);
//! assert_eq!(block.draw_vertex_count(), 18);
//!
//! // Upload `block.vertices()`, then:
//! block.mark_vertices_clean();
//! block.set_text("ooo").unwrap();
//! assert!(block.vertices_dirty());
//! ```
//!
//! # Architecture
//!
//! - [`font`]: the [`FontMetrics`] capability and the shipped
//!   [`BitmapFont`] provider
//! - [`layout`]: line splitting, per-line measurement, alignment offsets
//! - [`mesh`]: the vertex packer
//! - [`block`]: [`TextBlock`], tying the above to a fixed-capacity
//!   `QuadBuffer` and a `RenderSurface`
//!
//! Everything is synchronous and allocation-free after construction;
//! `set_text` either commits a complete new layout or, on error, leaves
//! the previous one untouched.

pub mod block;
pub mod error;
pub mod font;
pub mod layout;
pub mod mesh;

pub use block::{TextBlock, TextBlockBuilder, glyph_count_of};
pub use error::{TextError, TextResult};
pub use font::{BitmapFont, FontMetrics, FontRef, Glyph};
pub use layout::{TextAlign, TextLayout};
pub use mesh::pack_text;
