//! The text block: one string, one fixed-capacity quad mesh.

use glyphmesh_core::geometry::Size;
use glyphmesh_core::math::Vec2;
use glyphmesh_render::{
    BlendMode, QuadBuffer, RenderSurface, ShaderSpec, TexturedVertex, VERTICES_PER_QUAD,
};
use tracing::debug;

use crate::error::{TextError, TextResult};
use crate::font::FontRef;
use crate::layout::{TextAlign, TextLayout};
use crate::mesh::pack_text;

/// Number of drawable glyphs in a string: every character except `'\n'`.
pub fn glyph_count_of(text: &str) -> usize {
    text.chars().filter(|&c| c != '\n').count()
}

/// A multi-line string laid out as a mesh of glyph quads.
///
/// The vertex buffer is sized once, at construction, for a fixed glyph
/// capacity; [`set_text`](Self::set_text) may then be called with any
/// string that fits. Each call recomputes lines, widths, the bounding box,
/// and the active vertex region in place, reallocating nothing.
///
/// The block also configures a [`RenderSurface`]: bounds track the layout's
/// bounding box, the pivot tracks its center, and the blend mode is chosen
/// from the font atlas at construction.
pub struct TextBlock {
    text: String,
    capacity: usize,
    align: TextAlign,
    font: FontRef,
    layout: TextLayout,
    buffer: QuadBuffer,
    glyph_count: usize,
    surface: RenderSurface,
}

/// Builder for [`TextBlock`].
pub struct TextBlockBuilder {
    font: FontRef,
    position: Vec2,
    align: TextAlign,
    capacity: Option<usize>,
}

impl TextBlockBuilder {
    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Fix the glyph capacity instead of sizing it from the initial text.
    ///
    /// Use this when the block will later hold longer strings than the one
    /// it is built with.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn build(self, text: &str) -> TextResult<TextBlock> {
        let required = glyph_count_of(text);
        let capacity = self.capacity.unwrap_or(required);
        if required > capacity {
            return Err(TextError::CapacityExceeded { required, capacity });
        }

        let atlas = self.font.atlas();
        let blend = if atlas.premultiplied_alpha {
            BlendMode::PremultipliedAlpha
        } else {
            BlendMode::Alpha
        };
        let surface = RenderSurface::new(self.position, atlas, blend, ShaderSpec::text_default());

        let mut block = TextBlock {
            text: String::new(),
            capacity,
            align: self.align,
            font: self.font,
            layout: TextLayout::new(),
            buffer: QuadBuffer::with_capacity(capacity),
            glyph_count: 0,
            surface,
        };
        block.set_text(text)?;
        Ok(block)
    }
}

impl TextBlock {
    pub fn builder(font: FontRef) -> TextBlockBuilder {
        TextBlockBuilder {
            font,
            position: Vec2::ZERO,
            align: TextAlign::Left,
            capacity: None,
        }
    }

    /// Build with default position, alignment, and capacity.
    pub fn new(font: FontRef, text: &str) -> TextResult<Self> {
        Self::builder(font).build(text)
    }

    /// Replace the text, recomputing layout and vertices in place.
    ///
    /// Atomic from the caller's perspective: capacity and glyph coverage
    /// are validated before any mutation, so on error the previous text,
    /// layout, surface, and vertex contents all remain intact.
    pub fn set_text(&mut self, text: &str) -> TextResult<()> {
        let required = glyph_count_of(text);
        if required > self.capacity {
            return Err(TextError::CapacityExceeded {
                required,
                capacity: self.capacity,
            });
        }
        for character in text.chars().filter(|&c| c != '\n') {
            if self.font.glyph(character).is_none() {
                return Err(TextError::MissingGlyph { character });
            }
        }

        self.text.clear();
        self.text.push_str(text);
        self.layout.rebuild(&self.text, self.font.as_ref());
        self.surface.set_bounds(
            self.layout.max_line_width() as f32,
            self.layout.total_height() as f32,
        );

        // Every glyph was validated above, so packing cannot fail here.
        let packed = pack_text(
            &mut self.buffer,
            &self.text,
            &self.layout,
            self.font.as_ref(),
            self.align,
        )?;
        debug_assert_eq!(packed, required);
        self.glyph_count = packed;
        self.buffer.set_active_quads(packed);
        self.buffer.mark_dirty();

        debug!(
            glyphs = self.glyph_count,
            lines = self.layout.line_count(),
            "text updated"
        );
        Ok(())
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn align(&self) -> TextAlign {
        self.align
    }

    #[inline]
    pub fn font(&self) -> &FontRef {
        &self.font
    }

    /// Number of drawable glyphs in the current text.
    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyph_count
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.layout.line_count()
    }

    /// The lines of the current text, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.layout
            .line_spans()
            .iter()
            .map(|span| &self.text[span.clone()])
    }

    /// Pixel width of each line, parallel to [`lines`](Self::lines).
    #[inline]
    pub fn line_widths(&self) -> &[i32] {
        self.layout.widths()
    }

    #[inline]
    pub fn max_line_width(&self) -> i32 {
        self.layout.max_line_width()
    }

    /// The bounding box, also mirrored on the surface.
    pub fn size(&self) -> Size<i32> {
        Size::new(self.layout.max_line_width(), self.layout.total_height())
    }

    #[inline]
    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut RenderSurface {
        &mut self.surface
    }

    /// The active vertices, ready for upload.
    pub fn vertices(&self) -> &[TexturedVertex] {
        self.buffer.vertices()
    }

    /// Vertex count for the draw call: `glyph_count * 6`. Stale quads past
    /// this bound are never drawn and never zeroed.
    #[inline]
    pub fn draw_vertex_count(&self) -> usize {
        self.glyph_count * VERTICES_PER_QUAD
    }

    #[inline]
    pub fn vertices_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Called by the consumer after uploading the buffer.
    #[inline]
    pub fn mark_vertices_clean(&mut self) {
        self.buffer.mark_clean();
    }
}
