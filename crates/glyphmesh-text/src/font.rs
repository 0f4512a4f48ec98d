//! The font provider capability and the shipped bitmap-font implementation.

use std::sync::Arc;

use glyphmesh_core::alloc::HashMap;
use glyphmesh_render::TextureHandle;

/// Metrics and atlas coordinates for one pre-rasterized character.
///
/// `width` is the visual box; `advance` is how far the layout cursor moves
/// after the glyph and may exceed `width` for proportional spacing. The UV
/// rectangle `(u0, v0)`-`(u1, v1)` is in atlas pixels, top-left to
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub width: i32,
    pub advance: i32,
    pub u0: i32,
    pub v0: i32,
    pub u1: i32,
    pub v1: i32,
}

/// The capability a text block consumes from a font.
///
/// Lookups must be deterministic for the duration of one layout pass;
/// measurement and packing walk the same characters and must agree.
pub trait FontMetrics {
    /// Metrics for one character, or `None` if the font has no mapping.
    fn glyph(&self, character: char) -> Option<Glyph>;

    /// Height of one text row in pixels.
    fn line_height(&self) -> i32;

    /// Extra spacing between consecutive rows, beyond the line height.
    fn line_gap(&self) -> i32;

    /// The atlas texture every glyph's UV rectangle points into.
    fn atlas(&self) -> TextureHandle;

    /// Pixel width of a single-line string: the sum of glyph advances.
    ///
    /// The provided implementation measures via [`glyph`](Self::glyph), so
    /// it can never disagree with the packer's cursor; overrides must
    /// preserve that equality. Characters without a glyph contribute zero
    /// width here and are rejected by the text block before layout.
    fn string_width(&self, line: &str) -> i32 {
        line.chars()
            .filter_map(|c| self.glyph(c))
            .map(|g| g.advance)
            .sum()
    }
}

/// Shared handle to a font provider.
pub type FontRef = Arc<dyn FontMetrics + Send + Sync>;

/// A pre-rasterized bitmap font: a glyph table over one atlas texture.
#[derive(Debug, Clone)]
pub struct BitmapFont {
    glyphs: HashMap<char, Glyph>,
    line_height: i32,
    line_gap: i32,
    atlas: TextureHandle,
    fallback: Option<Glyph>,
}

impl BitmapFont {
    pub fn new(atlas: TextureHandle, line_height: i32, line_gap: i32) -> Self {
        Self {
            glyphs: HashMap::new(),
            line_height,
            line_gap,
            atlas,
            fallback: None,
        }
    }

    /// Register one character's glyph, replacing any previous mapping.
    pub fn with_glyph(mut self, character: char, glyph: Glyph) -> Self {
        self.glyphs.insert(character, glyph);
        self
    }

    /// Substitute `glyph` for any unmapped character.
    ///
    /// Without a fallback, unmapped characters surface as
    /// `TextError::MissingGlyph` from the text block.
    pub fn with_fallback(mut self, glyph: Glyph) -> Self {
        self.fallback = Some(glyph);
        self
    }

    pub fn insert_glyph(&mut self, character: char, glyph: Glyph) {
        self.glyphs.insert(character, glyph);
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

impl FontMetrics for BitmapFont {
    fn glyph(&self, character: char) -> Option<Glyph> {
        self.glyphs.get(&character).copied().or(self.fallback)
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn line_gap(&self) -> i32 {
        self.line_gap
    }

    fn atlas(&self) -> TextureHandle {
        self.atlas
    }
}
