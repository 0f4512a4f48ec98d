//! Line splitting, measurement, and alignment offsets.

use std::ops::Range;

use tracing::trace;

use crate::font::FontMetrics;

/// Text alignment (horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Horizontal start offset of a line within the block's bounding box.
    ///
    /// Center uses integer division, so an odd-pixel remainder biases the
    /// line one pixel toward the left edge.
    pub fn line_offset(self, max_line_width: i32, line_width: i32) -> i32 {
        match self {
            TextAlign::Left => 0,
            TextAlign::Center => (max_line_width - line_width) / 2,
            TextAlign::Right => max_line_width - line_width,
        }
    }
}

/// The measured shape of a block of text: line spans, per-line pixel
/// widths, and the bounding box.
///
/// Lines are byte ranges into the text that produced them, so re-layout
/// allocates nothing per line; the span and width vectors are reused
/// across [`rebuild`](Self::rebuild) calls and only grow when the line
/// count does.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    lines: Vec<Range<usize>>,
    widths: Vec<i32>,
    max_line_width: i32,
    total_height: i32,
}

impl TextLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute spans, widths, and the bounding box for `text`.
    ///
    /// Splitting "" yields one empty line; a trailing `'\n'` yields a
    /// trailing empty line. Both contribute a full row of height.
    pub fn rebuild(&mut self, text: &str, font: &dyn FontMetrics) {
        let previous_lines = self.lines.len();
        self.lines.clear();
        self.widths.clear();
        self.max_line_width = 0;

        let mut start = 0;
        for line in text.split('\n') {
            let end = start + line.len();
            self.lines.push(start..end);
            let width = font.string_width(line);
            self.widths.push(width);
            self.max_line_width = self.max_line_width.max(width);
            start = end + 1;
        }

        // The gap term is clamped: one line means no gap, and a count of
        // zero must not produce a negative height.
        let line_count = self.lines.len() as i32;
        self.total_height =
            line_count * font.line_height() + (line_count - 1).max(0) * font.line_gap();

        if previous_lines != self.lines.len() {
            trace!(
                previous = previous_lines,
                current = self.lines.len(),
                "line count changed"
            );
        }
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Byte spans of each line in the laid-out text.
    #[inline]
    pub fn line_spans(&self) -> &[Range<usize>] {
        &self.lines
    }

    /// Pixel width of each line, parallel to [`line_spans`](Self::line_spans).
    #[inline]
    pub fn widths(&self) -> &[i32] {
        &self.widths
    }

    /// Width of the bounding box: the widest line.
    #[inline]
    pub fn max_line_width(&self) -> i32 {
        self.max_line_width
    }

    /// Height of the bounding box: stacked line heights plus gaps.
    #[inline]
    pub fn total_height(&self) -> i32 {
        self.total_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BitmapFont, Glyph};
    use glyphmesh_render::TextureHandle;

    fn font() -> BitmapFont {
        let glyph = |width: i32, advance: i32| Glyph {
            width,
            advance,
            u0: 0,
            v0: 0,
            u1: width,
            v1: 16,
        };
        BitmapFont::new(TextureHandle::new(1, 256, 256), 16, 4)
            .with_glyph('A', glyph(10, 10))
            .with_glyph('B', glyph(8, 8))
    }

    #[test]
    fn test_line_count_matches_newlines() {
        let font = font();
        let mut layout = TextLayout::new();
        layout.rebuild("A\nBB\nA", &font);
        assert_eq!(layout.line_count(), 3);
        layout.rebuild("AB", &font);
        assert_eq!(layout.line_count(), 1);
    }

    #[test]
    fn test_empty_string_is_one_empty_line() {
        let font = font();
        let mut layout = TextLayout::new();
        layout.rebuild("", &font);
        assert_eq!(layout.line_count(), 1);
        assert_eq!(layout.widths(), &[0]);
        assert_eq!(layout.max_line_width(), 0);
        assert_eq!(layout.total_height(), 16);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let font = font();
        let mut layout = TextLayout::new();
        layout.rebuild("A\n", &font);
        assert_eq!(layout.line_count(), 2);
        assert_eq!(layout.widths(), &[10, 0]);
        assert_eq!(layout.total_height(), 2 * 16 + 4);
    }

    #[test]
    fn test_widths_and_bounding_box() {
        let font = font();
        let mut layout = TextLayout::new();
        layout.rebuild("A\nBB", &font);
        assert_eq!(layout.widths(), &[10, 16]);
        assert_eq!(layout.max_line_width(), 16);
        assert_eq!(layout.total_height(), 2 * 16 + 4);
    }

    #[test]
    fn test_single_line_height_has_no_gap() {
        let font = font();
        let mut layout = TextLayout::new();
        layout.rebuild("AB", &font);
        assert_eq!(layout.total_height(), 16);
    }

    #[test]
    fn test_spans_index_the_text() {
        let font = font();
        let text = "A\nBB";
        let mut layout = TextLayout::new();
        layout.rebuild(text, &font);
        let lines: Vec<&str> = layout
            .line_spans()
            .iter()
            .map(|span| &text[span.clone()])
            .collect();
        assert_eq!(lines, ["A", "BB"]);
    }

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(TextAlign::Left.line_offset(16, 10), 0);
        assert_eq!(TextAlign::Right.line_offset(16, 10), 6);
        assert_eq!(TextAlign::Center.line_offset(16, 10), 3);
        // Odd remainder biases left.
        assert_eq!(TextAlign::Center.line_offset(17, 10), 3);
    }

    #[test]
    fn test_center_offset_invariant() {
        for (max, width) in [(16, 10), (17, 10), (100, 99), (8, 8)] {
            let offset = TextAlign::Center.line_offset(max, width);
            let slack = max - width;
            assert!(2 * offset == slack || 2 * offset == slack - 1);
        }
    }
}
