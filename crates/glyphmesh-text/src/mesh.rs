//! The vertex packer: glyph quads into a [`QuadBuffer`].

use glyphmesh_render::{FLOATS_PER_QUAD, QuadBuffer};

use crate::error::{TextError, TextResult};
use crate::font::{FontMetrics, Glyph};
use crate::layout::{TextAlign, TextLayout};

/// Fill `buffer` with one quad per glyph of `text`, in layout order.
///
/// Returns the number of glyphs written. Writes are purely positional
/// (glyph ordinal times the quad stride); the caller owns setting the
/// buffer's active region and dirty flag afterwards, so a failed pack
/// never changes what a draw call sees.
///
/// `layout` must be the result of laying out exactly this `text` with
/// exactly this `font`; the packer trusts its spans and widths.
pub fn pack_text(
    buffer: &mut QuadBuffer,
    text: &str,
    layout: &TextLayout,
    font: &dyn FontMetrics,
    align: TextAlign,
) -> TextResult<usize> {
    let line_height = font.line_height();
    let line_step = line_height + font.line_gap();
    let max_line_width = layout.max_line_width();

    let mut glyph_index = 0;
    for (line_index, span) in layout.line_spans().iter().enumerate() {
        let line = &text[span.clone()];
        let line_y = line_index as i32 * line_step;
        // The cursor starts at the alignment offset and moves by advance,
        // not width; the two differ for proportional spacing.
        let mut pen_x = align.line_offset(max_line_width, layout.widths()[line_index]);
        for character in line.chars() {
            let glyph = font
                .glyph(character)
                .ok_or(TextError::MissingGlyph { character })?;
            write_quad(buffer.quad_mut(glyph_index), pen_x, line_y, line_height, glyph);
            pen_x += glyph.advance;
            glyph_index += 1;
        }
    }
    Ok(glyph_index)
}

/// One glyph quad: two triangles in the fan order top-left, bottom-left,
/// bottom-right, bottom-right, top-right, top-left. Every quad uses the
/// same winding so the whole mesh draws as a single triangle list.
fn write_quad(
    out: &mut [f32; FLOATS_PER_QUAD],
    pen_x: i32,
    line_y: i32,
    line_height: i32,
    glyph: Glyph,
) {
    let x0 = pen_x as f32;
    let y0 = line_y as f32;
    let x1 = (pen_x + glyph.width) as f32;
    let y1 = (line_y + line_height) as f32;
    let u0 = glyph.u0 as f32;
    let v0 = glyph.v0 as f32;
    let u1 = glyph.u1 as f32;
    let v1 = glyph.v1 as f32;

    let corners = [
        [x0, y0, u0, v0],
        [x0, y1, u0, v1],
        [x1, y1, u1, v1],
        [x1, y1, u1, v1],
        [x1, y0, u1, v0],
        [x0, y0, u0, v0],
    ];
    for (vertex, corner) in out.chunks_exact_mut(4).zip(corners) {
        vertex.copy_from_slice(&corner);
    }
}
