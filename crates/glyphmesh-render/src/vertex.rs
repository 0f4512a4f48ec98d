//! The fixed per-vertex layout shared by producer and consumer.

/// Floats per vertex: x, y, u, v.
pub const VERTEX_FLOATS: usize = 4;

/// Vertices per glyph quad: two triangles in a single triangle list.
pub const VERTICES_PER_QUAD: usize = 6;

/// Floats per glyph quad.
pub const FLOATS_PER_QUAD: usize = VERTEX_FLOATS * VERTICES_PER_QUAD;

/// A single vertex of a glyph quad.
///
/// Positions are in local pixel space. UVs are in atlas pixel space, not
/// normalized; the consumer divides by the atlas size (see
/// `shaders/text.wgsl`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl TexturedVertex {
    /// Byte stride between consecutive vertices in a buffer.
    pub const STRIDE: usize = std::mem::size_of::<TexturedVertex>();

    /// Attribute descriptions for consumers building a pipeline.
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            name: "position",
            offset: 0,
            components: 2,
        },
        VertexAttribute {
            name: "uv",
            offset: 8,
            components: 2,
        },
    ];
}

/// One entry of a vertex layout description.
///
/// `offset` is in bytes from the start of the vertex; `components` is the
/// number of `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub offset: usize,
    pub components: usize,
}

static_assertions::const_assert_eq!(std::mem::size_of::<TexturedVertex>(), 16);
static_assertions::const_assert_eq!(TexturedVertex::STRIDE, VERTEX_FLOATS * 4);
static_assertions::const_assert_eq!(std::mem::align_of::<TexturedVertex>(), 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_offsets_cover_stride() {
        let total: usize = TexturedVertex::ATTRIBUTES
            .iter()
            .map(|a| a.components * 4)
            .sum();
        assert_eq!(total, TexturedVertex::STRIDE);
        assert_eq!(TexturedVertex::ATTRIBUTES[1].offset, 8);
    }

    #[test]
    fn test_vertex_cast_roundtrip() {
        let vertex = TexturedVertex {
            position: [1.0, 2.0],
            uv: [3.0, 4.0],
        };
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
