//! Fixed-capacity CPU-side vertex storage for glyph quads.

use crate::vertex::{FLOATS_PER_QUAD, TexturedVertex, VERTICES_PER_QUAD};

/// A preallocated buffer of glyph quads with a dirty flag.
///
/// Storage is allocated once at construction and never grows. Writers fill
/// quads in place via [`quad_mut`](Self::quad_mut) and then shrink or grow
/// the *active* prefix with [`set_active_quads`](Self::set_active_quads);
/// floats past the active region keep whatever a previous pack left there
/// and are simply excluded from the draw call. The dirty flag tells the
/// upload consumer that the CPU contents changed since the last sync.
#[derive(Debug, Clone)]
pub struct QuadBuffer {
    quads: Box<[[f32; FLOATS_PER_QUAD]]>,
    active_quads: usize,
    dirty: bool,
}

impl QuadBuffer {
    /// Allocate storage for `capacity` quads, all inactive and clean.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            quads: vec![[0.0; FLOATS_PER_QUAD]; capacity].into_boxed_slice(),
            active_quads: 0,
            dirty: false,
        }
    }

    /// Maximum number of quads this buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.quads.len()
    }

    /// Number of quads in the active (drawable) prefix.
    #[inline]
    pub fn active_quads(&self) -> usize {
        self.active_quads
    }

    /// Number of valid floats, `active_quads * 24`.
    #[inline]
    pub fn active_floats(&self) -> usize {
        self.active_quads * FLOATS_PER_QUAD
    }

    /// Number of vertices a draw call over the active region covers.
    #[inline]
    pub fn active_vertices(&self) -> usize {
        self.active_quads * VERTICES_PER_QUAD
    }

    /// Mutable access to one quad's 24 floats.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity()`.
    #[inline]
    pub fn quad_mut(&mut self, index: usize) -> &mut [f32; FLOATS_PER_QUAD] {
        &mut self.quads[index]
    }

    /// Set the active prefix length.
    ///
    /// # Panics
    ///
    /// Panics if `count > capacity()`.
    pub fn set_active_quads(&mut self, count: usize) {
        assert!(
            count <= self.quads.len(),
            "active quads {} exceeds capacity {}",
            count,
            self.quads.len()
        );
        self.active_quads = count;
    }

    /// The active region viewed as typed vertices.
    pub fn vertices(&self) -> &[TexturedVertex] {
        bytemuck::cast_slice(&self.quads[..self.active_quads])
    }

    /// The whole allocation as raw floats, stale tail included.
    pub fn raw_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.quads)
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_fixed_at_construction() {
        let buffer = QuadBuffer::with_capacity(8);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.active_quads(), 0);
        assert_eq!(buffer.raw_floats().len(), 8 * FLOATS_PER_QUAD);
    }

    #[test]
    fn test_active_region_slicing() {
        let mut buffer = QuadBuffer::with_capacity(4);
        buffer.quad_mut(0).fill(1.0);
        buffer.quad_mut(1).fill(2.0);
        buffer.set_active_quads(1);
        assert_eq!(buffer.vertices().len(), VERTICES_PER_QUAD);
        assert!(buffer.vertices().iter().all(|v| v.position == [1.0, 1.0]));
        assert_eq!(buffer.active_floats(), FLOATS_PER_QUAD);
    }

    #[test]
    fn test_shrinking_leaves_tail_stale() {
        let mut buffer = QuadBuffer::with_capacity(2);
        buffer.quad_mut(1).fill(7.0);
        buffer.set_active_quads(2);
        buffer.set_active_quads(1);
        assert_eq!(buffer.raw_floats()[FLOATS_PER_QUAD], 7.0);
    }

    #[test]
    fn test_dirty_transitions() {
        let mut buffer = QuadBuffer::with_capacity(1);
        assert!(!buffer.is_dirty());
        buffer.mark_dirty();
        assert!(buffer.is_dirty());
        buffer.mark_clean();
        assert!(!buffer.is_dirty());
    }

    #[test]
    #[should_panic]
    fn test_active_quads_beyond_capacity_panics() {
        let mut buffer = QuadBuffer::with_capacity(1);
        buffer.set_active_quads(2);
    }
}
