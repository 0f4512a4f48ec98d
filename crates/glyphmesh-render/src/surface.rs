//! The rectangular drawable a text block configures.

use glyphmesh_core::geometry::Size;
use glyphmesh_core::math::Vec2;

use crate::blend::BlendMode;
use crate::shader::ShaderSpec;
use crate::texture::TextureHandle;

/// A positioned, textured rectangle with blend and shader state.
///
/// This is a plain state record; the consumer reads it when building its
/// draw. Layout owns `size` and `pivot`: whenever the bounds change, the
/// pivot snaps to the new center and `revision` increments so transforms
/// anchored to the pivot know to recompute. `position` stays caller-owned.
#[derive(Debug, Clone)]
pub struct RenderSurface {
    pub position: Vec2,
    size: Size<f32>,
    pivot: Vec2,
    pub blend: BlendMode,
    pub shader: ShaderSpec,
    pub texture: TextureHandle,
    revision: u64,
}

impl RenderSurface {
    pub fn new(position: Vec2, texture: TextureHandle, blend: BlendMode, shader: ShaderSpec) -> Self {
        Self {
            position,
            size: Size::new(0.0, 0.0),
            pivot: Vec2::ZERO,
            blend,
            shader,
            texture,
            revision: 0,
        }
    }

    /// Resize the bounding box, recentering the pivot.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);
        self.pivot = Vec2::new(width * 0.5, height * 0.5);
        self.revision += 1;
    }

    #[inline]
    pub fn size(&self) -> Size<f32> {
        self.size
    }

    /// Rotation/scale pivot in local space, always the box center.
    #[inline]
    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Bumped on every bounds change.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
