//! Declarative shader configuration.
//!
//! Instead of subclassing a shader object to inject per-draw state, a
//! surface carries a [`ShaderSpec`]: source text plus the uniform slots the
//! consumer must bind before drawing. The consumer owns compilation and
//! binding; this crate only describes what a correct binding looks like.

/// A uniform the consumer must supply when drawing with a [`ShaderSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformSlot {
    /// Combined model-view-projection matrix (`mat4x4<f32>`).
    ModelViewProjection,
    /// RGBA tint multiplied into the sampled color (`vec4<f32>`).
    TintColor,
    /// The glyph atlas texture and its sampler.
    AtlasTexture,
    /// Atlas dimensions in pixels (`vec2<f32>`), used to normalize UVs.
    AtlasSize,
}

/// Shader sources and required uniforms for one kind of surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSpec {
    /// Source for the vertex stage.
    pub vertex_source: &'static str,
    /// Source for the fragment stage (the same WGSL module for the
    /// built-in shaders; the entry points select the stage).
    pub fragment_source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
    pub uniforms: &'static [UniformSlot],
}

const TEXT_WGSL: &str = include_str!("../shaders/text.wgsl");

impl ShaderSpec {
    /// The built-in textured glyph-quad shader.
    ///
    /// Divides pixel-domain UVs by [`UniformSlot::AtlasSize`], which fixes
    /// the UV convention between the vertex packer and the sampler.
    pub fn text_default() -> Self {
        Self {
            vertex_source: TEXT_WGSL,
            fragment_source: TEXT_WGSL,
            vertex_entry: "vs_main",
            fragment_entry: "fs_main",
            uniforms: &[
                UniformSlot::ModelViewProjection,
                UniformSlot::TintColor,
                UniformSlot::AtlasTexture,
                UniformSlot::AtlasSize,
            ],
        }
    }
}
