//! Blend mode presets for common rendering scenarios.

/// A source or destination blend factor, GPU-API agnostic.
///
/// Maps one-to-one onto the factor enums of wgpu, OpenGL, and friends;
/// the consumer translates when building its pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
}

/// Predefined blend modes for common use cases.
///
/// Use these to configure how source and destination colors are combined
/// during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum BlendMode {
    /// No blending - source completely replaces destination.
    Replace,

    /// Standard alpha blending for transparent content.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb * (1 - src.a)`
    ///
    /// Use for: glyph atlases with straight alpha.
    #[default]
    Alpha,

    /// Premultiplied alpha blending.
    ///
    /// Formula: `src.rgb + dst.rgb * (1 - src.a)`
    ///
    /// Use for: glyph atlases baked with premultiplied alpha.
    PremultipliedAlpha,

    /// Additive blending - colors are added together.
    ///
    /// Formula: `src.rgb * src.a + dst.rgb`
    ///
    /// Use for: glow effects, light sources.
    Additive,

    /// Multiplicative blending.
    ///
    /// Formula: `src.rgb * dst.rgb`
    ///
    /// Use for: shadows, color tinting.
    Multiply,
}

impl BlendMode {
    /// The (source, destination) factor pair for this mode.
    pub fn factors(self) -> (BlendFactor, BlendFactor) {
        match self {
            BlendMode::Replace => (BlendFactor::One, BlendFactor::Zero),
            BlendMode::Alpha => (BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
            BlendMode::PremultipliedAlpha => (BlendFactor::One, BlendFactor::OneMinusSrcAlpha),
            BlendMode::Additive => (BlendFactor::SrcAlpha, BlendFactor::One),
            BlendMode::Multiply => (BlendFactor::DstColor, BlendFactor::Zero),
        }
    }
}
