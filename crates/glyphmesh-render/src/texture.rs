/// An opaque reference to a GPU texture, plus the metadata the CPU side
/// needs: atlas dimensions for UV normalization and whether the pixel data
/// was baked with premultiplied alpha (drives blend-mode selection).
///
/// The `id` is assigned by whatever loaded the texture; this crate never
/// dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub premultiplied_alpha: bool,
}

impl TextureHandle {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self {
            id,
            width,
            height,
            premultiplied_alpha: false,
        }
    }

    pub fn with_premultiplied_alpha(mut self) -> Self {
        self.premultiplied_alpha = true;
        self
    }
}
