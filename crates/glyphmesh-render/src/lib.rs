//! Glyphmesh Render
//!
//! CPU-side render abstractions consumed by the text layer and read by an
//! external GPU backend:
//!
//! - [`TexturedVertex`]: the fixed `[x, y, u, v]` vertex layout
//! - [`QuadBuffer`]: a fixed-capacity vertex store with a dirty flag
//! - [`BlendMode`]: GPU-API-agnostic blend presets
//! - [`ShaderSpec`]: a declarative shader configuration record
//! - [`TextureHandle`]: an opaque atlas texture reference plus metadata
//! - [`RenderSurface`]: the rectangular drawable a text block configures
//!
//! Nothing in this crate touches a GPU API; uploading buffers and binding
//! shaders is the consumer's job.

pub mod blend;
pub mod buffer;
pub mod shader;
pub mod surface;
pub mod texture;
pub mod vertex;

pub use blend::{BlendFactor, BlendMode};
pub use buffer::QuadBuffer;
pub use shader::{ShaderSpec, UniformSlot};
pub use surface::RenderSurface;
pub use texture::TextureHandle;
pub use vertex::{FLOATS_PER_QUAD, TexturedVertex, VERTEX_FLOATS, VERTICES_PER_QUAD, VertexAttribute};
