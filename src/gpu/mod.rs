mod buffers;
mod context;
mod render;

pub use buffers::MeshBuffers;
pub use context::GpuContext;
pub use render::RenderPipeline;
