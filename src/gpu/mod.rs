mod buffers;
mod color;
mod context;
mod render;

pub use buffers::GridBuffers;
pub use color::to_clear_color;
pub use context::GpuContext;
pub use render::RenderPipeline;
