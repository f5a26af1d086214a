#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("frame rate must be at least one frame per second")]
    ZeroFrameRate,

    #[error("a {width}x{height} window cannot hold a single {cell_size}px cell")]
    WindowTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },

    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface not supported by adapter")]
    UnsupportedSurface,
}
