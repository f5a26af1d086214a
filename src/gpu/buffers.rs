use wgpu::{Buffer, BufferUsages, Device, Queue};

use crate::config::{ALIVE_COLOR, CELL_SPACING, DEAD_COLOR};
use crate::gpu::color::to_rgba;
use crate::simulation::Cell;

/// Manages the cell state buffer and the render parameter uniform
pub struct GridBuffers {
    /// One u32 state per cell, row-major
    pub cells_buffer: Buffer,
    /// Uniform buffer for render parameters
    pub render_params_buffer: Buffer,
    /// Grid dimensions
    pub rows: u32,
    pub columns: u32,
}

/// Render parameters passed to the fragment shader (64 bytes, aligned to 16)
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RenderParams {
    // Grid layout (16 bytes)
    pub columns: u32,
    pub rows: u32,
    pub cell_size: u32,
    pub spacing: u32,

    // Logical-to-physical pixel ratio + padding (16 bytes)
    pub scale_factor: f32,
    pub _padding: [f32; 3],

    // Palette indexed by cell state (32 bytes)
    pub palette: [[f32; 4]; 2],
}

impl RenderParams {
    pub fn new(rows: u32, columns: u32, cell_size: u32, scale_factor: f32, srgb_target: bool) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            spacing: CELL_SPACING,
            scale_factor,
            _padding: [0.0; 3],
            palette: [
                to_rgba(DEAD_COLOR, srgb_target),
                to_rgba(ALIVE_COLOR, srgb_target),
            ],
        }
    }
}

impl GridBuffers {
    /// Create new grid buffers and upload initial data
    pub fn new(device: &Device, queue: &Queue, rows: u32, columns: u32, initial_data: &[Cell]) -> Self {
        let cell_count = rows * columns;
        assert_eq!(
            initial_data.len(),
            cell_count as usize,
            "Initial data size mismatch"
        );

        let buffer_size = (cell_count as usize * std::mem::size_of::<Cell>()) as u64;

        let cells_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cells-buffer"),
            size: buffer_size,
            usage: BufferUsages::STORAGE | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let render_params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("render-params-buffer"),
            size: std::mem::size_of::<RenderParams>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        queue.write_buffer(&cells_buffer, 0, bytemuck::cast_slice(initial_data));

        Self {
            cells_buffer,
            render_params_buffer,
            rows,
            columns,
        }
    }

    /// Upload the current generation
    pub fn write_cells(&self, queue: &Queue, cells: &[Cell]) {
        queue.write_buffer(&self.cells_buffer, 0, bytemuck::cast_slice(cells));
    }

    /// Update render parameters
    pub fn update_render_params(&self, queue: &Queue, cell_size: u32, scale_factor: f32, srgb_target: bool) {
        let params = RenderParams::new(self.rows, self.columns, cell_size, scale_factor, srgb_target);
        queue.write_buffer(&self.render_params_buffer, 0, bytemuck::bytes_of(&params));
    }
}
