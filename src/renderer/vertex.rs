//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Field-space (later NDC) position plus RGBA colour
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `shader.wgsl`'s `VertexInput`
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Palette
pub mod colors {
    pub const ROAD: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
    pub const LANE_MARK: [f32; 4] = [0.85, 0.85, 0.75, 0.35];
    pub const PLAYER_BODY: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
    pub const OBSTACLE_BODY: [f32; 4] = [0.95, 0.3, 0.2, 1.0];
    pub const WINDSHIELD: [f32; 4] = [0.7, 0.9, 1.0, 0.85];
    pub const WHEEL: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
}
