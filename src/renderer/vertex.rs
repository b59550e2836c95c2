//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, sRGB-encoded
pub type Color = [f32; 4];

/// 2D vertex: position (field pixels before upload, NDC after) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `vs_main` in shader.wgsl
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    /// Menu button idle (200, 200, 200)
    pub const GRAY: Color = [0.784, 0.784, 0.784, 1.0];
    pub const DARK_GRAY: Color = [0.25, 0.25, 0.25, 1.0];
    pub const HIGHLIGHT: Color = [0.9, 0.2, 0.2, 1.0];
}
