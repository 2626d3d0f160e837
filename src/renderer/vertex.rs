//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
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

    /// Byte view of a vertex list, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Replace a color's alpha with an 8-bit value
#[inline]
pub fn with_alpha(color: [f32; 4], alpha: u8) -> [f32; 4] {
    [color[0], color[1], color[2], f32::from(alpha) / 255.0]
}

/// Colors for game elements
pub mod colors {
    /// grey12
    pub const BACKGROUND: [f32; 4] = [31.0 / 255.0, 31.0 / 255.0, 31.0 / 255.0, 1.0];
    /// cornflowerblue
    pub const PADDLE: [f32; 4] = [0.392, 0.584, 0.929, 1.0];
    /// aquamarine
    pub const BALL: [f32; 4] = [0.498, 1.0, 0.831, 1.0];
    pub const FLASH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
