//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (normalized device coordinates) and color
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
}

/// Colors for game elements
pub mod colors {
    pub const BIRD: [f32; 4] = [0.55, 0.35, 0.2, 1.0];
    pub const BIRD_CRASHED: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
    pub const PIPE_TOP: [f32; 4] = [0.2, 0.7, 0.3, 1.0];
    pub const PIPE_BOTTOM: [f32; 4] = [0.15, 0.6, 0.25, 1.0];
    /// Pipe already scored (dimmed)
    pub const PIPE_PASSED: [f32; 4] = [0.2, 0.45, 0.25, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.45, 0.75, 0.95, 1.0];
}
