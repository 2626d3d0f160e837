//! Rendering module
//!
//! The core hands each frame's `Snapshot` to a `Renderer` and never reads
//! back. `VertexRenderer` tessellates snapshots into a colored triangle list
//! that a GPU backend can upload as-is.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameStyle, build_frame};
pub use vertex::Vertex;

use crate::sim::Snapshot;

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);

    /// Release platform resources on the way out
    fn shutdown(&mut self) {}
}

/// CPU renderer that keeps the latest frame's display list
#[derive(Debug, Clone, Default)]
pub struct VertexRenderer {
    style: FrameStyle,
    vertices: Vec<Vertex>,
    frames: u64,
    last_score: u32,
}

impl VertexRenderer {
    pub fn new(style: FrameStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Display list of the most recent frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Renderer for VertexRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.vertices = build_frame(snapshot, &self.style);
        self.frames += 1;

        if snapshot.score != self.last_score {
            log::debug!("Score: {}", snapshot.score);
            self.last_score = snapshot.score;
        }
    }

    fn shutdown(&mut self) {
        log::info!("Renderer shut down after {} frames", self.frames);
        self.vertices.clear();
    }
}
