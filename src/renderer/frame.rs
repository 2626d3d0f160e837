//! Snapshot to display list
//!
//! Draw order matches the layering players see: background, trail, paddle,
//! ball, then the hit flash over everything. The score is text and is left to
//! the platform's font renderer.

use super::shapes;
use super::vertex::{Vertex, colors, with_alpha};
use crate::settings::Settings;
use crate::sim::Snapshot;

/// Per-run drawing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    pub trail_fade_start: u8,
    pub trail_fade_end: u8,
    pub flash_alpha: u8,
    /// Triangles per ellipse
    pub segments: u32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl FrameStyle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            trail_fade_start: settings.tuning.trail_fade_start,
            trail_fade_end: settings.tuning.trail_fade_end,
            flash_alpha: settings.tuning.flash_alpha,
            segments: 24,
        }
    }
}

/// Tessellate one frame
pub fn build_frame(snapshot: &Snapshot, style: &FrameStyle) -> Vec<Vertex> {
    let arena = snapshot.arena.bounds();
    let mut vertices = shapes::rect(&arena, colors::BACKGROUND);

    vertices.extend(shapes::ball_trail(
        &snapshot.trail,
        colors::BALL,
        style.trail_fade_start,
        style.trail_fade_end,
        style.segments / 2,
    ));
    vertices.extend(shapes::rect(&snapshot.paddle, colors::PADDLE));
    vertices.extend(shapes::ellipse_in(&snapshot.ball, colors::BALL, style.segments));

    if snapshot.flash_visible {
        vertices.extend(shapes::rect(&arena, with_alpha(colors::FLASH, style.flash_alpha)));
    }

    vertices
}
