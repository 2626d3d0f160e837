//! Shape generation for 2D primitives

use glam::{IVec2, Vec2};
use std::f32::consts::PI;

use super::vertex::{Vertex, with_alpha};
use crate::sim::{Rect, trail_alpha};

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.left() as f32, r.top() as f32);
    let (x1, y1) = (r.right() as f32, r.bottom() as f32);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Ellipse inscribed in a rectangle
pub fn ellipse_in(r: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let center = Vec2::new(r.x as f32 + r.w as f32 / 2.0, r.y as f32 + r.h as f32 / 2.0);
    let radii = Vec2::new(r.w as f32 / 2.0, r.h as f32 / 2.0);
    ellipse(center, radii, color, segments)
}

/// Trail sprite radius: shrinks with age, never below 6px
#[inline]
pub fn trail_radius(idx: usize) -> f32 {
    14usize.saturating_sub(idx).max(6) as f32
}

/// Generate vertices for a ball trail (newest first), fading from
/// `fade_start` to `fade_end` alpha. Fewer than two points draw nothing.
pub fn ball_trail(
    trail: &[IVec2],
    color: [f32; 4],
    fade_start: u8,
    fade_end: u8,
    segments: u32,
) -> Vec<Vertex> {
    if trail.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(trail.len() * segments as usize * 3);
    for (idx, point) in trail.iter().enumerate() {
        let Some(alpha) = trail_alpha(idx, trail.len(), fade_start, fade_end) else {
            continue;
        };
        let r = trail_radius(idx);
        vertices.extend(ellipse(
            point.as_vec2(),
            Vec2::splat(r),
            with_alpha(color, alpha),
            segments,
        ));
    }

    vertices
}
