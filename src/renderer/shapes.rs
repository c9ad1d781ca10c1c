//! Shape generation for 2D primitives
//!
//! All shapes are emitted in field coordinates (pixels, y down).

use glam::Vec2;

use super::vertex::{Vertex, colors};

/// Two triangles covering the box from `min` to `max`
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// A top-down car filling the box at `pos` with `size`.
///
/// `facing_up` puts the windshield at the top (player) instead of the
/// bottom (oncoming traffic).
pub fn car(pos: Vec2, size: Vec2, body: [f32; 4], facing_up: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6 * 6);

    // Wheels stick out slightly from an inset body
    let wheel = Vec2::new(size.x * 0.18, size.y * 0.2);
    let inset = wheel.x * 0.5;
    for &(fx, fy) in &[(0.0, 0.12), (1.0, 0.12), (0.0, 0.68), (1.0, 0.68)] {
        let x = pos.x + fx * (size.x - wheel.x);
        let y = pos.y + fy * size.y;
        vertices.extend_from_slice(&rect(
            Vec2::new(x, y),
            Vec2::new(x + wheel.x, y + wheel.y),
            colors::WHEEL,
        ));
    }

    vertices.extend_from_slice(&rect(
        Vec2::new(pos.x + inset, pos.y),
        Vec2::new(pos.x + size.x - inset, pos.y + size.y),
        body,
    ));

    let shield_y = if facing_up { 0.2 } else { 0.65 };
    vertices.extend_from_slice(&rect(
        Vec2::new(pos.x + size.x * 0.25, pos.y + size.y * shield_y),
        Vec2::new(pos.x + size.x * 0.75, pos.y + size.y * (shield_y + 0.15)),
        colors::WINDSHIELD,
    ));

    vertices
}

/// Dashed centre line down the road
pub fn lane_marks(field: Vec2) -> Vec<Vertex> {
    const DASH: f32 = 40.0;
    const GAP: f32 = 30.0;
    const WIDTH: f32 = 6.0;

    let x = field.x / 2.0 - WIDTH / 2.0;
    let mut vertices = Vec::new();
    let mut y = 0.0;
    while y < field.y {
        let end = (y + DASH).min(field.y);
        vertices.extend_from_slice(&rect(
            Vec2::new(x, y),
            Vec2::new(x + WIDTH, end),
            colors::LANE_MARK,
        ));
        y += DASH + GAP;
    }
    vertices
}
