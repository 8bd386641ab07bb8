//! Shape generation for 2D primitives
//!
//! All shapes come out as plain triangle lists.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let p1 = rim_point(center, radius, i, segments);
        let p2 = rim_point(center, radius, i + 1, segments);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (circle outline with thickness)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let inner1 = rim_point(center, inner_radius, i, segments);
        let outer1 = rim_point(center, outer_radius, i, segments);
        let inner2 = rim_point(center, inner_radius, i + 1, segments);
        let outer2 = rim_point(center, outer_radius, i + 1, segments);

        vertices.extend(quad(inner1, outer1, inner2, outer2, color));
    }

    vertices
}

/// Axis-aligned filled rectangle from its top-left corner
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let tl = origin;
    let tr = origin + Vec2::new(size.x, 0.0);
    let bl = origin + Vec2::new(0.0, size.y);
    let br = origin + size;
    quad(tl, tr, bl, br, color).to_vec()
}

/// Heart icon, 30 wide by 20 tall. `top` is the notch between the lobes;
/// the tip sits 20 units below it.
///
/// Two cubic beziers: tip → left lobe → notch, then notch → right lobe → tip.
pub fn heart(top: Vec2, color: [f32; 4], segments_per_side: u32) -> Vec<Vertex> {
    let tip = top + Vec2::new(0.0, 20.0);
    let left = [
        tip,
        top + Vec2::new(-15.0, 10.0),
        top + Vec2::new(-15.0, -10.0),
        top,
    ];
    let right = [
        top,
        top + Vec2::new(15.0, -10.0),
        top + Vec2::new(15.0, 10.0),
        tip,
    ];

    let n = segments_per_side.max(1);
    let mut outline = Vec::with_capacity((n * 2) as usize + 1);
    for curve in [left, right] {
        for i in 0..n {
            outline.push(cubic_bezier(curve, i as f32 / n as f32));
        }
    }
    outline.push(tip);

    // The outline is star-shaped around a point halfway down
    let hub = top + Vec2::new(0.0, 8.0);
    let mut vertices = Vec::with_capacity(outline.len() * 3);
    for pair in outline.windows(2) {
        vertices.push(Vertex::new(hub.x, hub.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Point on a cubic bezier at parameter t in [0, 1]
pub fn cubic_bezier(p: [Vec2; 4], t: f32) -> Vec2 {
    let u = 1.0 - t;
    p[0] * (u * u * u) + p[1] * (3.0 * u * u * t) + p[2] * (3.0 * u * t * t) + p[3] * (t * t * t)
}

#[inline]
fn rim_point(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * 2.0 * PI;
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Two triangles covering a quad given as a1, b1, a2, b2
fn quad(a1: Vec2, b1: Vec2, a2: Vec2, b2: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}
