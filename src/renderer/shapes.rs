//! Triangle-list tessellation for the confetti shapes

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::confetti::{Particle, Shape};

/// Fan segments per circle. Pieces are small, so a coarse fan reads as round.
pub const CIRCLE_SEGMENTS: u32 = 12;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled square centered on `center`, rotated by
/// `angle_deg` around its own center
pub fn square(center: Vec2, size: f32, angle_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let rotate = |dx: f32, dy: f32| {
        Vec2::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    };

    let tl = rotate(-half, -half);
    let tr = rotate(half, -half);
    let bl = rotate(-half, half);
    let br = rotate(half, half);

    // Two triangles
    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Tessellate the whole pool. Squares lean on their spawn angle; a piece with
/// rotation disabled draws axis-aligned.
pub fn confetti_vertices(particles: &[Particle]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(particles.len() * (CIRCLE_SEGMENTS * 3) as usize);

    for p in particles {
        match p.shape {
            Shape::Circle => {
                vertices.extend(circle(p.pos, p.size / 2.0, p.color, CIRCLE_SEGMENTS));
            }
            Shape::Square => {
                vertices.extend(square(p.pos, p.size, p.rotation.unwrap_or(0.0), p.color));
            }
        }
    }

    vertices
}
