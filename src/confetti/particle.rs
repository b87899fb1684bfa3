//! Individual confetti pieces

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::options::{ConfettiOptions, Shape};

/// Fallback color when the configured palette is empty
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One piece of confetti
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Position in pixels, y growing downward; spawns above the viewport
    pub pos: Vec2,
    /// Velocity in pixels per update
    pub vel: Vec2,
    pub color: [f32; 4],
    pub shape: Shape,
    /// Diameter (circles) or edge length (squares) in pixels
    pub size: f32,
    /// Tumble angle in degrees, unbounded; `None` when rotation is disabled
    pub rotation: Option<f32>,
    /// Degrees added to the angle each update
    pub clock: f32,
}

impl Particle {
    /// Roll a fresh particle from the configured distributions. Zero-valued
    /// size/speed/clock settings are tolerated and just produce inert pieces.
    pub fn spawn(opts: &ConfettiOptions, width: f32, height: f32, rng: &mut Pcg32) -> Self {
        let color = opts.colors.choose(rng).copied().unwrap_or(WHITE);
        let shape = opts.shapes.choose(rng).copied().unwrap_or(Shape::Circle);
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * width,
                -(rng.random::<f32>() * height),
            ),
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * opts.speed,
                rng.random::<f32>() * opts.speed,
            ),
            color,
            shape,
            size: (rng.random::<f32>() * opts.size).floor() + opts.size,
            rotation: if opts.rotation {
                Some(rng.random::<f32>() * 360.0)
            } else {
                None
            },
            clock: (rng.random::<f32>() * opts.clock).floor(),
        }
    }

    /// Advance one update: integrate velocity, tumble when enabled
    pub fn advance(&mut self) {
        self.pos += self.vel;
        if let Some(angle) = &mut self.rotation {
            *angle += self.clock;
        }
    }
}
