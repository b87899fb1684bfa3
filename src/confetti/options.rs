//! Confetti configuration
//!
//! Every field has a default, so partial configs use struct update syntax:
//! `ConfettiOptions { max_count: 40, ..Default::default() }` keeps the rest.

use serde::{Deserialize, Serialize};

/// Particle silhouette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
}

/// Default palette: straw, rose, sky, tangerine, sage, mauve, seafoam
pub const DEFAULT_COLORS: [[f32; 4]; 7] = [
    [0.902, 0.784, 0.298, 1.0],
    [0.957, 0.561, 0.694, 1.0],
    [0.494, 0.784, 0.890, 1.0],
    [0.996, 0.694, 0.267, 1.0],
    [0.631, 0.757, 0.506, 1.0],
    [0.725, 0.627, 0.725, 1.0],
    [0.502, 0.808, 0.839, 1.0],
];

/// Confetti system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfettiOptions {
    /// Canvas element id the effect draws into
    pub target: String,
    /// Fixed particle pool size
    pub max_count: usize,
    /// Palette particles pick their color from
    pub colors: Vec<[f32; 4]>,
    /// Silhouettes particles pick their shape from
    pub shapes: Vec<Shape>,
    /// Base size in pixels; spawned sizes land in [size, 2 * size)
    pub size: f32,
    /// Velocity scale in pixels per update
    pub speed: f32,
    /// Whether particles tumble
    pub rotation: bool,
    /// Upper bound on per-update tumble in degrees
    pub clock: f32,
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            target: String::from("confetti-canvas"),
            max_count: 150,
            colors: DEFAULT_COLORS.to_vec(),
            shapes: vec![Shape::Circle, Shape::Square],
            size: 20.0,
            speed: 8.0,
            rotation: true,
            clock: 25.0,
        }
    }
}
