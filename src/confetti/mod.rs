//! Celebration confetti
//!
//! A fixed pool of particles raining down the canvas. Pure simulation:
//! timestamps come in from the caller and vertices go out through the
//! renderer, nothing here touches the platform.

pub mod options;
pub mod particle;
pub mod system;

pub use options::{ConfettiOptions, DEFAULT_COLORS, Shape};
pub use particle::Particle;
pub use system::ConfettiSystem;
