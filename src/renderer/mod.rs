//! WebGPU rendering module
//!
//! Tessellates the confetti pool into a triangle list on the CPU and draws it
//! with a single passthrough pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
