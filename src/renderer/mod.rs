//! WebGPU rendering module
//!
//! Draw calls are batched into flat-coloured triangles by `QuadBatch`, then
//! uploaded and presented by `RenderState`.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::{QuadBatch, TextRun};
pub use pipeline::RenderState;
pub use vertex::Vertex;
