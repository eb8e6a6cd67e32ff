//! Contracts between the scene and a GPU backend.
//!
//! Vertex layouts map onto wgpu vertex formats, uniforms travel through a
//! cached [`ShaderProgram`], and frames are submitted as uniform writes plus
//! [`DrawCall`]s. The renderer itself lives outside this crate.

/// Draw calls, topologies and frame submission.
pub mod draw;
/// Vertex attribute layouts and their wgpu mapping.
pub mod layout;
/// Command-recording backend for headless runs.
pub mod recording;
/// Uniform values and the location-caching shader program.
pub mod uniforms;

pub use draw::{submit_frame, DrawCall, DrawTarget, MeshId, Topology};
pub use layout::{ElementType, VertexAttribute, VertexLayout};
pub use recording::{Command, RecordingBackend};
pub use uniforms::{ShaderProgram, UniformLocation, UniformSink, UniformValue};
