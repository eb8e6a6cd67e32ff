//! Procedural mesh generators.
//!
//! Each generator runs once at scene setup and produces immutable,
//! interleaved `f32` vertex data (plus `u16` indices where the mesh is drawn
//! indexed). Meshes are handed by reference to the GPU resource wrapper,
//! which owns the uploaded device-side copy.

mod cube;
mod ring;
mod sphere;

pub use cube::{CubeMesh, CubeVertex, FACE_OPACITY};
pub use ring::{OrbitRingMesh, RingVertex};
pub use sphere::{SphereMesh, SphereVertex};

use crate::gpu::{Topology, VertexLayout};

/// Largest vertex count addressable by `u16` indices.
pub const MAX_INDEXED_VERTICES: usize = u16::MAX as usize + 1;

/// CPU-side mesh data as seen by the GPU resource wrapper.
pub trait Mesh {
    /// Interleaved vertex components, laid out as [`Mesh::layout`] says.
    fn vertex_data(&self) -> &[f32];

    /// Index buffer, or an empty slice for non-indexed meshes.
    fn indices(&self) -> &[u16];

    /// Attribute layout of [`Mesh::vertex_data`].
    fn layout(&self) -> VertexLayout;

    /// Primitive topology the mesh is meant to be drawn with.
    fn topology(&self) -> Topology;

    /// Number of vertices.
    fn vertex_count(&self) -> usize {
        let stride = self.layout().components() as usize;
        if stride == 0 {
            0
        } else {
            self.vertex_data().len() / stride
        }
    }

    /// Element count for the draw call: index count when indexed, vertex
    /// count otherwise.
    fn draw_count(&self) -> u32 {
        if self.indices().is_empty() {
            self.vertex_count() as u32
        } else {
            self.indices().len() as u32
        }
    }
}
