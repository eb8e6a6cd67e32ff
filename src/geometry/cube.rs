use super::Mesh;
use crate::error::OrreryError;
use crate::gpu::{Topology, VertexLayout};

/// Opacity of each face, in order front, back, left, right, top, bottom.
pub const FACE_OPACITY: [f32; 6] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];

/// Corner signs of each face, four corners per face in winding order.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // front (-z)
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
    // back (+z)
    [[-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // left (-x)
    [[-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0]],
    // right (+x)
    [[1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // top (+y)
    [[-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // bottom (-y)
    [[1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0]],
];

/// Vertex of the debug cube.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    /// Corner position.
    pub position: [f32; 3],
    /// Alpha of the face this vertex belongs to.
    pub opacity: f32,
}

/// Axis-aligned cube centred on the origin with unshared face vertices, so
/// each face can carry its own opacity.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    half_extent: f32,
    vertices: Vec<CubeVertex>,
    indices: Vec<u16>,
}

impl CubeMesh {
    /// Build a cube spanning `[-half_extent, half_extent]` on every axis.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Geometry`] for a non-finite extent.
    pub fn new(half_extent: f32) -> Result<Self, OrreryError> {
        if !half_extent.is_finite() {
            return Err(OrreryError::Geometry(format!(
                "cube half-extent must be finite, got {half_extent}"
            )));
        }

        let vertices = FACE_CORNERS
            .iter()
            .zip(FACE_OPACITY)
            .flat_map(|(corners, opacity)| {
                corners.iter().map(move |&[x, y, z]| CubeVertex {
                    position: [x * half_extent, y * half_extent, z * half_extent],
                    opacity,
                })
            })
            .collect();

        let indices = (0..6u16)
            .flat_map(|face| [0, 1, 2, 2, 3, 0].map(|i| face * 4 + i))
            .collect();

        Ok(Self {
            half_extent,
            vertices,
            indices,
        })
    }

    /// Half the edge length.
    #[must_use]
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Typed vertices.
    #[must_use]
    pub fn vertices(&self) -> &[CubeVertex] {
        &self.vertices
    }
}

impl Mesh for CubeMesh {
    fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn indices(&self) -> &[u16] {
        &self.indices
    }

    fn layout(&self) -> VertexLayout {
        VertexLayout::new().push_float(3).push_float(1)
    }

    fn topology(&self) -> Topology {
        Topology::Triangles
    }
}
