use std::f32::consts::TAU;

use super::Mesh;
use crate::error::OrreryError;
use crate::gpu::{Topology, VertexLayout};

/// Vertex of an orbit ring.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RingVertex {
    /// Position on the circle.
    pub position: [f32; 3],
}

/// Circle of radius `r` in the XZ plane, drawn as a line loop.
///
/// Holds `sectors + 1` vertices: the last one repeats the first so the loop
/// closes on the same point it starts from.
#[derive(Debug, Clone)]
pub struct OrbitRingMesh {
    radius: f32,
    vertices: Vec<RingVertex>,
}

impl OrbitRingMesh {
    /// Sample a ring.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Geometry`] when `sectors` is zero.
    pub fn new(radius: f32, sectors: u32) -> Result<Self, OrreryError> {
        if sectors == 0 {
            return Err(OrreryError::Geometry(
                "orbit ring needs at least one sector".to_owned(),
            ));
        }

        let step = TAU / sectors as f32;
        let vertices = (0..=sectors)
            .map(|k| {
                // Index C lands exactly on index 0 instead of on 2π's
                // rounding error.
                let angle = if k == sectors { 0.0 } else { k as f32 * step };
                RingVertex {
                    position: [radius * angle.cos(), 0.0, radius * angle.sin()],
                }
            })
            .collect();

        Ok(Self { radius, vertices })
    }

    /// Ring radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Typed vertices.
    #[must_use]
    pub fn vertices(&self) -> &[RingVertex] {
        &self.vertices
    }
}

impl Mesh for OrbitRingMesh {
    fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn indices(&self) -> &[u16] {
        &[]
    }

    fn layout(&self) -> VertexLayout {
        VertexLayout::new().push_float(3)
    }

    fn topology(&self) -> Topology {
        Topology::LineLoop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn closes_on_first_vertex() {
        for sectors in [1, 3, 100, 360] {
            let ring = OrbitRingMesh::new(250.0, sectors).unwrap();
            let v = ring.vertices();
            assert_eq!(v.len(), sectors as usize + 1);
            assert_eq!(v[0], v[v.len() - 1]);
            assert_eq!(ring.draw_count(), sectors + 1);
        }
    }

    #[test]
    fn samples_lie_on_circle_in_xz_plane() {
        let ring = OrbitRingMesh::new(4.0, 12).unwrap();
        for v in ring.vertices() {
            let p = Vec3::from(v.position);
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 4.0).abs() < 1e-5);
        }
        // Quarter turn lands on +Z.
        assert!(Vec3::from(ring.vertices()[3].position).abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-5));
    }

    #[test]
    fn non_indexed_line_loop() {
        let ring = OrbitRingMesh::new(1.0, 8).unwrap();
        assert!(ring.indices().is_empty());
        assert_eq!(ring.topology(), Topology::LineLoop);
        assert_eq!(ring.layout().stride(), 12);
        assert_eq!(ring.vertex_data().len(), 27);
    }

    #[test]
    fn rejects_zero_sectors() {
        assert!(OrbitRingMesh::new(1.0, 0).is_err());
    }
}
