use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::{Mesh, MAX_INDEXED_VERTICES};
use crate::error::OrreryError;
use crate::gpu::{Topology, VertexLayout};
use crate::math::Vec3;

/// Vertex of a tessellated sphere.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position on the sphere surface.
    pub position: [f32; 3],
    /// Outward unit normal.
    pub normal: [f32; 3],
    /// Texture coordinate `(sector / C, stack / S)`.
    pub uv: [f32; 2],
}

/// UV sphere with its pole axis along +Z.
///
/// Vertices form a `(stacks + 1) × (sectors + 1)` grid; the seam column is
/// duplicated so texture coordinates wrap cleanly. The first and last stacks
/// each touch a pole, where one of the two triangles of every quad collapses
/// to zero area and is therefore not emitted.
#[derive(Debug, Clone)]
pub struct SphereMesh {
    radius: f32,
    stacks: u32,
    sectors: u32,
    vertices: Vec<SphereVertex>,
    indices: Vec<u16>,
}

impl SphereMesh {
    /// Tessellate a sphere.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Geometry`] when `stacks` or `sectors` is zero,
    /// or when the vertex grid does not fit `u16` indices.
    pub fn new(radius: f32, stacks: u32, sectors: u32) -> Result<Self, OrreryError> {
        if stacks == 0 || sectors == 0 {
            return Err(OrreryError::Geometry(format!(
                "sphere needs at least one stack and sector, got {stacks}x{sectors}"
            )));
        }
        let vertex_count = (stacks as usize + 1) * (sectors as usize + 1);
        if vertex_count > MAX_INDEXED_VERTICES {
            return Err(OrreryError::Geometry(format!(
                "sphere {stacks}x{sectors} needs {vertex_count} vertices, \
                 more than u16 indices can address"
            )));
        }

        Ok(Self {
            radius,
            stacks,
            sectors,
            vertices: Self::generate_vertices(radius, stacks, sectors),
            indices: Self::generate_indices(stacks, sectors),
        })
    }

    /// Sphere with equal stack and sector counts.
    ///
    /// # Errors
    ///
    /// Same as [`SphereMesh::new`].
    pub fn with_detail(radius: f32, detail: u32) -> Result<Self, OrreryError> {
        Self::new(radius, detail, detail)
    }

    fn generate_vertices(radius: f32, stacks: u32, sectors: u32) -> Vec<SphereVertex> {
        let stack_step = PI / stacks as f32;
        let sector_step = TAU / sectors as f32;
        let mut vertices =
            Vec::with_capacity((stacks as usize + 1) * (sectors as usize + 1));

        for i in 0..=stacks {
            let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
            let xy = radius * stack_angle.cos();
            let z = radius * stack_angle.sin();

            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let position = Vec3::new(xy * sector_angle.cos(), xy * sector_angle.sin(), z);
                vertices.push(SphereVertex {
                    position: position.to_array(),
                    normal: position.normalize().to_array(),
                    uv: [j as f32 / sectors as f32, i as f32 / stacks as f32],
                });
            }
        }
        vertices
    }

    fn generate_indices(stacks: u32, sectors: u32) -> Vec<u16> {
        let mut indices =
            Vec::with_capacity(Self::expected_triangle_count(stacks, sectors) * 3);

        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;

            for _ in 0..sectors {
                // The north-pole stack has no upper triangle, the south-pole
                // stack no lower one.
                if i != 0 {
                    indices.extend([k1, k2, k1 + 1].map(|k| k as u16));
                }
                if i != stacks - 1 {
                    indices.extend([k1 + 1, k2, k2 + 1].map(|k| k as u16));
                }
                k1 += 1;
                k2 += 1;
            }
        }
        indices
    }

    /// Triangle count of an `S × C` tessellation: two per quad, minus one
    /// per sector column at each pole. Zero when there are fewer than two
    /// stacks.
    #[must_use]
    pub fn expected_triangle_count(stacks: u32, sectors: u32) -> usize {
        let (s, c) = (stacks as usize, sectors as usize);
        2 * c * s.saturating_sub(1)
    }

    /// Sphere radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of latitude bands.
    #[must_use]
    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    /// Number of longitude bands.
    #[must_use]
    pub fn sectors(&self) -> u32 {
        self.sectors
    }

    /// Typed vertices.
    #[must_use]
    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// Number of emitted triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Mesh for SphereMesh {
    fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn indices(&self) -> &[u16] {
        &self.indices
    }

    fn layout(&self) -> VertexLayout {
        VertexLayout::new().push_float(3).push_float(3).push_float(2)
    }

    fn topology(&self) -> Topology {
        Topology::Triangles
    }
}
