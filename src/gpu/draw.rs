//! Draw submission.
//!
//! A frame is handed to the backend as uniform writes plus one [`DrawCall`]
//! per mesh. Global uniforms are written once per frame; each body then
//! writes its own model matrix and flags before its sphere and ring draws.

use super::uniforms::{ShaderProgram, UniformSink};
use crate::geometry::Mesh;
use crate::scene::{Frame, Scene};

/// Texture unit the body texture sampler reads from.
pub const BODY_TEXTURE_UNIT: i32 = 0;

/// Primitive assembly mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Independent triangles.
    Triangles,
    /// Connected line strip whose last vertex joins the first.
    LineLoop,
}

impl Topology {
    /// wgpu has no line-loop primitive; a loop is drawn as a strip, which
    /// closes because ring meshes repeat their first vertex at the end.
    #[must_use]
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Self::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Self::LineLoop => wgpu::PrimitiveTopology::LineStrip,
        }
    }
}

/// Which scene mesh a draw call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshId {
    /// Sphere of the body at this index.
    Sphere(usize),
    /// Orbit ring of the body at this index.
    Ring(usize),
}

/// One draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    /// Mesh whose buffers are bound.
    pub mesh: MeshId,
    /// Primitive mode.
    pub topology: Topology,
    /// Index count when indexed, vertex count otherwise.
    pub count: u32,
    /// Whether the index buffer is used.
    pub indexed: bool,
}

impl DrawCall {
    /// Draw call covering all of `mesh`.
    pub fn for_mesh(id: MeshId, mesh: &impl Mesh) -> Self {
        Self {
            mesh: id,
            topology: mesh.topology(),
            count: mesh.draw_count(),
            indexed: !mesh.indices().is_empty(),
        }
    }
}

/// Backend that executes draw calls.
pub trait DrawTarget {
    /// Issue one draw with the currently written uniforms.
    fn draw(&mut self, call: DrawCall);
}

/// Write a composed frame to a backend program.
///
/// Uniforms the program does not declare are skipped silently.
pub fn submit_frame<B>(program: &mut ShaderProgram<B>, scene: &Scene, frame: &Frame)
where
    B: UniformSink + DrawTarget,
{
    let _ = program.set_uniform("u_proj", frame.projection);
    let _ = program.set_uniform("u_view", frame.view);
    let _ = program.set_uniform("u_light_position", frame.light_position);
    let _ = program.set_uniform("u_time", frame.time);

    for (index, (body, transform)) in scene.bodies().iter().zip(&frame.bodies).enumerate() {
        let _ = program.set_uniform("u_model", transform.model);
        let _ = program.set_uniform("u_emissive", body.is_central());
        let _ = program.set_uniform("u_image", BODY_TEXTURE_UNIT);
        program
            .backend_mut()
            .draw(DrawCall::for_mesh(MeshId::Sphere(index), body.sphere()));

        let _ = program.set_uniform("u_model", transform.ring);
        program
            .backend_mut()
            .draw(DrawCall::for_mesh(MeshId::Ring(index), body.ring()));
    }
    log::trace!(
        "submitted frame t={:.3}s with {} bodies",
        frame.time,
        frame.bodies.len()
    );
}
