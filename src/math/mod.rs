//! Linear and angular algebra primitives.
//!
//! Small `Copy` value types with the OpenGL conventions the renderer
//! expects: column-major matrices, right-handed coordinates and clip-space
//! z in `[-1, 1]`. Degenerate inputs (zero-length vectors, coincident
//! look-at points, nearly identical slerp operands) resolve to defined
//! fallback values instead of NaN.
//!
//! Every type is `bytemuck::Pod` so it can be uploaded as-is, and converts
//! losslessly to and from its `glam` counterpart.

mod interop;
mod mat3;
mod mat4;
mod quat;
mod vec3;
mod vec4;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Tolerance used for degenerate-input detection (look-at coincidence,
/// slerp fallback, zero rotation axes).
pub const EPSILON: f32 = 1e-6;
