use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the per-tick pitch and heading rotations are combined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum QuatCombine {
    /// Component-wise sum of the two quaternions, then normalize.
    #[default]
    Sum,
    /// Hamilton product `pitch · heading`. Changes the feel of large drags.
    Multiply,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, pose and drag-control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance. Ignored when `infinite_far` is set.
    #[schemars(skip)]
    pub zfar: f32,
    /// Use a projection without a far clipping plane.
    #[schemars(title = "Infinite Far Plane")]
    pub infinite_far: bool,
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial look-at point.
    #[schemars(skip)]
    pub look_at: [f32; 3],
    /// World up vector.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Pointer delta (pixels) to heading/pitch scale.
    #[schemars(title = "Drag Sensitivity", range(min = 0.0001, max = 0.01), extend("step" = 0.0001))]
    pub sensitivity: f32,
    /// Largest heading/pitch change a single pointer move may apply.
    #[schemars(skip)]
    pub max_step: f32,
    /// Per-tick multiplier applied to the heading.
    #[schemars(title = "Heading Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub heading_damping: f32,
    /// Per-tick multiplier applied to the pitch.
    #[schemars(title = "Pitch Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub pitch_damping: f32,
    /// Per-tick multiplier applied to the positional velocity.
    #[schemars(title = "Velocity Damping", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub velocity_damping: f32,
    /// Velocity added per keyboard movement step.
    #[schemars(title = "Move Speed", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Wrap the heading into `[-360, 360]` the same way as the pitch.
    #[schemars(skip)]
    pub wrap_heading: bool,
    /// Pitch/heading quaternion combination.
    #[schemars(skip)]
    pub combine: QuatCombine,
    /// Extra roll about the view Z axis, in degrees.
    #[schemars(title = "View Roll", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub view_roll_degrees: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 1.0,
            zfar: 2000.0,
            infinite_far: false,
            position: [-1000.0, 0.0, 0.0],
            look_at: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            sensitivity: 0.0008,
            max_step: 3.0,
            heading_damping: 0.9,
            pitch_damping: 0.9,
            velocity_damping: 0.8,
            move_speed: 2.0,
            wrap_heading: false,
            combine: QuatCombine::Sum,
            view_roll_degrees: 0.0,
        }
    }
}
