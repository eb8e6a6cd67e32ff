use crate::math::{Mat4, Vec3};
use crate::options::CameraOptions;

/// Pointer gesture state of the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held; pointer moves are ignored.
    #[default]
    Idle,
    /// Button held since the recorded pointer position.
    Dragging {
        /// Last pointer x in canvas pixels.
        last_x: f32,
        /// Last pointer y in canvas pixels.
        last_y: f32,
    },
}

/// Mutable pose of the orbit camera.
///
/// `pitch` and `heading` are pending rotation amounts: each tick turns the
/// view direction by them and then damps them towards zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// World up vector.
    pub up: Vec3,
    /// Pending rotation about the camera's right axis.
    pub pitch: f32,
    /// Pending rotation about the up vector.
    pub heading: f32,
    /// Per-tick positional velocity.
    pub position_velocity: Vec3,
    /// Pointer gesture state.
    pub drag: DragState,
}

impl CameraState {
    /// Initial pose from options, at rest.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::from(options.position),
            look_at: Vec3::from(options.look_at),
            up: Vec3::from(options.up),
            pitch: 0.0,
            heading: 0.0,
            position_velocity: Vec3::ZERO,
            drag: DragState::Idle,
        }
    }

    /// Unit vector from the eye towards the look-at point (zero when they
    /// coincide).
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.look_at - self.position).normalize()
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance, `None` for an infinite far plane.
    pub zfar: Option<f32>,
}

impl Projection {
    /// Projection described by camera options.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            fovy: options.fovy,
            znear: options.znear,
            zfar: (!options.infinite_far).then_some(options.zfar),
        }
    }

    /// Projection matrix for a viewport aspect ratio (width / height).
    #[must_use]
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective(self.fovy.to_radians(), aspect, self.znear, self.zfar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_looks_down_x() {
        let state = CameraState::from_options(&CameraOptions::default());
        assert_eq!(state.position, Vec3::new(-1000.0, 0.0, 0.0));
        assert!(state.direction().abs_diff_eq(Vec3::X, 1e-6));
        assert!(!state.is_dragging());
    }

    #[test]
    fn projection_matches_glam() {
        let projection = Projection::from_options(&CameraOptions::default());
        let ours = projection.matrix(16.0 / 9.0);
        let expected = glam::Mat4::perspective_rh_gl(
            std::f32::consts::FRAC_PI_2,
            16.0 / 9.0,
            1.0,
            2000.0,
        );
        assert!(ours.abs_diff_eq(&expected.into(), 1e-5));
    }

    #[test]
    fn infinite_far_option() {
        let options = CameraOptions {
            infinite_far: true,
            ..CameraOptions::default()
        };
        let projection = Projection::from_options(&options);
        assert_eq!(projection.zfar, None);
        let m = projection.matrix(1.0);
        assert_eq!(m.m[10], -1.0);
        assert_eq!(m.m[14], -2.0);
    }
}
