use crate::camera::core::{CameraState, DragState};
use crate::math::{Mat4, Quat, Vec3};
use crate::options::{CameraOptions, QuatCombine};

/// Keyboard movement directions, relative to the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector (`direction × up`).
    Right,
    /// Along the up vector.
    Up,
    /// Against the up vector.
    Down,
}

/// Drag-driven orbit camera with inertial damping.
///
/// Pointer moves accumulate pending `heading`/`pitch` amounts; every
/// [`update`](Self::update) turns the view direction by them, advances the
/// eye by its velocity and then damps all three towards rest.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    state: CameraState,
    options: CameraOptions,
    view: Mat4,
}

impl OrbitCamera {
    /// Camera at the configured initial pose.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let state = CameraState::from_options(options);
        let mut camera = Self {
            state,
            options: options.clone(),
            view: Mat4::IDENTITY,
        };
        camera.view = camera.build_view();
        camera
    }

    /// Current pose.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Options the camera was built with.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Replace the control parameters, keeping the current pose.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = options.clone();
    }

    /// View matrix produced by the last update.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Start a drag at canvas position `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.state.drag = DragState::Dragging {
            last_x: x,
            last_y: y,
        };
    }

    /// Feed a pointer position. Ignored unless dragging.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let DragState::Dragging { last_x, last_y } = self.state.drag else {
            return;
        };

        let step = |delta: f32| {
            (self.options.sensitivity * delta)
                .clamp(-self.options.max_step, self.options.max_step)
        };
        let heading = step(last_x - x);
        let pitch = step(last_y - y);

        self.change_heading(heading);
        self.change_pitch(pitch);
        self.state.drag = DragState::Dragging {
            last_x: x,
            last_y: y,
        };
    }

    /// End the drag.
    pub fn on_pointer_up(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// Abort the drag (focus loss, touch cancel).
    pub fn on_pointer_cancel(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// Add to the pending heading. Once the pitch has carried the view past
    /// vertical the horizontal drag direction is mirrored, so the heading
    /// is subtracted instead.
    pub fn change_heading(&mut self, delta: f32) {
        let pitch = self.state.pitch;
        let upside_down = (pitch > 90.0 && pitch < 270.0) || (pitch < -90.0 && pitch > -270.0);
        if upside_down {
            self.state.heading -= delta;
        } else {
            self.state.heading += delta;
        }
        if self.options.wrap_heading {
            self.state.heading = wrap_turn(self.state.heading);
        }
    }

    /// Add to the pending pitch, wrapped into `[-360, 360]`.
    pub fn change_pitch(&mut self, delta: f32) {
        self.state.pitch = wrap_turn(self.state.pitch + delta);
    }

    /// Push the eye along a view-relative axis.
    pub fn nudge(&mut self, movement: Movement) {
        let direction = self.state.direction();
        let right = direction.cross(self.state.up).normalize();
        let up = self.state.up;
        let axis = match movement {
            Movement::Forward => direction,
            Movement::Backward => -direction,
            Movement::Right => right,
            Movement::Left => -right,
            Movement::Up => up,
            Movement::Down => -up,
        };
        self.state.position_velocity += axis * self.options.move_speed;
    }

    /// Advance one tick and return the new view matrix.
    pub fn update(&mut self) -> Mat4 {
        let state = &mut self.state;
        let direction = (state.look_at - state.position).normalize();
        let axis = direction.cross(state.up).normalize();

        let pitch_q = Quat::from_axis_angle(axis, state.pitch);
        let heading_q = Quat::from_axis_angle(state.up, state.heading);
        let rotation = match self.options.combine {
            QuatCombine::Sum => (pitch_q + heading_q).normalize(),
            QuatCombine::Multiply => (pitch_q * heading_q).normalize(),
        };
        let direction = rotation.rotate_vec3(direction);

        state.position += state.position_velocity;
        state.look_at = state.position + direction;

        state.heading *= self.options.heading_damping;
        state.pitch *= self.options.pitch_damping;
        state.position_velocity *= self.options.velocity_damping;

        self.view = self.build_view();
        log::trace!(
            "camera at {:?} heading {:.5} pitch {:.5}",
            self.state.position.to_array(),
            self.state.heading,
            self.state.pitch
        );
        self.view
    }

    /// Return to the configured initial pose, at rest and not dragging.
    pub fn reset(&mut self) {
        self.state = CameraState::from_options(&self.options);
        self.view = self.build_view();
    }

    fn build_view(&self) -> Mat4 {
        let mut view = Mat4::look_at(self.state.position, self.state.look_at, self.state.up);
        if self.options.view_roll_degrees != 0.0 {
            view.rotate_z(self.options.view_roll_degrees.to_radians());
        }
        view
    }
}

/// Fold an angle that left `[-360, 360]` back by one full turn.
fn wrap_turn(angle: f32) -> f32 {
    if angle > 360.0 {
        angle - 360.0
    } else if angle < -360.0 {
        angle + 360.0
    } else {
        angle
    }
}
