//! Scene composition: bodies, their per-frame transforms, and the tick loop
//! that ties camera, input and timing together.
//!
//! A [`Scene`] is built once from a [`BodyTable`]; a [`SceneState`] owns it
//! along with the camera and input queue and turns each tick into a
//! [`Frame`] of matrices ready for submission.

/// Scene bodies in render units.
pub mod body;
/// Orbit, spin and model/ring matrix composition.
pub mod composer;
/// Body record tables and quantity parsing.
pub mod table;
/// Polled drawable size.
pub mod viewport;

pub use body::Body;
pub use composer::{BodyTransform, OrbitParams};
pub use table::{parse_quantity, BodyRecord, BodyTable, Measure};
pub use viewport::Viewport;

use crate::camera::{OrbitCamera, Projection};
use crate::error::OrreryError;
use crate::input::{input_channel, InputProcessor, InputReceiver, InputSender};
use crate::math::{Mat4, Vec3};
use crate::options::Options;
use crate::util::FrameTiming;

/// The set of bodies being simulated. Immutable once built.
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    central: Option<usize>,
}

impl Scene {
    /// Validate a table and build every body's meshes.
    ///
    /// # Errors
    ///
    /// [`OrreryError::InvalidBody`] for an empty table, more than one
    /// central body, or any invalid record; [`OrreryError::Geometry`] when
    /// the configured mesh detail is out of range.
    pub fn from_table(table: &BodyTable, options: &Options) -> Result<Self, OrreryError> {
        if table.bodies.is_empty() {
            return Err(OrreryError::InvalidBody {
                name: "<table>".to_owned(),
                reason: "no bodies".to_owned(),
            });
        }
        let mut central: Option<usize> = None;
        for (index, record) in table.bodies.iter().enumerate() {
            if record.is_central {
                if let Some(first) = central {
                    return Err(OrreryError::InvalidBody {
                        name: record.name.clone(),
                        reason: format!(
                            "second central body after {}",
                            table.bodies[first].name
                        ),
                    });
                }
                central = Some(index);
            }
        }

        let bodies = table
            .bodies
            .iter()
            .map(|record| Body::from_record(record, &options.scene, &options.geometry))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "scene built: {} bodies, {} sphere triangles",
            bodies.len(),
            bodies.iter().map(|b| b.sphere().triangle_count()).sum::<usize>()
        );
        Ok(Self { bodies, central })
    }

    /// Bodies in table order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// The central body, if the table has one.
    #[must_use]
    pub fn central(&self) -> Option<&Body> {
        self.central.and_then(|i| self.bodies.get(i))
    }

    /// Find a body by name, ignoring ASCII case.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Every body's transforms at `t` seconds, in body order.
    #[must_use]
    pub fn compose(&self, t: f32) -> Vec<BodyTransform> {
        self.bodies
            .iter()
            .map(|body| composer::compose(body.orbit(), t))
            .collect()
    }
}

/// Everything one tick produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Simulation time in seconds.
    pub time: f32,
    /// Camera view matrix.
    pub view: Mat4,
    /// Projection matrix for the current viewport.
    pub projection: Mat4,
    /// Eye position.
    pub camera_position: Vec3,
    /// Position of the central body (origin if there is none).
    pub light_position: Vec3,
    /// Per-body transforms, in scene body order.
    pub bodies: Vec<BodyTransform>,
}

/// Owns the scene, camera, input queue, clock and viewport, and advances
/// them one tick at a time.
#[derive(Debug)]
pub struct SceneState {
    scene: Scene,
    camera: OrbitCamera,
    projection: Projection,
    input: InputReceiver,
    processor: InputProcessor,
    clock: FrameTiming,
    viewport: Viewport,
}

impl SceneState {
    /// Build the scene and return the state with a sender for input events.
    ///
    /// # Errors
    ///
    /// Same as [`Scene::from_table`].
    pub fn new(
        options: &Options,
        table: &BodyTable,
        width: u32,
        height: u32,
    ) -> Result<(Self, InputSender), OrreryError> {
        let scene = Scene::from_table(table, options)?;
        let (sender, input) = input_channel();
        let state = Self {
            scene,
            camera: OrbitCamera::new(&options.camera),
            projection: Projection::from_options(&options.camera),
            input,
            processor: InputProcessor::new(options.keybindings.clone()),
            clock: FrameTiming::default(),
            viewport: Viewport::new(width, height),
        };
        Ok((state, sender))
    }

    /// Advance one tick at the clock's elapsed time.
    pub fn tick(&mut self) -> Frame {
        let frame = self.tick_at(self.clock.elapsed_secs());
        let _ = self.clock.end_frame();
        frame
    }

    /// Advance one tick at simulation time `t`: drain queued input, update
    /// the camera, then compose projection and body matrices.
    pub fn tick_at(&mut self, t: f32) -> Frame {
        for event in self.input.drain() {
            self.processor.handle_event(&event, &mut self.camera);
        }
        self.processor.apply_held(&mut self.camera);

        let view = self.camera.update();
        let projection = self.projection.matrix(self.viewport.aspect());
        let bodies = self.scene.compose(t);
        let light_position = self
            .scene
            .central
            .and_then(|i| bodies.get(i))
            .map_or(Vec3::ZERO, |b| b.position);

        log::debug!("tick t={t:.3}s, {} bodies", bodies.len());
        Frame {
            time: t,
            view,
            projection,
            camera_position: self.camera.state().position,
            light_position,
            bodies,
        }
    }

    /// Poll the drawable size; see [`Viewport::poll_resize`].
    pub fn poll_resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.poll_resize(width, height)
    }

    /// The simulated bodies.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The camera, for direct pointer calls.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frame clock.
    #[must_use]
    pub fn clock(&self) -> &FrameTiming {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::options::GeometryOptions;

    fn options() -> Options {
        Options {
            geometry: GeometryOptions {
                sphere_stacks: 6,
                sphere_sectors: 6,
                ring_sectors: 12,
            },
            ..Options::default()
        }
    }

    fn two_body_table() -> BodyTable {
        BodyTable::from_toml_str(
            r#"
[[body]]
name = "STAR"
diameter = 1000
rotation_period = 24
is_central = true

[[body]]
name = "ROCK"
diameter = 12756
orbital_period = 10
rotation_period = 24
distance = 0
"#,
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_and_double_central_tables() {
        let err = Scene::from_table(&BodyTable::default(), &options()).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidBody { .. }));

        let mut table = two_body_table();
        table.bodies[1].is_central = true;
        let err = Scene::from_table(&table, &options()).unwrap_err();
        assert!(matches!(err, OrreryError::InvalidBody { ref name, .. } if name == "ROCK"));
    }

    #[test]
    fn solar_system_builds() {
        let scene = Scene::from_table(&BodyTable::solar_system(), &options()).unwrap();
        assert_eq!(scene.bodies().len(), 10);
        assert_eq!(scene.central().unwrap().name(), "SUN");
        assert!(scene.body("pluto").unwrap().orbital_distance() > 6000.0);
        let frames = scene.compose(12.0);
        assert!(frames.iter().all(|f| f.model.is_finite()));
    }

    #[test]
    fn quarter_orbit_after_setup_offset() {
        // Distance 0 in the table becomes the central radius (109).
        let (mut state, _tx) = SceneState::new(&options(), &two_body_table(), 800, 600).unwrap();
        let frame = state.tick_at(2.5);
        let rock = frame.bodies[1].position;
        assert!(rock.abs_diff_eq(Vec3::new(109.0, 0.0, 0.0), 1e-3));
        assert!(frame.light_position.abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn queued_input_is_applied_before_update() {
        let (mut state, tx) = SceneState::new(&options(), &two_body_table(), 800, 600).unwrap();
        let before = state.tick_at(0.0).view;

        assert!(tx.pointer_down(400.0, 300.0));
        assert!(tx.pointer_move(300.0, 300.0));
        assert!(tx.pointer_up());
        let frame = state.tick_at(0.0);

        // Drag of 100px → heading 0.08, damped once by the update.
        assert!((state.camera().state().heading - 0.08 * 0.9).abs() < 1e-6);
        assert!(!frame.view.abs_diff_eq(&before, 1e-6));
    }

    #[test]
    fn keyboard_events_move_the_camera() {
        let (mut state, tx) = SceneState::new(&options(), &two_body_table(), 800, 600).unwrap();
        assert!(tx.send(InputEvent::key_down("KeyW")));
        let first = state.tick_at(0.0).camera_position;
        let second = state.tick_at(0.0).camera_position;
        assert!(first.x > -1000.0);
        assert!(second.x > first.x);
    }

    #[test]
    fn focus_loss_stops_keyboard_drift() {
        let (mut state, tx) = SceneState::new(&options(), &two_body_table(), 800, 600).unwrap();
        assert!(tx.send(InputEvent::key_down("KeyW")));
        let held = state.tick_at(0.0).camera_position.x;

        assert!(tx.send(InputEvent::FocusLost));
        let mut last = held;
        for _ in 0..100 {
            last = state.tick_at(0.0).camera_position.x;
        }
        // Only the residual velocity (at most 2 / (1 - 0.8)) carries on.
        assert!(last - held < 10.0);
    }

    #[test]
    fn projection_follows_viewport() {
        let (mut state, _tx) = SceneState::new(&options(), &two_body_table(), 800, 800).unwrap();
        let square = state.tick_at(0.0).projection;
        assert!(state.poll_resize(1600, 800));
        assert!(!state.poll_resize(0, 0));
        let wide = state.tick_at(0.0).projection;
        assert!((wide.m[0] - square.m[0] / 2.0).abs() < 1e-6);
        assert_eq!(wide.m[5], square.m[5]);
    }

    #[test]
    fn wall_clock_tick_advances_time() {
        let (mut state, _tx) = SceneState::new(&options(), &two_body_table(), 800, 600).unwrap();
        let first = state.tick();
        let second = state.tick();
        assert!(second.time >= first.time);
        assert_eq!(state.clock().frames(), 2);
    }
}
