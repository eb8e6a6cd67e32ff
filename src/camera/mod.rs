//! Camera system for navigating the scene.
//!
//! Provides a drag-driven orbit camera with inertial damping, keyboard
//! nudging and a perspective projection.

/// Orbit camera controller: pointer gestures, damping and view matrix.
pub mod controller;
/// Camera pose and projection types.
pub mod core;

pub use self::controller::{Movement, OrbitCamera};
pub use self::core::{CameraState, DragState, Projection};
