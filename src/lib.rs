// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Transform, camera, and procedural-geometry engine for an animated scene
//! of orbiting bodies.
//!
//! The crate turns a table of bodies (a central star and its orbiters) into
//! per-frame world matrices, drives a drag-controlled orbit camera, and
//! generates the sphere, orbit-ring and cube meshes the scene is drawn
//! with. Drawing itself is left to a GPU backend plugged in behind the
//! [`gpu`] contract traits.
//!
//! # Key entry points
//!
//! - [`scene::SceneState`] - owns scene, camera, input queue and clock;
//!   `tick()` produces a [`scene::Frame`]
//! - [`scene::BodyTable`] - body records, built in or loaded from TOML
//! - [`camera::OrbitCamera`] - pointer-driven camera with inertial damping
//! - [`geometry`] - sphere, ring and cube generators
//! - [`gpu::submit_frame`] - writes a frame through a
//!   [`gpu::UniformSink`] + [`gpu::DrawTarget`] backend
//! - [`options::Options`] - runtime configuration (camera, geometry, scene
//!   units, keybindings)
//!
//! # Frame flow
//!
//! Meshes are generated once when the scene is built. Each tick drains the
//! input queue into the camera, updates the camera pose, recomputes the
//! projection from the polled viewport and composes every body's model and
//! ring matrices for the current simulation time.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod math;
pub mod options;
pub mod scene;
pub mod util;

pub use error::OrreryError;
