//! Per-frame body transforms.
//!
//! Orbits are circles through the central body's position. A body with
//! axial tilt τ orbits in the plane spanned by `(cos τ, sin τ, 0)` and +Z,
//! which is exactly the XZ-plane ring rotated about Z by τ, so every body
//! stays on its drawn orbit ring.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::math::{Mat4, Vec3};

/// Orbital parameters of one body, in render units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Orbit radius.
    pub distance: f32,
    /// Axial tilt in degrees; also tilts the orbit plane.
    pub axial_tilt: f32,
    /// Seconds per orbit. Not read for the central body.
    pub orbital_period: f32,
    /// Turns about the own axis per second.
    pub rotation_period: f32,
    /// The central body does not orbit.
    pub is_central: bool,
}

/// World-space matrices of one body for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// Sphere model matrix.
    pub model: Mat4,
    /// Orbit ring model matrix.
    pub ring: Mat4,
    /// Body centre (the model matrix's translation).
    pub position: Vec3,
}

/// Orbit angle at time `t`: `2πt / T`, or 0 for the central body.
///
/// Non-positive periods are not guarded; they yield infinite or NaN angles.
#[must_use]
pub fn orbit_angle(params: &OrbitParams, t: f32) -> f32 {
    if params.is_central {
        0.0
    } else {
        TAU * t / params.orbital_period
    }
}

/// Spin angle at time `t`: `2πt · rotation_period`.
#[must_use]
pub fn spin_angle(params: &OrbitParams, t: f32) -> f32 {
    TAU * t * params.rotation_period
}

/// Position on an orbit of radius `distance`, tilted by `tilt` radians, at
/// orbit angle `angle`.
#[must_use]
pub fn orbit_offset(distance: f32, tilt: f32, angle: f32) -> Vec3 {
    Vec3::new(
        distance * tilt.cos() * angle.sin(),
        distance * tilt.sin() * angle.sin(),
        distance * angle.cos(),
    )
}

/// `Translate(offset) · RotateX(tilt) · RotateY(spin) · RotateX(90°)`.
///
/// The final quarter turn stands the sphere's +Z pole axis up along +Y
/// before tilt is applied.
#[must_use]
pub fn model_matrix(offset: Vec3, tilt: f32, spin: f32) -> Mat4 {
    let mut model = Mat4::from_translation(offset);
    model.rotate_x(tilt);
    model.rotate_y(spin);
    model.rotate_x(FRAC_PI_2);
    model
}

/// Orbit ring orientation: `RotateZ(tilt)`.
#[must_use]
pub fn ring_matrix(tilt: f32) -> Mat4 {
    Mat4::from_rotation_z(tilt)
}

/// All matrices for one body at time `t` (seconds).
#[must_use]
pub fn compose(params: &OrbitParams, t: f32) -> BodyTransform {
    let tilt = params.axial_tilt.to_radians();
    let offset = orbit_offset(params.distance, tilt, orbit_angle(params, t));
    BodyTransform {
        model: model_matrix(offset, tilt, spin_angle(params, t)),
        ring: ring_matrix(tilt),
        position: offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(distance: f32, tilt: f32, period: f32, rotation: f32) -> OrbitParams {
        OrbitParams {
            distance,
            axial_tilt: tilt,
            orbital_period: period,
            rotation_period: rotation,
            is_central: false,
        }
    }

    #[test]
    fn offset_reference_points() {
        let d = 42.0;
        assert!(orbit_offset(d, 0.0, 0.0).abs_diff_eq(Vec3::new(0.0, 0.0, d), 1e-5));
        assert!(orbit_offset(d, FRAC_PI_2, FRAC_PI_2).abs_diff_eq(Vec3::new(0.0, d, 0.0), 1e-4));
    }

    #[test]
    fn quarter_orbit_lands_on_x() {
        let params = planet(100.0, 0.0, 10.0, 1.0);
        let transform = compose(&params, 2.5);
        assert!(transform.position.abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-3));
        assert!(transform
            .model
            .translation()
            .abs_diff_eq(Vec3::new(100.0, 0.0, 0.0), 1e-3));
    }

    #[test]
    fn central_body_stays_put() {
        let sun = OrbitParams {
            distance: 0.0,
            axial_tilt: 7.25,
            orbital_period: 0.0,
            rotation_period: 0.04,
            is_central: true,
        };
        for t in [0.0, 1.0, 100.0] {
            assert_eq!(orbit_angle(&sun, t), 0.0);
            assert!(compose(&sun, t).position.abs_diff_eq(Vec3::ZERO, 1e-6));
        }
        assert!((spin_angle(&sun, 10.0) - TAU * 0.4).abs() < 1e-5);
    }

    #[test]
    fn model_chain_matches_explicit_product() {
        let offset = Vec3::new(3.0, -2.0, 7.0);
        let (tilt, spin) = (0.4, 1.3);
        let expected = Mat4::from_translation(offset)
            * Mat4::from_rotation_x(tilt)
            * Mat4::from_rotation_y(spin)
            * Mat4::from_rotation_x(FRAC_PI_2);
        assert!(model_matrix(offset, tilt, spin).abs_diff_eq(&expected, 1e-5));

        let glam_expected = glam::Mat4::from_translation(offset.into())
            * glam::Mat4::from_rotation_x(tilt)
            * glam::Mat4::from_rotation_y(spin)
            * glam::Mat4::from_rotation_x(FRAC_PI_2);
        assert!(model_matrix(offset, tilt, spin).abs_diff_eq(&glam_expected.into(), 1e-5));
    }

    #[test]
    fn body_stays_on_its_ring() {
        let params = planet(250.0, 23.4, 365.2, 1.0);
        let transform = compose(&params, 40.0);
        // Undo the ring tilt: the point must lie on the XZ circle.
        let local = transform.position.transform_mat4(&ring_matrix(-params.axial_tilt.to_radians()));
        assert!(local.y.abs() < 1e-3);
        assert!((local.length() - 250.0).abs() < 1e-2);
    }

    #[test]
    fn retrograde_spin_turns_backwards() {
        let venus = planet(1.0, 0.0, 1.0, -5832.5 / 24.0);
        assert!(spin_angle(&venus, 1.0) < 0.0);
    }

    #[test]
    fn zero_period_propagates_non_finite() {
        let params = planet(1.0, 0.0, 0.0, 1.0);
        assert!(!orbit_angle(&params, 1.0).is_finite());
    }
}
