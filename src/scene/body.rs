use super::composer::OrbitParams;
use super::table::{BodyRecord, Measure};
use crate::error::OrreryError;
use crate::geometry::{OrbitRingMesh, SphereMesh};
use crate::options::{GeometryOptions, SceneOptions};

/// A scene body in render units, with its generated meshes.
#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    radius: f32,
    orbit: OrbitParams,
    texture_path: Option<String>,
    sphere: SphereMesh,
    ring: OrbitRingMesh,
}

impl Body {
    /// Validate a record, convert it to render units and tessellate it.
    ///
    /// # Errors
    ///
    /// [`OrreryError::InvalidBody`] when a cell is unparsable or out of
    /// range, [`OrreryError::Geometry`] when the configured detail is.
    pub fn from_record(
        record: &BodyRecord,
        scene: &SceneOptions,
        geometry: &GeometryOptions,
    ) -> Result<Self, OrreryError> {
        let invalid = |reason: String| OrreryError::InvalidBody {
            name: record.name.clone(),
            reason,
        };
        let read = |field: &str, cell: &Measure| -> Result<f32, OrreryError> {
            let value = cell
                .value()
                .map_err(|e| invalid(format!("{field}: {e}")))? as f32;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(invalid(format!("{field} is not finite")))
            }
        };

        let diameter = read("diameter", &record.diameter)?;
        let axial_tilt = read("axial_tilt", &record.axial_tilt)?;
        let rotation_hours = read("rotation_period", &record.rotation_period)?;
        if diameter < 0.0 {
            return Err(invalid(format!("negative diameter {diameter}")));
        }
        if rotation_hours == 0.0 {
            return Err(invalid("rotation period is zero".to_owned()));
        }

        let distance = read("distance", &record.distance)?;
        if distance < 0.0 {
            return Err(invalid(format!("negative distance {distance}")));
        }

        // The central body keeps its stored distance (it sits at (0, 0, d))
        // but is not pushed out past its own radius.
        let (radius, distance, orbital_period) = if record.is_central {
            (scene.central_radius, distance * scene.distance_scale, 0.0)
        } else {
            let orbit_days = read("orbital_period", &record.orbital_period)?;
            if orbit_days <= 0.0 {
                return Err(invalid(format!(
                    "orbital period must be positive, got {orbit_days}"
                )));
            }
            let radius = (diameter / 2.0) / (scene.reference_diameter / 2.0) * scene.radius_scale;
            (
                radius,
                distance * scene.distance_scale + scene.central_radius,
                orbit_days * scene.seconds_per_day,
            )
        };

        let orbit = OrbitParams {
            distance,
            axial_tilt,
            orbital_period,
            rotation_period: rotation_hours / 24.0,
            is_central: record.is_central,
        };

        Ok(Self {
            name: record.name.clone(),
            radius,
            orbit,
            texture_path: record.texture_path.clone(),
            sphere: SphereMesh::new(radius, geometry.sphere_stacks, geometry.sphere_sectors)?,
            ring: OrbitRingMesh::new(distance, geometry.ring_sectors)?,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Orbit radius; for the central body, its fixed offset along +Z.
    #[must_use]
    pub fn orbital_distance(&self) -> f32 {
        self.orbit.distance
    }

    /// Axial tilt in degrees.
    #[must_use]
    pub fn axial_tilt(&self) -> f32 {
        self.orbit.axial_tilt
    }

    /// Seconds per orbit.
    #[must_use]
    pub fn orbital_period(&self) -> f32 {
        self.orbit.orbital_period
    }

    /// Rotation period in days; negative for retrograde spin.
    #[must_use]
    pub fn rotation_period(&self) -> f32 {
        self.orbit.rotation_period
    }

    /// Whether this is the central body.
    #[must_use]
    pub fn is_central(&self) -> bool {
        self.orbit.is_central
    }

    /// Surface texture path, if any.
    #[must_use]
    pub fn texture_path(&self) -> Option<&str> {
        self.texture_path.as_deref()
    }

    /// Orbital parameters for the composer.
    #[must_use]
    pub fn orbit(&self) -> &OrbitParams {
        &self.orbit
    }

    /// Sphere mesh.
    #[must_use]
    pub fn sphere(&self) -> &SphereMesh {
        &self.sphere
    }

    /// Orbit ring mesh.
    #[must_use]
    pub fn ring(&self) -> &OrbitRingMesh {
        &self.ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::table::BodyTable;

    fn small_geometry() -> GeometryOptions {
        GeometryOptions {
            sphere_stacks: 8,
            sphere_sectors: 8,
            ring_sectors: 16,
        }
    }

    fn build(record: &BodyRecord) -> Result<Body, OrreryError> {
        Body::from_record(record, &SceneOptions::default(), &small_geometry())
    }

    fn earth() -> BodyRecord {
        BodyTable::solar_system().get("EARTH").cloned().unwrap()
    }

    #[test]
    fn converts_units() {
        let body = build(&earth()).unwrap();
        assert!((body.radius() - 1.0).abs() < 1e-6);
        assert!((body.orbital_distance() - (149.6 + 109.0)).abs() < 1e-3);
        assert!((body.orbital_period() - 365.2).abs() < 1e-3);
        assert!((body.rotation_period() - 23.9 / 24.0).abs() < 1e-6);
        assert_eq!(body.axial_tilt(), 23.4);
        assert_eq!(body.texture_path(), Some("textures/earth.jpg"));
        assert_eq!(body.ring().radius(), body.orbital_distance());
        assert_eq!(body.sphere().radius(), body.radius());
    }

    #[test]
    fn central_body_gets_fixed_radius() {
        let sun = BodyTable::solar_system().bodies[0].clone();
        let body = build(&sun).unwrap();
        assert!(body.is_central());
        assert_eq!(body.radius(), 109.0);
        assert_eq!(body.orbital_distance(), 0.0);
    }

    #[test]
    fn central_body_keeps_its_stored_distance() {
        let mut sun = BodyTable::solar_system().bodies[0].clone();
        sun.distance = Measure::Number(50.0);
        let body = build(&sun).unwrap();
        assert_eq!(body.orbital_distance(), 50.0);
        assert_eq!(body.ring().radius(), 50.0);

        let transform = crate::scene::composer::compose(body.orbit(), 3.0);
        assert!(transform
            .position
            .abs_diff_eq(crate::math::Vec3::new(0.0, 0.0, 50.0), 1e-4));

        sun.distance = Measure::Number(-1.0);
        assert!(matches!(build(&sun), Err(OrreryError::InvalidBody { .. })));
    }

    #[test]
    fn scaling_options_apply() {
        let scene = SceneOptions {
            distance_scale: 2.0,
            seconds_per_day: 0.5,
            radius_scale: 3.0,
            ..SceneOptions::default()
        };
        let body = Body::from_record(&earth(), &scene, &small_geometry()).unwrap();
        assert!((body.orbital_distance() - (299.2 + 109.0)).abs() < 1e-3);
        assert!((body.orbital_period() - 182.6).abs() < 1e-3);
        assert!((body.radius() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn retrograde_rotation_is_accepted() {
        let venus = BodyTable::solar_system().get("VENUS").cloned().unwrap();
        assert!(build(&venus).unwrap().rotation_period() < 0.0);
    }

    #[test]
    fn rejects_out_of_range_cells() {
        let cases: [(&str, fn(&mut BodyRecord)); 6] = [
            ("zero orbit", |r| r.orbital_period = Measure::Number(0.0)),
            ("negative orbit", |r| r.orbital_period = Measure::Number(-3.0)),
            ("zero rotation", |r| r.rotation_period = Measure::Number(0.0)),
            ("negative diameter", |r| r.diameter = Measure::Number(-1.0)),
            ("infinite distance", |r| r.distance = Measure::Number(f64::INFINITY)),
            ("bad text", |r| r.diameter = "lots (km)".into()),
        ];
        for (label, mutate) in cases {
            let mut record = earth();
            mutate(&mut record);
            assert!(
                matches!(build(&record), Err(OrreryError::InvalidBody { .. })),
                "{label}"
            );
        }
    }

    #[test]
    fn geometry_limits_surface_as_geometry_errors() {
        let geometry = GeometryOptions {
            sphere_stacks: 0,
            ..small_geometry()
        };
        let err = Body::from_record(&earth(), &SceneOptions::default(), &geometry).unwrap_err();
        assert!(matches!(err, OrreryError::Geometry(_)));
    }
}
