use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Unit conversions applied when a body table becomes a scene.
pub struct SceneOptions {
    /// Render radius of the central body; also the gap added to every
    /// orbital distance so orbits clear its surface.
    #[schemars(title = "Central Radius", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub central_radius: f32,
    /// Diameter (km) that maps to a render radius of 1.
    #[schemars(skip)]
    pub reference_diameter: f32,
    /// Multiplier on non-central radii.
    #[schemars(title = "Radius Scale", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub radius_scale: f32,
    /// Multiplier on table distances before the central radius is added.
    #[schemars(title = "Distance Scale", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub distance_scale: f32,
    /// Simulation seconds per day of orbital period.
    #[schemars(title = "Seconds per Day", range(min = 0.001, max = 10.0), extend("step" = 0.01))]
    pub seconds_per_day: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            central_radius: 109.0,
            reference_diameter: 12_756.0,
            radius_scale: 1.0,
            distance_scale: 1.0,
            seconds_per_day: 1.0,
        }
    }
}
