use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Tessellation detail for the generated meshes.
pub struct GeometryOptions {
    /// Latitude bands per body sphere.
    #[schemars(title = "Sphere Stacks", range(min = 2, max = 255))]
    pub sphere_stacks: u32,
    /// Longitude bands per body sphere.
    #[schemars(title = "Sphere Sectors", range(min = 3, max = 255))]
    pub sphere_sectors: u32,
    /// Line segments per orbit ring.
    #[schemars(title = "Ring Sectors", range(min = 3, max = 1024))]
    pub ring_sectors: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_stacks: 100,
            sphere_sectors: 100,
            ring_sectors: 100,
        }
    }
}
