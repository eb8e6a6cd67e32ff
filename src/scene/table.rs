//! Body record tables.
//!
//! A table is the raw, unit-annotated description of the bodies in a scene,
//! as it comes from a data set. Numeric cells may be plain numbers or
//! strings such as `"12,104 (km)"`; conversion into render units happens in
//! [`Scene::from_table`](super::Scene::from_table).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// A numeric table cell: a number, or text with optional thousands
/// separators and a trailing parenthesised unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    /// Plain number.
    Number(f64),
    /// Unit-annotated text, e.g. `"4,879 (km)"`.
    Text(String),
}

impl Default for Measure {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<f64> for Measure {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Measure {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl Measure {
    /// Numeric value of the cell.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidQuantity`] for text that is not a number.
    pub fn value(&self) -> Result<f64, OrreryError> {
        match self {
            Self::Number(v) => Ok(*v),
            Self::Text(text) => parse_quantity(text),
        }
    }
}

/// Parse `"12,104 (km)"`-style text: the trailing `(unit)` and any `,`
/// separators are dropped before parsing.
///
/// # Errors
///
/// Returns [`OrreryError::InvalidQuantity`] when what remains is not a
/// number.
pub fn parse_quantity(text: &str) -> Result<f64, OrreryError> {
    let trimmed = text.trim();
    let number = match trimmed.rfind('(') {
        Some(open) if trimmed.ends_with(')') => &trimmed[..open],
        _ => trimmed,
    };
    let digits: String = number.chars().filter(|&c| c != ',').collect();
    digits
        .trim()
        .parse()
        .map_err(|_| OrreryError::InvalidQuantity(text.to_owned()))
}

/// One row of a body table.
///
/// Units: diameter in km, axial tilt in degrees, orbital period in days,
/// rotation period in hours (negative for retrograde spin), distance from
/// the central body in 10⁶ km.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    /// Display name.
    pub name: String,
    /// Equatorial diameter.
    pub diameter: Measure,
    /// Obliquity to orbit.
    #[serde(default)]
    pub axial_tilt: Measure,
    /// Time for one orbit. Unused for the central body.
    #[serde(default)]
    pub orbital_period: Measure,
    /// Time for one turn about the own axis.
    pub rotation_period: Measure,
    /// Orbital distance. Unused for the central body.
    #[serde(default)]
    pub distance: Measure,
    /// Whether this body sits at the origin and lights the scene.
    #[serde(default)]
    pub is_central: bool,
    /// Surface texture, relative to the asset directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_path: Option<String>,
}

impl BodyRecord {
    fn planet(
        name: &str,
        diameter: &str,
        tilt: &str,
        orbital_period: &str,
        rotation_period: &str,
        distance: f64,
    ) -> Self {
        Self {
            name: name.to_owned(),
            diameter: diameter.into(),
            axial_tilt: tilt.into(),
            orbital_period: orbital_period.into(),
            rotation_period: rotation_period.into(),
            distance: distance.into(),
            is_central: false,
            texture_path: Some(format!("textures/{}.jpg", name.to_lowercase())),
        }
    }
}

/// Ordered list of body records, stored in TOML as a `[[body]]` array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyTable {
    /// Records in draw order.
    #[serde(rename = "body", default)]
    pub bodies: Vec<BodyRecord>,
}

impl BodyTable {
    /// The Sun and the nine classical planets.
    #[must_use]
    pub fn solar_system() -> Self {
        let sun = BodyRecord {
            name: "SUN".to_owned(),
            diameter: "1,392,700 (km)".into(),
            axial_tilt: "7.25 (degrees)".into(),
            orbital_period: Measure::default(),
            rotation_period: "609.12 (hours)".into(),
            distance: Measure::default(),
            is_central: true,
            texture_path: Some("textures/sun.jpg".to_owned()),
        };
        let planets = [
            ("MERCURY", "4879 (km)", "0.034 (degrees)", "88.0 (days)", "1407.6 (hours)", 57.9),
            ("VENUS", "12,104 (km)", "177.4 (degrees)", "224.7 (days)", "-5832.5 (hours)", 108.2),
            ("EARTH", "12,756 (km)", "23.4 (degrees)", "365.2 (days)", "23.9 (hours)", 149.6),
            ("MARS", "6792 (km)", "25.2 (degrees)", "687.0 (days)", "24.6 (hours)", 227.9),
            ("JUPITER", "142,984 (km)", "3.1 (degrees)", "4331 (days)", "9.9 (hours)", 778.6),
            ("SATURN", "120,536 (km)", "26.7 (degrees)", "10,747 (days)", "10.7 (hours)", 1433.5),
            ("URANUS", "51,118 (km)", "97.8 (degrees)", "30,589 (days)", "-17.2 (hours)", 2872.5),
            ("NEPTUNE", "49,528 (km)", "28.3 (degrees)", "59,800 (days)", "16.1 (hours)", 4495.1),
            ("PLUTO", "2370 (km)", "122.5 (degrees)", "90,560 (days)", "-153.3 (hours)", 5906.4),
        ];

        let mut bodies = vec![sun];
        bodies.extend(planets.iter().map(|&(name, d, tilt, orbit, spin, dist)| {
            BodyRecord::planet(name, d, tilt, orbit, spin, dist)
        }));
        Self { bodies }
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content).map_err(|e| OrreryError::TableParse(e.to_string()))
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path).map_err(OrreryError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String, OrreryError> {
        toml::to_string_pretty(self).map_err(|e| OrreryError::TableParse(e.to_string()))
    }

    /// Save the table to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrreryError::Io)?;
        }
        std::fs::write(path, content).map_err(OrreryError::Io)
    }

    /// Find a record by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BodyRecord> {
        self.bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}
