//! Data driven descriptions of forces.
use serde::{Deserialize, Serialize};

use crate::{CylinderVortexForce, Force, Result};

fn one() -> f32 {
    1.0
}

/// Describes a force which can be built at runtime, for example from a scene
/// or config file.
///
/// ```json
/// { "kind": "cylinder_vortex", "radius": 5.0, "length": 10.0, "coefficient": 2.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForceDesc {
    CylinderVortex {
        #[serde(default = "one")]
        radius: f32,
        #[serde(default)]
        length: f32,
        #[serde(default = "one")]
        coefficient: f32,
        #[serde(default = "one")]
        amplitude: f32,
        #[serde(default)]
        mass_dependent: bool,
    },
}

impl ForceDesc {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build(&self) -> Box<dyn Force> {
        tracing::debug!(desc = ?self, "building force");

        match *self {
            Self::CylinderVortex {
                radius,
                length,
                coefficient,
                amplitude,
                mass_dependent,
            } => Box::new(CylinderVortexForce::new(
                radius,
                length,
                coefficient,
                amplitude,
                mass_dependent,
            )),
        }
    }
}

impl From<&CylinderVortexForce> for ForceDesc {
    fn from(force: &CylinderVortexForce) -> Self {
        Self::CylinderVortex {
            radius: force.radius(),
            length: force.length(),
            coefficient: force.coefficient(),
            amplitude: force.linear().amplitude(),
            mass_dependent: force.linear().is_mass_dependent(),
        }
    }
}
