use std::fmt;

use glam::Vec3;
use ivy_base::NearlyZero;

use super::{write_indent, Force, LinearForce};
use crate::PhysicsObject;

/// Swirls objects around the local z axis while pulling them inwards.
///
/// The force is confined to the cylinder `x² + y² <= radius²`,
/// `0 <= z <= length` and is scaled by the speed of the affected object.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CylinderVortexForce {
    linear: LinearForce,
    radius: f32,
    length: f32,
    coefficient: f32,
}

impl CylinderVortexForce {
    pub fn new(
        radius: f32,
        length: f32,
        coefficient: f32,
        amplitude: f32,
        mass_dependent: bool,
    ) -> Self {
        Self {
            linear: LinearForce::new(amplitude, mass_dependent),
            radius,
            length,
            coefficient,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn coefficient(&self) -> f32 {
        self.coefficient
    }
}

impl Default for CylinderVortexForce {
    fn default() -> Self {
        Self::new(1.0, 0.0, 1.0, 1.0, false)
    }
}

impl Force for CylinderVortexForce {
    fn linear(&self) -> &LinearForce {
        &self.linear
    }

    fn linear_mut(&mut self) -> &mut LinearForce {
        &mut self.linear
    }

    fn child_vector(&self, object: &PhysicsObject) -> Vec3 {
        let point = object.position();

        // clip along length
        if point.z < 0.0 || point.z > self.length {
            return Vec3::ZERO;
        }

        // squared distance is monotonic wrt. distance, no need to sqrt to
        // check inside the disc
        let dist_squared = point.x * point.x + point.y * point.y;
        if dist_squared > self.radius * self.radius {
            return Vec3::ZERO;
        }

        if dist_squared.is_nearly_zero() {
            tracing::trace!(%point, "object on vortex axis");
            return Vec3::ZERO;
        }

        let r = dist_squared.sqrt();
        if r.is_nearly_zero() {
            return Vec3::ZERO;
        }

        let planar = point.with_z(0.0);

        let tangential = planar.normalize().cross(Vec3::Z);
        let centripetal = (-planar).normalize();

        let combined = (tangential + centripetal).normalize();

        combined * self.coefficient * object.speed()
    }

    fn boxed_clone(&self) -> Box<dyn Force> {
        Box::new(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }

    fn write(&self, f: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        if !cfg!(debug_assertions) {
            return Ok(());
        }

        write_indent(f, indent)?;
        writeln!(f, "CylinderVortexForce:")?;
        self.linear.write(f, indent + 2)
    }
}

impl fmt::Display for CylinderVortexForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if cfg!(debug_assertions) {
            f.write_str("CylinderVortexForce")?;
        }

        Ok(())
    }
}
