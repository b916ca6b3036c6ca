use std::fmt;

use glam::{BVec3, Vec3};

use super::write_indent;

/// State shared by all linear forces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearForce {
    amplitude: f32,
    mass_dependent: bool,
    vector_masks: [bool; 3],
    active: bool,
}

impl LinearForce {
    pub fn new(amplitude: f32, mass_dependent: bool) -> Self {
        Self {
            amplitude,
            mass_dependent,
            vector_masks: [true; 3],
            active: true,
        }
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude;
    }

    /// Whether the effect of the force depends on the mass of the object
    pub fn is_mass_dependent(&self) -> bool {
        self.mass_dependent
    }

    pub fn set_mass_dependent(&mut self, mass_dependent: bool) {
        self.mass_dependent = mass_dependent;
    }

    /// Axes which are allowed through. A masked out axis is zeroed.
    pub fn vector_masks(&self) -> BVec3 {
        BVec3::from(self.vector_masks)
    }

    pub fn set_vector_masks(&mut self, x: bool, y: bool, z: bool) {
        self.vector_masks = [x, y, z];
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Applies the amplitude and axis masks to a raw force vector
    pub fn scale(&self, child: Vec3) -> Vec3 {
        Vec3::select(self.vector_masks(), child * self.amplitude, Vec3::ZERO)
    }

    pub fn write(&self, f: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        if !cfg!(debug_assertions) {
            return Ok(());
        }

        write_indent(f, indent)?;
        writeln!(f, "LinearForce:")?;
        write_indent(f, indent + 2)?;
        writeln!(f, "amplitude {}", self.amplitude)?;
        write_indent(f, indent + 2)?;
        writeln!(f, "mass_dependent {}", self.mass_dependent)?;
        write_indent(f, indent + 2)?;
        let [x, y, z] = self.vector_masks;
        writeln!(f, "vector_masks {x} {y} {z}")?;
        write_indent(f, indent + 2)?;
        writeln!(f, "active {}", self.active)
    }
}

impl Default for LinearForce {
    fn default() -> Self {
        Self::new(1.0, false)
    }
}
