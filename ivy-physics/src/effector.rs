use glam::Vec3;
use ivy_base::Inverse;

/// Accumulates the forces applied to an object during a step.
///
/// Stored alongside the object and is a middle hand between force evaluation
/// and the integrator. Forces stack, and the timestep is not required until
/// the accumulated effect is resolved.
///
/// It is also possible to create a dummy effector to "record" physics effects.
#[derive(Clone, Debug, PartialEq)]
pub struct Effector {
    dv: Vec3,
    pending_force: Vec3,
}

impl Effector {
    pub fn new() -> Self {
        Self {
            dv: Vec3::ZERO,
            pending_force: Vec3::ZERO,
        }
    }

    /// Clears all forces affecting the object
    pub fn clear(&mut self) {
        *self = Self::new()
    }

    /// Applies a force which is divided by the object's mass when resolved
    pub fn apply_force(&mut self, f: Vec3) {
        self.pending_force += f;
    }

    /// Applies a continuous acceleration independent of mass
    pub fn apply_acceleration(&mut self, dv: Vec3) {
        self.dv += dv;
    }

    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    pub fn pending_acceleration(&self) -> Vec3 {
        self.dv
    }

    /// Resolves the accumulated forces and accelerations for a body of `mass`.
    ///
    /// A zero or non-finite mass ignores the accumulated forces.
    pub fn net_acceleration(&self, mass: f32) -> Vec3 {
        self.dv + self.pending_force * mass.inv()
    }
}

impl Default for Effector {
    fn default() -> Self {
        Self::new()
    }
}
