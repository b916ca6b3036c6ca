use glam::Vec3;

/// The point-like state a force is evaluated against.
///
/// The position is expected to be expressed in the local frame of the force
/// which is evaluated. Transforming between frames is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsObject {
    position: Vec3,
    velocity: Vec3,
    mass: f32,
    active: bool,
}

impl PhysicsObject {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            mass: 1.0,
            active: true,
        }
    }

    /// Set the mass
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Inactive objects are not affected by forces
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

impl Default for PhysicsObject {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO)
    }
}
