//! This module contains the force capability and the available force kinds.
use std::fmt;

use downcast_rs::{impl_downcast, Downcast};
use glam::Vec3;
use rayon::prelude::*;

use crate::{Effector, Error, PhysicsObject, Result};

mod cylinder_vortex;
mod linear;

pub use cylinder_vortex::*;
pub use linear::*;

/// A force which is evaluated per object.
///
/// Implementors provide the raw, unscaled vector through
/// [`Force::child_vector`]. Amplitude, axis masks and activity of the shared
/// [`LinearForce`] state are applied on top by [`Force::vector`].
pub trait Force: Downcast + fmt::Debug + Send + Sync {
    fn linear(&self) -> &LinearForce;
    fn linear_mut(&mut self) -> &mut LinearForce;

    /// Returns the force for `object`, without the base state applied.
    ///
    /// The object is expected to be expressed in the local frame of the force.
    fn child_vector(&self, object: &PhysicsObject) -> Vec3;

    /// Returns an independent copy of the force
    fn boxed_clone(&self) -> Box<dyn Force>;

    /// Short human readable name of the force kind.
    ///
    /// Empty when built without debug assertions.
    fn describe(&self) -> String;

    /// Writes a long description of the force and its base state, indented by
    /// `indent` spaces.
    fn write(&self, f: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// Returns the force for `object` scaled by the amplitude and masked per
    /// axis. Inactive forces yield nothing.
    fn vector(&self, object: &PhysicsObject) -> Vec3 {
        let linear = self.linear();
        if !linear.is_active() {
            return Vec3::ZERO;
        }

        linear.scale(self.child_vector(object))
    }

    /// Evaluates the force and records it in the effector.
    ///
    /// Mass dependent forces are recorded as a force, the rest as an
    /// acceleration.
    fn apply(&self, object: &PhysicsObject, effector: &mut Effector) {
        if !object.is_active() {
            return;
        }

        let v = self.vector(object);
        if self.linear().is_mass_dependent() {
            effector.apply_force(v)
        } else {
            effector.apply_acceleration(v)
        }
    }
}

impl_downcast!(Force);

impl Clone for Box<dyn Force> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Returns the concrete kind of `force`
pub fn downcast_force<T: Force>(force: &dyn Force) -> Result<&T> {
    force
        .downcast_ref::<T>()
        .ok_or(Error::WrongKind(std::any::type_name::<T>()))
}

/// Evaluates `force` for every object in parallel
pub fn vectors(force: &dyn Force, objects: &[PhysicsObject]) -> Vec<Vec3> {
    objects.par_iter().map(|object| force.vector(object)).collect()
}

pub(crate) fn write_indent(f: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
    write!(f, "{:indent$}", "")
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[derive(Clone, Debug)]
    struct Constant {
        linear: LinearForce,
        value: Vec3,
    }

    impl Force for Constant {
        fn linear(&self) -> &LinearForce {
            &self.linear
        }

        fn linear_mut(&mut self) -> &mut LinearForce {
            &mut self.linear
        }

        fn child_vector(&self, _: &PhysicsObject) -> Vec3 {
            self.value
        }

        fn boxed_clone(&self) -> Box<dyn Force> {
            Box::new(self.clone())
        }

        fn describe(&self) -> String {
            "Constant".into()
        }

        fn write(&self, f: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
            self.linear.write(f, indent)
        }
    }

    #[test]
    fn downcast_wrong_kind() {
        let constant: Box<dyn Force> = Box::new(Constant {
            linear: LinearForce::default(),
            value: vec3(1.0, 2.0, 3.0),
        });

        assert!(downcast_force::<Constant>(&*constant).is_ok());
        assert!(matches!(
            downcast_force::<CylinderVortexForce>(&*constant),
            Err(Error::WrongKind(_))
        ));

        let vortex: Box<dyn Force> = Box::new(CylinderVortexForce::default());
        assert!(matches!(
            downcast_force::<Constant>(&*vortex),
            Err(Error::WrongKind(_))
        ));
    }
}
