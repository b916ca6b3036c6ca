//! # Ivy forces
//!
//! ## What it is
//!
//! Linear force primitives for particle and rigid body simulations.
//!
//! This crate exports all member crates, but the separate crates can just as
//! well be used manually.
//!
//! ## How it works
//!
//! A [`Force`] is evaluated against a [`PhysicsObject`] whose position is
//! expressed in the local frame of the force. Every force carries a
//! [`LinearForce`] state which scales the raw vector by an amplitude, masks
//! individual axes, and decides whether the effect depends on the mass of
//! the object.
//!
//! The evaluated force is recorded in an [`Effector`], which the integrator
//! later resolves into an acceleration.
//!
//! ### Cylinder vortex
//!
//! [`CylinderVortexForce`] swirls objects around the local z axis while
//! pulling them inwards. The force is confined to a finite cylinder and is
//! scaled by the speed of the object. Objects outside the cylinder, or on its
//! axis, are unaffected.
//!
//! ```
//! use glam::vec3;
//! use ivy_forces::{CylinderVortexForce, Force, PhysicsObject};
//!
//! let vortex = CylinderVortexForce::new(5.0, 10.0, 2.0, 1.0, false);
//! let object = PhysicsObject::new(vec3(3.0, 4.0, 5.0), vec3(0.0, 0.0, 10.0));
//!
//! assert!((vortex.vector(&object).length() - 20.0).abs() < 1e-4);
//! ```

/// Rexports
pub use ivy_base as base;
pub use ivy_physics as physics;

pub use glam;

pub use ivy_base::{is_nearly_zero, Inverse, Logger, NearlyZero};
pub use ivy_physics::{
    downcast_force, vectors, CylinderVortexForce, Effector, Error, Force, LinearForce,
    PhysicsObject, Result,
};

#[cfg(feature = "serde")]
pub use ivy_physics::ForceDesc;
