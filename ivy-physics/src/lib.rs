//! Linear force primitives.
//!
//! A [`Force`] computes an instantaneous force vector for a [`PhysicsObject`]
//! expressed in the force's local frame. The result is fed into an
//! [`Effector`] which accumulates it for the integrator.
#[cfg(feature = "serde")]
pub mod desc;
mod effector;
mod error;
pub mod forces;
mod object;

#[cfg(feature = "serde")]
pub use desc::ForceDesc;
pub use effector::*;
pub use error::*;
pub use forces::*;
pub use object::*;
