//! Ivy-base
//!
//! The base of the ivy force primitives. This crate provides the numeric
//! helpers which the physics crate depends on, such as [`NearlyZero`] for
//! guarding against unstable normalization, and [`Inverse`] for dividing
//! without producing NaN.
//!
//! It also exports a [`Logger`] which installs a `tracing` subscriber suitable
//! for tests and small binaries.

mod logger;
pub mod math;

pub use logger::Logger;
pub use math::*;
