//! The three closed-form time dilation engines.
//!
//! Each operation takes a whole batch of inputs and validates it up front:
//! a single bad element fails the call before any output is computed, so
//! callers never see a partially poisoned result. Scalar variants are the
//! one-element special case of the batch primitive.

pub mod decay;
pub mod gravity;
pub mod lorentz;

use thiserror::Error;

/// Precondition failures raised by the dilation engines.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DilationError {
    /// Velocity negative or at/beyond the speed of light.
    #[error("velocity {v} m/s is invalid: velocities must be non-negative and less than c")]
    InvalidVelocity { v: f64 },
    /// Radius at or inside the Schwarzschild radius.
    #[error("radius {r} m must exceed the Schwarzschild radius {rs} m")]
    InvalidRadius { r: f64, rs: f64 },
}
