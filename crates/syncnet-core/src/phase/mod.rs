//! Phase state primitives.
//!
//! - [`InitialPhases`]: starting phase assignment (equipartition or random)
//! - [`order`]: global and local synchronization measures
//! - Circular helpers: [`wrap_phase`] and [`circular_distance`]
//!
//! All phases are radians normalised to `[0, 2π)`.
//!
//! # Example
//!
//! ```
//! use syncnet_core::phase::{order::global_order, InitialPhases};
//!
//! let phases = InitialPhases::Equipartition.assign(4);
//! let (r, _psi) = global_order(&phases);
//! assert!(r < 1e-9, "evenly spread phases cancel out");
//! ```

mod initial;
pub mod order;

use std::f64::consts::{PI, TAU};

pub use initial::InitialPhases;
pub use order::{global_order, local_order, OrderMeasure};

/// Normalise a phase into `[0, 2π)`.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Shortest angular distance between two phases, in `[0, π]`.
#[inline]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}
