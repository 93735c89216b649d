//! Oscillatory network for synchronization-based clustering.
//!
//! One phase oscillator per sample point, coupled to every point within the
//! connectivity radius:
//!
//! ```text
//! dφᵢ/dt = ωᵢ + (K / max(1, deg(i))) Σ_{j ∈ N(i)} w(i,j) · sin(φⱼ - φᵢ)
//! ```
//!
//! Coupled groups lock to a common phase; groups without a coupling path
//! settle on unrelated phases. Cluster extraction then groups oscillators by
//! phase.
//!
//! Two ways to drive a network:
//!
//! - [`SyncNetwork::step`]: advance one Δt and inspect the result
//! - [`SyncNetwork::process`]: step until synchronized, at an
//!   equilibrium, or out of steps
//!
//! # Example
//!
//! ```
//! use syncnet_core::config::SyncNetConfig;
//! use syncnet_core::network::{OscillatorNetwork, SyncNetwork};
//! use syncnet_core::Sample;
//!
//! let sample = Sample::new(vec![
//!     vec![0.0, 0.0], vec![0.2, 0.1], vec![0.1, 0.3],
//!     vec![5.0, 5.0], vec![5.2, 5.1], vec![5.1, 4.8],
//! ]).unwrap();
//!
//! let mut network = OscillatorNetwork::new(&sample, &SyncNetConfig::deterministic(1.0)).unwrap();
//! let report = network.process(0.999).unwrap();
//! assert!(report.steps > 0);
//!
//! let clusters = network.clusters(0.05).unwrap();
//! assert_eq!(clusters, vec![vec![0, 1, 2], vec![3, 4, 5]]);
//! ```

mod core;
mod dynamics;
mod trajectory;


use serde::{Deserialize, Serialize};

use crate::cluster::{Cluster, PhaseSynchronyClusterer};
use crate::error::SyncNetResult;
use crate::phase::OrderMeasure;

pub use self::core::OscillatorNetwork;
pub use self::dynamics::{ExecutionBackend, Integrator};
pub use self::trajectory::{PhaseSnapshot, PhaseTrajectory};

/// Contract shared by every network implementation.
///
/// [`OscillatorNetwork`] is the in-process reference. An accelerated backend
/// implements the same trait and must yield the same clusters for the same
/// sample and configuration.
pub trait SyncNetwork {
    /// Number of oscillators.
    fn len(&self) -> usize;

    /// Whether the network has no oscillators.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current phases in `[0, 2π)`, indexed by oscillator id.
    fn phases(&self) -> &[f64];

    /// Global order parameter `(r, ψ)` of the current phases.
    fn order_parameter(&self) -> (f64, f64);

    /// Advance the simulation by one time step.
    fn step(&mut self) -> SyncNetResult<StepReport>;

    /// Step until the order threshold, an equilibrium or the step cap.
    fn process(&mut self, order_threshold: f64) -> SyncNetResult<ProcessReport>;

    /// Cluster the current phases.
    fn clusters(&self, tolerance: f64) -> SyncNetResult<Vec<Cluster>> {
        PhaseSynchronyClusterer::extract(self.phases(), tolerance)
    }
}

/// Outcome of a single integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Total steps taken since construction or reset.
    pub step: usize,
    /// Simulated time after the step.
    pub time: f64,
    /// Global order parameter r after the step.
    pub order: f64,
    /// Largest difference between two oscillators' phase increments during
    /// the step. Zero when every oscillator moved by the same amount.
    pub relative_shift: f64,
}

/// Why [`SyncNetwork::process`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The order measure reached the threshold.
    Synchronized,
    /// Phases stopped moving relative to each other before the threshold.
    /// Expected whenever the network has several disconnected groups.
    Stalled,
    /// The step cap was exhausted.
    StepLimit,
}

/// Summary of a [`SyncNetwork::process`] run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Global order parameter r at the end of the run.
    pub order: f64,
    /// Measure compared against the threshold.
    pub measure: OrderMeasure,
    /// Value of that measure at the end of the run.
    pub measured: f64,
    /// Steps taken during this run.
    pub steps: usize,
    /// Simulated time at the end of the run.
    pub time: f64,
    /// Why the run ended.
    pub termination: Termination,
}

impl ProcessReport {
    /// Whether the threshold was reached.
    #[inline]
    pub fn is_synchronized(&self) -> bool {
        self.termination == Termination::Synchronized
    }
}
