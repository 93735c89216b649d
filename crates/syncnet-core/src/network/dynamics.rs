//! Coupled phase dynamics and single-step integrators.
//!
//! ```text
//! dφᵢ/dt = ωᵢ + (K / max(1, deg(i))) Σ_{j ∈ N(i)} w(i,j) · sin(φⱼ - φᵢ)
//! ```
//!
//! Every derivative is evaluated from one immutable snapshot and written to a
//! separate buffer, so no oscillator ever observes a partially updated
//! neighbor. The sequential and parallel backends evaluate the same
//! expression in the same order per oscillator and produce identical bits.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::weight::WeightModel;

/// Fixed-step ODE method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Classic 4th-order Runge-Kutta.
    #[default]
    Rk4,
    /// Heun's method (explicit trapezoid), 2nd order.
    Heun,
}

/// How derivative evaluation is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionBackend {
    /// Single thread.
    #[default]
    Sequential,
    /// Rayon worker pool; each derivative pass ends in a join barrier.
    Parallel,
}

/// Stage buffers reused across integration steps.
#[derive(Debug, Clone, Default)]
pub(crate) struct Scratch {
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
    stage: Vec<f64>,
}

impl Scratch {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            k1: vec![0.0; n],
            k2: vec![0.0; n],
            k3: vec![0.0; n],
            k4: vec![0.0; n],
            stage: vec![0.0; n],
        }
    }

    fn resize(&mut self, n: usize) {
        for buffer in [&mut self.k1, &mut self.k2, &mut self.k3, &mut self.k4, &mut self.stage] {
            buffer.resize(n, 0.0);
        }
    }
}

/// Right-hand side of the phase equation for a fixed network.
#[derive(Debug, Clone)]
pub(crate) struct Dynamics {
    weights: WeightModel,
    gains: Vec<f64>,
    frequencies: Vec<f64>,
    backend: ExecutionBackend,
}

impl Dynamics {
    pub(crate) fn new(
        weights: WeightModel,
        coupling_strength: f64,
        natural_frequency: f64,
        backend: ExecutionBackend,
    ) -> Self {
        let n = weights.neighbor_lists().len();
        let mut dynamics = Self {
            weights,
            gains: Vec::with_capacity(n),
            frequencies: vec![natural_frequency; n],
            backend,
        };
        dynamics.set_coupling_strength(coupling_strength);
        dynamics
    }

    pub(crate) fn set_coupling_strength(&mut self, k: f64) {
        self.gains = self
            .weights
            .neighbor_lists()
            .iter()
            .map(|ids| k / ids.len().max(1) as f64)
            .collect();
    }

    pub(crate) fn set_frequencies(&mut self, frequencies: Vec<f64>) {
        self.frequencies = frequencies;
    }

    #[inline]
    pub(crate) fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    #[inline]
    pub(crate) fn weights(&self) -> &WeightModel {
        &self.weights
    }

    #[inline]
    pub(crate) fn neighbor_lists(&self) -> &[Vec<usize>] {
        self.weights.neighbor_lists()
    }

    #[inline]
    fn derivative(&self, i: usize, phases: &[f64]) -> f64 {
        let phase = phases[i];
        let coupling: f64 = self.neighbor_lists()[i]
            .iter()
            .zip(self.weights.row(i))
            .map(|(&j, &w)| w * (phases[j] - phase).sin())
            .sum();
        self.frequencies[i] + self.gains[i] * coupling
    }

    fn derivatives_into(&self, phases: &[f64], out: &mut [f64]) {
        match self.backend {
            ExecutionBackend::Sequential => {
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = self.derivative(i, phases);
                }
            }
            ExecutionBackend::Parallel => {
                out.par_iter_mut()
                    .enumerate()
                    .for_each(|(i, slot)| *slot = self.derivative(i, phases));
            }
        }
    }

    /// Write the unwrapped phases one step of `dt` ahead of `phases` into `next`.
    ///
    /// Stage values go to `scratch`; every stage is fully overwritten before
    /// it is read, so leftovers from an earlier step never leak in.
    pub(crate) fn advance(
        &self,
        integrator: Integrator,
        phases: &[f64],
        dt: f64,
        scratch: &mut Scratch,
        next: &mut [f64],
    ) {
        let n = phases.len();
        scratch.resize(n);
        let Scratch { k1, k2, k3, k4, stage } = scratch;

        self.derivatives_into(phases, k1);

        match integrator {
            Integrator::Heun => {
                offset(phases, k1, dt, stage);
                self.derivatives_into(stage, k2);
                for i in 0..n {
                    next[i] = phases[i] + dt * (k1[i] + k2[i]) / 2.0;
                }
            }
            Integrator::Rk4 => {
                offset(phases, k1, dt * 0.5, stage);
                self.derivatives_into(stage, k2);

                offset(phases, k2, dt * 0.5, stage);
                self.derivatives_into(stage, k3);

                offset(phases, k3, dt, stage);
                self.derivatives_into(stage, k4);

                for i in 0..n {
                    next[i] = phases[i] + dt * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0;
                }
            }
        }
    }
}

#[inline]
fn offset(base: &[f64], slope: &[f64], h: f64, out: &mut [f64]) {
    for ((o, &b), &s) in out.iter_mut().zip(base).zip(slope) {
        *o = b + h * s;
    }
}
