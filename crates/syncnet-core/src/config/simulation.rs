//! Integration loop settings.
//!
//! Controls the numerical integration of the phase dynamics and the
//! conditions that end [`process`](crate::network::SyncNetwork::process).

use serde::{Deserialize, Serialize};

use crate::network::{ExecutionBackend, Integrator};
use crate::phase::OrderMeasure;

/// Integration loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed step size Δt (time units).
    /// Default `0.1`
    pub time_step: f64,

    /// Step cap guaranteeing termination of `process`.
    /// Default `20_000`
    pub max_steps: usize,

    /// Single-step ODE method.
    pub integrator: Integrator,

    /// Measure compared against the order threshold.
    /// Default `Local`
    pub order_measure: OrderMeasure,

    /// A step in which the phase increments of all oscillators differ by less
    /// than this value (radians) counts as an equilibrium and ends `process`.
    /// `0.0` disables the check.
    /// Default `1e-7`
    pub stall_tolerance: f64,

    /// Keep a snapshot of every accepted step.
    pub collect_trajectory: bool,

    /// Derivative evaluation strategy.
    pub backend: ExecutionBackend,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            max_steps: 20_000,
            integrator: Integrator::Rk4,
            order_measure: OrderMeasure::Local,
            stall_tolerance: 1e-7,
            collect_trajectory: false,
            backend: ExecutionBackend::Sequential,
        }
    }
}

impl SimulationConfig {
    /// Validate the simulation configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(format!(
                "time_step must be finite and > 0, got {}",
                self.time_step
            ));
        }
        if self.max_steps == 0 {
            return Err("max_steps must be > 0".to_string());
        }
        if !self.stall_tolerance.is_finite() || self.stall_tolerance < 0.0 {
            return Err(format!(
                "stall_tolerance must be finite and >= 0, got {}",
                self.stall_tolerance
            ));
        }
        Ok(())
    }
}
