//! Network construction settings.
//!
//! Controls how the sample is turned into a coupled oscillator network:
//! which points are connected, how strongly, and where the phases start.

use serde::{Deserialize, Serialize};

use crate::adjacency::Representation;
use crate::phase::InitialPhases;
use crate::weight::Weighting;

/// Network construction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Connectivity radius. Points within this Euclidean distance are coupled.
    /// Must be finite and `> 0`.
    pub radius: f64,

    /// Coupling strength K.
    /// Range: `[0, ∞)`, default `1.0`
    pub coupling_strength: f64,

    /// Natural frequency ω shared by every oscillator (rad per time unit).
    /// Identical oscillators (`0.0`) are the usual choice for clustering.
    #[serde(default)]
    pub natural_frequency: f64,

    /// Connectivity storage. Does not change results.
    #[serde(default)]
    pub representation: Representation,

    /// Edge weighting mode.
    #[serde(default)]
    pub weighting: Weighting,

    /// Initial phase assignment.
    #[serde(default)]
    pub initial_phases: InitialPhases,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            coupling_strength: 1.0,
            natural_frequency: 0.0,
            representation: Representation::Matrix,
            weighting: Weighting::Uniform,
            initial_phases: InitialPhases::default(),
        }
    }
}

impl NetworkConfig {
    /// Default settings with the given radius.
    pub fn with_radius(radius: f64) -> Self {
        Self {
            radius,
            ..Default::default()
        }
    }

    /// Validate the network configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(format!("radius must be finite and > 0, got {}", self.radius));
        }
        if !self.coupling_strength.is_finite() || self.coupling_strength < 0.0 {
            return Err(format!(
                "coupling_strength must be finite and >= 0, got {}",
                self.coupling_strength
            ));
        }
        if !self.natural_frequency.is_finite() {
            return Err(format!(
                "natural_frequency must be finite, got {}",
                self.natural_frequency
            ));
        }
        Ok(())
    }
}
