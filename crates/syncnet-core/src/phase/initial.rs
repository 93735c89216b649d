//! Initial phase assignment.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Strategy for the phases oscillators start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialPhases {
    /// `φ_i = 2π·i/N`. Deterministic; used where results must be reproducible.
    Equipartition,
    /// Uniform in `[0, 2π)`. Seeded runs are reproducible, unseeded runs
    /// draw from OS entropy.
    Random {
        /// Optional seed for a ChaCha8 stream.
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Default for InitialPhases {
    fn default() -> Self {
        InitialPhases::Random { seed: None }
    }
}

impl InitialPhases {
    /// Seeded random strategy.
    pub fn seeded(seed: u64) -> Self {
        InitialPhases::Random { seed: Some(seed) }
    }

    /// Produce `n` starting phases.
    pub fn assign(&self, n: usize) -> Vec<f64> {
        match *self {
            InitialPhases::Equipartition => (0..n).map(|i| TAU * i as f64 / n as f64).collect(),
            InitialPhases::Random { seed: Some(seed) } => {
                random_phases(n, &mut ChaCha8Rng::seed_from_u64(seed))
            }
            InitialPhases::Random { seed: None } => random_phases(n, &mut StdRng::from_entropy()),
        }
    }
}

fn random_phases<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(0.0..TAU)).collect()
}
