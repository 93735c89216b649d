//! Coupling weights over neighbor pairs.
//!
//! Unweighted networks couple every neighbor pair with weight 1. Weighted
//! networks derive the weight from the pair distance, normalised over all
//! neighbor pairs:
//!
//! ```text
//! u = (d - d_min) / (d_max - d_min)        u = 0 when d_max == d_min
//! w = decay(u)                             strictly decreasing, > 0
//! ```
//!
//! Both decay laws map `u ∈ [0, 1]` into a sub-interval of `(0, 1]`, which
//! keeps weighted coupling in the same magnitude range as the unweighted
//! mode.

use serde::{Deserialize, Serialize};

use crate::adjacency::Adjacency;
use crate::sample::Sample;

/// Strictly decreasing distance-to-weight law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceDecay {
    /// `w = exp(-u)`, in `[1/e, 1]`.
    #[default]
    Exponential,
    /// `w = 1 / (1 + u)`, in `[1/2, 1]`.
    Reciprocal,
}

impl DistanceDecay {
    /// Weight for a normalised distance `u ∈ [0, 1]`.
    #[inline]
    pub fn apply(self, u: f64) -> f64 {
        match self {
            DistanceDecay::Exponential => (-u).exp(),
            DistanceDecay::Reciprocal => 1.0 / (1.0 + u),
        }
    }
}

/// How neighbor pairs are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Every neighbor pair has weight 1.
    #[default]
    Uniform,
    /// Weight decays with the pair distance.
    Distance(DistanceDecay),
}

/// Per-edge coupling weights aligned with the adjacency neighbor order.
///
/// `weights[i][k]` is the weight between `i` and its `k`-th neighbor.
#[derive(Debug, Clone)]
pub struct WeightModel {
    weighting: Weighting,
    neighbors: Vec<Vec<usize>>,
    weights: Vec<Vec<f64>>,
}

impl WeightModel {
    /// Build the weights for every neighbor pair of `adjacency`.
    pub fn build(sample: &Sample, adjacency: &dyn Adjacency, weighting: Weighting) -> Self {
        let n = adjacency.size();
        let neighbors: Vec<Vec<usize>> = (0..n).map(|i| adjacency.neighbors(i).into_owned()).collect();

        let weights = match weighting {
            Weighting::Uniform => neighbors.iter().map(|ids| vec![1.0; ids.len()]).collect(),
            Weighting::Distance(decay) => distance_weights(sample, &neighbors, decay),
        };

        Self {
            weighting,
            neighbors,
            weights,
        }
    }

    /// Weighting mode in use.
    #[inline]
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Weight of the pair `(i, j)`, `None` if they are not neighbors.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        let ids = self.neighbors.get(i)?;
        let slot = ids.binary_search(&j).ok()?;
        Some(self.weights[i][slot])
    }

    /// Weights of `i`'s neighbors, in adjacency order.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        self.weights.get(i).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub(crate) fn neighbor_lists(&self) -> &[Vec<usize>] {
        &self.neighbors
    }
}

fn distance_weights(sample: &Sample, neighbors: &[Vec<usize>], decay: DistanceDecay) -> Vec<Vec<f64>> {
    let distances: Vec<Vec<f64>> = neighbors
        .iter()
        .enumerate()
        .map(|(i, ids)| ids.iter().map(|&j| sample.distance(i, j)).collect())
        .collect();

    let (min, max) = distances
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| (lo.min(d), hi.max(d)));

    let span = max - min;
    distances
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|d| {
                    let u = if span > 0.0 { (d - min) / span } else { 0.0 };
                    decay.apply(u)
                })
                .collect()
        })
        .collect()
}
