//! Phase-synchrony cluster extraction.
//!
//! Oscillators `i` and `j` are linked when their circular phase distance is
//! strictly below the tolerance. Clusters are the connected components of
//! that relation, so two oscillators can share a cluster through a chain of
//! intermediate oscillators even when they are not directly linked.
//!
//! The relation only looks at phases; physical connectivity plays no part.
//!
//! On a circle, the components of a distance-threshold graph are the arcs
//! separated by gaps of at least the tolerance. Extraction therefore sorts
//! the phases and unions neighbors along the circle, O(N log N) instead of
//! visiting all N² pairs.
//!
//! # Example
//!
//! ```
//! use syncnet_core::cluster::PhaseSynchronyClusterer;
//!
//! let phases = [0.01, 3.0, 6.27, 3.02];
//! let clusters = PhaseSynchronyClusterer::extract(&phases, 0.05).unwrap();
//! assert_eq!(clusters, vec![vec![0, 2], vec![1, 3]]);
//! ```

mod union_find;

use std::f64::consts::{PI, TAU};

use crate::error::{SyncNetError, SyncNetResult};
use crate::phase::wrap_phase;

pub use union_find::UnionFind;

/// Oscillator ids sharing one synchronized phase group, ascending.
pub type Cluster = Vec<usize>;

/// Extracts clusters from a phase vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseSynchronyClusterer;

impl PhaseSynchronyClusterer {
    /// Partition oscillator ids by phase proximity.
    ///
    /// - `tolerance <= 0`: every oscillator is its own cluster
    /// - `tolerance >= π`: one cluster holding every oscillator
    ///
    /// Each cluster is sorted ascending; clusters are ordered by their
    /// smallest id.
    ///
    /// # Errors
    ///
    /// [`SyncNetError::ConfigurationMismatch`] if `tolerance` is NaN or a
    /// phase is not finite.
    pub fn extract(phases: &[f64], tolerance: f64) -> SyncNetResult<Vec<Cluster>> {
        if tolerance.is_nan() {
            return Err(SyncNetError::mismatch("cluster tolerance must not be NaN"));
        }
        if let Some(idx) = phases.iter().position(|p| !p.is_finite()) {
            return Err(SyncNetError::mismatch(format!(
                "phase of oscillator {} is not finite",
                idx
            )));
        }

        let n = phases.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        if tolerance <= 0.0 {
            return Ok((0..n).map(|i| vec![i]).collect());
        }
        if tolerance >= PI {
            return Ok(vec![(0..n).collect()]);
        }

        let mut order: Vec<(f64, usize)> = phases
            .iter()
            .enumerate()
            .map(|(i, &p)| (wrap_phase(p), i))
            .collect();
        order.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut components = UnionFind::new(n);
        for pair in order.windows(2) {
            if pair[1].0 - pair[0].0 < tolerance {
                components.union(pair[0].1, pair[1].1);
            }
        }
        if n > 1 {
            let (first, first_id) = order[0];
            let (last, last_id) = order[n - 1];
            if first + TAU - last < tolerance {
                components.union(first_id, last_id);
            }
        }

        Ok(components.groups())
    }

    /// Cluster sizes in extraction order.
    pub fn sizes(clusters: &[Cluster]) -> Vec<usize> {
        clusters.iter().map(Vec::len).collect()
    }
}
