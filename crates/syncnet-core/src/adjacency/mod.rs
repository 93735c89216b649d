//! Proximity connectivity between oscillators.
//!
//! Two oscillators are neighbors iff the Euclidean distance between their
//! points is at most the connectivity radius. The relation is symmetric,
//! has no self-loops and never changes after construction.
//!
//! Two representations implement the [`Adjacency`] trait:
//!
//! - [`AdjacencyMatrix`]: dense `N × N` bit table, O(1) neighbor test,
//!   O(N) enumeration that allocates
//! - [`AdjacencyList`]: sorted neighbor lists, O(N·deg) memory, borrowed
//!   enumeration
//!
//! The choice is a memory/speed trade-off only; both report the same
//! neighbor sets in the same (ascending) order.
//!
//! # Example
//!
//! ```
//! use syncnet_core::adjacency::{build_adjacency, Representation};
//! use syncnet_core::Sample;
//!
//! let sample = Sample::new(vec![vec![0.0], vec![0.5], vec![5.0]]).unwrap();
//! let adjacency = build_adjacency(&sample, 1.0, Representation::List).unwrap();
//!
//! assert!(adjacency.is_neighbor(0, 1));
//! assert!(!adjacency.is_neighbor(1, 2));
//! assert_eq!(adjacency.degree(2), 0);
//! ```

mod list;
mod matrix;


use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{SyncNetError, SyncNetResult};
use crate::sample::Sample;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;

/// Read-only capability set shared by every connectivity representation.
///
/// Implementations are immutable after construction and safe to read from
/// several integration workers at once.
pub trait Adjacency: Send + Sync + std::fmt::Debug {
    /// Number of oscillators covered by the structure.
    fn size(&self) -> usize;

    /// Neighbors of oscillator `i` in ascending order.
    ///
    /// Out-of-range indices have no neighbors. [`AdjacencyList`] borrows its
    /// stored list. [`AdjacencyMatrix`] scans row `i` and allocates a new
    /// `Vec` on every call, so hot loops should cache the result (as
    /// [`WeightModel`](crate::weight::WeightModel) does).
    fn neighbors(&self, i: usize) -> Cow<'_, [usize]>;

    /// Whether `i` and `j` are directly coupled. Always false for `i == j`.
    fn is_neighbor(&self, i: usize, j: usize) -> bool;

    /// Number of neighbors of oscillator `i`.
    fn degree(&self, i: usize) -> usize;

    /// Number of undirected edges.
    fn edge_count(&self) -> usize {
        (0..self.size()).map(|i| self.degree(i)).sum::<usize>() / 2
    }

    /// Representation backing this structure.
    fn representation(&self) -> Representation;
}

/// Connectivity storage layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Dense boolean matrix, preferred for small or dense networks.
    #[default]
    Matrix,
    /// Sorted adjacency lists, preferred for large sparse networks.
    List,
}

/// Check that `radius` is a usable connectivity radius.
pub fn validate_radius(radius: f64) -> SyncNetResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SyncNetError::InvalidRadius { radius });
    }
    Ok(())
}

/// Build the proximity structure for `sample` in the requested representation.
///
/// # Errors
///
/// - [`SyncNetError::InvalidRadius`] if `radius` is not a finite value > 0
/// - [`SyncNetError::EmptySample`] if the sample has no points
pub fn build_adjacency(
    sample: &Sample,
    radius: f64,
    representation: Representation,
) -> SyncNetResult<Box<dyn Adjacency>> {
    validate_radius(radius)?;
    if sample.is_empty() {
        return Err(SyncNetError::EmptySample);
    }

    let structure: Box<dyn Adjacency> = match representation {
        Representation::Matrix => Box::new(AdjacencyMatrix::from_sample(sample, radius)),
        Representation::List => Box::new(AdjacencyList::from_sample(sample, radius)),
    };

    tracing::debug!(
        oscillators = structure.size(),
        edges = structure.edge_count(),
        radius,
        ?representation,
        "Built proximity adjacency"
    );

    Ok(structure)
}

/// Visit every unordered pair `(i, j)`, `i < j`, whose distance is within `radius`.
pub(crate) fn for_each_pair_within<F>(sample: &Sample, radius: f64, mut visit: F)
where
    F: FnMut(usize, usize),
{
    let n = sample.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if sample.distance(i, j) <= radius {
                visit(i, j);
            }
        }
    }
}
