//! Dense matrix connectivity.

use std::borrow::Cow;

use super::{for_each_pair_within, Adjacency, Representation};
use crate::sample::Sample;

/// Dense `N × N` connectivity table stored row-major.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<bool>,
    degrees: Vec<usize>,
}

impl AdjacencyMatrix {
    /// Create a matrix with no connections.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
            degrees: vec![0; size],
        }
    }

    /// Connect every pair of points within `radius`.
    pub fn from_sample(sample: &Sample, radius: f64) -> Self {
        let mut matrix = Self::with_size(sample.len());
        for_each_pair_within(sample, radius, |i, j| matrix.connect(i, j));
        matrix
    }

    /// Add the undirected edge `(i, j)`. Self-loops and duplicates are ignored.
    pub fn connect(&mut self, i: usize, j: usize) {
        if i == j || i >= self.size || j >= self.size || self.cells[i * self.size + j] {
            return;
        }
        self.cells[i * self.size + j] = true;
        self.cells[j * self.size + i] = true;
        self.degrees[i] += 1;
        self.degrees[j] += 1;
    }
}

impl Adjacency for AdjacencyMatrix {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    /// Collects row `i` into an owned list; allocates on every call.
    fn neighbors(&self, i: usize) -> Cow<'_, [usize]> {
        if i >= self.size {
            return Cow::Borrowed(&[]);
        }
        let row = &self.cells[i * self.size..(i + 1) * self.size];
        let ids: Vec<usize> = row
            .iter()
            .enumerate()
            .filter_map(|(j, &connected)| connected.then_some(j))
            .collect();
        Cow::Owned(ids)
    }

    #[inline]
    fn is_neighbor(&self, i: usize, j: usize) -> bool {
        i < self.size && j < self.size && self.cells[i * self.size + j]
    }

    #[inline]
    fn degree(&self, i: usize) -> usize {
        self.degrees.get(i).copied().unwrap_or(0)
    }

    fn representation(&self) -> Representation {
        Representation::Matrix
    }
}
