//! Adjacency list connectivity.

use std::borrow::Cow;

use super::{for_each_pair_within, Adjacency, Representation};
use crate::sample::Sample;

/// Per-oscillator neighbor lists, each kept sorted ascending.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    lists: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Create lists with no connections.
    pub fn with_size(size: usize) -> Self {
        Self {
            lists: vec![Vec::new(); size],
        }
    }

    /// Connect every pair of points within `radius`.
    pub fn from_sample(sample: &Sample, radius: f64) -> Self {
        let mut list = Self::with_size(sample.len());
        // Pairs arrive with i < j in ascending order, so pushing keeps both
        // lists sorted without a final sort.
        for_each_pair_within(sample, radius, |i, j| {
            list.lists[i].push(j);
            list.lists[j].push(i);
        });
        list
    }

    /// Add the undirected edge `(i, j)`. Self-loops and duplicates are ignored.
    pub fn connect(&mut self, i: usize, j: usize) {
        let size = self.lists.len();
        if i == j || i >= size || j >= size {
            return;
        }
        if let Err(pos) = self.lists[i].binary_search(&j) {
            self.lists[i].insert(pos, j);
        }
        if let Err(pos) = self.lists[j].binary_search(&i) {
            self.lists[j].insert(pos, i);
        }
    }
}

impl Adjacency for AdjacencyList {
    #[inline]
    fn size(&self) -> usize {
        self.lists.len()
    }

    fn neighbors(&self, i: usize) -> Cow<'_, [usize]> {
        match self.lists.get(i) {
            Some(list) => Cow::Borrowed(list.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }

    fn is_neighbor(&self, i: usize, j: usize) -> bool {
        self.lists
            .get(i)
            .map(|list| list.binary_search(&j).is_ok())
            .unwrap_or(false)
    }

    #[inline]
    fn degree(&self, i: usize) -> usize {
        self.lists.get(i).map(Vec::len).unwrap_or(0)
    }

    fn representation(&self) -> Representation {
        Representation::List
    }
}
