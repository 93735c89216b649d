//! Validated point sample.
//!
//! A [`Sample`] is the immutable input of a sync network: N points of equal
//! dimension. The position of a point in the sample is the identifier of its
//! oscillator everywhere downstream.

use crate::error::{SyncNetError, SyncNetResult};

/// Immutable set of equal-dimension points.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    points: Vec<Vec<f64>>,
    dimension: usize,
}

impl Sample {
    /// Build a sample from raw points.
    ///
    /// # Errors
    ///
    /// - [`SyncNetError::EmptySample`] if `points` is empty
    /// - [`SyncNetError::DimensionMismatch`] if point dimensions differ
    /// - [`SyncNetError::InvalidParameter`] for zero-dimension points or
    ///   non-finite coordinates
    pub fn new(points: Vec<Vec<f64>>) -> SyncNetResult<Self> {
        let first = points.first().ok_or(SyncNetError::EmptySample)?;
        let dimension = first.len();
        if dimension == 0 {
            return Err(SyncNetError::invalid_param(
                "sample",
                "0-dimensional points",
                "Points must have at least one coordinate",
            ));
        }

        for (index, point) in points.iter().enumerate() {
            if point.len() != dimension {
                return Err(SyncNetError::DimensionMismatch {
                    index,
                    expected: dimension,
                    actual: point.len(),
                });
            }
            if let Some(value) = point.iter().find(|v| !v.is_finite()) {
                return Err(SyncNetError::invalid_param(
                    format!("sample[{}]", index),
                    value,
                    "Coordinates must be finite",
                ));
            }
        }

        Ok(Self { points, dimension })
    }

    /// Number of points (oscillators).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed sample; kept for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Dimension shared by every point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Point at `index`, if it exists.
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        self.points.get(index).map(Vec::as_slice)
    }

    /// All points in oscillator order.
    #[inline]
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Euclidean distance between points `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        euclidean_distance(&self.points[i], &self.points[j])
    }
}

/// Euclidean distance between two equal-length vectors.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
