//! SyncNet error types.
//!
//! Errors fall into two groups: construction errors caused by invalid input
//! (sample, radius, configuration) and numeric failures raised while the
//! oscillator network is integrated. Neither group is retryable; the caller
//! has to fix the input or the integration settings.
//!
//! Partial synchrony is not an error. A network whose order parameter never
//! reaches the requested threshold terminates normally and reports how it
//! stopped.

use thiserror::Error;

/// Errors that can occur while building or running a sync network.
#[derive(Debug, Error)]
pub enum SyncNetError {
    /// Connectivity radius is zero, negative or not finite.
    #[error("Invalid connectivity radius {radius}: must be a finite value > 0")]
    InvalidRadius {
        /// The rejected radius
        radius: f64,
    },

    /// Sample contains no points.
    #[error("Empty sample: at least one point is required to build a network")]
    EmptySample,

    /// A point has a different dimension than the first point.
    #[error("Dimension mismatch at point {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending point
        index: usize,
        /// Dimension of the first point
        expected: usize,
        /// Dimension of the offending point
        actual: usize,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Call-time argument conflicts with the network or its configuration.
    #[error("Configuration mismatch: {0}")]
    ConfigurationMismatch(String),

    /// A phase became NaN or infinite during integration.
    ///
    /// The failed step is discarded; the network keeps the last valid state.
    #[error("Divergent integration at step {step}: phase of oscillator {oscillator} is not finite")]
    DivergentIntegration {
        /// Step that produced the non-finite value
        step: usize,
        /// First oscillator with a non-finite phase
        oscillator: usize,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for SyncNet operations.
pub type SyncNetResult<T> = Result<T, SyncNetError>;

impl From<serde_json::Error> for SyncNetError {
    fn from(err: serde_json::Error) -> Self {
        SyncNetError::Serialization(err.to_string())
    }
}

impl SyncNetError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        SyncNetError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration mismatch error.
    pub fn mismatch(reason: impl Into<String>) -> Self {
        SyncNetError::ConfigurationMismatch(reason.into())
    }

    /// Create a divergent integration error.
    pub fn divergent(step: usize, oscillator: usize) -> Self {
        SyncNetError::DivergentIntegration { step, oscillator }
    }

    /// Check if this error was raised while building a network.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            SyncNetError::InvalidRadius { .. }
                | SyncNetError::EmptySample
                | SyncNetError::DimensionMismatch { .. }
                | SyncNetError::InvalidParameter { .. }
        )
    }

    /// Check if this error indicates a numeric failure during integration.
    pub fn is_numeric_failure(&self) -> bool {
        matches!(self, SyncNetError::DivergentIntegration { .. })
    }
}
