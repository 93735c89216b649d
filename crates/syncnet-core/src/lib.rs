//! Synchronization-based clustering engine.
//!
//! Every sample point becomes a phase oscillator coupled to the points within
//! a connectivity radius. Integrating the coupled dynamics drives connected
//! groups into phase lock; clusters are then read off the phases.
//!
//! # Modules
//!
//! - [`sample`]: validated point sets and Euclidean distance
//! - [`adjacency`]: radius-neighbor graphs (dense matrix or sorted lists)
//! - [`weight`]: uniform or distance-decayed coupling weights
//! - [`phase`]: initial phases, circular helpers and order parameters
//! - [`network`]: the oscillator network, integrators and trajectory capture
//! - [`cluster`]: phase-synchrony cluster extraction
//! - [`config`]: serde configuration for network and simulation
//! - [`error`]: error type and result alias
//!
//! # Example
//!
//! ```
//! use syncnet_core::{OscillatorNetwork, Sample, SyncNetConfig, SyncNetwork};
//!
//! let sample = Sample::new(vec![
//!     vec![0.0, 0.0], vec![0.3, 0.1],
//!     vec![4.0, 4.0], vec![4.2, 3.9],
//! ]).unwrap();
//!
//! let mut network = OscillatorNetwork::new(&sample, &SyncNetConfig::deterministic(0.5)).unwrap();
//! network.process(0.999).unwrap();
//! assert_eq!(network.clusters(0.05).unwrap(), vec![vec![0, 1], vec![2, 3]]);
//! ```

pub mod adjacency;
pub mod cluster;
pub mod config;
pub mod error;
pub mod network;
pub mod phase;
pub mod sample;
pub mod weight;

pub use config::SyncNetConfig;
pub use error::{SyncNetError, SyncNetResult};

pub use sample::Sample;

pub use adjacency::{build_adjacency, Adjacency, AdjacencyList, AdjacencyMatrix, Representation};

pub use weight::{DistanceDecay, WeightModel, Weighting};

pub use phase::{circular_distance, global_order, local_order, wrap_phase, InitialPhases, OrderMeasure};

pub use network::{
    ExecutionBackend, Integrator, OscillatorNetwork, PhaseSnapshot, PhaseTrajectory,
    ProcessReport, StepReport, SyncNetwork, Termination,
};

pub use cluster::{Cluster, PhaseSynchronyClusterer};
