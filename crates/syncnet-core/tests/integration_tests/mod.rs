//! Integration tests for synchronization-based clustering.
//!
//! These tests run the complete pipeline on deterministic samples (NO MOCKS):
//! - Scenario clustering with equipartition phases
//! - Distance-weighted coupling
//! - Representation and backend equivalence
//! - Partition and tolerance properties of extracted clusters

mod helpers;
mod scenario_tests;
mod weighted_tests;
mod property_tests;
