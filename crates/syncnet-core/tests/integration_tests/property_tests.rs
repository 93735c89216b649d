//! Partition and tolerance properties of clusters taken from real runs.

use std::f64::consts::{PI, TAU};

use syncnet_core::{
    InitialPhases, OscillatorNetwork, PhaseSynchronyClusterer, Sample, SyncNetConfig, SyncNetwork,
};

use super::helpers::*;

/// Networks stopped part-way so phases are neither random nor fully locked.
fn partially_synchronized() -> Vec<OscillatorNetwork> {
    [simple3(), simple4(), elongate()]
        .iter()
        .enumerate()
        .map(|(seed, sample)| {
            let mut config = SyncNetConfig::with_radius(1.0);
            config.network.initial_phases = InitialPhases::seeded(seed as u64);
            config.simulation.max_steps = 25;
            let mut network = OscillatorNetwork::new(sample, &config).unwrap();
            network.process(0.999).unwrap();
            network
        })
        .collect()
}

#[test]
fn test_clusters_partition_all_oscillators() {
    for network in partially_synchronized() {
        for tolerance in [0.0, 0.01, 0.05, 0.2, 1.0, PI] {
            let clusters = network.clusters(tolerance).unwrap();

            let mut ids: Vec<usize> = clusters.iter().flatten().copied().collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..network.len()).collect::<Vec<_>>());
            assert!(clusters.iter().all(|c| !c.is_empty()));
        }
    }
}

#[test]
fn test_cluster_count_monotonic_in_tolerance() {
    for network in partially_synchronized() {
        let counts: Vec<usize> = (0..=32)
            .map(|k| network.clusters(k as f64 * 0.1).unwrap().len())
            .collect();
        assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{:?}", counts);
    }
}

#[test]
fn test_degenerate_tolerances() {
    for network in partially_synchronized() {
        let n = network.len();
        assert_eq!(network.clusters(0.0).unwrap().len(), n);
        assert_eq!(network.clusters(-1.0).unwrap().len(), n);
        assert_eq!(network.clusters(PI).unwrap(), vec![(0..n).collect::<Vec<_>>()]);
    }
}

#[test]
fn test_full_turn_tolerance_conserves_size() {
    for network in partially_synchronized() {
        let clusters = network.clusters(TAU).unwrap();
        let total: usize = PhaseSynchronyClusterer::sizes(&clusters).iter().sum();
        assert_eq!(total, network.len());
    }
}

#[test]
fn test_isolated_points_stay_singletons() {
    let points: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64 * 10.0, 0.0]).collect();
    let sample = Sample::new(points).unwrap();

    let clusters = run(&sample, &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(clusters.len(), 8);
}
