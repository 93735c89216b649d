//! Distance-weighted coupling scenarios, run with the default order measure.

use syncnet_core::{
    DistanceDecay, InitialPhases, OscillatorNetwork, Sample, SyncNetConfig, SyncNetwork,
    Weighting,
};

use super::helpers::*;

fn weighted(radius: f64, decay: DistanceDecay) -> SyncNetConfig {
    let mut config = SyncNetConfig::deterministic(radius);
    config.network.weighting = Weighting::Distance(decay);
    config
}

/// Default settings with exponential weights and seeded random phases.
fn weighted_seeded(radius: f64, seed: u64) -> SyncNetConfig {
    let mut config = SyncNetConfig::with_radius(radius);
    config.network.weighting = Weighting::Distance(DistanceDecay::Exponential);
    config.network.initial_phases = InitialPhases::seeded(seed);
    config
}

/// Every coupled pair must lock before the run ends, whatever the start.
fn assert_single_cluster_for_seeds(sample: &Sample) {
    for seed in 1..=8 {
        let clusters = run(sample, &weighted_seeded(10.0, seed), 0.999);
        assert_eq!(clusters, ranges(&[sample.len()]), "seed {}", seed);
    }
}

#[test]
fn test_simple1_weighted_radius_two() {
    let clusters = run(&simple1(), &weighted(2.0, DistanceDecay::Exponential), 0.999);
    assert_eq!(clusters, ranges(&[5, 5]));
}

#[test]
fn test_simple1_weighted_reciprocal_radius_two() {
    let clusters = run(&simple1(), &weighted(2.0, DistanceDecay::Reciprocal), 0.999);
    assert_eq!(clusters, ranges(&[5, 5]));
}

#[test]
fn test_simple1_weighted_radius_ten() {
    let clusters = run(&simple1(), &weighted(10.0, DistanceDecay::Exponential), 0.999);
    assert_eq!(clusters, ranges(&[10]));
}

#[test]
fn test_simple2_weighted_radius_two() {
    let clusters = run(&simple2(), &weighted(2.0, DistanceDecay::Exponential), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![5, 8, 10]);
}

#[test]
fn test_simple2_weighted_radius_ten() {
    let clusters = run(&simple2(), &weighted(10.0, DistanceDecay::Exponential), 0.999);
    assert_eq!(clusters, ranges(&[23]));
}

#[test]
fn test_simple1_weighted_radius_ten_random_phases() {
    assert_single_cluster_for_seeds(&simple1());
}

#[test]
fn test_simple2_weighted_radius_ten_random_phases() {
    assert_single_cluster_for_seeds(&simple2());
}

#[test]
fn test_weights_follow_distance() {
    let sample = simple1();
    let network = OscillatorNetwork::new(&sample, &weighted(10.0, DistanceDecay::Exponential)).unwrap();
    let weights = network.weights();

    // Complete graph: the closest pair gets weight 1, the farthest 1/e.
    let mut pairs: Vec<(f64, f64)> = (0..sample.len())
        .flat_map(|i| (0..sample.len()).filter(move |&j| j != i).map(move |j| (i, j)))
        .map(|(i, j)| (sample.distance(i, j), weights.weight(i, j).unwrap()))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    assert!((pairs[0].1 - 1.0).abs() < 1e-12);
    assert!((pairs[pairs.len() - 1].1 - (-1.0f64).exp()).abs() < 1e-12);
    for window in pairs.windows(2) {
        assert!(window[1].1 <= window[0].1 + 1e-15);
    }
    assert_eq!(network.len(), 10);
}

#[test]
fn test_uniform_complete_graph_with_equipartition_stays_put() {
    // Evenly spread phases on an unweighted complete graph are an
    // equilibrium: the run stalls immediately and nothing merges.
    let mut network = OscillatorNetwork::new(&simple1(), &SyncNetConfig::deterministic(10.0)).unwrap();
    let report = network.process(0.999).unwrap();

    assert_eq!(report.steps, 1);
    assert_eq!(network.clusters(0.05).unwrap().len(), 10);
}
