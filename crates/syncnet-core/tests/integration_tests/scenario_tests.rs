//! End-to-end scenarios: radius, order threshold 0.999, tolerance 0.05.

use syncnet_core::{OrderMeasure, OscillatorNetwork, SyncNetConfig, SyncNetwork, Termination};

use super::helpers::*;

#[test]
fn test_simple1_two_clusters() {
    let clusters = run(&simple1(), &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(clusters, ranges(&[5, 5]));
}

#[test]
fn test_simple2_three_clusters() {
    let clusters = run(&simple2(), &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![5, 8, 10]);
    assert_eq!(clusters, ranges(&[5, 8, 10]));
}

#[test]
fn test_simple3_four_clusters() {
    let clusters = run(&simple3(), &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![10, 10, 10, 30]);
    assert_eq!(clusters, ranges(&[10, 10, 10, 30]));
}

#[test]
fn test_simple4_five_clusters() {
    let clusters = run(&simple4(), &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![15; 5]);
}

#[test]
fn test_simple5_four_clusters() {
    let clusters = run(&simple5(), &SyncNetConfig::deterministic(1.0), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![15; 4]);
}

#[test]
fn test_elongate_two_clusters() {
    let clusters = run(&elongate(), &SyncNetConfig::deterministic(0.5), 0.999);
    assert_eq!(sorted_sizes(&clusters), vec![20, 135]);
    assert_eq!(clusters, ranges(&[135, 20]));
}

#[test]
fn test_multi_cluster_run_is_not_an_error() {
    init_tracing();
    // Global order cannot reach the threshold with four separate groups.
    let mut config = SyncNetConfig::deterministic(1.0);
    config.simulation.order_measure = OrderMeasure::Global;
    let mut network = OscillatorNetwork::new(&simple3(), &config).unwrap();

    let report = network.process(0.999).unwrap();

    assert_eq!(report.termination, Termination::Stalled);
    assert!(!report.is_synchronized());
    assert!(report.order < 0.999);
    assert_eq!(report.steps, network.trajectory().len() - 1);
}

#[test]
fn test_deterministic_preset_is_reproducible() {
    let sample = simple2();
    let config = SyncNetConfig::deterministic(1.0);

    let mut a = OscillatorNetwork::new(&sample, &config).unwrap();
    let mut b = OscillatorNetwork::new(&sample, &config).unwrap();
    a.process(0.999).unwrap();
    b.process(0.999).unwrap();

    assert_eq!(a.phases(), b.phases());
    assert_eq!(a.trajectory(), b.trajectory());
}

#[test]
fn test_config_from_json_drives_network() {
    let json = r#"{
        "network": {
            "radius": 1.0,
            "coupling_strength": 1.0,
            "initial_phases": "equipartition"
        },
        "simulation": { "integrator": "rk4", "backend": "parallel" }
    }"#;
    let config = SyncNetConfig::from_json(json).unwrap();

    let clusters = run(&simple1(), &config, 0.999);
    assert_eq!(clusters, ranges(&[5, 5]));
}

#[test]
fn test_default_measure_is_local() {
    init_tracing();
    let mut network = OscillatorNetwork::new(&simple3(), &SyncNetConfig::deterministic(1.0)).unwrap();

    let report = network.process(0.999).unwrap();

    assert_eq!(report.measure, OrderMeasure::Local);
    assert_eq!(report.termination, Termination::Synchronized);
    assert!(report.measured >= 0.999);
    assert!(report.order < 0.999);
}
