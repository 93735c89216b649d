//! Helper Functions: Deterministic Sample Generation (NO MOCKS)
//!
//! Every fixture is a concatenation of groups, so the expected clusters are
//! contiguous id ranges.

use syncnet_core::{OscillatorNetwork, Sample, SyncNetConfig, SyncNetwork};

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Two compact groups of five points each.
pub const SAMPLE_SIMPLE1: [[f64; 2]; 10] = [
    [3.522979, 5.487981],
    [3.768699, 5.364477],
    [3.423602, 5.4199],
    [3.803905, 5.389491],
    [3.93669, 5.663041],
    [6.968136, 7.755556],
    [6.750795, 7.269541],
    [6.593196, 7.850364],
    [6.978178, 7.60985],
    [6.554487, 7.498119],
];

/// Install a test subscriber once. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `count` points on a sunflower spiral of radius `spread` around `center`.
pub fn blob(center: [f64; 2], count: usize, spread: f64) -> Vec<Vec<f64>> {
    (0..count)
        .map(|k| {
            let r = spread * ((k as f64 + 0.5) / count as f64).sqrt();
            let theta = k as f64 * GOLDEN_ANGLE;
            vec![center[0] + r * theta.cos(), center[1] + r * theta.sin()]
        })
        .collect()
}

/// Jittered `cols × rows` grid with the given spacing, column by column.
pub fn strip(origin: [f64; 2], cols: usize, rows: usize, spacing: f64) -> Vec<Vec<f64>> {
    (0..cols * rows)
        .map(|k| {
            let (col, row) = (k / rows, k % rows);
            let jitter = 0.02 * (k as f64 * 1.7).sin();
            vec![
                origin[0] + col as f64 * spacing + jitter,
                origin[1] + row as f64 * spacing - jitter,
            ]
        })
        .collect()
}

fn sample_of(groups: Vec<Vec<Vec<f64>>>) -> Sample {
    Sample::new(groups.into_iter().flatten().collect()).unwrap()
}

pub fn simple1() -> Sample {
    Sample::new(SAMPLE_SIMPLE1.iter().map(|p| p.to_vec()).collect()).unwrap()
}

/// Groups of 5, 8 and 10.
pub fn simple2() -> Sample {
    sample_of(vec![
        blob([0.0, 0.0], 5, 0.4),
        blob([4.0, 1.0], 8, 0.45),
        blob([1.0, 5.0], 10, 0.5),
    ])
}

/// Three groups of 10 and a wider group of 30.
pub fn simple3() -> Sample {
    sample_of(vec![
        blob([0.0, 0.0], 10, 0.45),
        blob([0.0, 4.5], 10, 0.45),
        blob([4.5, 0.0], 10, 0.45),
        blob([5.0, 5.0], 30, 1.0),
    ])
}

/// Five groups of 15.
pub fn simple4() -> Sample {
    sample_of(
        [[0.0, 0.0], [4.0, 0.0], [8.0, 0.0], [2.0, 4.0], [6.0, 4.0]]
            .into_iter()
            .map(|center| blob(center, 15, 0.5))
            .collect(),
    )
}

/// Four groups of 15 on the corners of a square.
pub fn simple5() -> Sample {
    sample_of(
        [[0.0, 0.0], [4.0, 0.0], [0.0, 4.0], [4.0, 4.0]]
            .into_iter()
            .map(|center| blob(center, 15, 0.5))
            .collect(),
    )
}

/// A long 45 × 3 strip of 135 points and a compact group of 20.
pub fn elongate() -> Sample {
    sample_of(vec![strip([0.0, 0.0], 45, 3, 0.15), blob([3.0, 2.5], 20, 0.4)])
}

/// Contiguous id ranges of the given sizes.
pub fn ranges(sizes: &[usize]) -> Vec<Vec<usize>> {
    let mut start = 0;
    sizes
        .iter()
        .map(|&size| {
            let range = (start..start + size).collect();
            start += size;
            range
        })
        .collect()
}

/// Cluster sizes, ascending.
pub fn sorted_sizes(clusters: &[Vec<usize>]) -> Vec<usize> {
    let mut sizes: Vec<usize> = clusters.iter().map(Vec::len).collect();
    sizes.sort_unstable();
    sizes
}

/// Build, process to `order` and cluster at tolerance 0.05.
pub fn run(sample: &Sample, config: &SyncNetConfig, order: f64) -> Vec<Vec<usize>> {
    init_tracing();
    let mut network = OscillatorNetwork::new(sample, config).unwrap();
    network.process(order).unwrap();
    network.clusters(0.05).unwrap()
}
