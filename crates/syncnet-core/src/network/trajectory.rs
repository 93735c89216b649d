//! Captured phase history.

/// Phases of every oscillator after an accepted step.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSnapshot {
    /// Step index; 0 is the initial state.
    pub step: usize,
    /// Simulated time at this step.
    pub time: f64,
    /// Phases in `[0, 2π)`, indexed by oscillator id.
    pub phases: Vec<f64>,
}

/// Ordered sequence of snapshots, ascending by step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseTrajectory {
    snapshots: Vec<PhaseSnapshot>,
}

impl PhaseTrajectory {
    pub(crate) fn push(&mut self, snapshot: PhaseSnapshot) {
        debug_assert!(self
            .snapshots
            .last()
            .map_or(true, |last| last.step < snapshot.step));
        self.snapshots.push(snapshot);
    }

    pub(crate) fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Drop every snapshot at or after `step`.
    pub(crate) fn truncate_from(&mut self, step: usize) {
        let keep = self.snapshots.partition_point(|snapshot| snapshot.step < step);
        self.snapshots.truncate(keep);
    }

    /// Snapshot recorded for `step`, if captured.
    pub fn at_step(&self, step: usize) -> Option<&PhaseSnapshot> {
        self.snapshots
            .binary_search_by_key(&step, |snapshot| snapshot.step)
            .ok()
            .map(|idx| &self.snapshots[idx])
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<&PhaseSnapshot> {
        self.snapshots.last()
    }

    /// All snapshots in step order.
    pub fn snapshots(&self) -> &[PhaseSnapshot] {
        &self.snapshots
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Phase history of one oscillator across all snapshots.
    pub fn oscillator_series(&self, oscillator: usize) -> Vec<f64> {
        self.snapshots
            .iter()
            .filter_map(|snapshot| snapshot.phases.get(oscillator).copied())
            .collect()
    }
}
