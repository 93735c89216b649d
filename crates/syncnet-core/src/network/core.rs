//! Reference oscillator network implementation.

use crate::adjacency::{build_adjacency, validate_radius, Adjacency};
use crate::cluster::{Cluster, PhaseSynchronyClusterer};
use crate::config::{SimulationConfig, SyncNetConfig};
use crate::error::{SyncNetError, SyncNetResult};
use crate::phase::{global_order, local_order, wrap_phase, InitialPhases, OrderMeasure};
use crate::sample::Sample;
use crate::weight::{WeightModel, Weighting};

use super::dynamics::{Dynamics, Scratch};
use super::trajectory::{PhaseSnapshot, PhaseTrajectory};
use super::{ProcessReport, StepReport, SyncNetwork, Termination};

/// Proximity-coupled Kuramoto network over a point sample.
///
/// Owns the phase state exclusively. Connectivity and weights are fixed at
/// construction.
#[derive(Debug)]
pub struct OscillatorNetwork {
    /// Proximity graph, kept for queries.
    adjacency: Box<dyn Adjacency>,

    /// Right-hand side of the phase equation.
    dynamics: Dynamics,

    /// Current phases φᵢ in [0, 2π).
    phases: Vec<f64>,

    /// Second buffer receiving the next step.
    next: Vec<f64>,

    /// Integrator stage buffers, kept between steps.
    scratch: Scratch,

    /// Strategy used at construction and on reset.
    initial_phases: InitialPhases,

    /// Coupling strength K.
    coupling_strength: f64,

    /// Integration loop settings.
    simulation: SimulationConfig,

    /// Steps taken since construction or reset.
    steps: usize,

    /// Captured snapshots, empty unless trajectory capture is enabled.
    trajectory: PhaseTrajectory,
}

impl OscillatorNetwork {
    /// Build a network over `sample`.
    ///
    /// # Errors
    ///
    /// - [`SyncNetError::InvalidRadius`] for a radius that is not finite and > 0
    /// - [`SyncNetError::EmptySample`] for a sample without points
    /// - [`SyncNetError::ConfigurationMismatch`] for any other invalid setting
    pub fn new(sample: &Sample, config: &SyncNetConfig) -> SyncNetResult<Self> {
        validate_radius(config.network.radius)?;
        if sample.is_empty() {
            return Err(SyncNetError::EmptySample);
        }
        config.validate().map_err(SyncNetError::mismatch)?;

        let network = &config.network;
        let adjacency = build_adjacency(sample, network.radius, network.representation)?;
        let weights = WeightModel::build(sample, adjacency.as_ref(), network.weighting);
        let dynamics = Dynamics::new(
            weights,
            network.coupling_strength,
            network.natural_frequency,
            config.simulation.backend,
        );

        let phases = network.initial_phases.assign(sample.len());
        let next = vec![0.0; phases.len()];
        let scratch = Scratch::new(phases.len());

        tracing::debug!(
            oscillators = sample.len(),
            edges = adjacency.edge_count(),
            radius = network.radius,
            coupling = network.coupling_strength,
            weighting = ?network.weighting,
            initial_phases = ?network.initial_phases,
            "Created oscillator network"
        );

        let mut created = Self {
            adjacency,
            dynamics,
            phases,
            next,
            scratch,
            initial_phases: network.initial_phases,
            coupling_strength: network.coupling_strength,
            simulation: config.simulation.clone(),
            steps: 0,
            trajectory: PhaseTrajectory::default(),
        };
        created.record_snapshot();
        Ok(created)
    }

    /// Build a network from raw points.
    pub fn from_points(points: Vec<Vec<f64>>, config: &SyncNetConfig) -> SyncNetResult<Self> {
        let sample = Sample::new(points)?;
        Self::new(&sample, config)
    }

    /// Proximity structure the network was built from.
    #[inline]
    pub fn adjacency(&self) -> &dyn Adjacency {
        self.adjacency.as_ref()
    }

    /// Coupling weights over neighbor pairs.
    #[inline]
    pub fn weights(&self) -> &WeightModel {
        self.dynamics.weights()
    }

    /// Edge weighting mode.
    #[inline]
    pub fn weighting(&self) -> Weighting {
        self.weights().weighting()
    }

    /// Integration loop settings.
    #[inline]
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    /// Steps taken since construction or the last reset.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Simulated time since construction or the last reset.
    #[inline]
    pub fn time(&self) -> f64 {
        self.steps as f64 * self.simulation.time_step
    }

    /// Phase of one oscillator.
    pub fn phase(&self, oscillator: usize) -> Option<f64> {
        self.phases.get(oscillator).copied()
    }

    /// Copy of the current state as a snapshot.
    pub fn snapshot(&self) -> PhaseSnapshot {
        PhaseSnapshot {
            step: self.steps,
            time: self.time(),
            phases: self.phases.clone(),
        }
    }

    /// Captured history. Empty unless trajectory capture is enabled.
    #[inline]
    pub fn trajectory(&self) -> &PhaseTrajectory {
        &self.trajectory
    }

    /// Local order parameter of the current phases.
    pub fn local_order(&self) -> f64 {
        local_order(&self.phases, self.dynamics.neighbor_lists())
    }

    /// Value of the given measure for the current phases.
    pub fn measure(&self, measure: OrderMeasure) -> f64 {
        match measure {
            OrderMeasure::Global => global_order(&self.phases).0,
            OrderMeasure::Local => self.local_order(),
        }
    }

    /// Coupling strength K.
    #[inline]
    pub fn coupling_strength(&self) -> f64 {
        self.coupling_strength
    }

    /// Set the coupling strength K.
    ///
    /// # Errors
    ///
    /// Returns error if `k` is negative or not finite.
    pub fn set_coupling_strength(&mut self, k: f64) -> SyncNetResult<()> {
        if !k.is_finite() || k < 0.0 {
            return Err(SyncNetError::invalid_param(
                "coupling_strength",
                k,
                "Must be finite and >= 0",
            ));
        }
        self.coupling_strength = k;
        self.dynamics.set_coupling_strength(k);
        Ok(())
    }

    /// Natural frequencies ωᵢ.
    #[inline]
    pub fn natural_frequencies(&self) -> &[f64] {
        self.dynamics.frequencies()
    }

    /// Set a natural frequency per oscillator.
    ///
    /// # Errors
    ///
    /// Returns error if the length differs from the oscillator count or a
    /// value is not finite.
    pub fn set_natural_frequencies(&mut self, frequencies: Vec<f64>) -> SyncNetResult<()> {
        if frequencies.len() != self.phases.len() {
            return Err(SyncNetError::mismatch(format!(
                "expected {} natural frequencies, got {}",
                self.phases.len(),
                frequencies.len()
            )));
        }
        if let Some((idx, value)) = frequencies.iter().enumerate().find(|(_, f)| !f.is_finite()) {
            return Err(SyncNetError::invalid_param(
                format!("natural_frequencies[{}]", idx),
                value,
                "Must be finite",
            ));
        }
        self.dynamics.set_frequencies(frequencies);
        Ok(())
    }

    /// Replace the current phases. Values are wrapped into `[0, 2π)`.
    ///
    /// Does not reset the step counter; with trajectory capture enabled the
    /// latest snapshot is overwritten.
    ///
    /// # Errors
    ///
    /// Returns error if the length differs from the oscillator count or a
    /// value is not finite.
    pub fn set_phases(&mut self, phases: Vec<f64>) -> SyncNetResult<()> {
        if phases.len() != self.phases.len() {
            return Err(SyncNetError::mismatch(format!(
                "expected {} phases, got {}",
                self.phases.len(),
                phases.len()
            )));
        }
        if let Some((idx, value)) = phases.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(SyncNetError::invalid_param(
                format!("phases[{}]", idx),
                value,
                "Must be finite",
            ));
        }
        self.phases = phases.into_iter().map(wrap_phase).collect();
        if self.simulation.collect_trajectory {
            self.trajectory.truncate_from(self.steps);
            self.record_snapshot();
        }
        Ok(())
    }

    /// Reassign initial phases and clear the step counter and trajectory.
    ///
    /// Seeded and equipartition strategies reproduce the same start;
    /// unseeded random draws fresh phases.
    pub fn reset(&mut self) {
        self.phases = self.initial_phases.assign(self.phases.len());
        self.steps = 0;
        self.trajectory.clear();
        self.record_snapshot();
    }

    /// Cluster the snapshot captured at `step`.
    ///
    /// The current step is always available, with or without capture.
    ///
    /// # Errors
    ///
    /// [`SyncNetError::ConfigurationMismatch`] if no snapshot exists for `step`.
    pub fn clusters_at(&self, step: usize, tolerance: f64) -> SyncNetResult<Vec<Cluster>> {
        if step == self.steps {
            return PhaseSynchronyClusterer::extract(&self.phases, tolerance);
        }
        let snapshot = self.trajectory.at_step(step).ok_or_else(|| {
            SyncNetError::mismatch(format!(
                "no snapshot for step {} (trajectory capture {}, current step {})",
                step,
                if self.simulation.collect_trajectory { "enabled" } else { "disabled" },
                self.steps
            ))
        })?;
        PhaseSynchronyClusterer::extract(&snapshot.phases, tolerance)
    }

    fn record_snapshot(&mut self) {
        if self.simulation.collect_trajectory {
            self.trajectory.push(self.snapshot());
        }
    }

    fn advance(&mut self) -> SyncNetResult<f64> {
        let step = self.steps + 1;
        self.dynamics.advance(
            self.simulation.integrator,
            &self.phases,
            self.simulation.time_step,
            &mut self.scratch,
            &mut self.next,
        );

        if let Some(oscillator) = self.next.iter().position(|p| !p.is_finite()) {
            tracing::warn!(step, oscillator, "Phase integration diverged, keeping last valid state");
            return Err(SyncNetError::divergent(step, oscillator));
        }

        let (min_shift, max_shift) = self
            .next
            .iter()
            .zip(&self.phases)
            .map(|(next, current)| next - current)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)));

        for value in self.next.iter_mut() {
            *value = wrap_phase(*value);
        }
        std::mem::swap(&mut self.phases, &mut self.next);
        self.steps = step;

        Ok(if max_shift >= min_shift {
            max_shift - min_shift
        } else {
            0.0
        })
    }
}

impl SyncNetwork for OscillatorNetwork {
    #[inline]
    fn len(&self) -> usize {
        self.phases.len()
    }

    #[inline]
    fn phases(&self) -> &[f64] {
        &self.phases
    }

    fn order_parameter(&self) -> (f64, f64) {
        global_order(&self.phases)
    }

    fn step(&mut self) -> SyncNetResult<StepReport> {
        let relative_shift = self.advance()?;
        self.record_snapshot();

        let report = StepReport {
            step: self.steps,
            time: self.time(),
            order: self.order_parameter().0,
            relative_shift,
        };
        tracing::trace!(
            step = report.step,
            order = report.order,
            relative_shift = report.relative_shift,
            "Integrated step"
        );
        Ok(report)
    }

    fn process(&mut self, order_threshold: f64) -> SyncNetResult<ProcessReport> {
        if !(order_threshold > 0.0 && order_threshold <= 1.0) {
            return Err(SyncNetError::mismatch(format!(
                "order threshold must be in (0, 1], got {}",
                order_threshold
            )));
        }

        let measure = self.simulation.order_measure;
        let stall_tolerance = self.simulation.stall_tolerance;
        let max_steps = self.simulation.max_steps;

        tracing::debug!(
            order_threshold,
            ?measure,
            max_steps,
            time_step = self.simulation.time_step,
            integrator = ?self.simulation.integrator,
            "Processing oscillator network"
        );

        let mut measured = self.measure(measure);
        let mut taken = 0;
        let termination = loop {
            if measured >= order_threshold {
                break Termination::Synchronized;
            }
            if taken == max_steps {
                break Termination::StepLimit;
            }

            let report = self.step()?;
            taken += 1;
            measured = self.measure(measure);

            if measured < order_threshold && report.relative_shift < stall_tolerance {
                break Termination::Stalled;
            }
        };

        let report = ProcessReport {
            order: self.order_parameter().0,
            measure,
            measured,
            steps: taken,
            time: self.time(),
            termination,
        };

        if termination == Termination::StepLimit {
            tracing::warn!(
                steps = taken,
                measured,
                order_threshold,
                "Step limit reached before synchronization"
            );
        } else {
            tracing::info!(
                steps = taken,
                order = report.order,
                measured,
                ?termination,
                "Oscillator network processed"
            );
        }

        Ok(report)
    }
}
