//! End-to-end harness run
//!
//! A run composes the three stages with their collaborators:
//!
//! ```text
//! Integrator ──► TrajectoryRecorder ──► Trajectory ──► StateBatch ──► BatchEvaluator
//!                       │                   │                              │
//!                       ▼                   ▼                              ▼
//!                 IgnitionState     ReferenceKinetics ──► ConsistencyVerifier ◄─┘
//!                                                                │
//!                                                                ▼
//!                                                      VerificationReport
//! ```
//!
//! Stages are strictly sequential: the trajectory is frozen before the batch
//! is built, and the batch is submitted in one call before any comparison.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::batch::{StateBatch, dispatch};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::kinetics::{BatchEvaluator, ReferenceKinetics};
use crate::output::{CHECK_RATES_PHASE, Report, SET_STATES_PHASE};
use crate::trajectory::{Integrator, RecordingOutcome, TrajectoryRecorder};
use crate::verify::{ConsistencyVerifier, VerificationReport};

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct HarnessOutcome {
    /// Recorded trajectory and ignition information
    pub recording: RecordingOutcome,

    /// Per-reaction verdicts
    pub verification: VerificationReport,

    /// Wall-clock time of the batch hand-off
    pub set_states_time: Duration,

    /// Wall-clock time of reference evaluation and verification
    pub check_rates_time: Duration,
}

impl HarnessOutcome {
    /// Whether every reaction passed
    pub fn passed(&self) -> bool {
        self.verification.all_passed()
    }
}

/// Verification harness over one configuration
///
/// # Example
///
/// ```rust
/// use kinetics_parity::config::HarnessConfig;
/// use kinetics_parity::harness::Harness;
/// use kinetics_parity::models::{ArrheniusBatchEvaluator, ArrheniusMechanism, GlobalStepReactor};
/// use kinetics_parity::output::Report;
/// use kinetics_parity::trajectory::AdaptiveRk4;
///
/// # fn main() -> Result<(), kinetics_parity::HarnessError> {
/// let config = HarnessConfig::new(1.0);
/// let mechanism = ArrheniusMechanism::global_step_demo();
///
/// let mut integrator = AdaptiveRk4::new(GlobalStepReactor::lean_demo());
/// let mut evaluator = ArrheniusBatchEvaluator::new(mechanism.clone(), config.device);
/// let mut report = Report::new(Vec::new());
///
/// let outcome = Harness::new(config).run(&mut integrator, &mechanism, &mut evaluator, &mut report)?;
/// assert!(outcome.recording.ignition.detected());
/// assert!(outcome.passed());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Harness {
    config: HarnessConfig,
}

impl Harness {
    /// Create a harness for `config`
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Configuration of the run
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Record, hand off, verify and report
    ///
    /// Tolerance violations are part of the returned report; every error
    /// aborts the run.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` before anything runs
    /// - `IntegrationFailure` while recording
    /// - `EmptyTrajectory`, `ShapeMismatch`, `DeviceError` at the hand-off
    /// - `MissingReactionData`, `WorkerFailure`, `WorkerPool` while verifying
    /// - `Io` when the report cannot be written
    pub fn run<I, K, E, W>(
        &self,
        integrator: &mut I,
        reference: &K,
        evaluator: &mut E,
        report: &mut Report<W>,
    ) -> Result<HarnessOutcome>
    where
        I: Integrator + ?Sized,
        K: ReferenceKinetics + ?Sized,
        E: BatchEvaluator + ?Sized,
        W: Write,
    {
        self.config.validate()?;

        // ====== Recording ======
        let recording = TrajectoryRecorder::new(&self.config).record(integrator)?;

        report.header()?;
        report.state_line(&recording.final_state, recording.final_internal_energy)?;

        if !recording.ignition.detected() {
            log::warn!(
                "no ignition detected before t_end = {:.3e} s, reporting a delay of 0",
                self.config.t_end
            );
        }
        report.ignition_line(recording.ignition.delay_time(), recording.trajectory.len())?;

        // ====== Batch hand-off ======
        let batch = StateBatch::from_trajectory(&recording.trajectory, reference.n_species())?;

        if evaluator.device() != self.config.device {
            log::warn!(
                "{} runs on {}, configuration requests {}",
                evaluator.name(),
                evaluator.device(),
                self.config.device
            );
        }

        let set_states_time = dispatch(evaluator, &batch)?;
        report.timing_line(SET_STATES_PHASE, set_states_time)?;

        // ====== Verification ======
        let start = Instant::now();

        let n_reactions = reference.n_reactions();
        let reference_constants = reference.rate_constants(&recording.trajectory)?;
        reference_constants.ensure_shape(batch.n_steps(), n_reactions, "reference kinetics")?;

        let equations: Vec<String> = (0..n_reactions)
            .map(|i| reference.reaction_equation(i))
            .collect();

        let verification = ConsistencyVerifier::new(
            &reference_constants,
            evaluator.rate_constants()?,
            &equations,
            self.config.tolerance,
        )?
        .verify(self.config.pool_size)?;

        let check_rates_time = start.elapsed();

        report.failure_lines(&verification)?;
        report.timing_line(CHECK_RATES_PHASE, check_rates_time)?;
        report.summary_line(&verification)?;

        Ok(HarnessOutcome {
            recording,
            verification,
            set_states_time,
            check_rates_time,
        })
    }
}
