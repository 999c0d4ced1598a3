//! Trajectory recorder
//!
//! Drives an [`Integrator`] step by step, records every accepted state and
//! stops on whichever horizon is reached first:
//!
//! 1. ignition detected and elapsed time past `4 × delay_time`,
//! 2. elapsed time at or past the hard horizon `t_end`.
//!
//! Both conditions are evaluated after every step, in that order.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinetics_parity::config::HarnessConfig;
//! use kinetics_parity::trajectory::TrajectoryRecorder;
//!
//! let recorder = TrajectoryRecorder::new(&HarnessConfig::new(10.0));
//! let outcome = recorder.record(&mut integrator)?;
//!
//! println!("idt = {:.2e} s over {} points",
//!          outcome.ignition.delay_time(),
//!          outcome.trajectory.len());
//! ```

use crate::config::{HarnessConfig, MASS_FRACTION_SUM_TOLERANCE};
use crate::error::{HarnessError, Result};
use crate::trajectory::ignition::IgnitionState;
use crate::trajectory::record::{StateRecord, Trajectory};
use crate::trajectory::traits::Integrator;

/// Why recording stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Elapsed time reached the hard horizon `t_end`
    TimeHorizon,

    /// Elapsed time passed the post-ignition horizon
    IgnitionHorizon,
}

/// Everything the recorder produced
#[derive(Debug, Clone)]
pub struct RecordingOutcome {
    /// Frozen trajectory, one record per accepted step
    pub trajectory: Trajectory,

    /// Final detector state
    pub ignition: IgnitionState,

    /// Horizon that ended recording
    pub stop: StopReason,

    /// Integrator state at loop termination
    pub final_state: StateRecord,

    /// Specific internal energy at loop termination (J/kg)
    pub final_internal_energy: f64,
}

/// Records a reference trajectory until a stop condition holds
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    t_end: f64,
}

impl TrajectoryRecorder {
    /// Create a recorder with the configured horizon
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            t_end: config.t_end,
        }
    }

    /// Hard recording horizon (s)
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Record until a stop condition holds
    ///
    /// # Errors
    ///
    /// Any `IntegrationFailure` raised by the integrator, or detected here
    /// (non-finite state, time not advancing), aborts recording.
    pub fn record<I: Integrator + ?Sized>(&self, integrator: &mut I) -> Result<RecordingOutcome> {
        let initial = integrator.snapshot();
        validate_record(&initial, 0)?;

        log::info!(
            "recording with {} from T = {:.1} K, P = {:.4e} Pa up to t_end = {:.3e} s",
            integrator.name(),
            initial.temperature,
            initial.pressure,
            self.t_end
        );

        // Baseline captured once, before any stepping.
        let mut ignition = IgnitionState::armed(initial.temperature);
        let mut trajectory = Trajectory::new();
        let mut current = initial;

        let stop = loop {
            if let Some(reason) = self.stop_condition(&current, &ignition) {
                break reason;
            }

            let step = trajectory.len() + 1;
            integrator.advance()?;

            let record = integrator.snapshot();
            validate_record(&record, step)?;

            let sum = record.mass_fraction_sum();
            if (sum - 1.0).abs() > MASS_FRACTION_SUM_TOLERANCE {
                log::warn!(
                    "mass fractions at step {step} sum to {sum:.9} (t = {:.3e} s)",
                    record.time
                );
            }

            ignition = ignition.observe(&record);
            trajectory.push(record.clone())?;
            current = record;
        };

        log::info!(
            "recording stopped ({stop:?}) after {} steps at t = {:.3e} s",
            trajectory.len(),
            current.time
        );

        Ok(RecordingOutcome {
            trajectory,
            ignition,
            stop,
            final_internal_energy: integrator.specific_internal_energy(),
            final_state: current,
        })
    }

    /// Stop condition for the state just observed
    ///
    /// The ignition horizon is checked first; either condition stops
    /// recording on its own.
    pub fn stop_condition(&self, current: &StateRecord, ignition: &IgnitionState) -> Option<StopReason> {
        if ignition.horizon_exceeded(current.time) {
            Some(StopReason::IgnitionHorizon)
        } else if current.time >= self.t_end {
            Some(StopReason::TimeHorizon)
        } else {
            None
        }
    }
}

/// Validate a recorded state for numerical issues
///
/// Checks that the record contains no NaN or Inf values, which would
/// indicate the reference integrator has diverged, and that every mass
/// fraction lies in `[0, 1]` up to [`MASS_FRACTION_SUM_TOLERANCE`].
/// Fractions inside that slack are kept with a warning.
pub(crate) fn validate_record(record: &StateRecord, step: usize) -> Result<()> {
    if !record.is_finite() {
        return Err(HarnessError::IntegrationFailure {
            step,
            time: record.time,
            reason: "non-finite value in reactor state".to_string(),
        });
    }
    if record.temperature <= 0.0 || record.pressure <= 0.0 {
        return Err(HarnessError::IntegrationFailure {
            step,
            time: record.time,
            reason: format!(
                "non-physical state (T = {} K, P = {} Pa)",
                record.temperature, record.pressure
            ),
        });
    }
    for (species, &y) in record.mass_fractions.iter().enumerate() {
        if (0.0..=1.0).contains(&y) {
            continue;
        }
        if y < -MASS_FRACTION_SUM_TOLERANCE || y > 1.0 + MASS_FRACTION_SUM_TOLERANCE {
            return Err(HarnessError::IntegrationFailure {
                step,
                time: record.time,
                reason: format!("mass fraction of species {species} out of [0, 1]: {y}"),
            });
        }
        log::warn!(
            "mass fraction of species {species} at step {step} is {y:.3e} (t = {:.3e} s)",
            record.time
        );
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
