//! Ignition event detection
//!
//! Ignition is declared the first time the temperature climbs more than
//! [`IGNITION_TEMPERATURE_RISE`] above the temperature the reactor started at.
//! The detector is a two-state machine:
//!
//! ```text
//!   Armed ──(T > T₀ + ΔT)──▶ Detected { delay_time }
//! ```
//!
//! The transition is one-way. Once detected, observing further records never
//! changes the delay time. [`IgnitionState`] is `Copy`, so the recorder holds
//! a plain value and replaces it on every step rather than sharing a flag.

use crate::config::{IGNITION_HORIZON_MULTIPLE, IGNITION_TEMPERATURE_RISE};
use crate::trajectory::record::StateRecord;

/// Phase of the ignition state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IgnitionPhase {
    /// Waiting for the temperature to cross the threshold
    Armed,

    /// Threshold crossed at `delay_time`
    Detected { delay_time: f64 },
}

/// Snapshot of the ignition detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IgnitionState {
    baseline_temperature: f64,
    phase: IgnitionPhase,
}

impl IgnitionState {
    /// Arm the detector with the temperature of the initial state
    pub fn armed(baseline_temperature: f64) -> Self {
        Self {
            baseline_temperature,
            phase: IgnitionPhase::Armed,
        }
    }

    /// Next state after observing one record
    ///
    /// Pure: returns the new snapshot and leaves `self` untouched.
    #[must_use]
    pub fn observe(self, record: &StateRecord) -> Self {
        match self.phase {
            IgnitionPhase::Armed if record.temperature > self.threshold() => {
                log::debug!(
                    "ignition detected at t = {:.3e} s (T = {:.1} K, threshold {:.1} K)",
                    record.time,
                    record.temperature,
                    self.threshold()
                );
                Self {
                    phase: IgnitionPhase::Detected {
                        delay_time: record.time,
                    },
                    ..self
                }
            }
            _ => self,
        }
    }

    /// Temperature of the initial state (K)
    pub fn baseline_temperature(&self) -> f64 {
        self.baseline_temperature
    }

    /// Temperature that must be exceeded to declare ignition (K)
    pub fn threshold(&self) -> f64 {
        self.baseline_temperature + IGNITION_TEMPERATURE_RISE
    }

    /// Current phase
    pub fn phase(&self) -> IgnitionPhase {
        self.phase
    }

    /// Whether ignition has been detected
    pub fn detected(&self) -> bool {
        matches!(self.phase, IgnitionPhase::Detected { .. })
    }

    /// Ignition delay time (s), 0 until detected
    pub fn delay_time(&self) -> f64 {
        match self.phase {
            IgnitionPhase::Armed => 0.0,
            IgnitionPhase::Detected { delay_time } => delay_time,
        }
    }

    /// Time after which recording may stop, once ignition is known
    pub fn recording_horizon(&self) -> Option<f64> {
        match self.phase {
            IgnitionPhase::Armed => None,
            IgnitionPhase::Detected { delay_time } => Some(IGNITION_HORIZON_MULTIPLE * delay_time),
        }
    }

    /// Whether `time` lies past the post-ignition recording horizon
    pub fn horizon_exceeded(&self, time: f64) -> bool {
        self.recording_horizon().is_some_and(|horizon| time > horizon)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
