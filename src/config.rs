//! Harness configuration and design constants
//!
//! All run parameters travel in one explicit [`HarnessConfig`] value that is
//! handed to the recorder, the adapter and the verifier. Nothing is read from
//! ambient or global state.
//!
//! # Example
//!
//! ```rust
//! use kinetics_parity::config::{ComputeDevice, HarnessConfig};
//!
//! let config = HarnessConfig::new(10.0)
//!     .with_pool_size(8)
//!     .with_device(ComputeDevice::Cpu);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.pool_size, 8);
//! ```

use crate::error::{HarnessError, Result};

// =================================================================================================
// Design constants
// =================================================================================================

/// Temperature rise above the initial temperature that marks ignition [K].
///
/// A steep thermal-runaway threshold; not a tunable.
pub const IGNITION_TEMPERATURE_RISE: f64 = 600.0;

/// Recording continues until elapsed time exceeds this multiple of the
/// ignition delay, capturing post-ignition relaxation.
pub const IGNITION_HORIZON_MULTIPLE: f64 = 4.0;

/// Relative tolerance δ on the reference/batch ratio (0.1 %).
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Additive floor ε applied to numerator and denominator of every ratio.
///
/// Keeps `(ref + ε) / (batch + ε)` finite and close to 1 when both sides are
/// legitimately ~0, which is common for reactions irrelevant at a state.
pub const RATIO_FLOOR: f64 = 1e-300;

/// Default number of verification workers.
pub const DEFAULT_POOL_SIZE: usize = 4;

/// Allowed deviation of a record's mass-fraction sum from 1.
pub const MASS_FRACTION_SUM_TOLERANCE: f64 = 1e-6;

/// Standard atmosphere [Pa], used to print pressures in atm.
pub const ONE_ATMOSPHERE: f64 = 101_325.0;

// =================================================================================================
// Compute device
// =================================================================================================

/// Compute target requested from the batch evaluator.
///
/// The harness never interprets this value; it is forwarded to the
/// evaluator, which may reject targets it cannot serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeDevice {
    /// Host CPU
    #[default]
    Cpu,

    /// Accelerator with the given ordinal (e.g. `cuda:0`)
    Accelerator(usize),
}

impl std::fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Accelerator(ordinal) => write!(f, "accelerator:{ordinal}"),
        }
    }
}

// =================================================================================================
// Ratio tolerance
// =================================================================================================

/// Acceptance band for the reference/batch ratio.
///
/// A quantity passes when every ratio lies in `[1 - relative, 1 + relative]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTolerance {
    /// δ, relative half-width of the band
    pub relative: f64,

    /// ε, additive numerical floor
    pub floor: f64,
}

impl Default for RatioTolerance {
    fn default() -> Self {
        Self {
            relative: RATIO_TOLERANCE,
            floor: RATIO_FLOOR,
        }
    }
}

impl RatioTolerance {
    /// Lower edge of the band (inclusive)
    pub fn lower(&self) -> f64 {
        1.0 - self.relative
    }

    /// Upper edge of the band (inclusive)
    pub fn upper(&self) -> f64 {
        1.0 + self.relative
    }

    /// Whether an observed `[min, max]` ratio range lies within the band
    pub fn accepts(&self, min: f64, max: f64) -> bool {
        min >= self.lower() && max <= self.upper()
    }
}

// =================================================================================================
// Harness configuration
// =================================================================================================

/// Configuration of one harness run.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Hard recording horizon [s]
    pub t_end: f64,

    /// Number of verification workers
    pub pool_size: usize,

    /// Compute target forwarded to the batch evaluator
    pub device: ComputeDevice,

    /// Ratio acceptance band
    pub tolerance: RatioTolerance,
}

impl HarnessConfig {
    /// Create a configuration with the given horizon and default settings
    pub fn new(t_end: f64) -> Self {
        Self {
            t_end,
            pool_size: DEFAULT_POOL_SIZE,
            device: ComputeDevice::default(),
            tolerance: RatioTolerance::default(),
        }
    }

    /// Set the number of verification workers
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the compute target of the batch evaluator
    pub fn with_device(mut self, device: ComputeDevice) -> Self {
        self.device = device;
        self
    }

    /// Override the ratio acceptance band
    pub fn with_tolerance(mut self, tolerance: RatioTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate that parameters are meaningful
    pub fn validate(&self) -> Result<()> {
        if !(self.t_end.is_finite() && self.t_end > 0.0) {
            return Err(HarnessError::InvalidConfiguration(format!(
                "recording horizon must be positive and finite, got {}",
                self.t_end
            )));
        }
        if self.pool_size == 0 {
            return Err(HarnessError::InvalidConfiguration(
                "worker pool needs at least one worker".to_string(),
            ));
        }
        let tol = &self.tolerance;
        if !(tol.relative.is_finite() && tol.relative > 0.0 && tol.relative < 1.0) {
            return Err(HarnessError::InvalidConfiguration(format!(
                "relative tolerance must lie in (0, 1), got {}",
                tol.relative
            )));
        }
        // ε = 0 turns a pair of zero constants into 0/0
        if !(tol.floor.is_finite() && tol.floor > 0.0) {
            return Err(HarnessError::InvalidConfiguration(format!(
                "ratio floor must be positive and finite, got {}",
                tol.floor
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::new(10.0);
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
        assert_eq!(config.device, ComputeDevice::Cpu);
        assert_eq!(config.tolerance.relative, 1e-3);
        assert_eq!(config.tolerance.floor, 1e-300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_horizon() {
        assert!(HarnessConfig::new(0.0).validate().is_err());
        assert!(HarnessConfig::new(-1.0).validate().is_err());
        assert!(HarnessConfig::new(f64::NAN).validate().is_err());
        assert!(HarnessConfig::new(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_pool() {
        let config = HarnessConfig::new(1.0).with_pool_size(0);
        assert!(matches!(
            config.validate(),
            Err(HarnessError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let config = HarnessConfig::new(1.0).with_tolerance(RatioTolerance {
            relative: 0.0,
            floor: RATIO_FLOOR,
        });
        assert!(config.validate().is_err());

        let config = HarnessConfig::new(1.0).with_tolerance(RatioTolerance {
            relative: RATIO_TOLERANCE,
            floor: -1.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_floor() {
        let config = HarnessConfig::new(1.0).with_tolerance(RatioTolerance {
            relative: RATIO_TOLERANCE,
            floor: 0.0,
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HarnessError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_tolerance_band_is_inclusive() {
        let tol = RatioTolerance::default();
        assert!(tol.accepts(tol.lower(), tol.upper()));
        assert!(tol.accepts(1.0, 1.0));
        assert!(!tol.accepts(0.998, 1.0));
        assert!(!tol.accepts(1.0, 1.0011));
    }

    #[test]
    fn test_device_display() {
        assert_eq!(ComputeDevice::Cpu.to_string(), "cpu");
        assert_eq!(ComputeDevice::Accelerator(0).to_string(), "accelerator:0");
    }
}
