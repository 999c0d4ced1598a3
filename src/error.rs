//! Typed errors for the verification harness
//!
//! Every fatal condition the harness can hit maps onto one variant of
//! [`HarnessError`]. Tolerance violations are deliberately absent: a reaction
//! whose ratios leave the acceptance band is a failing
//! [`VerificationVerdict`](crate::verify::VerificationVerdict), not an error.

use thiserror::Error;

/// Convenience alias used by every fallible API in the crate.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Fatal failures of a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The reference integrator could not advance (non-convergence, step-size
    /// underflow, non-finite state, non-monotonic time).
    #[error("integration failed at step {step} (t = {time:.6e} s): {reason}")]
    IntegrationFailure {
        step: usize,
        time: f64,
        reason: String,
    },

    /// A row or table does not have the shape the mechanism declares.
    #[error("shape mismatch in {context} at row {row}: expected {expected}, found {found}")]
    ShapeMismatch {
        context: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The batch evaluator could not accept or process a batch on its device.
    #[error("batch evaluator device error: {0}")]
    DeviceError(String),

    /// A rate-constant table has no column for a reaction the mechanism lists.
    #[error("{source_name} has no {quantity} data for reaction {reaction}")]
    MissingReactionData {
        source_name: &'static str,
        quantity: &'static str,
        reaction: usize,
    },

    /// Checking one reaction failed unexpectedly (malformed rate-constant data).
    #[error("verification of reaction {reaction} failed: {reason}")]
    WorkerFailure { reaction: usize, reason: String },

    /// Recording stopped before a single step was accepted.
    #[error("trajectory is empty: nothing to compare")]
    EmptyTrajectory,

    /// Rejected harness configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The verification worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// Writing the console report failed.
    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Whether the error originates from the reference integrator.
    pub fn is_integration_failure(&self) -> bool {
        matches!(self, Self::IntegrationFailure { .. })
    }

    /// Whether the error is a structural shape problem (adapter or tables).
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_failure_display() {
        let err = HarnessError::IntegrationFailure {
            step: 12,
            time: 1.5e-3,
            reason: "step size underflow".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("step 12"));
        assert!(msg.contains("step size underflow"));
        assert!(err.is_integration_failure());
        assert!(!err.is_shape_mismatch());
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = HarnessError::ShapeMismatch {
            context: "state batch",
            row: 3,
            expected: 53,
            found: 52,
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch in state batch at row 3: expected 53, found 52"
        );
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_missing_reaction_data_display() {
        let err = HarnessError::MissingReactionData {
            source_name: "batch evaluator",
            quantity: "reverse",
            reaction: 7,
        };
        assert_eq!(
            err.to_string(),
            "batch evaluator has no reverse data for reaction 7"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::other("closed pipe");
        let err: HarnessError = io.into();
        assert!(matches!(err, HarnessError::Io(_)));
        assert!(err.to_string().contains("closed pipe"));
    }

    #[test]
    fn test_error_trait_object() {
        let err = HarnessError::EmptyTrajectory;
        let dyn_err: &dyn std::error::Error = &err;
        assert_eq!(dyn_err.to_string(), "trajectory is empty: nothing to compare");
    }
}
