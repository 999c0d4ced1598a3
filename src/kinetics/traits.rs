//! Kinetics collaborator traits and types
//!
//! This module defines the API the harness expects from its two kinetics
//! sources:
//! - `RateQuantity`: type-safe identifier of a compared quantity
//! - `ReferenceKinetics`: the trusted, state-by-state model
//! - `BatchEvaluator`: the vectorized evaluator under test

use crate::batch::StateBatch;
use crate::config::ComputeDevice;
use crate::error::Result;
use crate::kinetics::data::RateConstantSet;
use crate::trajectory::Trajectory;

// =================================================================================================
// Rate quantities (Type-safe Identifiers)
// =================================================================================================

/// Per-reaction quantities compared by the verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateQuantity {
    /// Forward rate constant
    Forward,

    /// Equilibrium constant
    Equilibrium,

    /// Reverse rate constant
    Reverse,
}

impl RateQuantity {
    /// All quantities, in checking and reporting order
    pub const ALL: [RateQuantity; 3] = [
        RateQuantity::Forward,
        RateQuantity::Equilibrium,
        RateQuantity::Reverse,
    ];

    /// Short label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            RateQuantity::Forward => "forward",
            RateQuantity::Equilibrium => "equilibrium",
            RateQuantity::Reverse => "reverse",
        }
    }

    /// Name printed on report failure lines
    pub fn report_name(&self) -> &'static str {
        match self {
            RateQuantity::Forward => "forward constants",
            RateQuantity::Equilibrium => "equilibrium constants",
            RateQuantity::Reverse => "reverse constants",
        }
    }
}

impl std::fmt::Display for RateQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =================================================================================================
// Reference kinetics
// =================================================================================================

/// Trusted, state-by-state kinetics model
///
/// # Responsibility
///
/// Supplies the mechanism's dimensions, human-readable reaction equations and
/// ground-truth rate constants for every state of a recorded trajectory.
///
/// # Thread safety
///
/// The harness only reads from the model once recording is over; `Sync` lets
/// verification workers share it by reference.
pub trait ReferenceKinetics: Sync {
    /// Number of species in the mechanism
    fn n_species(&self) -> usize;

    /// Number of reactions in the mechanism
    fn n_reactions(&self) -> usize;

    /// Reaction equation of a reaction index, e.g. `"H + O2 <=> O + OH"`
    fn reaction_equation(&self, reaction: usize) -> String;

    /// Rate constants for every record of a trajectory
    ///
    /// Row `k` of each table belongs to `trajectory[k]`.
    fn rate_constants(&self, trajectory: &Trajectory) -> Result<RateConstantSet>;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str {
        "reference kinetics"
    }
}

// =================================================================================================
// Batch evaluator
// =================================================================================================

/// Vectorized rate-constant evaluator under test
///
/// # Contract
///
/// - `set_states` receives the whole trajectory in one call (the single
///   cross-boundary hand-off of a run).
/// - After a successful `set_states`, `rate_constants` returns tables aligned
///   row for row with the submitted batch.
pub trait BatchEvaluator {
    /// Compute target this evaluator runs on
    fn device(&self) -> ComputeDevice;

    /// Submit all states at once
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when the batch width disagrees with the mechanism,
    /// `DeviceError` when the compute target fails.
    fn set_states(&mut self, batch: &StateBatch) -> Result<()>;

    /// Rate constants of the last submitted batch
    ///
    /// # Errors
    ///
    /// `DeviceError` when no batch has been submitted yet.
    fn rate_constants(&self) -> Result<&RateConstantSet>;

    /// Name of the evaluator (used to display and logging)
    fn name(&self) -> &str {
        "batch evaluator"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_order() {
        assert_eq!(
            RateQuantity::ALL,
            [RateQuantity::Forward, RateQuantity::Equilibrium, RateQuantity::Reverse]
        );
    }

    #[test]
    fn test_quantity_names() {
        assert_eq!(RateQuantity::Forward.report_name(), "forward constants");
        assert_eq!(RateQuantity::Equilibrium.report_name(), "equilibrium constants");
        assert_eq!(RateQuantity::Reverse.report_name(), "reverse constants");
        assert_eq!(RateQuantity::Reverse.to_string(), "reverse");
    }
}
