//! Per-reaction consistency verifier
//!
//! For each reaction `i` and each quantity (forward, equilibrium, reverse):
//!
//! 1. take the reference column `ref[:, i]` and the batch column `batch[:, i]`
//!    (one value per trajectory row, row-aligned),
//! 2. reduce the floored ratios `(ref + ε) / (batch + ε)` to their min and max,
//! 3. pass iff `min ≥ 1 − δ` and `max ≤ 1 + δ`.
//!
//! Reactions are independent. They are distributed over the worker pool of
//! [`parallel_map`](crate::verify::parallel_map), which only ever reads the
//! two tables and the equation list.

use crate::config::RatioTolerance;
use crate::error::{HarnessError, Result};
use crate::kinetics::{RateConstantSet, RateQuantity};
use crate::verify::pool::parallel_map;
use crate::verify::ratio::{RatioError, ratio_bounds};
use crate::verify::verdict::{QuantityCheck, VerificationReport, VerificationVerdict};

const REFERENCE: &str = "reference kinetics";
const BATCH: &str = "batch evaluator";

/// Compares two rate-constant sources reaction by reaction
///
/// # Example
///
/// ```rust,ignore
/// let verifier = ConsistencyVerifier::new(&reference, &batch, &equations, config.tolerance)?;
/// let report = verifier.verify(config.pool_size)?;
///
/// for verdict in report.failing() {
///     println!("reaction {} disagrees", verdict.reaction_index);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsistencyVerifier<'a> {
    reference: &'a RateConstantSet,
    batch: &'a RateConstantSet,
    equations: &'a [String],
    tolerance: RatioTolerance,
}

impl<'a> ConsistencyVerifier<'a> {
    /// Create a verifier over two aligned sets
    ///
    /// `equations[i]` is the equation of reaction `i`; its length fixes the
    /// number of reactions checked.
    ///
    /// # Errors
    ///
    /// Structural failures, checked before any comparison:
    /// - `ShapeMismatch` when the sets differ in row count
    /// - `MissingReactionData` when a set lacks a column for a listed reaction
    pub fn new(
        reference: &'a RateConstantSet,
        batch: &'a RateConstantSet,
        equations: &'a [String],
        tolerance: RatioTolerance,
    ) -> Result<Self> {
        let n_steps = reference.n_steps();
        reference.ensure_shape(n_steps, equations.len(), REFERENCE)?;
        batch.ensure_shape(n_steps, equations.len(), BATCH)?;

        Ok(Self {
            reference,
            batch,
            equations,
            tolerance,
        })
    }

    /// Number of reactions to check
    pub fn n_reactions(&self) -> usize {
        self.equations.len()
    }

    /// Check every reaction on `workers` workers
    ///
    /// Verdicts come back in reaction-index order. Tolerance violations are
    /// recorded in the verdicts; only structural or worker failures abort.
    pub fn verify(&self, workers: usize) -> Result<VerificationReport> {
        log::info!(
            "verifying {} reactions over {} steps on {workers} workers (δ = {:e}, ε = {:e})",
            self.n_reactions(),
            self.reference.n_steps(),
            self.tolerance.relative,
            self.tolerance.floor
        );

        let verdicts = parallel_map(self.n_reactions(), workers, |i| self.check_reaction(i))?;
        let report = VerificationReport::new(verdicts);

        log::info!(
            "{} of {} reactions failing",
            report.failing_count(),
            report.len()
        );
        Ok(report)
    }

    /// Check all three quantities of one reaction
    ///
    /// # Errors
    ///
    /// - `MissingReactionData` when either set has no column for `reaction`
    /// - `WorkerFailure` when the data is malformed (NaN ratios)
    pub fn check_reaction(&self, reaction: usize) -> Result<VerificationVerdict> {
        let equation = self
            .equations
            .get(reaction)
            .ok_or(HarnessError::MissingReactionData {
                source_name: REFERENCE,
                quantity: "equation",
                reaction,
            })?;

        let [forward, equilibrium, reverse] = RateQuantity::ALL;
        let verdict = VerificationVerdict {
            reaction_index: reaction,
            equation: equation.clone(),
            forward: self.check_quantity(reaction, forward)?,
            equilibrium: self.check_quantity(reaction, equilibrium)?,
            reverse: self.check_quantity(reaction, reverse)?,
        };

        if verdict.passed() {
            log::debug!("reaction {reaction} ({equation}) consistent");
        } else {
            log::warn!("reaction {reaction} ({equation}) outside tolerance");
        }
        Ok(verdict)
    }

    fn check_quantity(&self, reaction: usize, quantity: RateQuantity) -> Result<QuantityCheck> {
        let reference = self.reference.reaction(quantity, reaction, REFERENCE)?;
        let batch = self.batch.reaction(quantity, reaction, BATCH)?;

        let bounds = ratio_bounds(reference, batch, self.tolerance.floor).map_err(|e| match e {
            RatioError::LengthMismatch { reference, batch } => HarnessError::ShapeMismatch {
                context: BATCH,
                row: reference.min(batch),
                expected: reference,
                found: batch,
            },
            other => HarnessError::WorkerFailure {
                reaction,
                reason: format!("{quantity} constants: {other}"),
            },
        })?;

        Ok(QuantityCheck {
            quantity,
            passed: self.tolerance.accepts(bounds.min, bounds.max),
            bounds,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
