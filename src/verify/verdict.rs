//! Per-reaction verdicts and the aggregate report

use crate::kinetics::RateQuantity;
use crate::verify::ratio::RatioBounds;

/// Outcome of comparing one quantity of one reaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityCheck {
    /// Quantity compared
    pub quantity: RateQuantity,

    /// Whether every ratio lies inside the tolerance band
    pub passed: bool,

    /// Observed ratio extremes
    pub bounds: RatioBounds,
}

/// Verdict of one reaction, immutable once produced
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationVerdict {
    /// Reaction index in mechanism order
    pub reaction_index: usize,

    /// Human-readable reaction equation
    pub equation: String,

    /// Forward rate constant check
    pub forward: QuantityCheck,

    /// Equilibrium constant check
    pub equilibrium: QuantityCheck,

    /// Reverse rate constant check
    pub reverse: QuantityCheck,
}

impl VerificationVerdict {
    /// Whether the forward rate constants agree
    pub fn forward_ok(&self) -> bool {
        self.forward.passed
    }

    /// Whether the equilibrium constants agree
    pub fn equilibrium_ok(&self) -> bool {
        self.equilibrium.passed
    }

    /// Whether the reverse rate constants agree
    pub fn reverse_ok(&self) -> bool {
        self.reverse.passed
    }

    /// Whether all three quantities agree
    pub fn passed(&self) -> bool {
        self.forward_ok() && self.equilibrium_ok() && self.reverse_ok()
    }

    /// Check of one quantity
    pub fn check(&self, quantity: RateQuantity) -> &QuantityCheck {
        match quantity {
            RateQuantity::Forward => &self.forward,
            RateQuantity::Equilibrium => &self.equilibrium,
            RateQuantity::Reverse => &self.reverse,
        }
    }

    /// All three checks, in reporting order
    pub fn checks(&self) -> [&QuantityCheck; 3] {
        [&self.forward, &self.equilibrium, &self.reverse]
    }

    /// Failing checks, in reporting order
    pub fn failures(&self) -> impl Iterator<Item = &QuantityCheck> {
        self.checks().into_iter().filter(|check| !check.passed)
    }
}

/// Verdicts of a whole verification pass, ordered by reaction index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerificationReport {
    verdicts: Vec<VerificationVerdict>,
}

impl VerificationReport {
    /// Wrap verdicts already in reaction-index order
    pub fn new(verdicts: Vec<VerificationVerdict>) -> Self {
        debug_assert!(
            verdicts
                .iter()
                .enumerate()
                .all(|(i, v)| v.reaction_index == i),
            "verdicts must be indexed by reaction"
        );
        Self { verdicts }
    }

    /// All verdicts
    pub fn verdicts(&self) -> &[VerificationVerdict] {
        &self.verdicts
    }

    /// Verdict of one reaction
    pub fn get(&self, reaction: usize) -> Option<&VerificationVerdict> {
        self.verdicts.get(reaction)
    }

    /// Number of reactions checked
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// Verdicts of reactions failing any check
    pub fn failing(&self) -> impl Iterator<Item = &VerificationVerdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }

    /// Number of reactions failing any check
    pub fn failing_count(&self) -> usize {
        self.failing().count()
    }

    /// Whether every reaction passed
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(VerificationVerdict::passed)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
