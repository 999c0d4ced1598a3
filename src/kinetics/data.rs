//! Rate-constant tables
//!
//! A [`RateConstantSet`] holds the three per-reaction quantities produced by
//! one kinetics source over a whole trajectory. Each table is a
//! `[n_steps × n_reactions]` matrix: rows follow trajectory order, columns
//! follow mechanism reaction order.
//!
//! # Memory Layout
//!
//! `nalgebra` stores matrices column-major, so the column of one reaction
//! (all steps) is contiguous. That is the access pattern of the verifier,
//! which walks one reaction at a time.

use nalgebra::DMatrix;

use crate::error::{HarnessError, Result};
use crate::kinetics::traits::RateQuantity;

/// Forward, equilibrium and reverse rate constants over a trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct RateConstantSet {
    forward: DMatrix<f64>,
    equilibrium: DMatrix<f64>,
    reverse: DMatrix<f64>,
}

impl RateConstantSet {
    /// Build a set from three tables of identical shape
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` when the equilibrium or reverse table differs in
    /// shape from the forward table.
    pub fn new(
        forward: DMatrix<f64>,
        equilibrium: DMatrix<f64>,
        reverse: DMatrix<f64>,
    ) -> Result<Self> {
        for (context, table) in [
            ("equilibrium constant table", &equilibrium),
            ("reverse rate constant table", &reverse),
        ] {
            if table.nrows() != forward.nrows() {
                return Err(HarnessError::ShapeMismatch {
                    context,
                    row: 0,
                    expected: forward.nrows(),
                    found: table.nrows(),
                });
            }
            if table.ncols() != forward.ncols() {
                return Err(HarnessError::ShapeMismatch {
                    context,
                    row: 0,
                    expected: forward.ncols(),
                    found: table.ncols(),
                });
            }
        }

        Ok(Self {
            forward,
            equilibrium,
            reverse,
        })
    }

    /// Build a set from row-major data, `values[step][reaction]`
    ///
    /// Convenient for tables produced step by step.
    pub fn from_rows(
        forward: &[Vec<f64>],
        equilibrium: &[Vec<f64>],
        reverse: &[Vec<f64>],
    ) -> Result<Self> {
        Self::new(
            table_from_rows("forward rate constant table", forward)?,
            table_from_rows("equilibrium constant table", equilibrium)?,
            table_from_rows("reverse rate constant table", reverse)?,
        )
    }

    /// Number of trajectory steps (rows)
    pub fn n_steps(&self) -> usize {
        self.forward.nrows()
    }

    /// Number of reactions (columns)
    pub fn n_reactions(&self) -> usize {
        self.forward.ncols()
    }

    /// Full table of one quantity
    pub fn table(&self, quantity: RateQuantity) -> &DMatrix<f64> {
        match quantity {
            RateQuantity::Forward => &self.forward,
            RateQuantity::Equilibrium => &self.equilibrium,
            RateQuantity::Reverse => &self.reverse,
        }
    }

    /// Values of one quantity for one reaction over all steps
    ///
    /// # Errors
    ///
    /// `MissingReactionData` when the table has no column for `reaction`.
    pub fn reaction(
        &self,
        quantity: RateQuantity,
        reaction: usize,
        source_name: &'static str,
    ) -> Result<&[f64]> {
        let table = self.table(quantity);
        if reaction >= table.ncols() {
            return Err(HarnessError::MissingReactionData {
                source_name,
                quantity: quantity.label(),
                reaction,
            });
        }
        let n_steps = table.nrows();
        Ok(&table.as_slice()[reaction * n_steps..(reaction + 1) * n_steps])
    }

    /// Check that the set covers `n_steps` rows and `n_reactions` columns
    pub fn ensure_shape(
        &self,
        n_steps: usize,
        n_reactions: usize,
        source_name: &'static str,
    ) -> Result<()> {
        if self.n_steps() != n_steps {
            return Err(HarnessError::ShapeMismatch {
                context: source_name,
                row: self.n_steps().min(n_steps),
                expected: n_steps,
                found: self.n_steps(),
            });
        }
        if self.n_reactions() < n_reactions {
            return Err(HarnessError::MissingReactionData {
                source_name,
                quantity: RateQuantity::Forward.label(),
                reaction: self.n_reactions(),
            });
        }
        Ok(())
    }
}

fn table_from_rows(context: &'static str, rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let n_cols = rows.first().map_or(0, Vec::len);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != n_cols {
            return Err(HarnessError::ShapeMismatch {
                context,
                row,
                expected: n_cols,
                found: values.len(),
            });
        }
    }
    Ok(DMatrix::from_fn(rows.len(), n_cols, |i, j| rows[i][j]))
}

// =================================================================================================
// Tests
// =================================================================================================
