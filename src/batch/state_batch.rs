//! Rectangular state batch
//!
//! A [`StateBatch`] is the trajectory flattened into one matrix of shape
//! `[n_steps, 2 + n_species]`:
//!
//! ```text
//!            col 0   col 1   col 2 … col 1+n_species
//! row 0    │  T₀      P₀      Y₀,₀ … Y₀,ₙ₋₁        ← trajectory[0]
//! row 1    │  T₁      P₁      Y₁,₀ … Y₁,ₙ₋₁        ← trajectory[1]
//!  …       │
//! ```
//!
//! Row `k` always belongs to `trajectory[k]`; the verifier relies on that
//! one-to-one correspondence.

use nalgebra::{DMatrix, DVectorView, RowDVector};

use crate::error::{HarnessError, Result};
use crate::trajectory::{StateRecord, Trajectory};

/// Column of the temperature
pub const TEMPERATURE_COLUMN: usize = 0;

/// Column of the pressure
pub const PRESSURE_COLUMN: usize = 1;

/// First mass-fraction column
pub const FIRST_SPECIES_COLUMN: usize = 2;

/// Trajectory stacked into one `[n_steps, 2 + n_species]` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct StateBatch {
    data: DMatrix<f64>,
    n_species: usize,
}

impl StateBatch {
    /// Stack a frozen trajectory, in trajectory order
    ///
    /// # Errors
    ///
    /// - `EmptyTrajectory` when there is nothing to stack
    /// - `ShapeMismatch` when a record's mass-fraction vector length differs
    ///   from `n_species`
    pub fn from_trajectory(trajectory: &Trajectory, n_species: usize) -> Result<Self> {
        if trajectory.is_empty() {
            return Err(HarnessError::EmptyTrajectory);
        }

        if let Some((row, record)) = trajectory
            .iter()
            .enumerate()
            .find(|(_, record)| record.n_species() != n_species)
        {
            return Err(HarnessError::ShapeMismatch {
                context: "state batch",
                row,
                expected: n_species,
                found: record.n_species(),
            });
        }

        let records = trajectory.records();
        let data = DMatrix::from_fn(records.len(), FIRST_SPECIES_COLUMN + n_species, |i, j| {
            let record = &records[i];
            match j {
                TEMPERATURE_COLUMN => record.temperature,
                PRESSURE_COLUMN => record.pressure,
                species => record.mass_fractions[species - FIRST_SPECIES_COLUMN],
            }
        });

        Ok(Self { data, n_species })
    }

    /// Number of rows (trajectory steps)
    pub fn n_steps(&self) -> usize {
        self.data.nrows()
    }

    /// Number of species columns
    pub fn n_species(&self) -> usize {
        self.n_species
    }

    /// Shape `(n_steps, 2 + n_species)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Underlying matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Temperature column (K)
    pub fn temperatures(&self) -> DVectorView<'_, f64> {
        self.data.column(TEMPERATURE_COLUMN)
    }

    /// Pressure column (Pa)
    pub fn pressures(&self) -> DVectorView<'_, f64> {
        self.data.column(PRESSURE_COLUMN)
    }

    /// Mass-fraction column of one species
    pub fn mass_fractions(&self, species: usize) -> Option<DVectorView<'_, f64>> {
        (species < self.n_species).then(|| self.data.column(FIRST_SPECIES_COLUMN + species))
    }

    /// Full row `[T, P, Y…]` of one step
    pub fn row(&self, step: usize) -> Option<RowDVector<f64>> {
        (step < self.n_steps()).then(|| self.data.row(step).into_owned())
    }

    /// Rebuild the thermodynamic part of one step, with the given time
    ///
    /// The batch carries no time column; callers pair rows with the
    /// trajectory they were built from.
    pub fn record(&self, step: usize, time: f64) -> Option<StateRecord> {
        let row = self.row(step)?;
        Some(StateRecord::new(
            time,
            row[TEMPERATURE_COLUMN],
            row[PRESSURE_COLUMN],
            row.iter().skip(FIRST_SPECIES_COLUMN).copied().collect(),
        ))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory() -> Trajectory {
        let mut trajectory = Trajectory::new();
        trajectory
            .push(StateRecord::new(0.1, 950.0, 2.0e6, vec![0.1, 0.2, 0.7]))
            .unwrap();
        trajectory
            .push(StateRecord::new(0.2, 1200.0, 2.5e6, vec![0.05, 0.25, 0.7]))
            .unwrap();
        trajectory
    }

    #[test]
    fn test_shape_and_columns() {
        let batch = StateBatch::from_trajectory(&trajectory(), 3).unwrap();
        assert_eq!(batch.shape(), (2, 5));
        assert_eq!(batch.n_steps(), 2);
        assert_eq!(batch.temperatures()[1], 1200.0);
        assert_eq!(batch.pressures()[0], 2.0e6);
        assert_eq!(batch.mass_fractions(1).unwrap()[1], 0.25);
        assert!(batch.mass_fractions(3).is_none());
    }

    #[test]
    fn test_rows_reconstruct_records() {
        let trajectory = trajectory();
        let batch = StateBatch::from_trajectory(&trajectory, 3).unwrap();

        for (k, expected) in trajectory.iter().enumerate() {
            let rebuilt = batch.record(k, expected.time).unwrap();
            assert_eq!(&rebuilt, expected);
        }
        assert!(batch.row(2).is_none());
    }

    #[test]
    fn test_species_count_mismatch() {
        let err = StateBatch::from_trajectory(&trajectory(), 4).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::ShapeMismatch { row: 0, expected: 4, found: 3, .. }
        ));
    }

    #[test]
    fn test_mismatch_reports_offending_row() {
        let mut trajectory = trajectory();
        trajectory
            .push(StateRecord::new(0.3, 1500.0, 3.0e6, vec![0.3, 0.7]))
            .unwrap();
        let err = StateBatch::from_trajectory(&trajectory, 3).unwrap_err();
        assert!(matches!(err, HarnessError::ShapeMismatch { row: 2, found: 2, .. }));
    }

    #[test]
    fn test_empty_trajectory() {
        let err = StateBatch::from_trajectory(&Trajectory::new(), 3).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyTrajectory));
    }
}
