//! State records and the recorded trajectory
//!
//! A [`StateRecord`] is one accepted integrator step; a [`Trajectory`] is the
//! time-ordered sequence of them. The trajectory only grows through
//! [`Trajectory::push`], which enforces strictly increasing time, and exposes
//! read-only access afterwards.

use crate::error::{HarnessError, Result};

// =================================================================================================
// State record
// =================================================================================================

/// Thermodynamic state of the reference reactor at one instant
///
/// # Units
///
/// - `time`: s
/// - `temperature`: K
/// - `pressure`: Pa
/// - `mass_fractions`: dimensionless, one per species, summing to 1
#[derive(Debug, Clone, PartialEq)]
pub struct StateRecord {
    /// Elapsed simulation time (s)
    pub time: f64,

    /// Temperature (K)
    pub temperature: f64,

    /// Pressure (Pa)
    pub pressure: f64,

    /// Species mass fractions, in mechanism order
    pub mass_fractions: Vec<f64>,
}

impl StateRecord {
    /// Create a record
    pub fn new(time: f64, temperature: f64, pressure: f64, mass_fractions: Vec<f64>) -> Self {
        Self {
            time,
            temperature,
            pressure,
            mass_fractions,
        }
    }

    /// Number of species carried by this record
    pub fn n_species(&self) -> usize {
        self.mass_fractions.len()
    }

    /// Sum of all mass fractions (1 for a consistent state)
    pub fn mass_fraction_sum(&self) -> f64 {
        self.mass_fractions.iter().sum()
    }

    /// Whether every scalar in the record is finite
    pub fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.temperature.is_finite()
            && self.pressure.is_finite()
            && self.mass_fractions.iter().all(|y| y.is_finite())
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Time-ordered sequence of accepted states
///
/// Insertion order is time order; `time` is strictly increasing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    records: Vec<StateRecord>,
}

impl Trajectory {
    /// Create an empty trajectory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trajectory with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Append one record
    ///
    /// # Errors
    ///
    /// `IntegrationFailure` when `record.time` does not strictly exceed the
    /// time of the last record: the integrator broke its stepping contract.
    pub fn push(&mut self, record: StateRecord) -> Result<()> {
        if let Some(last) = self.records.last()
            && record.time <= last.time
        {
            return Err(HarnessError::IntegrationFailure {
                step: self.records.len() + 1,
                time: record.time,
                reason: format!(
                    "time did not advance (previous {:.6e} s, current {:.6e} s)",
                    last.time, record.time
                ),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a given step index
    pub fn get(&self, index: usize) -> Option<&StateRecord> {
        self.records.get(index)
    }

    /// Last recorded state
    pub fn last(&self) -> Option<&StateRecord> {
        self.records.last()
    }

    /// All records in time order
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Iterate over records in time order
    pub fn iter(&self) -> std::slice::Iter<'_, StateRecord> {
        self.records.iter()
    }

    /// Elapsed time of every record
    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.time).collect()
    }

    /// Temperature of every record
    pub fn temperatures(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.temperature).collect()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a StateRecord;
    type IntoIter = std::slice::Iter<'a, StateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
