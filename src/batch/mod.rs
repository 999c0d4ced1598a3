//! State-batch adapter
//!
//! Converts the frozen [`Trajectory`](crate::trajectory::Trajectory) into one
//! [`StateBatch`] and hands it to the batch evaluator in a single call.
//!
//! # Example
//!
//! ```rust,ignore
//! use kinetics_parity::batch::{dispatch, StateBatch};
//!
//! let batch = StateBatch::from_trajectory(&outcome.trajectory, mechanism.n_species())?;
//! let elapsed = dispatch(&mut evaluator, &batch)?;
//! println!("set_states took {:.1e} s", elapsed.as_secs_f64());
//! ```

mod state_batch;

pub use state_batch::{FIRST_SPECIES_COLUMN, PRESSURE_COLUMN, StateBatch, TEMPERATURE_COLUMN};

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::kinetics::BatchEvaluator;

/// Submit a batch to the evaluator and time the hand-off
///
/// This is the only cross-boundary transfer of a run and is timed as one
/// atomic operation.
///
/// # Errors
///
/// Whatever `set_states` reports (`ShapeMismatch`, `DeviceError`).
pub fn dispatch<E: BatchEvaluator + ?Sized>(evaluator: &mut E, batch: &StateBatch) -> Result<Duration> {
    let (rows, cols) = batch.shape();
    log::info!(
        "dispatching [{rows} x {cols}] state batch to {} on {}",
        evaluator.name(),
        evaluator.device()
    );

    let start = Instant::now();
    evaluator.set_states(batch)?;
    let elapsed = start.elapsed();

    log::debug!("set_states completed in {:.3e} s", elapsed.as_secs_f64());
    Ok(elapsed)
}
