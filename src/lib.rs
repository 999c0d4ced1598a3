//! kinetics-parity: Batch Kinetics Verification Harness
//!
//! Checks that a vectorized (batch) chemical-kinetics evaluator reproduces the
//! rate constants of a trusted reference model along a realistic
//! thermochemical trajectory.
//!
//! # Architecture
//!
//! A run has three strictly sequential stages:
//!
//! 1. **Recording**: a reference integrator is stepped through an ignition
//!    event; every accepted state is recorded until the post-ignition
//!    horizon (`4 × delay_time`) or the hard horizon `t_end` is reached.
//! 2. **Hand-off**: the frozen trajectory is stacked into one
//!    `[n_steps, 2 + n_species]` batch and submitted to the evaluator in a
//!    single call.
//! 3. **Verification**: for each reaction, the forward, equilibrium and
//!    reverse constants of both sources are compared through floored ratios,
//!    reactions being distributed over a worker pool.
//!
//! The collaborators (integrator, reference kinetics, batch evaluator) are
//! traits; [`models`] ships a small synthetic implementation of each.
//!
//! # Quick Start
//!
//! ```rust
//! use kinetics_parity::prelude::*;
//!
//! # fn main() -> Result<(), HarnessError> {
//! let config = HarnessConfig::new(1.0).with_pool_size(2);
//! let mechanism = ArrheniusMechanism::global_step_demo();
//!
//! let mut integrator = AdaptiveRk4::new(GlobalStepReactor::lean_demo());
//! let mut evaluator = ArrheniusBatchEvaluator::new(mechanism.clone(), config.device);
//! let mut report = Report::new(Vec::new());
//!
//! let outcome = Harness::new(config).run(&mut integrator, &mechanism, &mut evaluator, &mut report)?;
//!
//! for verdict in outcome.verification.failing() {
//!     println!("reaction {} disagrees", verdict.reaction_index);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`trajectory`]: integrator seam, recorder and ignition detector
//! - [`batch`]: trajectory-to-batch adapter and hand-off
//! - [`kinetics`]: kinetics-source traits and rate-constant tables
//! - [`verify`]: ratio checks, verdicts and the worker pool
//! - [`output`]: console report
//! - [`harness`]: end-to-end run
//! - [`models`]: synthetic collaborators for demos and tests

// Core modules
pub mod config;
pub mod error;

pub mod batch;
pub mod kinetics;
pub mod trajectory;
pub mod verify;

pub mod harness;
pub mod models;
pub mod output;

pub use error::{HarnessError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use kinetics_parity::prelude::*;
    //! ```
    pub use crate::config::{ComputeDevice,
                            HarnessConfig,
                            RatioTolerance};
    pub use crate::error::HarnessError;
    pub use crate::harness::{Harness,
                             HarnessOutcome};
    pub use crate::kinetics::{BatchEvaluator,
                              RateConstantSet,
                              RateQuantity,
                              ReferenceKinetics};
    pub use crate::models::{ArrheniusBatchEvaluator,
                            ArrheniusMechanism,
                            GlobalStepReactor};
    pub use crate::output::Report;
    pub use crate::trajectory::{AdaptiveRk4,
                                Integrator,
                                Trajectory,
                                TrajectoryRecorder};
    pub use crate::verify::{VerificationReport,
                            VerificationVerdict};
}
