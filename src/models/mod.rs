//! Ready-made collaborators for demonstrations and tests
//!
//! The harness itself is agnostic of any mechanism: these models implement
//! its collaborator traits for a small synthetic fuel/oxidiser system.
//!
//! # Available Models
//!
//! ## [`GlobalStepReactor`]: the reactor
//!
//! Adiabatic constant-volume reactor with one global step. Driven by
//! [`AdaptiveRk4`](crate::trajectory::AdaptiveRk4), it produces a trajectory
//! with a sharp ignition.
//!
//! ## [`ArrheniusMechanism`]: the reference kinetics
//!
//! Modified-Arrhenius reactions with equilibrium constants from ΔH/R and
//! ΔS/R, evaluated state by state.
//!
//! ## [`ArrheniusBatchEvaluator`]: the evaluator under test
//!
//! The same mechanism evaluated column-wise over a whole
//! [`StateBatch`](crate::batch::StateBatch).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod arrhenius;
pub mod batch;
pub mod reactor;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use arrhenius::{ArrheniusMechanism, ElementaryReaction};
pub use batch::ArrheniusBatchEvaluator;
pub use reactor::{GlobalStepReactor, SPECIES};
