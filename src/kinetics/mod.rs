//! Kinetics sources
//!
//! This module provides the traits through which the harness talks to the two
//! kinetics sources it compares, and the tables they produce.
//!
//! # Core Concepts
//!
//! - **Reference kinetics** (`ReferenceKinetics`): ground truth, evaluated
//!   state by state from the recorded trajectory
//! - **Batch evaluator** (`BatchEvaluator`): the vectorized implementation
//!   under test, fed the whole trajectory as one `StateBatch`
//! - **Rate-constant set** (`RateConstantSet`): forward, equilibrium and reverse
//!   tables `[n_steps × n_reactions]`
//! - **Rate quantity** (`RateQuantity`): type-safe name of one of the three
//!
//! # Architecture
//!
//! Both sources are external collaborators. The harness never looks inside
//! them: it only checks shapes and compares numbers. Implementations shipped
//! in [`crate::models`] exist for demonstrations and tests.

// module declaration
pub mod traits;
pub mod data;

// re-export commonly used types for convenience
pub use data::RateConstantSet;
pub use traits::{BatchEvaluator, RateQuantity, ReferenceKinetics};
