//! Common utilities for integration tests

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{ScriptedIntegrator, TableEvaluator, TableKinetics};
pub use test_helpers::{
    TRACE_DT,
    assert_trajectory_well_formed,
    equations,
    init_test_logging,
    ignition_trace,
    trajectory_from_temperatures,
    uniform_set,
    varied_set,
};
