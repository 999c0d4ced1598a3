//! Integration tests: integrator + recorder + ignition detector
//!
//! These tests drive the recorder with scripted traces, whose every state is
//! known, and with the synthetic reactor integrated by adaptive RK4.

use approx::assert_relative_eq;
use kinetics_parity::config::{HarnessConfig, IGNITION_HORIZON_MULTIPLE};
use kinetics_parity::models::GlobalStepReactor;
use kinetics_parity::trajectory::{
    AdaptiveRk4, IgnitionPhase, IgnitionState, Integrator, StopReason, TrajectoryRecorder,
};

mod common;
use common::{ScriptedIntegrator, TRACE_DT, assert_trajectory_well_formed, ignition_trace};

const COMPOSITION: [f64; 4] = [0.04, 0.2, 0.0, 0.76];

// =================================================================================================
// Scripted traces
// =================================================================================================

#[test]
fn test_ignition_at_step_seven() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(100), COMPOSITION.to_vec());
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(50.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    let delay = 7.0 * TRACE_DT;
    assert_eq!(outcome.ignition.phase(), IgnitionPhase::Detected { delay_time: delay });
    assert_eq!(outcome.ignition.baseline_temperature(), 950.0);
    assert_eq!(outcome.stop, StopReason::IgnitionHorizon);

    // 4 × 0.875 = 3.5 s is step 28, not past the horizon; step 29 is.
    let horizon = IGNITION_HORIZON_MULTIPLE * delay;
    assert_eq!(horizon, 28.0 * TRACE_DT);
    assert_eq!(outcome.trajectory.len(), 29);
    assert_eq!(outcome.final_state.time, 29.0 * TRACE_DT);
    assert!(outcome.trajectory.get(27).unwrap().time <= horizon);
    assert!(outcome.trajectory.last().unwrap().time > horizon);
    assert_eq!(integrator.steps_taken(), 29);
}

#[test]
fn test_initial_state_excluded_from_trajectory() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(100), COMPOSITION.to_vec());
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(50.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    assert_eq!(outcome.trajectory.get(0).unwrap().time, TRACE_DT);
    assert_trajectory_well_formed(&outcome.trajectory, 1e-12);
}

#[test]
fn test_time_horizon_wins_when_ignition_is_late() {
    // Ignition at 0.875 s, but t_end = 2 s comes before 4 × delay
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(100), COMPOSITION.to_vec());
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(2.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    assert!(outcome.ignition.detected());
    assert_eq!(outcome.stop, StopReason::TimeHorizon);
    assert_eq!(outcome.trajectory.len(), 16);
}

#[test]
fn test_no_ignition_reports_zero_delay() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, vec![950.0; 40], COMPOSITION.to_vec());
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(1.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    assert!(!outcome.ignition.detected());
    assert_eq!(outcome.ignition.delay_time(), 0.0);
    assert_eq!(outcome.trajectory.len(), 8);
}

#[test]
fn test_integration_failure_aborts_recording() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(100), COMPOSITION.to_vec())
        .failing_at(5);
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(50.0));
    let err = recorder.record(&mut integrator).unwrap_err();

    assert!(err.is_integration_failure());
    assert_eq!(integrator.steps_taken(), 4);
}

#[test]
fn test_out_of_range_composition_aborts_recording() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(30), vec![-0.5, 1.5]);
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(2.0));
    let err = recorder.record(&mut integrator).unwrap_err();

    assert!(err.is_integration_failure());
    assert_eq!(integrator.steps_taken(), 0);
}

#[test]
fn test_detector_is_idempotent_along_trace() {
    let mut integrator = ScriptedIntegrator::new(TRACE_DT, ignition_trace(30), COMPOSITION.to_vec());
    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(50.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    // Replaying the detector over the trajectory, then again over the tail,
    // never moves the delay.
    let mut state = IgnitionState::armed(950.0);
    for record in &outcome.trajectory {
        state = state.observe(record);
    }
    let first = state.delay_time();
    for record in outcome.trajectory.iter().rev() {
        state = state.observe(record);
    }
    assert_eq!(first, 7.0 * TRACE_DT);
    assert_eq!(state.delay_time(), first);
}

// =================================================================================================
// Synthetic reactor
// =================================================================================================

#[test]
fn test_reactor_ignition_recording() {
    let reactor = GlobalStepReactor::lean_demo();
    let adiabatic = reactor.adiabatic_temperature();
    let mut integrator = AdaptiveRk4::new(reactor);
    let initial_energy = integrator.specific_internal_energy();

    let recorder = TrajectoryRecorder::new(&HarnessConfig::new(5.0));
    let outcome = recorder.record(&mut integrator).unwrap();

    assert_eq!(outcome.stop, StopReason::IgnitionHorizon);
    let delay = outcome.ignition.delay_time();
    assert!(delay > 0.02 && delay < 1.0, "unexpected ignition delay {delay}");

    assert_trajectory_well_formed(&outcome.trajectory, 1e-6);

    // Burnt out, energy conserved
    assert_relative_eq!(outcome.final_state.temperature, adiabatic, max_relative = 1e-3);
    assert_relative_eq!(outcome.final_internal_energy, initial_energy, max_relative = 1e-5);

    // Steps cluster around the thermal runaway
    let around_ignition = outcome
        .trajectory
        .iter()
        .filter(|r| (r.time - delay).abs() < 0.1 * delay)
        .count();
    assert!(around_ignition >= 5);
}
