//! Helper functions for integration tests

use kinetics_parity::config::ONE_ATMOSPHERE;
use kinetics_parity::kinetics::RateConstantSet;
use kinetics_parity::trajectory::{StateRecord, Trajectory};
use nalgebra::DMatrix;

/// Route library logs to the test output, once per test binary
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// Time step of scripted traces, exactly representable
pub const TRACE_DT: f64 = 0.125;

/// Temperature trace at 950 K jumping to 1600 K at step 7
pub fn ignition_trace(len: usize) -> Vec<f64> {
    (0..len)
        .map(|k| if k < 7 { 950.0 } else { 1600.0 })
        .collect()
}

/// Equations `R0: A0 <=> B0`, `R1: A1 <=> B1`, …
pub fn equations(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("A{i} <=> B{i}")).collect()
}

/// Rate-constant set with the same table for all three quantities
pub fn uniform_set(n_steps: usize, n_reactions: usize, value: f64) -> RateConstantSet {
    let table = DMatrix::from_element(n_steps, n_reactions, value);
    RateConstantSet::new(table.clone(), table.clone(), table).unwrap()
}

/// Rate-constant set spanning many orders of magnitude, zeros included
pub fn varied_set(n_steps: usize, n_reactions: usize) -> RateConstantSet {
    let forward = DMatrix::from_fn(n_steps, n_reactions, |i, j| {
        if (i + j) % 7 == 0 {
            0.0
        } else {
            10f64.powi(((i * 13 + j * 29) % 60) as i32 - 30) * (1.0 + i as f64)
        }
    });
    let equilibrium = forward.map(|k| k * 3.0 + 1e-300);
    let reverse = DMatrix::from_fn(n_steps, n_reactions, |i, j| 1e-310 * (i + j) as f64);
    RateConstantSet::new(forward, equilibrium, reverse).unwrap()
}

/// Trajectory over the given temperatures at fixed pressure and composition
pub fn trajectory_from_temperatures(temperatures: &[f64], mass_fractions: &[f64]) -> Trajectory {
    let mut trajectory = Trajectory::with_capacity(temperatures.len());
    for (k, &t) in temperatures.iter().enumerate() {
        trajectory
            .push(StateRecord::new(
                (k + 1) as f64 * TRACE_DT,
                t,
                ONE_ATMOSPHERE * (1.0 + k as f64 * 0.01),
                mass_fractions.to_vec(),
            ))
            .unwrap();
    }
    trajectory
}

/// Assert strictly increasing times, unit mass-fraction sums and
/// fractions within `[0, 1]` up to `tolerance`
pub fn assert_trajectory_well_formed(trajectory: &Trajectory, tolerance: f64) {
    for pair in trajectory.records().windows(2) {
        assert!(
            pair[1].time > pair[0].time,
            "time not increasing: {} then {}",
            pair[0].time,
            pair[1].time
        );
    }
    for (k, record) in trajectory.iter().enumerate() {
        let sum = record.mass_fraction_sum();
        assert!(
            (sum - 1.0).abs() < tolerance,
            "record {}: mass fractions sum to {}",
            k,
            sum
        );
        for &y in &record.mass_fractions {
            assert!(
                y >= -tolerance && y <= 1.0 + tolerance,
                "record {}: mass fraction {} out of [0, 1]",
                k,
                y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignition_trace_shape() {
        let trace = ignition_trace(10);
        assert_eq!(trace[6], 950.0);
        assert_eq!(trace[7], 1600.0);
    }
}
