//! Mock collaborators for testing
//!
//! These collaborators replay fixed data, so every recorded state and every
//! rate constant of a test is known in advance.

use kinetics_parity::batch::StateBatch;
use kinetics_parity::config::{ComputeDevice, ONE_ATMOSPHERE};
use kinetics_parity::kinetics::{BatchEvaluator, RateConstantSet, RateQuantity, ReferenceKinetics};
use kinetics_parity::trajectory::{Integrator, StateRecord, Trajectory};
use kinetics_parity::{HarnessError, Result};
use nalgebra::DMatrix;

// =================================================================================================
// Scripted Integrator: replays a temperature trace
// =================================================================================================

/// Integrator replaying a temperature trace at a fixed time step
///
/// State `k` of the trace is reached after `k` calls to `advance`, at time
/// `k · dt`. Pressure and mass fractions stay constant.
pub struct ScriptedIntegrator {
    pub dt: f64,
    pub temperatures: Vec<f64>,
    pub mass_fractions: Vec<f64>,
    pub fail_at: Option<usize>,
    step: usize,
}

impl ScriptedIntegrator {
    pub fn new(dt: f64, temperatures: Vec<f64>, mass_fractions: Vec<f64>) -> Self {
        Self {
            dt,
            temperatures,
            mass_fractions,
            fail_at: None,
            step: 0,
        }
    }

    /// Make the `step`-th call to `advance` fail
    pub fn failing_at(mut self, step: usize) -> Self {
        self.fail_at = Some(step);
        self
    }

    /// Number of `advance` calls so far
    pub fn steps_taken(&self) -> usize {
        self.step
    }
}

impl Integrator for ScriptedIntegrator {
    fn advance(&mut self) -> Result<()> {
        let next = self.step + 1;
        if self.fail_at == Some(next) || next >= self.temperatures.len() {
            return Err(HarnessError::IntegrationFailure {
                step: next,
                time: self.step as f64 * self.dt,
                reason: "scripted failure".to_string(),
            });
        }
        self.step = next;
        Ok(())
    }

    fn snapshot(&self) -> StateRecord {
        StateRecord::new(
            self.step as f64 * self.dt,
            self.temperatures[self.step],
            ONE_ATMOSPHERE,
            self.mass_fractions.clone(),
        )
    }

    fn specific_internal_energy(&self) -> f64 {
        1000.0 * self.temperatures[self.step]
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

// =================================================================================================
// Table Kinetics: reference returning fixed tables
// =================================================================================================

/// Reference kinetics returning a fixed rate-constant set
pub struct TableKinetics {
    pub n_species: usize,
    pub equations: Vec<String>,
    pub constants: RateConstantSet,
}

impl TableKinetics {
    pub fn new(n_species: usize, equations: Vec<String>, constants: RateConstantSet) -> Self {
        Self {
            n_species,
            equations,
            constants,
        }
    }
}

impl ReferenceKinetics for TableKinetics {
    fn n_species(&self) -> usize {
        self.n_species
    }

    fn n_reactions(&self) -> usize {
        self.equations.len()
    }

    fn reaction_equation(&self, reaction: usize) -> String {
        self.equations[reaction].clone()
    }

    fn rate_constants(&self, trajectory: &Trajectory) -> Result<RateConstantSet> {
        if trajectory.len() != self.constants.n_steps() {
            return Err(HarnessError::ShapeMismatch {
                context: "table kinetics",
                row: 0,
                expected: self.constants.n_steps(),
                found: trajectory.len(),
            });
        }
        Ok(self.constants.clone())
    }

    fn name(&self) -> &str {
        "Table kinetics"
    }
}

// =================================================================================================
// Table Evaluator: batch evaluator returning (perturbed) fixed tables
// =================================================================================================

/// Batch evaluator returning a fixed, optionally perturbed, rate-constant set
pub struct TableEvaluator {
    pub constants: RateConstantSet,
    pub device: ComputeDevice,
    pub submitted: Option<(usize, usize)>,
}

impl TableEvaluator {
    pub fn new(constants: RateConstantSet) -> Self {
        Self {
            constants,
            device: ComputeDevice::Cpu,
            submitted: None,
        }
    }

    /// Multiply one entry of one table by `factor`
    pub fn perturbed(self, quantity: RateQuantity, step: usize, reaction: usize, factor: f64) -> Self {
        let mut tables: [DMatrix<f64>; 3] =
            RateQuantity::ALL.map(|q| self.constants.table(q).clone());
        let index = RateQuantity::ALL
            .iter()
            .position(|&q| q == quantity)
            .unwrap();
        tables[index][(step, reaction)] *= factor;

        let [forward, equilibrium, reverse] = tables;
        Self {
            constants: RateConstantSet::new(forward, equilibrium, reverse).unwrap(),
            ..self
        }
    }
}

impl BatchEvaluator for TableEvaluator {
    fn device(&self) -> ComputeDevice {
        self.device
    }

    fn set_states(&mut self, batch: &StateBatch) -> Result<()> {
        if let ComputeDevice::Accelerator(ordinal) = self.device {
            return Err(HarnessError::DeviceError(format!("device {ordinal} unavailable")));
        }
        self.submitted = Some(batch.shape());
        Ok(())
    }

    fn rate_constants(&self) -> Result<&RateConstantSet> {
        match self.submitted {
            Some(_) => Ok(&self.constants),
            None => Err(HarnessError::DeviceError("nothing submitted".to_string())),
        }
    }

    fn name(&self) -> &str {
        "Table evaluator"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_integrator_replays_trace() {
        let mut integrator = ScriptedIntegrator::new(0.5, vec![900.0, 950.0, 1000.0], vec![1.0]);
        assert_eq!(integrator.snapshot().temperature, 900.0);

        integrator.advance().unwrap();
        let record = integrator.snapshot();
        assert_eq!(record.time, 0.5);
        assert_eq!(record.temperature, 950.0);

        integrator.advance().unwrap();
        assert!(integrator.advance().is_err());
    }
}
