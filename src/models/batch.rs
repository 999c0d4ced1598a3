//! Column-wise batch evaluator for an Arrhenius mechanism
//!
//! Evaluates the whole [`StateBatch`] at once, in log space:
//!
//! ```text
//! ln k_f = ln A + b·ln T − T_a/T
//! ln K   = ΔS/R − (ΔH/R)/T
//! ln k_r = ln k_f − ln K
//! ```
//!
//! The log-space route differs from the state-by-state reference only by
//! rounding, so the two agree to well within the verification tolerance.
//! Only the host CPU is supported.

use nalgebra::{DMatrix, DVector};

use crate::batch::StateBatch;
use crate::config::ComputeDevice;
use crate::error::{HarnessError, Result};
use crate::kinetics::{BatchEvaluator, RateConstantSet};
use crate::models::arrhenius::ArrheniusMechanism;

/// Batch evaluator of an [`ArrheniusMechanism`]
#[derive(Debug, Clone)]
pub struct ArrheniusBatchEvaluator {
    mechanism: ArrheniusMechanism,
    device: ComputeDevice,
    constants: Option<RateConstantSet>,
}

impl ArrheniusBatchEvaluator {
    /// Create an evaluator for `mechanism` on `device`
    ///
    /// The device is only checked when states are submitted.
    pub fn new(mechanism: ArrheniusMechanism, device: ComputeDevice) -> Self {
        Self {
            mechanism,
            device,
            constants: None,
        }
    }

    /// Mechanism being evaluated
    pub fn mechanism(&self) -> &ArrheniusMechanism {
        &self.mechanism
    }
}

impl BatchEvaluator for ArrheniusBatchEvaluator {
    fn device(&self) -> ComputeDevice {
        self.device
    }

    fn set_states(&mut self, batch: &StateBatch) -> Result<()> {
        if let ComputeDevice::Accelerator(ordinal) = self.device {
            return Err(HarnessError::DeviceError(format!(
                "no accelerator backend available (requested accelerator:{ordinal})"
            )));
        }

        let n_species = self.mechanism.species().len();
        if batch.n_species() != n_species {
            return Err(HarnessError::ShapeMismatch {
                context: "batch evaluator",
                row: 0,
                expected: n_species,
                found: batch.n_species(),
            });
        }

        let temperatures = batch.temperatures();
        let ln_t: DVector<f64> = temperatures.map(f64::ln);
        let inv_t: DVector<f64> = temperatures.map(f64::recip);

        let reactions = self.mechanism.reactions();
        let n_steps = batch.n_steps();

        let ln_forward = DMatrix::from_fn(n_steps, reactions.len(), |i, j| {
            let r = &reactions[j];
            r.pre_exponential.ln() + r.temperature_exponent * ln_t[i]
                - r.activation_temperature * inv_t[i]
        });
        let ln_equilibrium = DMatrix::from_fn(n_steps, reactions.len(), |i, j| {
            let r = &reactions[j];
            r.entropy_over_r - r.enthalpy_over_r * inv_t[i]
        });
        let ln_reverse = &ln_forward - &ln_equilibrium;

        self.constants = Some(RateConstantSet::new(
            ln_forward.map(f64::exp),
            ln_equilibrium.map(f64::exp),
            ln_reverse.map(f64::exp),
        )?);

        log::debug!(
            "evaluated {} reactions on {n_steps} states (batch, {})",
            reactions.len(),
            self.device
        );
        Ok(())
    }

    fn rate_constants(&self) -> Result<&RateConstantSet> {
        self.constants.as_ref().ok_or_else(|| {
            HarnessError::DeviceError("rate constants requested before set_states".to_string())
        })
    }

    fn name(&self) -> &str {
        "Arrhenius batch evaluator"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
