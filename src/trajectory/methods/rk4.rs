//! Adaptive Runge-Kutta 4 integrator
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta step for `dy/dt = f(y)`:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + h/2·k₁)
//! k₃ = f(yₙ + h/2·k₂)
//! k₄ = f(yₙ + h·k₃)
//! yₙ₊₁ = yₙ + h/6·(k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! # Step-size control
//!
//! Each attempt takes one full step of size `h` and two half steps. Their
//! difference estimates the local error (Richardson, `/15` for a 4th-order
//! method), scaled per component by `atol + rtol·|y|`:
//!
//! ```text
//! err = max_i |y_half,i − y_full,i| / (15 · (atol + rtol·|y_half,i|))
//! ```
//!
//! The attempt is accepted when `err ≤ 1`; the next step size is
//! `h · clamp(0.9 · err^(−1/5), 0.2, 5)`. Rejected attempts shrink `h` and
//! retry. Ignition is a sharp thermal runaway; accepted steps cluster around
//! the delay time.
//!
//! # Failure
//!
//! The integrator fails with `IntegrationFailure` when `h` falls below
//! `min_step`, when too many attempts are rejected in a row, or when the
//! state becomes non-finite.

use nalgebra::DVector;

use crate::error::{HarnessError, Result};
use crate::trajectory::record::StateRecord;
use crate::trajectory::traits::{Integrator, ReactorSystem};

/// Tolerances and step bounds of [`AdaptiveRk4`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepControl {
    /// Relative tolerance
    pub rtol: f64,

    /// Absolute tolerance
    pub atol: f64,

    /// First attempted step (s)
    pub initial_step: f64,

    /// Smallest admissible step (s)
    pub min_step: f64,

    /// Largest admissible step (s)
    pub max_step: f64,

    /// Consecutive rejected attempts before giving up
    pub max_rejections: usize,
}

impl Default for StepControl {
    fn default() -> Self {
        Self {
            rtol: 1e-6,
            atol: 1e-12,
            initial_step: 1e-6,
            min_step: 1e-14,
            max_step: 1e-1,
            max_rejections: 50,
        }
    }
}

/// Adaptive RK4 integrator over a [`ReactorSystem`]
///
/// # Example
///
/// ```rust
/// use kinetics_parity::models::GlobalStepReactor;
/// use kinetics_parity::trajectory::{AdaptiveRk4, Integrator};
///
/// # fn main() -> Result<(), kinetics_parity::HarnessError> {
/// let mut integrator = AdaptiveRk4::new(GlobalStepReactor::lean_demo());
/// integrator.advance()?;
/// assert!(integrator.snapshot().time > 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveRk4<S: ReactorSystem> {
    system: S,
    control: StepControl,
    state: DVector<f64>,
    time: f64,
    step_size: f64,
    accepted: usize,
    rejected: usize,
}

impl<S: ReactorSystem> AdaptiveRk4<S> {
    /// Create an integrator starting from the system's initial state
    pub fn new(system: S) -> Self {
        Self::with_control(system, StepControl::default())
    }

    /// Create an integrator with explicit step control
    pub fn with_control(system: S, control: StepControl) -> Self {
        let state = system.initial_state();
        Self {
            system,
            control,
            state,
            time: 0.0,
            step_size: control.initial_step,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Reactor being integrated
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Raw state vector `[T, Y…]`
    pub fn state(&self) -> &DVector<f64> {
        &self.state
    }

    /// Number of accepted steps
    pub fn accepted_steps(&self) -> usize {
        self.accepted
    }

    /// Number of rejected attempts over the whole run
    pub fn rejected_steps(&self) -> usize {
        self.rejected
    }

    /// One classical RK4 step of size `h` from `y`
    fn rk4_step(&self, y: &DVector<f64>, h: f64) -> DVector<f64> {
        let k1 = self.system.derivatives(y);
        let k2 = self.system.derivatives(&(y + &k1 * (h / 2.0)));
        let k3 = self.system.derivatives(&(y + &k2 * (h / 2.0)));
        let k4 = self.system.derivatives(&(y + &k3 * h));

        y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0)
    }

    /// Scaled error norm between the full-step and two-half-step results
    fn error_norm(&self, full: &DVector<f64>, half: &DVector<f64>) -> f64 {
        full.iter()
            .zip(half.iter())
            .map(|(a, b)| {
                let scale = self.control.atol + self.control.rtol * b.abs();
                (b - a).abs() / (15.0 * scale)
            })
            .fold(0.0, f64::max)
    }

    fn failure(&self, reason: String) -> HarnessError {
        HarnessError::IntegrationFailure {
            step: self.accepted + 1,
            time: self.time,
            reason,
        }
    }
}

impl<S: ReactorSystem> Integrator for AdaptiveRk4<S> {
    fn advance(&mut self) -> Result<()> {
        let mut h = self.step_size.min(self.control.max_step);

        for _ in 0..self.control.max_rejections {
            if h < self.control.min_step {
                return Err(self.failure(format!(
                    "step size {h:.3e} s fell below minimum {:.3e} s",
                    self.control.min_step
                )));
            }

            let full = self.rk4_step(&self.state, h);
            let midpoint = self.rk4_step(&self.state, h / 2.0);
            let half = self.rk4_step(&midpoint, h / 2.0);

            let err = self.error_norm(&full, &half);

            if !err.is_finite() || half.iter().any(|x| !x.is_finite()) {
                // Non-finite trial: treat as a hard rejection.
                self.rejected += 1;
                h *= 0.2;
                continue;
            }

            let factor = if err == 0.0 {
                5.0
            } else {
                (0.9 * err.powf(-0.2)).clamp(0.2, 5.0)
            };

            if err <= 1.0 {
                self.state = half;
                self.time += h;
                self.accepted += 1;
                self.step_size = (h * factor).min(self.control.max_step);
                return Ok(());
            }

            self.rejected += 1;
            h *= factor;
        }

        Err(self.failure(format!(
            "{} consecutive step rejections",
            self.control.max_rejections
        )))
    }

    fn snapshot(&self) -> StateRecord {
        StateRecord::new(
            self.time,
            self.state[0],
            self.system.pressure(&self.state),
            self.state.iter().skip(1).copied().collect(),
        )
    }

    fn specific_internal_energy(&self) -> f64 {
        self.system.specific_internal_energy(&self.state)
    }

    fn name(&self) -> &str {
        "Adaptive RK4"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
