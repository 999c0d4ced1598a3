//! Integrator and reactor traits
//!
//! Two seams separate the recorder from the numerics:
//!
//! - [`Integrator`]: the time-stepping collaborator the recorder drives. It
//!   chooses its own step size; the recorder only asks it to advance and reads
//!   the resulting state.
//! - [`ReactorSystem`]: the right-hand side of a homogeneous reactor, for
//!   integrators shipped with this crate (see
//!   [`AdaptiveRk4`](crate::trajectory::AdaptiveRk4)).
//!
//! The reactor provides the **equations**, the integrator provides the
//! **method**. Any external ODE package can implement [`Integrator`] directly.

use nalgebra::DVector;

use crate::error::Result;
use crate::trajectory::record::StateRecord;

// =================================================================================================
// Integrator
// =================================================================================================

/// Time-accurate reference integrator
///
/// # Contract
///
/// - `advance` moves to the next internally chosen accepted step; time must
///   strictly increase.
/// - A failed `advance` is final: the harness never retries.
/// - `snapshot` reflects the state after the last successful `advance`
///   (or the initial state before any stepping).
pub trait Integrator {
    /// Advance to the next accepted step
    ///
    /// # Errors
    ///
    /// `IntegrationFailure` on non-convergence.
    fn advance(&mut self) -> Result<()>;

    /// Current thermodynamic state, including elapsed time
    fn snapshot(&self) -> StateRecord;

    /// Current specific internal energy (J/kg), reported at loop termination
    fn specific_internal_energy(&self) -> f64;

    /// Name of the integrator (used to display and logging)
    fn name(&self) -> &str {
        "integrator"
    }
}

impl<T: Integrator + ?Sized> Integrator for Box<T> {
    fn advance(&mut self) -> Result<()> {
        (**self).advance()
    }

    fn snapshot(&self) -> StateRecord {
        (**self).snapshot()
    }

    fn specific_internal_energy(&self) -> f64 {
        (**self).specific_internal_energy()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// =================================================================================================
// Reactor system
// =================================================================================================

/// Homogeneous reactor equations
///
/// The state vector layout is `[T, Y₀, Y₁, …, Y_{n-1}]`: temperature first,
/// then one mass fraction per species.
pub trait ReactorSystem: Send + Sync {
    /// Number of species
    fn n_species(&self) -> usize;

    /// Initial state vector `[T, Y…]`
    fn initial_state(&self) -> DVector<f64>;

    /// Time derivative of the state vector
    ///
    /// Returns `dy/dt` for `y = [T, Y…]`.
    fn derivatives(&self, state: &DVector<f64>) -> DVector<f64>;

    /// Pressure (Pa) at a state
    fn pressure(&self, state: &DVector<f64>) -> f64;

    /// Specific internal energy (J/kg) at a state
    fn specific_internal_energy(&self, state: &DVector<f64>) -> f64;

    /// Name of the reactor (used to display and logging)
    fn name(&self) -> &str;
}
