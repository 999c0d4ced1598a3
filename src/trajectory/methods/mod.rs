//! Integrator implementations
//!
//! # Available Integrators
//!
//! - [`AdaptiveRk4`]: classical RK4 with step-doubling error control. The
//!   integrator chooses every step itself, as the recorder expects.
//!
//! External ODE packages plug in by implementing
//! [`Integrator`](crate::trajectory::Integrator) directly.

mod rk4;

pub use rk4::{AdaptiveRk4, StepControl};
