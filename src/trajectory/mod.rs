//! Reference trajectory recording
//!
//! This module drives the trusted, state-by-state reference simulation and
//! decides when enough of it has been recorded.
//!
//! # Core Concepts
//!
//! - **Integrator** (`Integrator` trait): advances the reference reactor by one
//!   internally chosen step and exposes its current state
//! - **State record** (`StateRecord`): temperature, pressure and mass fractions
//!   at one accepted step
//! - **Trajectory** (`Trajectory`): the time-ordered records of one run
//! - **Ignition state** (`IgnitionState`): two-state detector bounding the
//!   comparison window
//! - **Recorder** (`TrajectoryRecorder`): the loop tying them together
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────┐ advance()  ┌──────────────┐ snapshot  ┌────────────┐
//! │  Recorder   │──────────▶│  Integrator  │─────────▶│ StateRecord│
//! └──────┬──────┘            └──────────────┘           └─────┬──────┘
//!        │ stop?                                              │
//!        │        ┌────────────────┐  observe                 │
//!        └───────│ IgnitionState  │◀─────────────────────────┤
//!                 └────────────────┘                          │
//!                                          push               ▼
//!                                      ┌──────────────────────────┐
//!                                      │ Trajectory (time-ordered)│
//!                                      └──────────────────────────┘
//! ```
//!
//! # Threading
//!
//! Recording is strictly sequential: every step depends on the integrator's
//! internal state after the previous one.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod record;
mod ignition;
mod recorder;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Integrator, ReactorSystem};
pub use record::{StateRecord, Trajectory};
pub use ignition::{IgnitionPhase, IgnitionState};
pub use recorder::{RecordingOutcome, StopReason, TrajectoryRecorder};
pub use methods::{AdaptiveRk4, StepControl};
