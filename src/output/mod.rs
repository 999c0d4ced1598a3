//! Output of a harness run
//!
//! ```text
//! output/
//! ├── mod.rs      ← This file
//! └── report.rs   ← Fixed-format console lines
//! ```
//!
//! The report is the only output of a run: nothing is persisted. Every
//! writer takes an arbitrary [`std::io::Write`] sink so runs can be captured
//! in memory.

pub mod report;

// Re-export commonly used items for convenience
pub use report::{CHECK_RATES_PHASE, Report, SET_STATES_PHASE};
