//! Consistency verification between two kinetics sources
//!
//! ```text
//! reference RateConstantSet ─┐
//!                            ├─► ConsistencyVerifier ──► parallel_map over reactions
//! batch RateConstantSet ─────┘                                   │
//!                                                                ▼
//!                                       ratio_bounds ─► QuantityCheck × 3
//!                                                                │
//!                                                                ▼
//!                                  VerificationVerdict ─► VerificationReport
//! ```

mod pool;
mod ratio;
mod verdict;
mod verifier;

pub use pool::parallel_map;
pub use ratio::{RatioBounds, RatioError, floored_ratio, ratio_bounds};
pub use verdict::{QuantityCheck, VerificationReport, VerificationVerdict};
pub use verifier::ConsistencyVerifier;
