//! Order-preserving parallel map
//!
//! The verifier hands every reaction index to a short-lived, fixed-size
//! worker pool and needs results back in index order regardless of which
//! worker finished first.
//!
//! With the `parallel` feature (default) the pool is a dedicated rayon
//! thread pool: built for one call, used for one indexed parallel map, dropped
//! on return. Indexed parallel iterators collect in input order, so output
//! position `i` always holds the result for input `i`.
//!
//! Without the feature the same map runs sequentially on the caller's thread.
//!
//! # Failure
//!
//! The first `Err` returned by a task ends the map and is returned to the
//! caller; no partial result is produced. A panicking task propagates its
//! panic to the caller.

use crate::error::{HarnessError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Map `task` over `0..len` on `workers` workers, preserving index order
///
/// `task` only receives the index: everything else it needs must be captured
/// by shared reference, which the `Sync` bound keeps read-only across workers.
///
/// # Errors
///
/// - `WorkerPool` when the pool cannot be created
/// - the first error returned by `task`
pub fn parallel_map<T, F>(len: usize, workers: usize, task: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    if workers == 0 {
        return Err(HarnessError::WorkerPool(
            "worker pool needs at least one worker".to_string(),
        ));
    }

    run(len, workers, task)
}

#[cfg(feature = "parallel")]
fn run<T, F>(len: usize, workers: usize, task: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("verify-worker-{i}"))
        .build()
        .map_err(|e| HarnessError::WorkerPool(e.to_string()))?;

    log::debug!("mapping {len} tasks over {} workers", pool.current_num_threads());

    pool.install(|| (0..len).into_par_iter().map(&task).collect())
}

#[cfg(not(feature = "parallel"))]
fn run<T, F>(len: usize, workers: usize, task: F) -> Result<Vec<T>>
where
    F: Fn(usize) -> Result<T>,
{
    log::debug!("mapping {len} tasks sequentially ({workers} workers requested)");
    (0..len).map(task).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
