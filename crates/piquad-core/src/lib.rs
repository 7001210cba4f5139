//! Partitioned pi integrator
//!
//! Approximates π by integrating 4/(1+x²) over [0, 1) with the left-Riemann
//! rule, split across worker threads. Each worker owns one contiguous
//! sub-interval of the domain and produces a single partial sum; after every
//! worker has joined, the partials are reduced in worker-index order, so a
//! fixed `(intervals, workers)` pair always yields a bit-identical result.

pub mod partition;
pub mod quadrature;

pub use partition::{Interval, partition};
pub use quadrature::{integrand, partial_integral};

use std::thread;
use std::time::{Duration, Instant};

/// Error types for integrator construction and execution
#[derive(thiserror::Error, Debug)]
pub enum PiquadError {
    #[error("ERR_INVALID_INTERVALS: interval count must be at least 1")]
    InvalidIntervals,

    #[error("ERR_INVALID_WORKERS: worker count must be at least 1, got {requested}")]
    InvalidWorkers { requested: i64 },

    #[error("ERR_SPAWN: failed to start worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("ERR_WORKER: worker {index} panicked before producing a result")]
    Worker { index: usize },
}

/// Type alias for Results using `PiquadError`
pub type Result<T> = std::result::Result<T, PiquadError>;

/// Final approximation together with the dispatch-to-join wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct Integration {
    /// The computed π approximation
    pub value: f64,
    /// Wall-clock time from just before the first spawn to just after the
    /// join barrier
    pub elapsed: Duration,
}

/// A validated `(intervals, workers)` configuration ready to run
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    intervals: u64,
    workers: usize,
}

impl Integrator {
    /// Validate an interval count and a worker count.
    ///
    /// Validation happens here, before any thread exists, so a bad
    /// configuration never wastes partial work.
    ///
    /// # Errors
    ///
    /// Returns [`PiquadError::InvalidIntervals`] when `intervals` is zero
    /// (the step would be infinite) and [`PiquadError::InvalidWorkers`] when
    /// `workers` is zero or negative (the domain could not be partitioned).
    pub fn new(intervals: u64, workers: i64) -> Result<Self> {
        if intervals == 0 {
            return Err(PiquadError::InvalidIntervals);
        }
        if workers < 1 {
            return Err(PiquadError::InvalidWorkers { requested: workers });
        }
        let workers = usize::try_from(workers)
            .map_err(|_| PiquadError::InvalidWorkers { requested: workers })?;
        Ok(Self { intervals, workers })
    }

    #[must_use]
    pub const fn intervals(&self) -> u64 {
        self.intervals
    }

    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Integration step, `1 / intervals`. Strictly positive for any
    /// validated configuration, and identical for every worker.
    #[must_use]
    pub fn step(&self) -> f64 {
        1.0 / self.intervals as f64
    }

    /// Run the partitioned integration to completion.
    ///
    /// Spawns one named worker thread per partition interval, blocks until
    /// every worker has terminated (the join barrier is the only
    /// synchronization point), then sums the partial results in worker-index
    /// order. Each worker receives its interval and a copy of the step by
    /// value and returns its partial sum through its `JoinHandle`, so no two
    /// workers ever share mutable state.
    ///
    /// # Errors
    ///
    /// Returns [`PiquadError::Spawn`] when the platform refuses a thread
    /// (excessive worker counts) and [`PiquadError::Worker`] when a worker
    /// panics. Either way the computation is abandoned whole; no partial
    /// value is ever reported.
    pub fn run(&self) -> Result<Integration> {
        let step = self.step();
        let intervals = partition(self.workers);

        let started = Instant::now();

        let mut handles = Vec::with_capacity(self.workers);
        for (index, interval) in intervals.into_iter().enumerate() {
            let builder = thread::Builder::new().name(format!("piquad-worker-{index}"));
            match builder.spawn(move || partial_integral(interval, step)) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Already-dispatched workers run to completion before the
                    // failure is reported.
                    for handle in handles.drain(..) {
                        drop(handle.join());
                    }
                    return Err(PiquadError::Spawn(e));
                }
            }
        }

        let mut partials = Vec::with_capacity(handles.len());
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(partial) => partials.push(partial),
                Err(_) => return Err(PiquadError::Worker { index }),
            }
        }

        let elapsed = started.elapsed();

        let value = partials.iter().sum();
        Ok(Integration { value, elapsed })
    }
}
