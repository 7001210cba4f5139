//! Domain partitioning
//!
//! Splits the unit domain into one contiguous, equal-width sub-interval per
//! worker. The partition depends only on the worker count, never on the
//! integration resolution.

/// Half-open integration sub-range `[start, end)` owned by exactly one worker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the sub-range
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split `[0, 1)` into `workers` equal sub-intervals, one per worker index.
///
/// Worker `i` of `T` receives `[i/T, (i+1)/T)`. Adjacent boundaries are
/// bit-identical because both sides evaluate the same expression, so the
/// intervals tile the domain with no gaps and no overlaps.
#[must_use]
pub fn partition(workers: usize) -> Vec<Interval> {
    let share = 1.0 / workers as f64;
    (0..workers)
        .map(|i| Interval::new(i as f64 * share, (i + 1) as f64 * share))
        .collect()
}
