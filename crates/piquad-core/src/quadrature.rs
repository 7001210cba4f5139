//! Left-Riemann-sum quadrature of the pi integrand
//!
//! The integral of 4/(1+x²) over [0, 1] is exactly π; each worker evaluates
//! its share of the rectangle sum with this module.

use crate::partition::Interval;

/// The integrand 4/(1+x²)
#[inline]
#[must_use]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Left-Riemann sum of the integrand over `interval` with fixed `step`.
///
/// Iterates `x` from `interval.start` in increments of `step` while
/// `x < interval.end`, accumulating `integrand(x) * step`. Summation is
/// sequential and order-dependent, so the result is reproducible for a fixed
/// `(start, end, step)` triple. When `step` does not evenly divide the
/// interval width, the last fractional slice falls outside the loop condition
/// and is dropped; that discretization bias is part of the contract.
#[must_use]
pub fn partial_integral(interval: Interval, step: f64) -> f64 {
    let mut sum = 0.0;
    let mut x = interval.start;
    while x < interval.end {
        sum += integrand(x) * step;
        x += step;
    }
    sum
}
