//! NaN-aware periodic-boundary 1D convolution.
//!
//! The convolution runs in two strictly sequential passes over
//! separate buffers:
//!
//! 1. **Repair**: every NaN sample is replaced by the weighted average
//!    of the valid samples inside its kernel window. A NaN surrounded
//!    entirely by NaNs (or whose contributing weights sum to zero)
//!    cannot be repaired and passes through unchanged.
//! 2. **Convolve**: every valid sample of the repaired signal is
//!    replaced by its weighted window average, normalized by the sum
//!    of the weights that actually contributed.
//!
//! Normalizing by the contributed weight sum rather than the full
//! kernel sum keeps the result locally unbiased when windows still
//! contain unrepairable NaNs. Window indices past either end of the
//! signal wrap modulo its length, so the signal is treated as one
//! period of a cyclic function and the operation is equivariant under
//! circular shifts.

use num_traits::Float;

#[cfg(feature = "alloc")]
mod kernels;
#[cfg(feature = "alloc")]
pub use kernels::*;

#[cfg(feature = "alloc")]
use crate::kernel::{ExecInvariantViolation, KernelLifecycle};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Wrap a window index into `[0, n)`.
///
/// `rem_euclid` yields a non-negative residue for negative indices,
/// which the `%` operator does not.
#[inline]
fn wrap_index(ii: isize, n: usize) -> usize {
    ii.rem_euclid(n as isize) as usize
}

/// Weighted average of the valid samples in the kernel window
/// centered on `center`, wrapping at the boundary.
///
/// Returns `None` when no valid sample contributed or the
/// contributing weights cancelled to exactly zero, in which case the
/// caller passes the original sample through.
fn windowed_average<F: Float>(x: &[F], weights: &[F], center: usize) -> Option<F> {
    let n = x.len();
    let half = (weights.len() / 2) as isize;
    let mut top = F::zero();
    let mut bot = F::zero();
    for (k, &w) in weights.iter().enumerate() {
        let ii = center as isize + k as isize - half;
        let val = x[wrap_index(ii, n)];
        if !val.is_nan() {
            top = top + val * w;
            bot = bot + w;
        }
    }
    if bot != F::zero() {
        Some(top / bot)
    } else {
        None
    }
}

/// Pass 1: copy `signal` into `fixed`, replacing repairable NaNs.
///
/// Reads only `signal`, so a repaired value never feeds the repair of
/// a later index within the same pass.
pub(crate) fn repair_pass<F: Float>(signal: &[F], weights: &[F], fixed: &mut [F]) {
    for (i, out) in fixed.iter_mut().enumerate() {
        *out = if signal[i].is_nan() {
            windowed_average(signal, weights, i).unwrap_or(signal[i])
        } else {
            signal[i]
        };
    }
}

/// Pass 2: convolve the repaired signal into `out`.
///
/// Unrepairable NaNs pass through; every other sample becomes its
/// normalized weighted window average.
pub(crate) fn convolve_pass<F: Float>(fixed: &[F], weights: &[F], out: &mut [F]) {
    for (i, out) in out.iter_mut().enumerate() {
        *out = if fixed[i].is_nan() {
            fixed[i]
        } else {
            windowed_average(fixed, weights, i).unwrap_or(fixed[i])
        };
    }
}

/// Replace NaN samples with locally interpolated values.
///
/// This is the repair pass alone: valid samples copy through
/// untouched, NaN samples become the weighted average of the valid
/// samples in their kernel window (wrapping at the boundary), and NaN
/// samples with no valid window neighbor stay NaN.
///
/// `weights` must have odd length; the signal must be non-empty.
///
/// # Examples
/// ```
/// use wrapconv::signal::convolve::repair_nan;
///
/// let signal = [1.0f64, f64::NAN, 3.0];
/// let fixed = repair_nan(&signal, &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(fixed, vec![1.0, 2.0, 3.0]);
/// ```
#[cfg(feature = "alloc")]
pub fn repair_nan<F: Float>(
    signal: &[F],
    weights: &[F],
) -> Result<Vec<F>, ExecInvariantViolation> {
    let kernel = NanRepairKernel::try_new(NanRepairConfig {
        weights: weights.to_vec(),
    })
    .map_err(ExecInvariantViolation::from)?;
    crate::signal::traits::NanRepair1D::run_alloc(&kernel, signal)
}

/// Convolve a signal against odd-length weights with periodic
/// boundary handling and NaN-aware normalization.
///
/// Composes the repair pass with the convolution pass. The output has
/// the signal's length and contains NaN only at positions that were
/// NaN in the input and could not be repaired from their window.
///
/// # Examples
/// ```
/// use approx::assert_relative_eq;
/// use wrapconv::signal::convolve::wrap_convolve;
///
/// // Boxcar smoothing with wrap-around at both ends.
/// let signal = [1.0f64, 2.0, 3.0, 4.0, 5.0];
/// let y = wrap_convolve(&signal, &[1.0, 1.0, 1.0]).unwrap();
/// assert_relative_eq!(y[0], (5.0 + 1.0 + 2.0) / 3.0);
/// assert_relative_eq!(y[2], 3.0);
/// ```
#[cfg(feature = "alloc")]
pub fn wrap_convolve<F: Float>(
    signal: &[F],
    weights: &[F],
) -> Result<Vec<F>, ExecInvariantViolation> {
    let kernel = WrapConvolveKernel::try_new(WrapConvolveConfig {
        weights: weights.to_vec(),
    })
    .map_err(ExecInvariantViolation::from)?;
    crate::signal::traits::WrapConvolve1D::run_alloc(&kernel, signal)
}
