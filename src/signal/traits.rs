//! Trait interfaces for signal-processing capabilities.
//!
//! These traits define the trait-first API shape used by the
//! convolution kernels: execution into a caller-provided buffer, or
//! allocate-and-return when the `alloc` feature is enabled.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 1D missing-sample repair capability.
///
/// Replaces NaN samples with a local weighted average of the valid
/// samples inside the kernel window, wrapping at the signal boundary.
pub trait NanRepair1D<T> {
    /// Run repair into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run repair and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}

/// 1D periodic-boundary convolution capability.
///
/// Convolves a signal against the kernel's weights, treating the
/// signal as cyclic and normalizing each window by the sum of the
/// weights that actually contributed (skipping NaN samples).
pub trait WrapConvolve1D<T> {
    /// Run convolution into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run convolution and allocate output.
    #[cfg(feature = "alloc")]
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}
