//! Trait-first kernel wrappers for NaN repair and wrap convolution.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::{NanRepair1D, WrapConvolve1D};
use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

use super::{convolve_pass, repair_pass};

fn validate_weights<F>(weights: &[F]) -> Result<(), ConfigError> {
    if weights.is_empty() {
        return Err(ConfigError::EmptyInput { arg: "weights" });
    }
    if weights.len() % 2 == 0 {
        return Err(ConfigError::InvalidKernelShape {
            len: weights.len(),
        });
    }
    Ok(())
}

fn bind_signal<'a, F, I>(input: &'a I) -> Result<&'a [F], ExecInvariantViolation>
where
    I: Read1D<F> + ?Sized,
{
    let signal = input.read_slice().map_err(ExecInvariantViolation::from)?;
    if signal.is_empty() {
        return Err(ExecInvariantViolation::InvalidState {
            reason: "signal must be non-empty",
        });
    }
    Ok(signal)
}

/// Constructor config for [`NanRepairKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct NanRepairConfig<F> {
    /// Convolution weights, odd length `2w + 1`.
    pub weights: Vec<F>,
}

/// Stateless 1D NaN-repair kernel.
///
/// Runs the repair pass alone: NaN samples become the weighted
/// average of the valid samples in their window, everything else
/// copies through.
#[derive(Debug, Clone, PartialEq)]
pub struct NanRepairKernel<F> {
    weights: Vec<F>,
}

impl<F> NanRepairKernel<F> {
    /// Window half-width `w` of the configured weights.
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }
}

impl<F> KernelLifecycle for NanRepairKernel<F> {
    type Config = NanRepairConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        validate_weights(&config.weights)?;
        Ok(Self {
            weights: config.weights,
        })
    }
}

impl<F> NanRepair1D<F> for NanRepairKernel<F>
where
    F: Float,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let signal = bind_signal(input)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out_slice.len() != signal.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: signal.len(),
                got: out_slice.len(),
            });
        }
        repair_pass(signal, &self.weights, out_slice);
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
    {
        let signal = bind_signal(input)?;
        let mut fixed = vec![F::zero(); signal.len()];
        repair_pass(signal, &self.weights, &mut fixed);
        Ok(fixed)
    }
}

/// Constructor config for [`WrapConvolveKernel`].
#[derive(Debug, Clone, PartialEq)]
pub struct WrapConvolveConfig<F> {
    /// Convolution weights, odd length `2w + 1`.
    pub weights: Vec<F>,
}

/// Stateless 1D periodic-boundary convolution kernel.
///
/// Composes the repair pass with the normalized convolution pass over
/// an internal scratch buffer, so the convolution never observes a
/// NaN the repair pass could have filled.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapConvolveKernel<F> {
    weights: Vec<F>,
}

impl<F> WrapConvolveKernel<F> {
    /// Window half-width `w` of the configured weights.
    pub fn half_width(&self) -> usize {
        self.weights.len() / 2
    }
}

impl<F> KernelLifecycle for WrapConvolveKernel<F> {
    type Config = WrapConvolveConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        validate_weights(&config.weights)?;
        Ok(Self {
            weights: config.weights,
        })
    }
}

impl<F> WrapConvolve1D<F> for WrapConvolveKernel<F>
where
    F: Float,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
        O: Write1D<F> + ?Sized,
    {
        let signal = bind_signal(input)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out_slice.len() != signal.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: signal.len(),
                got: out_slice.len(),
            });
        }
        let mut fixed = vec![F::zero(); signal.len()];
        repair_pass(signal, &self.weights, &mut fixed);
        convolve_pass(&fixed, &self.weights, out_slice);
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<F>, ExecInvariantViolation>
    where
        I: Read1D<F> + ?Sized,
    {
        let signal = bind_signal(input)?;
        let mut out = vec![F::zero(); signal.len()];
        let mut fixed = vec![F::zero(); signal.len()];
        repair_pass(signal, &self.weights, &mut fixed);
        convolve_pass(&fixed, &self.weights, &mut out);
        Ok(out)
    }
}
