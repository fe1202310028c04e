//! Signal-processing kernels.

pub mod convolve;
pub mod traits;
