//! NaN-aware 1D discrete convolution with periodic boundary handling.
//!
//! A signal is treated as one period of a cyclic function: window
//! indices past either end wrap around modulo the signal length.
//! Missing observations are marked with NaN and are filled in by a
//! local weighted interpolation pass before the convolution proper
//! runs, so isolated gaps do not punch holes in the smoothed output.
//!
//! The crate follows a trait-first kernel layout: validated kernel
//! structs constructed through [`kernel::KernelLifecycle`], executed
//! against anything that can bind as a contiguous 1D buffer via
//! [`kernel::Read1D`] / [`kernel::Write1D`], with free-function
//! wrappers for the common allocate-and-return path.
//!
//! ```
//! use wrapconv::signal::convolve::wrap_convolve;
//!
//! let signal = [1.0f64, 2.0, f64::NAN, 4.0, 5.0];
//! let boxcar = [1.0f64, 1.0, 1.0];
//! let y = wrap_convolve(&signal, &boxcar).unwrap();
//! assert_eq!(y.len(), signal.len());
//! assert!(y.iter().all(|v| !v.is_nan()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod kernel;
pub mod signal;
