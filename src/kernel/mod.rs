//! Trait-first kernel substrate.
//!
//! Constructor validation and contiguous 1D buffer adapters shared by
//! the convolution kernels in [`crate::signal`].

mod errors;
mod io;
mod lifecycle;

pub use errors::*;
pub use io::*;
pub use lifecycle::*;
