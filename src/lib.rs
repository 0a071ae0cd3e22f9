//! `fftmagick` writes the magnitude of an image's 2D discrete Fourier transform as a new image.
//!
//! The pipeline is decode → [`spectrum::transform`] → encode, driven by [`plan::ExecutionPlan`].
//! Magnitudes are written raw: natural images have a huge dynamic range, so with the default
//! [`options::RangePolicy::Clip`] most of the output saturates around the low frequencies
//! and is black elsewhere. [`options::RangePolicy::Rescale`] makes more of it visible.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod args;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod help;
pub mod init;
pub mod options;
pub mod plan;
pub mod spectrum;
mod utils;
