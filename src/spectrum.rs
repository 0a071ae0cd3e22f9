//! 2D discrete Fourier transform of a sample grid and its magnitude spectrum.

use std::sync::Arc;

use rayon::prelude::*;
use rustfft::{num_complex::Complex, Fft, FftDirection, FftPlanner};

use crate::{error::Result, fft_err, grid::Grid};

/// The result of [`transform`]: the complex coefficients and their moduli.
///
/// Both grids have the dimensions of the input. Element `(v, u)` (column `v`, row `u`)
/// holds frequency `v` along the width and `u` along the height;
/// `(0, 0)` is the DC term. The coefficients are not normalized and not shifted.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub complex: Grid<Complex<f64>>,
    pub magnitude: Grid<f64>,
}

/// Computes the 2D DFT of `image` and the magnitude `|X|` of every coefficient.
///
/// Any size is supported; `rustfft` falls back to Bluestein's algorithm for lengths
/// without small prime factors. Magnitudes are raw: no log scaling, no normalization.
pub fn transform<T: Copy + Into<f64>>(image: &Grid<T>) -> Result<Spectrum> {
    let (width, height) = image.dimensions();

    let mut buffer = Vec::with_capacity(image.len());
    for (index, &sample) in image.as_slice().iter().enumerate() {
        let value: f64 = sample.into();
        if !value.is_finite() {
            return Err(fft_err!(
                InvalidInput,
                "sample at {}x{} is not a finite number: {value}",
                index % width,
                index / width
            ));
        }
        buffer.push(Complex::new(value, 0.0));
    }

    let mut planner = FftPlanner::new();
    fft_2d(&mut planner, width, height, &mut buffer, FftDirection::Forward);

    let magnitude = buffer.iter().map(|c| c.norm()).collect();
    Ok(Spectrum {
        complex: Grid::new(width, height, buffer)?,
        magnitude: Grid::new(width, height, magnitude)?,
    })
}

/// Transforms every row, then every column of a row-major buffer, in place.
///
/// The columns are processed on a transposed copy, which is transposed back afterwards,
/// so the result is in natural order.
fn fft_2d(
    planner: &mut FftPlanner<f64>,
    width: usize,
    height: usize,
    buffer: &mut [Complex<f64>],
    direction: FftDirection,
) {
    fft_rows(planner.plan_fft(width, direction), width, buffer);

    let mut transposed = vec![Complex::default(); buffer.len()];
    transpose_into(width, height, buffer, &mut transposed);
    fft_rows(planner.plan_fft(height, direction), height, &mut transposed);
    transpose_into(height, width, &transposed, buffer);
}

/// Runs `fft` over each `len`-sized chunk of `buffer`, one scratch buffer per rayon worker.
fn fft_rows(fft: Arc<dyn Fft<f64>>, len: usize, buffer: &mut [Complex<f64>]) {
    let scratch_len = fft.get_inplace_scratch_len();
    buffer.par_chunks_exact_mut(len).for_each_init(
        || vec![Complex::default(); scratch_len],
        |scratch, row| fft.process_with_scratch(row, scratch),
    );
}

/// Writes the transpose of the `width`x`height` row-major matrix `src` into `dst`.
fn transpose_into<T: Copy>(width: usize, height: usize, src: &[T], dst: &mut [T]) {
    for (y, row) in src.chunks_exact(width).enumerate() {
        for (x, &value) in row.iter().enumerate() {
            dst[x * height + y] = value;
        }
    }
}
