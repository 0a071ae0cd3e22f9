use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, GrayImage, ImageEncoder,
};
use log::debug;

use crate::{error::Result, fft_err, fft_try, grid::Grid, options::RangePolicy};

/// Largest magnitude that survives the conversion to 8 bits unchanged
const MAX_SAMPLE: f64 = u8::MAX as f64;

/// Maps magnitudes to 8-bit grayscale samples according to `policy`.
pub fn magnitude_to_pixels(magnitude: &Grid<f64>, policy: RangePolicy) -> Result<GrayImage> {
    let (width, height) = magnitude.dimensions();
    let width = fft_try!(Encode, u32::try_from(width));
    let height = fft_try!(Encode, u32::try_from(height));

    let samples = magnitude.as_slice();
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let out_of_range = samples.iter().filter(|&&v| v > MAX_SAMPLE).count();
    debug!(
        "magnitudes span {min}..={max}, {out_of_range} of {} above {MAX_SAMPLE}",
        samples.len()
    );

    let pixels: Vec<u8> = match policy {
        RangePolicy::Clip => samples.iter().map(|&v| saturate(v)).collect(),
        RangePolicy::Fail => {
            if out_of_range > 0 {
                return Err(fft_err!(
                    Encode,
                    "{out_of_range} of {} magnitudes exceed {MAX_SAMPLE} (max {max}) \
                     and cannot be stored in an 8-bit image",
                    samples.len()
                ));
            }
            samples.iter().map(|&v| saturate(v)).collect()
        }
        RangePolicy::Rescale => {
            let range = max - min;
            if !range.is_finite() {
                return Err(fft_err!(Encode, "cannot rescale magnitudes spanning {min}..={max}"));
            }
            if range == 0.0 {
                vec![0; samples.len()]
            } else {
                samples
                    .iter()
                    .map(|&v| saturate(((v - min) / range * MAX_SAMPLE).round()))
                    .collect()
            }
        }
    };

    GrayImage::from_raw(width, height, pixels)
        .ok_or_else(|| fft_err!(Encode, "{width}x{height} does not fit an 8-bit image buffer"))
}

/// Clamps to `0..=255` and truncates toward zero. NaN becomes 0.
fn saturate(value: f64) -> u8 {
    value.clamp(0.0, MAX_SAMPLE) as u8
}

/// Writes `pixels` to `path` as a grayscale PNG, overwriting any existing file.
pub fn encode(pixels: &GrayImage, path: &OsStr) -> Result<()> {
    let path = Path::new(path);
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| fft_err!(Encode, "unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    // fixed zlib level 7 with adaptive per-row filtering
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Level(7), FilterType::Adaptive);
    fft_try!(
        Encode,
        encoder.write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::L8,
        )
    );

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    fft_try!(Encode, writer.flush());
    Ok(())
}
