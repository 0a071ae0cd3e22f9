use std::{ffi::OsStr, path::Path};

use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Pixel};
use log::debug;

use crate::{error::Result, fft_err, fft_try, grid::Grid, options::ChannelPolicy};

/// If the format has not been explicitly specified, guesses the format based on file contents.
pub fn decode(file: &OsStr, format: Option<ImageFormat>) -> Result<DynamicImage> {
    let path = Path::new(file);
    let mut decoder = ImageReader::open(path)
        .map_err(|error| fft_err!(Decode, "unable to open image '{}': {error}", path.display()))?;
    match format {
        Some(format) => decoder.set_format(format),
        None => decoder = fft_try!(Decode, decoder.with_guessed_format()),
    }
    decoder
        .decode()
        .map_err(|error| fft_err!(Decode, "unable to decode image '{}': {error}", path.display()))
}

/// Projects a decoded image onto a single plane of samples at their native scale:
/// 0-255 for 8-bit images, 0-65535 for 16-bit ones, unchanged for floating-point ones.
pub fn sample_plane(image: &DynamicImage, policy: ChannelPolicy) -> Result<Grid<f64>> {
    debug!(
        "projecting {:?} image onto one plane with {:?}",
        image.color(),
        policy
    );
    match policy {
        ChannelPolicy::Luma => luma_plane(image),
        ChannelPolicy::Channel(index) => {
            let channels = image.color().channel_count();
            if index >= channels {
                return Err(fft_err!(
                    InvalidInput,
                    "channel {index} requested, but a {:?} image only has {channels}",
                    image.color()
                ));
            }
            native_channel_plane(image, usize::from(index))
        }
    }
}

fn luma_plane(image: &DynamicImage) -> Result<Grid<f64>> {
    use DynamicImage::*;
    match image {
        ImageLuma8(_) | ImageLumaA8(_) | ImageRgb8(_) | ImageRgba8(_) => {
            channel_plane(&image.to_luma8(), 0)
        }
        ImageLuma16(_) | ImageLumaA16(_) | ImageRgb16(_) | ImageRgba16(_) => {
            channel_plane(&image.to_luma16(), 0)
        }
        _ => channel_plane(&image.to_luma32f(), 0),
    }
}

fn native_channel_plane(image: &DynamicImage, index: usize) -> Result<Grid<f64>> {
    use DynamicImage::*;
    match image {
        ImageLuma8(pixels) => channel_plane(pixels, index),
        ImageLumaA8(pixels) => channel_plane(pixels, index),
        ImageRgb8(pixels) => channel_plane(pixels, index),
        ImageRgba8(pixels) => channel_plane(pixels, index),
        ImageLuma16(pixels) => channel_plane(pixels, index),
        ImageLumaA16(pixels) => channel_plane(pixels, index),
        ImageRgb16(pixels) => channel_plane(pixels, index),
        ImageRgba16(pixels) => channel_plane(pixels, index),
        ImageRgb32F(pixels) => channel_plane(pixels, index),
        ImageRgba32F(pixels) => channel_plane(pixels, index),
        // layouts added to `image` later; RGBA covers every channel count up to 4
        _ => channel_plane(&image.to_rgba32f(), index),
    }
}

fn channel_plane<P>(pixels: &ImageBuffer<P, Vec<P::Subpixel>>, index: usize) -> Result<Grid<f64>>
where
    P: Pixel,
    P::Subpixel: Into<f64>,
{
    let channels = usize::from(P::CHANNEL_COUNT);
    let samples = pixels
        .as_raw()
        .chunks_exact(channels)
        .map(|pixel| pixel[index].into())
        .collect();
    Grid::new(pixels.width() as usize, pixels.height() as usize, samples)
}
