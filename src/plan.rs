use std::ffi::{OsStr, OsString};
use std::path::Path;

use log::info;

use crate::decode::{decode, sample_plane};
use crate::encode::{encode, magnitude_to_pixels};
use crate::error::Result;
use crate::options::SpectrumOptions;
use crate::spectrum::{transform, Spectrum};
use crate::utils::filename::spectrum_output_path;

/// Everything needed to turn one input file into its spectrum image
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub input_file: OsString,
    pub output_file: OsString,
    pub options: SpectrumOptions,
}

impl ExecutionPlan {
    /// Plans a run with the default options and the output named after the input.
    pub fn new(input_file: impl Into<OsString>) -> Self {
        let input_file = input_file.into();
        let output_file = spectrum_output_path(&input_file);
        Self {
            input_file,
            output_file,
            options: SpectrumOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SpectrumOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_output_file(mut self, output_file: impl Into<OsString>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Decodes the input, transforms it and writes the magnitude image.
    /// Returns the full spectrum so that library callers can inspect it.
    pub fn execute(&self) -> Result<Spectrum> {
        info!("decoding {}", display(&self.input_file));
        let image = decode(&self.input_file, None)?;
        let plane = sample_plane(&image, self.options.channel)?;

        let (width, height) = plane.dimensions();
        info!("transforming {width}x{height} samples");
        let spectrum = transform(&plane)?;

        info!(
            "writing spectrum to {} with {:?}",
            display(&self.output_file),
            self.options.range
        );
        let pixels = magnitude_to_pixels(&spectrum.magnitude, self.options.range)?;
        encode(&pixels, &self.output_file)?;
        Ok(spectrum)
    }
}

fn display(path: &OsStr) -> std::path::Display<'_> {
    Path::new(path).display()
}
