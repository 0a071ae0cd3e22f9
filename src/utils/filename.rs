use std::ffi::{OsStr, OsString};

/// Appended verbatim to the input path to name the spectrum image.
pub const SPECTRUM_SUFFIX: &str = "_fft.png";

/// Names the output after the input: `photos/cat.jpg` becomes `photos/cat.jpg_fft.png`.
///
/// The whole input path is kept, extension included, so that `cat.jpg` and `cat.png`
/// in the same directory don't overwrite each other's spectrum.
pub fn spectrum_output_path(input: &OsStr) -> OsString {
    let mut output = input.to_owned();
    output.push(SPECTRUM_SUFFIX);
    output
}
