use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// The stage of the run an error originated from.
#[derive(Display, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Usage,
    Decode,
    Transform,
    Encode,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Bad command line
    #[error("fftmagick: usage: {0}")]
    Usage(String),
    /// The input file is missing, unreadable or not in a supported format
    #[error("fftmagick: decode: {0}")]
    Decode(String),
    /// The decoded samples cannot be transformed: empty or ragged grid, non-finite values,
    /// or a channel that the image does not have
    #[error("fftmagick: transform: {0}")]
    InvalidInput(String),
    /// The spectrum could not be written out
    #[error("fftmagick: encode: {0}")]
    Encode(String),
}

impl FftError {
    pub fn stage(&self) -> Stage {
        match self {
            FftError::Usage(_) => Stage::Usage,
            FftError::Decode(_) => Stage::Decode,
            FftError::InvalidInput(_) => Stage::Transform,
            FftError::Encode(_) => Stage::Encode,
        }
    }
}

pub type Result<T, E = FftError> = std::result::Result<T, E>;

/// Creates an [`FftError`] of the given variant, tagged with the source location.
///
/// `fft_err!(Decode, "unable to open image '{}'", path.display())`
#[macro_export]
macro_rules! fft_err {
    ($variant:ident, $($arg:tt)+) => {
        $crate::error::FftError::$variant(format!(
            "{} @ {}:{}:{}",
            format_args!($($arg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

/// Like `?`, but converts any displayable error into the given [`FftError`] variant.
#[macro_export]
macro_rules! fft_try {
    ($variant:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::fft_err!($variant, "{}", err));
            }
        }
    };
}
