//! Knobs that control how an image becomes a spectrum and how the spectrum becomes pixels.
//! The command line always uses the defaults.

/// Which plane of a multi-channel image gets transformed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelPolicy {
    /// Convert to luminance first, keeping the native sample precision. Alpha is dropped.
    #[default]
    Luma,
    /// A single channel in the image's own layout, e.g. `Channel(0)` is red for RGB.
    Channel(u8),
}

/// How raw magnitudes, which are usually far above 255, are mapped to 8-bit samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Saturate to `0..=255` and truncate. Everything above 255 is lost.
    #[default]
    Clip,
    /// Stretch `min..=max` linearly onto `0..=255`
    Rescale,
    /// Refuse to write anything if a magnitude exceeds 255
    Fail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpectrumOptions {
    pub channel: ChannelPolicy,
    pub range: RangePolicy,
}
