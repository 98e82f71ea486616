use crate::foundation::core::ChannelWidth;

/// Convenience result type used across the crate.
pub type BlurResult<T> = Result<T, BlurError>;

/// Error taxonomy for blur invocations and host bitmap access.
///
/// Every variant is reported before the destination buffer is written, so a
/// failed invocation never leaves a partially blurred output behind.
#[derive(thiserror::Error, Debug)]
pub enum BlurError {
    /// The host bitmap is not a 1-channel or 4-channel 8-bit layout, or its rows are padded.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Source and destination geometry differ.
    #[error(
        "dimension mismatch: source is {src_width}x{src_height}x{src_channels}, \
         destination is {dst_width}x{dst_height}x{dst_channels}"
    )]
    DimensionMismatch {
        /// Source width in pixels.
        src_width: u32,
        /// Source height in pixels.
        src_height: u32,
        /// Source bytes per pixel.
        src_channels: u8,
        /// Destination width in pixels.
        dst_width: u32,
        /// Destination height in pixels.
        dst_height: u32,
        /// Destination bytes per pixel.
        dst_channels: u8,
    },

    /// Requested radius exceeds what the kernel supports.
    #[error("radius out of range: {radius} exceeds maximum {max}")]
    RadiusOutOfRange {
        /// Radius that was requested.
        radius: u32,
        /// Largest accepted radius.
        max: u32,
    },

    /// The host could not describe or lock its pixel memory.
    #[error("acquisition failure: {0}")]
    AcquisitionFailure(String),

    /// Malformed buffer geometry or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlurError {
    /// Build a [`BlurError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`BlurError::AcquisitionFailure`] value.
    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::AcquisitionFailure(msg.into())
    }

    /// Build a [`BlurError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlurError::RadiusOutOfRange`] value.
    pub fn radius_out_of_range(radius: u32, max: u32) -> Self {
        Self::RadiusOutOfRange { radius, max }
    }

    pub(crate) fn dimension_mismatch(
        src: (u32, u32, ChannelWidth),
        dst: (u32, u32, ChannelWidth),
    ) -> Self {
        Self::DimensionMismatch {
            src_width: src.0,
            src_height: src.1,
            src_channels: src.2.bytes() as u8,
            dst_width: dst.0,
            dst_height: dst.1,
            dst_channels: dst.2.bytes() as u8,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
