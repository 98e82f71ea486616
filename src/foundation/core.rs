use crate::foundation::error::{BlurError, BlurResult};

/// Bytes per pixel of an 8-bit-per-channel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelWidth {
    /// Single channel (alpha or luminance).
    One,
    /// Four interleaved channels.
    Four,
}

impl ChannelWidth {
    /// Number of bytes each pixel occupies.
    pub fn bytes(self) -> usize {
        match self {
            Self::One => 1,
            Self::Four => 4,
        }
    }

    /// Map a bytes-per-pixel count to a channel width, rejecting anything but 1 and 4.
    pub fn from_bytes(bpp: usize) -> BlurResult<Self> {
        match bpp {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            other => Err(BlurError::unsupported_format(format!(
                "{other} bytes per pixel (expected 1 or 4)"
            ))),
        }
    }
}

/// Width, height and channel width shared by both buffer views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferGeometry {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per pixel.
    pub channels: ChannelWidth,
}

impl BufferGeometry {
    /// Bytes per row. Rows are never padded.
    pub fn stride(self) -> usize {
        self.width as usize * self.channels.bytes()
    }

    /// Total byte length, or a validation error if it does not fit in `usize`.
    pub fn byte_len(self) -> BlurResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(self.channels.bytes()))
            .ok_or_else(|| BlurError::validation("pixel buffer size overflow"))
    }

    fn check(self, len: usize) -> BlurResult<()> {
        let expected = self.byte_len()?;
        if len != expected {
            return Err(BlurError::validation(format!(
                "pixel buffer of {}x{}x{} expects {expected} bytes, got {len}",
                self.width,
                self.height,
                self.channels.bytes()
            )));
        }
        Ok(())
    }

    fn as_tuple(self) -> (u32, u32, ChannelWidth) {
        (self.width, self.height, self.channels)
    }
}

/// Read-only view over borrowed 8-bit pixel memory.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    geometry: BufferGeometry,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width`x`height` buffer. The slice length must equal
    /// `width * height * channels`.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        channels: ChannelWidth,
    ) -> BlurResult<Self> {
        let geometry = BufferGeometry {
            width,
            height,
            channels,
        };
        geometry.check(data.len())?;
        Ok(Self { geometry, data })
    }

    pub fn geometry(&self) -> BufferGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn channels(&self) -> ChannelWidth {
        self.geometry.channels
    }

    pub fn stride(&self) -> usize {
        self.geometry.stride()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }
}

/// Writable view over borrowed 8-bit pixel memory.
#[derive(Debug)]
pub struct PixelBufferMut<'a> {
    geometry: BufferGeometry,
    data: &'a mut [u8],
}

impl<'a> PixelBufferMut<'a> {
    /// Wrap `data` as a writable `width`x`height` buffer. The slice length must
    /// equal `width * height * channels`.
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        channels: ChannelWidth,
    ) -> BlurResult<Self> {
        let geometry = BufferGeometry {
            width,
            height,
            channels,
        };
        geometry.check(data.len())?;
        Ok(Self { geometry, data })
    }

    pub fn geometry(&self) -> BufferGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn channels(&self) -> ChannelWidth {
        self.geometry.channels
    }

    pub fn stride(&self) -> usize {
        self.geometry.stride()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Reborrow as a read-only view.
    pub fn as_view(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            geometry: self.geometry,
            data: &*self.data,
        }
    }
}

/// Fail with [`BlurError::DimensionMismatch`] unless both geometries are identical.
pub fn ensure_same_geometry(src: BufferGeometry, dst: BufferGeometry) -> BlurResult<()> {
    if src != dst {
        return Err(BlurError::dimension_mismatch(
            src.as_tuple(),
            dst.as_tuple(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
