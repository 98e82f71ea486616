use crate::foundation::core::{BufferGeometry, ChannelWidth, PixelBuffer, PixelBufferMut};
use crate::foundation::error::{BlurError, BlurResult};

/// Pixel formats a host bitmap can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostFormat {
    /// No format (e.g. a recycled bitmap).
    None,
    /// 4 bytes per pixel, 8 bits per channel.
    Rgba8888,
    /// 2 bytes per pixel, packed 5-6-5.
    Rgb565,
    /// 2 bytes per pixel, packed 4-4-4-4.
    Rgba4444,
    /// 1 byte per pixel, alpha only.
    A8,
    /// 8 bytes per pixel, half-float channels.
    RgbaF16,
}

impl HostFormat {
    /// Bytes per pixel as stored by the host.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::None => 0,
            Self::A8 => 1,
            Self::Rgb565 | Self::Rgba4444 => 2,
            Self::Rgba8888 => 4,
            Self::RgbaF16 => 8,
        }
    }

    /// Channel width for the formats the blur accepts.
    pub fn channel_width(self) -> Option<ChannelWidth> {
        match self {
            Self::A8 => Some(ChannelWidth::One),
            Self::Rgba8888 => Some(ChannelWidth::Four),
            _ => None,
        }
    }
}

/// Geometry and format reported by a host bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    /// Bytes per row.
    pub stride: u32,
    pub format: HostFormat,
}

/// A host-owned bitmap whose pixel memory must be locked before access.
///
/// Implementations only need to hand out the pixel slice while locked;
/// [`BitmapGuard`] is the supported way to pair `lock_pixels` and
/// `unlock_pixels`.
pub trait BitmapHost {
    /// Describe the bitmap without locking it.
    fn info(&self) -> BlurResult<BitmapInfo>;

    /// Pin the pixel memory. Failing here means nothing is held.
    fn lock_pixels(&mut self) -> BlurResult<()>;

    /// Locked pixel bytes.
    fn pixels(&self) -> &[u8];

    /// Locked pixel bytes, writable.
    fn pixels_mut(&mut self) -> &mut [u8];

    /// Release a lock taken by `lock_pixels`.
    fn unlock_pixels(&mut self);
}

/// Scoped, validated access to a host bitmap.
///
/// The host is locked on successful [`acquire`](Self::acquire) and unlocked
/// exactly once when the guard is dropped. A host that fails validation or
/// locking is never unlocked.
pub struct BitmapGuard<'h, H: BitmapHost + ?Sized> {
    host: &'h mut H,
    geometry: BufferGeometry,
}

impl<'h, H: BitmapHost + ?Sized> BitmapGuard<'h, H> {
    /// Validate the host's format and lock its pixels.
    pub fn acquire(host: &'h mut H) -> BlurResult<Self> {
        let info = host.info()?;
        let channels = info.format.channel_width().ok_or_else(|| {
            BlurError::unsupported_format(format!(
                "{:?} (expected A8 or Rgba8888)",
                info.format
            ))
        })?;
        let geometry = BufferGeometry {
            width: info.width,
            height: info.height,
            channels,
        };
        if info.stride as usize != geometry.stride() {
            return Err(BlurError::unsupported_format(format!(
                "row stride {} does not match width {} x {} bytes",
                info.stride,
                info.width,
                channels.bytes()
            )));
        }

        host.lock_pixels()?;
        let guard = Self { host, geometry };

        // Unlocked by `guard`'s drop if the host hands back a short slice.
        let expected = geometry.byte_len()?;
        let got = guard.host.pixels().len();
        if got != expected {
            return Err(BlurError::validation(format!(
                "host pixel memory is {got} bytes, expected {expected}"
            )));
        }

        tracing::trace!(
            width = geometry.width,
            height = geometry.height,
            channels = channels.bytes(),
            "locked host bitmap"
        );
        Ok(guard)
    }

    pub fn geometry(&self) -> BufferGeometry {
        self.geometry
    }

    /// Read-only view of the locked pixels.
    pub fn view(&self) -> BlurResult<PixelBuffer<'_>> {
        let g = self.geometry;
        PixelBuffer::new(self.host.pixels(), g.width, g.height, g.channels)
    }

    /// Writable view of the locked pixels.
    pub fn view_mut(&mut self) -> BlurResult<PixelBufferMut<'_>> {
        let g = self.geometry;
        PixelBufferMut::new(self.host.pixels_mut(), g.width, g.height, g.channels)
    }
}

impl<H: BitmapHost + ?Sized> Drop for BitmapGuard<'_, H> {
    fn drop(&mut self) {
        self.host.unlock_pixels();
        tracing::trace!("unlocked host bitmap");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/bitmap.rs"]
mod tests;
