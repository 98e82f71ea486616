use image::{DynamicImage, GrayImage, RgbaImage};

use crate::foundation::error::{BlurError, BlurResult};
use crate::host::bitmap::{BitmapHost, BitmapInfo, HostFormat};

/// How a decoded image is laid out when imported as a bitmap.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Single-channel images become `A8`, everything else `Rgba8888`.
    #[default]
    Auto,
    /// Force a single channel (luminance).
    A8,
    /// Force four interleaved channels.
    Rgba8888,
}

/// An owned, in-memory [`BitmapHost`] with lock bookkeeping.
#[derive(Clone, Debug)]
pub struct MemoryBitmap {
    width: u32,
    height: u32,
    stride: u32,
    format: HostFormat,
    data: Vec<u8>,
    locked: bool,
    lock_count: u32,
    unlock_count: u32,
    fail_info: bool,
    fail_lock: bool,
}

impl MemoryBitmap {
    /// Zero-filled bitmap with unpadded rows.
    pub fn new(width: u32, height: u32, format: HostFormat) -> BlurResult<Self> {
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .and_then(|s| u32::try_from(s).ok())
            .ok_or_else(|| BlurError::validation("bitmap stride overflow"))?;
        Self::with_stride(width, height, format, stride)
    }

    /// Zero-filled bitmap with an explicit row stride.
    pub fn with_stride(
        width: u32,
        height: u32,
        format: HostFormat,
        stride: u32,
    ) -> BlurResult<Self> {
        let len = (stride as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| BlurError::validation("bitmap size overflow"))?;
        Ok(Self {
            width,
            height,
            stride,
            format,
            data: vec![0; len],
            locked: false,
            lock_count: 0,
            unlock_count: 0,
            fail_info: false,
            fail_lock: false,
        })
    }

    /// Bitmap over existing bytes with unpadded rows.
    pub fn from_bytes(
        width: u32,
        height: u32,
        format: HostFormat,
        data: Vec<u8>,
    ) -> BlurResult<Self> {
        let mut bitmap = Self::new(width, height, format)?;
        if data.len() != bitmap.data.len() {
            return Err(BlurError::validation(format!(
                "{width}x{height} {format:?} bitmap expects {} bytes, got {}",
                bitmap.data.len(),
                data.len()
            )));
        }
        bitmap.data = data;
        Ok(bitmap)
    }

    pub fn from_gray(img: &GrayImage) -> Self {
        Self::from_image_bytes(img.width(), img.height(), HostFormat::A8, img.as_raw().clone())
    }

    pub fn from_rgba(img: &RgbaImage) -> Self {
        Self::from_image_bytes(
            img.width(),
            img.height(),
            HostFormat::Rgba8888,
            img.as_raw().clone(),
        )
    }

    /// Import a decoded image using the requested layout.
    pub fn from_dynamic(img: &DynamicImage, format: ImportFormat) -> Self {
        match format {
            ImportFormat::A8 => Self::from_gray(&img.to_luma8()),
            ImportFormat::Rgba8888 => Self::from_rgba(&img.to_rgba8()),
            ImportFormat::Auto => match img {
                DynamicImage::ImageLuma8(gray) => Self::from_gray(gray),
                other => Self::from_rgba(&other.to_rgba8()),
            },
        }
    }

    fn from_image_bytes(width: u32, height: u32, format: HostFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width * format.bytes_per_pixel() as u32,
            format,
            data,
            locked: false,
            lock_count: 0,
            unlock_count: 0,
            fail_info: false,
            fail_lock: false,
        }
    }

    /// Make `info` fail, as a host would for an invalid handle.
    pub fn failing_info(mut self) -> Self {
        self.fail_info = true;
        self
    }

    /// Make `lock_pixels` fail.
    pub fn failing_lock(mut self) -> Self {
        self.fail_lock = true;
        self
    }

    /// Blank bitmap with the same geometry and format.
    pub fn blank_like(&self) -> BlurResult<Self> {
        Self::with_stride(self.width, self.height, self.format, self.stride)
    }

    /// Convert back into a decoded image. Only `A8` and `Rgba8888` are supported.
    pub fn to_dynamic_image(&self) -> BlurResult<DynamicImage> {
        let unsupported =
            || BlurError::unsupported_format(format!("cannot export {:?} bitmap", self.format));
        match self.format {
            HostFormat::A8 => GrayImage::from_raw(self.width, self.height, self.data.clone())
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(unsupported),
            HostFormat::Rgba8888 => {
                RgbaImage::from_raw(self.width, self.height, self.data.clone())
                    .map(DynamicImage::ImageRgba8)
                    .ok_or_else(unsupported)
            }
            _ => Err(unsupported()),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> HostFormat {
        self.format
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of successful `lock_pixels` calls.
    pub fn lock_count(&self) -> u32 {
        self.lock_count
    }

    /// Number of `unlock_pixels` calls that released a lock.
    pub fn unlock_count(&self) -> u32 {
        self.unlock_count
    }
}

impl BitmapHost for MemoryBitmap {
    fn info(&self) -> BlurResult<BitmapInfo> {
        if self.fail_info {
            return Err(BlurError::acquisition("bitmap info unavailable"));
        }
        Ok(BitmapInfo {
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
        })
    }

    fn lock_pixels(&mut self) -> BlurResult<()> {
        if self.fail_lock {
            return Err(BlurError::acquisition("bitmap pixels could not be locked"));
        }
        if self.locked {
            return Err(BlurError::acquisition("bitmap pixels are already locked"));
        }
        self.locked = true;
        self.lock_count += 1;
        Ok(())
    }

    fn pixels(&self) -> &[u8] {
        &self.data
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn unlock_pixels(&mut self) {
        if self.locked {
            self.locked = false;
            self.unlock_count += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
