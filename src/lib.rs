//! Separable Gaussian blur over host-owned 8-bit pixel buffers.
//!
//! A blur runs in three steps:
//!
//! 1. **Acquire**: [`BitmapGuard`] validates a [`BitmapHost`] (A8 or RGBA8888, unpadded
//!    rows) and locks its memory until the guard is dropped.
//! 2. **Kernel**: [`build_kernel`] turns a radius (at most [`MAX_RADIUS`]) into normalized
//!    Gaussian weights with `sigma = 0.4 * radius + 0.6`.
//! 3. **Convolve**: [`blur`] runs a horizontal then a vertical pass with clamp-to-edge
//!    sampling, reading the source and writing the destination through one scratch buffer.
//!
//! [`native_blur`] ties the three together for a pair of host bitmaps.
#![forbid(unsafe_code)]

mod config;
mod effects;
mod foundation;
mod host;

pub use config::job::{BlurJob, DEFAULT_RADIUS};
pub use effects::blur::{blur, blur_in_place};
pub use effects::kernel::{GaussianKernel, MAX_RADIUS, build_kernel, sigma_for_radius};
pub use foundation::core::{
    BufferGeometry, ChannelWidth, PixelBuffer, PixelBufferMut, ensure_same_geometry,
};
pub use foundation::error::{BlurError, BlurResult};
pub use host::bitmap::{BitmapGuard, BitmapHost, BitmapInfo, HostFormat};
pub use host::entry::{blur_image, native_blur};
pub use host::memory::{ImportFormat, MemoryBitmap};
