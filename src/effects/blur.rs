use crate::effects::kernel::{GaussianKernel, build_kernel};
use crate::foundation::core::{BufferGeometry, PixelBuffer, PixelBufferMut, ensure_same_geometry};
use crate::foundation::error::BlurResult;

/// Blur `source` into `destination` with a separable Gaussian of the given radius.
///
/// Both buffers must share width, height and channel width. Samples outside
/// the image are clamped to the nearest edge pixel of the same channel. Every
/// byte is blurred independently and results are truncated, not rounded.
///
/// Geometry and radius are checked before anything is allocated or written:
/// on error `destination` is left untouched.
#[tracing::instrument(
    level = "debug",
    skip(source, destination),
    fields(width = source.width(), height = source.height())
)]
pub fn blur(
    source: &PixelBuffer<'_>,
    destination: &mut PixelBufferMut<'_>,
    radius: u32,
) -> BlurResult<()> {
    ensure_same_geometry(source.geometry(), destination.geometry())?;
    let kernel = build_kernel(radius)?;
    run_passes(
        source.as_bytes(),
        destination.as_bytes_mut(),
        source.geometry(),
        &kernel,
    )
}

/// Blur a single buffer in place.
///
/// The horizontal pass reads the untouched buffer into scratch storage before
/// the vertical pass writes back, so no partially blurred pixel is ever used
/// as input.
#[tracing::instrument(
    level = "debug",
    skip(buffer),
    fields(width = buffer.width(), height = buffer.height())
)]
pub fn blur_in_place(buffer: &mut PixelBufferMut<'_>, radius: u32) -> BlurResult<()> {
    let kernel = build_kernel(radius)?;
    if radius == 0 {
        return Ok(());
    }
    let geometry = buffer.geometry();
    let len = geometry.byte_len()?;
    if len == 0 {
        return Ok(());
    }

    let mut tmp = vec![0u8; len];
    horizontal_pass(buffer.as_bytes(), &mut tmp, geometry, &kernel);
    vertical_pass(&tmp, buffer.as_bytes_mut(), geometry, &kernel);
    Ok(())
}

fn run_passes(
    src: &[u8],
    dst: &mut [u8],
    geometry: BufferGeometry,
    kernel: &GaussianKernel,
) -> BlurResult<()> {
    if kernel.radius() == 0 {
        dst.copy_from_slice(src);
        return Ok(());
    }
    let len = geometry.byte_len()?;
    if len == 0 {
        return Ok(());
    }

    let mut tmp = vec![0u8; len];
    horizontal_pass(src, &mut tmp, geometry, kernel);
    vertical_pass(&tmp, dst, geometry, kernel);
    Ok(())
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], geometry: BufferGeometry, k: &GaussianKernel) {
    let cw = geometry.channels.bytes();
    let stride = geometry.stride();
    let last_x = geometry.width as isize - 1;

    for (src_row, dst_row) in src.chunks_exact(stride).zip(dst.chunks_exact_mut(stride)) {
        for x in 0..geometry.width as isize {
            for c in 0..cw {
                let mut acc = 0.0f32;
                for (dx, w) in k.taps() {
                    let sx = (x + dx).clamp(0, last_x) as usize;
                    acc += w * f32::from(src_row[sx * cw + c]);
                }
                dst_row[x as usize * cw + c] = truncate_to_u8(acc);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], geometry: BufferGeometry, k: &GaussianKernel) {
    let stride = geometry.stride();
    let last_y = geometry.height as isize - 1;

    for (y, dst_row) in dst.chunks_exact_mut(stride).enumerate() {
        for (i, out) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (dy, w) in k.taps() {
                let sy = (y as isize + dy).clamp(0, last_y) as usize;
                acc += w * f32::from(src[sy * stride + i]);
            }
            *out = truncate_to_u8(acc);
        }
    }
}

// Float-to-int `as` truncates toward zero and saturates at the u8 bounds.
fn truncate_to_u8(v: f32) -> u8 {
    v as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
