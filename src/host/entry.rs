use image::DynamicImage;

use crate::effects::blur::blur;
use crate::effects::kernel::MAX_RADIUS;
use crate::foundation::core::ensure_same_geometry;
use crate::foundation::error::{BlurError, BlurResult};
use crate::host::bitmap::{BitmapGuard, BitmapHost};
use crate::host::memory::{ImportFormat, MemoryBitmap};

/// Blur the pixels of `input` into `output`.
///
/// Both bitmaps are locked for the duration of the call and released on
/// every path, including when the second lock or any validation fails.
/// `output` is only written once both bitmaps are locked and validated.
#[tracing::instrument(skip(input, output))]
pub fn native_blur<I, O>(input: &mut I, output: &mut O, radius: u32) -> BlurResult<()>
where
    I: BitmapHost + ?Sized,
    O: BitmapHost + ?Sized,
{
    if radius > MAX_RADIUS {
        let err = BlurError::radius_out_of_range(radius, MAX_RADIUS);
        tracing::warn!(%err, "rejecting blur request");
        return Err(err);
    }

    run(input, output, radius).inspect_err(|err| tracing::warn!(%err, "blur failed"))
}

fn run<I, O>(input: &mut I, output: &mut O, radius: u32) -> BlurResult<()>
where
    I: BitmapHost + ?Sized,
    O: BitmapHost + ?Sized,
{
    let src = BitmapGuard::acquire(input)?;
    let mut dst = BitmapGuard::acquire(output)?;
    ensure_same_geometry(src.geometry(), dst.geometry())?;

    tracing::debug!(
        width = src.geometry().width,
        height = src.geometry().height,
        channels = src.geometry().channels.bytes(),
        "blurring host bitmap"
    );
    let view = src.view()?;
    let mut out = dst.view_mut()?;
    blur(&view, &mut out, radius)
}

/// Blur a decoded image, returning a new image with the same geometry.
///
/// The image is imported as an in-memory bitmap using `format`, so the
/// result is `Luma8` for `A8` and `Rgba8` otherwise.
pub fn blur_image(
    img: &DynamicImage,
    radius: u32,
    format: ImportFormat,
) -> BlurResult<DynamicImage> {
    let mut input = MemoryBitmap::from_dynamic(img, format);
    let mut output = input.blank_like()?;
    native_blur(&mut input, &mut output, radius)?;
    output.to_dynamic_image()
}

#[cfg(test)]
#[path = "../../tests/unit/host/entry.rs"]
mod tests;
