use super::*;

#[test]
fn new_bitmap_is_zeroed_and_unlocked() {
    let bmp = MemoryBitmap::new(3, 2, HostFormat::Rgba8888).unwrap();
    assert_eq!(bmp.as_bytes(), &[0u8; 24][..]);
    assert!(!bmp.is_locked());
    let info = bmp.info().unwrap();
    assert_eq!(info.stride, 12);
    assert_eq!(info.format, HostFormat::Rgba8888);
}

#[test]
fn from_bytes_checks_length() {
    assert!(MemoryBitmap::from_bytes(2, 2, HostFormat::A8, vec![1, 2, 3, 4]).is_ok());
    let err = MemoryBitmap::from_bytes(2, 2, HostFormat::A8, vec![1, 2, 3]).unwrap_err();
    assert!(matches!(err, BlurError::Validation(_)));
}

#[test]
fn double_lock_fails() {
    let mut bmp = MemoryBitmap::new(1, 1, HostFormat::A8).unwrap();
    bmp.lock_pixels().unwrap();
    assert!(matches!(
        bmp.lock_pixels(),
        Err(BlurError::AcquisitionFailure(_))
    ));
    bmp.unlock_pixels();
    bmp.unlock_pixels();
    assert_eq!(bmp.lock_count(), 1);
    assert_eq!(bmp.unlock_count(), 1);
}

#[test]
fn auto_import_keeps_gray_as_a8() {
    let gray = GrayImage::from_raw(2, 1, vec![10, 20]).unwrap();
    let bmp = MemoryBitmap::from_dynamic(&DynamicImage::ImageLuma8(gray), ImportFormat::Auto);
    assert_eq!(bmp.format(), HostFormat::A8);
    assert_eq!(bmp.as_bytes(), &[10, 20]);
}

#[test]
fn auto_import_expands_rgb_to_rgba() {
    let rgb = image::RgbImage::from_raw(1, 1, vec![1, 2, 3]).unwrap();
    let bmp = MemoryBitmap::from_dynamic(&DynamicImage::ImageRgb8(rgb), ImportFormat::Auto);
    assert_eq!(bmp.format(), HostFormat::Rgba8888);
    assert_eq!(bmp.as_bytes(), &[1, 2, 3, 255]);
}

#[test]
fn forced_a8_import_converts_color() {
    let rgba = RgbaImage::from_raw(2, 2, vec![255; 16]).unwrap();
    let bmp = MemoryBitmap::from_dynamic(&DynamicImage::ImageRgba8(rgba), ImportFormat::A8);
    assert_eq!(bmp.format(), HostFormat::A8);
    assert_eq!(bmp.as_bytes().len(), 4);
}

#[test]
fn export_round_trips_layout() {
    let bmp = MemoryBitmap::from_bytes(1, 2, HostFormat::A8, vec![7, 8]).unwrap();
    let img = bmp.to_dynamic_image().unwrap();
    assert_eq!(img.as_luma8().unwrap().as_raw(), &vec![7, 8]);

    let bmp = MemoryBitmap::new(1, 1, HostFormat::RgbaF16).unwrap();
    assert!(matches!(
        bmp.to_dynamic_image(),
        Err(BlurError::UnsupportedFormat(_))
    ));
}

#[test]
fn blank_like_copies_geometry_not_pixels() {
    let bmp = MemoryBitmap::from_bytes(2, 1, HostFormat::A8, vec![9, 9]).unwrap();
    let blank = bmp.blank_like().unwrap();
    assert_eq!(blank.info().unwrap(), bmp.info().unwrap());
    assert_eq!(blank.as_bytes(), &[0, 0]);
}

#[test]
fn import_format_parses_from_json() {
    let f: ImportFormat = serde_json::from_str("\"rgba8888\"").unwrap();
    assert_eq!(f, ImportFormat::Rgba8888);
    let f: ImportFormat = serde_json::from_str("\"a8\"").unwrap();
    assert_eq!(f, ImportFormat::A8);
    assert_eq!(ImportFormat::default(), ImportFormat::Auto);
}
