use super::*;

#[test]
fn channel_width_accepts_only_one_and_four() {
    assert_eq!(ChannelWidth::from_bytes(1).unwrap(), ChannelWidth::One);
    assert_eq!(ChannelWidth::from_bytes(4).unwrap(), ChannelWidth::Four);
    for bpp in [0usize, 2, 3, 8] {
        assert!(matches!(
            ChannelWidth::from_bytes(bpp),
            Err(BlurError::UnsupportedFormat(_))
        ));
    }
}

#[test]
fn buffer_stride_is_width_times_channels() {
    let data = vec![0u8; 3 * 2 * 4];
    let buf = PixelBuffer::new(&data, 3, 2, ChannelWidth::Four).unwrap();
    assert_eq!(buf.stride(), 12);
    assert_eq!(buf.as_bytes().len(), 24);
}

#[test]
fn buffer_rejects_wrong_length() {
    let data = vec![0u8; 5];
    let err = PixelBuffer::new(&data, 2, 2, ChannelWidth::One).unwrap_err();
    assert!(matches!(err, BlurError::Validation(_)));

    let mut data = vec![0u8; 17];
    let err = PixelBufferMut::new(&mut data, 2, 2, ChannelWidth::Four).unwrap_err();
    assert!(matches!(err, BlurError::Validation(_)));
}

#[test]
fn empty_buffer_is_valid() {
    let data: Vec<u8> = Vec::new();
    let buf = PixelBuffer::new(&data, 0, 7, ChannelWidth::Four).unwrap();
    assert_eq!(buf.geometry().byte_len().unwrap(), 0);
}

#[test]
fn mut_view_reborrows_same_bytes() {
    let mut data = vec![1u8, 2, 3, 4];
    let mut buf = PixelBufferMut::new(&mut data, 2, 2, ChannelWidth::One).unwrap();
    buf.as_bytes_mut()[3] = 9;
    assert_eq!(buf.as_view().as_bytes(), &[1, 2, 3, 9]);
}

#[test]
fn geometry_mismatch_is_detected() {
    let a = BufferGeometry {
        width: 2,
        height: 2,
        channels: ChannelWidth::One,
    };
    assert!(ensure_same_geometry(a, a).is_ok());

    let b = BufferGeometry {
        channels: ChannelWidth::Four,
        ..a
    };
    assert!(matches!(
        ensure_same_geometry(a, b),
        Err(BlurError::DimensionMismatch { .. })
    ));
}
