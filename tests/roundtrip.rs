use enough::Unstoppable;
use zenbmp::*;

const FOUR: [Pixel; 4] = [
    Pixel::new(255, 0, 0),
    Pixel::new(0, 255, 0),
    Pixel::new(0, 0, 255),
    Pixel::new(255, 255, 255),
];

#[test]
fn required_size_for_2x_neg2() {
    let header = BitmapHeader::new(2, -2);
    assert_eq!(required_size(&header).unwrap(), 70);
    assert_eq!(required_size(&header).unwrap(), 54 + 2 * 2 * 4);
}

#[test]
fn roundtrip_header_fields() {
    let header = BitmapHeader::new(2, -2);
    let encoded = encode(&header, &FOUR, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode(&encoded).unwrap();
    let h = decoded.header();
    assert_eq!(h.width, 2);
    assert_eq!(h.height, -2);
    assert_eq!(h.bits_per_pixel, 32);
    assert_eq!(h.compression, Compression::Rgb);
    assert_eq!(h.header_size, 40);
    assert_eq!(h.pixel_data_offset, 54);
    assert_eq!(h.image_data_size, 16);
    assert_eq!(decoded.row_order(), RowOrder::TopDown);
}

#[test]
fn roundtrip_preserves_color() {
    let header = BitmapHeader::new(2, -2);
    let encoded = encode(&header, &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.get_pixel(0, 0).unwrap(), FOUR[0]);
    assert_eq!(decoded.get_pixel(1, 0).unwrap(), FOUR[1]);
    assert_eq!(decoded.get_pixel(0, 1).unwrap(), FOUR[2]);
    assert_eq!(decoded.get_pixel(1, 1).unwrap(), FOUR[3]);
}

#[test]
fn bottom_up_roundtrip_with_row_mapping() {
    // Positive height: the first supplied row is the bottom of the picture.
    let header = BitmapHeader::new(2, 2);
    let encoded = encode(&header, &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.row_order(), RowOrder::BottomUp);

    // Stored rows come back as written.
    assert_eq!(decoded.get_pixel(0, 0).unwrap(), FOUR[0]);
    // Visual top row is the last stored row.
    assert_eq!(decoded.pixel(0, 0, RowMapping::TopDown).unwrap(), FOUR[2]);
    assert_eq!(decoded.pixel(1, 1, RowMapping::TopDown).unwrap(), FOUR[1]);

    let top_down = decoded.to_pixels(RowMapping::TopDown, Unstoppable).unwrap();
    assert_eq!(top_down, [FOUR[2], FOUR[3], FOUR[0], FOUR[1]]);
}

#[test]
fn bad_signature_is_unknown_header_field() {
    let mut encoded = encode(&BitmapHeader::new(1, 1), &FOUR[..1], Unstoppable).unwrap();
    for sig in [*b"MB", *b"PN", [0, 0], [0x42, 0x4E]] {
        encoded[0..2].copy_from_slice(&sig);
        assert!(matches!(
            decode(&encoded),
            Err(BitmapError::UnknownHeaderField)
        ));
    }
}

#[test]
fn other_dib_header_sizes_are_unknown_version() {
    let mut encoded = encode(&BitmapHeader::new(1, 1), &FOUR[..1], Unstoppable).unwrap();
    for size in [12u32, 108, 124, 0] {
        encoded[14..18].copy_from_slice(&size.to_le_bytes());
        match decode(&encoded) {
            Err(BitmapError::UnknownBitmapVersion(v)) => assert_eq!(v, size),
            other => panic!("expected UnknownBitmapVersion, got {other:?}"),
        }
    }
}

#[test]
fn decode_does_not_mutate_input() {
    let encoded = encode(&BitmapHeader::new(2, -2), &FOUR, Unstoppable).unwrap();
    let before = encoded.clone();
    let decoded = decode(&encoded).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            decoded.get_pixel(x, y).unwrap();
        }
    }
    assert_eq!(encoded, before);
}

#[test]
fn decode_borrows_pixel_region() {
    let encoded = encode(&BitmapHeader::new(2, -2), &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded.pixel_data_offset(), 54);
    assert_eq!(decoded.pixel_data().as_ptr(), encoded[54..].as_ptr());
    assert_eq!(decoded.pixel_data().len(), 16);
}

#[test]
fn encode_into_size_mismatch() {
    let header = BitmapHeader::new(2, -2);
    let mut short = vec![0u8; 69];
    assert!(matches!(
        encode_into(&header, &FOUR, &mut short, Unstoppable),
        Err(BitmapError::SizeMismatch {
            expected: 70,
            actual: 69
        })
    ));
    let mut long = vec![0u8; 71];
    assert!(matches!(
        encode_into(&header, &FOUR, &mut long, Unstoppable),
        Err(BitmapError::SizeMismatch {
            expected: 70,
            actual: 71
        })
    ));
    let mut exact = vec![0u8; 70];
    encode_into(&header, &FOUR, &mut exact, Unstoppable).unwrap();
    assert_eq!(exact, encode(&header, &FOUR, Unstoppable).unwrap());
}

#[test]
fn out_of_range_coordinates() {
    let encoded = encode(&BitmapHeader::new(2, -2), &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    for (x, y) in [(2, 0), (0, 2), (u32::MAX, u32::MAX)] {
        assert!(matches!(
            decoded.get_pixel(x, y),
            Err(BitmapError::CoordinateOutOfBounds { width: 2, height: 2, .. })
        ));
    }
    assert!(decoded.pixel(0, 2, RowMapping::TopDown).is_err());
}

#[test]
fn encode_request_matches_free_functions() {
    let req = EncodeRequest::new(2, -2);
    assert_eq!(req.required_size().unwrap(), 70);
    assert_eq!(
        req.encode(&FOUR, Unstoppable).unwrap(),
        encode(&BitmapHeader::new(2, -2), &FOUR, Unstoppable).unwrap()
    );
}

#[test]
fn limits_reject_large() {
    let encoded = encode(&BitmapHeader::new(2, -2), &FOUR, Unstoppable).unwrap();
    let limits = Limits {
        max_pixels: Some(3),
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    let result = EncodeRequest::new(2, -2)
        .with_limits(&limits)
        .encode(&FOUR, Unstoppable);
    assert!(matches!(result, Err(BitmapError::LimitExceeded(_))));
}

#[test]
fn memory_limit_applies_to_encode() {
    let limits = Limits {
        max_memory_bytes: Some(69),
        ..Default::default()
    };
    let result = EncodeRequest::new(2, -2)
        .with_limits(&limits)
        .encode(&FOUR, Unstoppable);
    assert!(matches!(result, Err(BitmapError::LimitExceeded(_))));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_roundtrip_both_orders() {
    let pixels: Vec<rgb::RGB8> = FOUR.iter().copied().map(Into::into).collect();
    let img = imgref::ImgVec::new(pixels.clone(), 2, 2);
    for order in [RowOrder::TopDown, RowOrder::BottomUp] {
        let encoded = encode_imgref(img.as_ref(), order, Unstoppable).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.row_order(), order);
        let back = decoded.to_imgvec(Unstoppable).unwrap();
        assert_eq!(back.buf().as_slice(), &pixels[..]);
    }
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_refuses_empty_images() {
    for (w, h) in [(0, 5), (5, 0), (0, -5)] {
        let encoded = encode(&BitmapHeader::new(w, h), &[], Unstoppable).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert!(decoded.to_pixels(RowMapping::TopDown, Unstoppable).unwrap().is_empty());
        match decoded.to_imgvec(Unstoppable) {
            Err(BitmapError::EmptyImage { width, height }) => {
                assert_eq!((width, height), (w.unsigned_abs(), h.unsigned_abs()));
            }
            other => panic!("expected EmptyImage for {w}x{h}, got {other:?}"),
        }
    }
}

#[test]
fn dimension_limits_use_magnitude() {
    let tall = encode(&BitmapHeader::new(1, -4), &FOUR, Unstoppable).unwrap();
    let narrow = Limits {
        max_height: Some(3),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&tall).with_limits(&narrow).decode(),
        Err(BitmapError::LimitExceeded(_))
    ));

    let wide = Limits {
        max_width: Some(3),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&tall).with_limits(&wide).decode().is_ok());
    assert!(matches!(
        EncodeRequest::new(4, 1).with_limits(&wide).encode(&FOUR, Unstoppable),
        Err(BitmapError::LimitExceeded(_))
    ));
}

/// A stop source that has already fired.
struct Cancelled;

impl Stop for Cancelled {
    fn check(&self) -> Result<(), enough::StopReason> {
        Err(enough::StopReason::Cancelled)
    }
}

#[test]
fn cancellation_stops_every_loop() {
    let header = BitmapHeader::new(2, -2);
    assert!(matches!(
        encode(&header, &FOUR, Cancelled),
        Err(BitmapError::Cancelled(enough::StopReason::Cancelled))
    ));

    let mut out = vec![0u8; required_size(&header).unwrap() as usize];
    assert!(matches!(
        encode_into(&header, &FOUR, &mut out, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));

    let encoded = encode(&header, &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert!(matches!(
        decoded.to_pixels(RowMapping::Stored, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));
    assert!(matches!(
        GlyphGrid::new(2, 2, 4).pack(&decoded, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));
}

#[cfg(feature = "imgref")]
#[test]
fn cancellation_stops_imgref_paths() {
    let encoded = encode(&BitmapHeader::new(2, 2), &FOUR, Unstoppable).unwrap();
    let decoded = decode(&encoded).unwrap();
    assert!(matches!(
        decoded.to_imgvec(Cancelled),
        Err(BitmapError::Cancelled(_))
    ));
    let img = decoded.to_imgvec(Unstoppable).unwrap();
    assert!(matches!(
        encode_imgref(img.as_ref(), RowOrder::BottomUp, Cancelled),
        Err(BitmapError::Cancelled(_))
    ));
}
