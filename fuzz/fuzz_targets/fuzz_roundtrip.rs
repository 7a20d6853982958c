#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::*;

fuzz_target!(|data: &[u8]| {
    // If we can read the pixels, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode(data) else {
        return;
    };
    let Ok(pixels) = decoded.to_pixels(RowMapping::Stored, enough::Unstoppable) else {
        return;
    };

    let header = BitmapHeader::new(decoded.header().width, decoded.header().height);
    let Ok(reencoded) = encode(&header, &pixels, enough::Unstoppable) else {
        return;
    };
    let Ok(decoded2) = decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    let pixels2 = decoded2
        .to_pixels(RowMapping::Stored, enough::Unstoppable)
        .expect("re-encoded pixels readable");
    assert_eq!(pixels, pixels2, "roundtrip pixel mismatch");
    assert_eq!(decoded.header().width, decoded2.header().width);
    assert_eq!(decoded.header().height, decoded2.header().height);
});
