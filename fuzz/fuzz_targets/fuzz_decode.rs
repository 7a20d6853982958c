#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp::{DecodeRequest, Permissiveness, RowMapping};

fuzz_target!(|data: &[u8]| {
    // Every permissiveness level and every pixel read must return, never panic
    for level in [
        Permissiveness::Strict,
        Permissiveness::Standard,
        Permissiveness::Permissive,
    ] {
        let Ok(file) = DecodeRequest::new(data).with_permissiveness(level).decode() else {
            continue;
        };
        let _ = file.get_pixel(0, 0);
        let _ = file.pixel(file.width().saturating_sub(1), 0, RowMapping::TopDown);
        let _ = file.to_pixels(RowMapping::Stored, enough::Unstoppable);
    }
});
