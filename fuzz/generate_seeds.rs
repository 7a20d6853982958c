#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: i32, height: i32, bpp: u16, compression: u32, pixel_bytes: usize) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&((54 + pixel_bytes) as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&bpp.to_le_bytes());
    bmp[30..34].copy_from_slice(&compression.to_le_bytes());
    bmp[34..38].copy_from_slice(&(pixel_bytes as u32).to_le_bytes());
    bmp
}

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        // 2x2 top-down: red, green / blue, white
        let mut td = header(2, -2, 32, 0, 16);
        td.extend_from_slice(&[0, 0, 255, 0, 0, 255, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0]);
        fs::write(format!("{dir}/bmp32_2x2_topdown.bmp"), &td).unwrap();

        // 3x1 bottom-up
        let mut bu = header(3, 1, 32, 0, 12);
        bu.extend_from_slice(&[1, 2, 3, 0, 4, 5, 6, 0, 7, 8, 9, 0]);
        fs::write(format!("{dir}/bmp32_3x1_bottomup.bmp"), &bu).unwrap();

        // Header only, 24 bpp (decodes, pixel access refused)
        fs::write(format!("{dir}/bmp24_header_only.bmp"), header(1, 1, 24, 0, 0)).unwrap();

        // RLE8 compression value
        let mut rle = header(1, 1, 32, 1, 4);
        rle.extend_from_slice(&[0; 4]);
        fs::write(format!("{dir}/bmp32_rle8.bmp"), &rle).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/truncated_header.bmp"), &td[..20]).unwrap();
        fs::write(format!("{dir}/truncated_pixels.bmp"), &td[..60]).unwrap();
        let mut v4 = td.clone();
        v4[14..18].copy_from_slice(&108u32.to_le_bytes());
        fs::write(format!("{dir}/v4_header.bmp"), &v4).unwrap();
    }
}
