//! PNG regression test - decoding and encoding
//!
//! Tests that rasters survive encoding, that the sniffed format drives
//! decoding, and that broken inputs are reported as errors.

use resemble_core::{ImageFormat, color};
use resemble_io::{
    IoError, detect_format_from_bytes, read_image, read_image_mem, write_image, write_image_mem,
};
use resemble_test::fixtures::{checkerboard, image_from_fn};
use resemble_test::{RegParams, regout_dir};

#[test]
fn png_reg() {
    let mut rp = RegParams::new("png");

    // --- Test 1: in-memory round trip keeps every channel ---
    let pix = image_from_fn(17, 9, |x, y| ((x * 15) as u8, (y * 28) as u8, 200, (x * y) as u8));
    let bytes = write_image_mem(&pix, ImageFormat::Png).expect("encode");
    rp.compare_values(
        1.0,
        if detect_format_from_bytes(&bytes).ok() == Some(ImageFormat::Png) { 1.0 } else { 0.0 },
        0.0,
    );
    let back = read_image_mem(&bytes).expect("decode");
    rp.compare_pix(&pix, &back);
    rp.compare_values(4.0, back.spp() as f64, 0.0);

    // --- Test 2: file round trip ---
    std::fs::create_dir_all(regout_dir()).expect("create regout dir");
    let path = format!("{}/png_reg_roundtrip.png", regout_dir());
    let board = checkerboard(12, 12, 3, (0, 0, 0, 255), (255, 255, 255, 255));
    write_image(&board, &path, ImageFormat::Png).expect("write");
    let back = read_image(&path).expect("read");
    rp.compare_pix(&board, &back);
    rp.compare_values(
        color::compose_rgba(255, 255, 255, 255) as f64,
        back.get_pixel(3, 0).unwrap_or(0) as f64,
        0.0,
    );
    let _ = std::fs::remove_file(&path);

    // --- Test 3: broken and unsupported inputs ---
    let err = read_image_mem(b"GIF89a....").unwrap_err();
    rp.compare_values(1.0, if matches!(err, IoError::UnsupportedFormat(_)) { 1.0 } else { 0.0 }, 0.0);
    let err = read_image_mem(&[0x89]).unwrap_err();
    rp.compare_values(1.0, if matches!(err, IoError::InvalidData(_)) { 1.0 } else { 0.0 }, 0.0);
    let truncated = &bytes[..bytes.len() / 2];
    rp.compare_values(1.0, if read_image_mem(truncated).is_err() { 1.0 } else { 0.0 }, 0.0);
    let err = write_image_mem(&pix, ImageFormat::Jpeg).unwrap_err();
    rp.compare_values(1.0, if matches!(err, IoError::UnsupportedFormat(_)) { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "png regression test failed");
}
