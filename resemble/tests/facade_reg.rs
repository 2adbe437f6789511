//! Facade regression test - loading, comparing and saving
//!
//! Tests in-memory and on-disk comparison, load error short-circuiting,
//! single-image analysis and diff image output.

use resemble::{
    CompareOptions, Error, ImageFormat, ImageSource, Side, analyze_file, analyze_mem,
    compare_files, compare_mem, diff_image_png, load_pair, write_diff_image,
};
use resemble_test::fixtures::{uniform_image, with_rect};
use resemble_test::{RegParams, regout_dir};
use std::fs;
use std::path::PathBuf;

fn png_bytes(pix: &resemble::Pix) -> Vec<u8> {
    resemble::io::write_image_mem(pix, ImageFormat::Png).expect("encode png")
}

fn scratch_path(name: &str) -> PathBuf {
    let dir = PathBuf::from(regout_dir());
    fs::create_dir_all(&dir).expect("create regout dir");
    dir.join(name)
}

#[test]
fn facade_mem_reg() {
    let mut rp = RegParams::new("facade_mem");

    let base = uniform_image(10, 10, 255, 255, 255, 255);
    let changed = with_rect(&base, 0, 0, 5, 2, (0, 0, 0, 255));
    let a = png_bytes(&base);
    let b = png_bytes(&changed);

    // --- Test 1: in-memory comparison ---
    let r = compare_mem(&a, &b, &CompareOptions::new()).expect("compare");
    rp.compare_values(10.0, r.mismatch_count as f64, 0.0);
    rp.compare_strings("10.00", &r.mismatch_percentage_string());

    // --- Test 2: same result as comparing the rasters directly ---
    let direct = resemble::compare(&base, &changed, &CompareOptions::new()).expect("compare");
    rp.compare_pix(direct.diff_image(), r.diff_image());

    // --- Test 3: the diff image survives a PNG round trip ---
    let encoded = diff_image_png(&r).expect("encode diff");
    let decoded = resemble::io::read_image_mem(&encoded).expect("decode diff");
    rp.compare_pix(r.diff_image(), &decoded);

    // --- Test 4: single-image statistics ---
    let stats = analyze_mem(&a).expect("analyze");
    rp.compare_values(100.0, stats.white as f64, 0.0);
    rp.compare_values(0.0, stats.black as f64, 0.0);
    rp.compare_values(100.0, stats.brightness as f64, 0.0);

    assert!(rp.cleanup(), "facade_mem regression test failed");
}

#[test]
fn facade_load_error_reg() {
    let mut rp = RegParams::new("facade_load_error");

    let good = png_bytes(&uniform_image(4, 4, 1, 2, 3, 255));
    let garbage = b"definitely not an image".to_vec();

    // --- Test 1: first side fails ---
    let err = compare_mem(&garbage, &good, &CompareOptions::new()).unwrap_err();
    let side = match err {
        Error::Load(e) => Some(e.side),
        _ => None,
    };
    rp.compare_values(1.0, if side == Some(Side::First) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: second side fails ---
    let err = compare_mem(&good, &garbage, &CompareOptions::new()).unwrap_err();
    let side = match err {
        Error::Load(e) => Some(e.side),
        _ => None,
    };
    rp.compare_values(1.0, if side == Some(Side::Second) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: the first failure wins when both fail ---
    let missing = ImageSource::Path(PathBuf::from("/nonexistent/resemble/missing.png"));
    let res = load_pair(&missing, &ImageSource::Memory(garbage.clone()));
    let side = res.err().map(|e| e.side);
    rp.compare_values(1.0, if side == Some(Side::First) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: a missing file is a load error too ---
    let err = compare_files(
        "/nonexistent/resemble/a.png",
        "/nonexistent/resemble/b.png",
        &CompareOptions::new(),
    )
    .unwrap_err();
    rp.compare_values(1.0, if matches!(err, Error::Load(_)) { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: single-image analysis surfaces I/O errors ---
    let err = analyze_mem(&garbage).unwrap_err();
    rp.compare_values(1.0, if matches!(err, Error::Io(_)) { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "facade_load_error regression test failed");
}

#[test]
fn facade_files_reg() {
    let mut rp = RegParams::new("facade_files");

    let a_path = scratch_path("facade_files_a.png");
    let b_path = scratch_path("facade_files_b.png");
    let diff_path = scratch_path("facade_files_diff.png");

    let a = uniform_image(8, 6, 30, 60, 90, 255);
    let b = uniform_image(6, 8, 30, 60, 90, 255);
    resemble::io::write_image(&a, &a_path, ImageFormat::Png).expect("write a");
    resemble::io::write_image(&b, &b_path, ImageFormat::Png).expect("write b");

    // --- Test 1: comparing files of different sizes ---
    let r = compare_files(&a_path, &b_path, &CompareOptions::new().ignore_nothing())
        .expect("compare");
    rp.compare_values(0.0, r.mismatch_count as f64, 0.0);
    rp.compare_values(64.0, r.total_pixels as f64, 0.0);
    rp.compare_values(2.0, r.dimension_difference.width as f64, 0.0);
    rp.compare_values(-2.0, r.dimension_difference.height as f64, 0.0);

    // --- Test 2: writing the diff image ---
    write_diff_image(&r, &diff_path).expect("write diff");
    let back = resemble::io::read_image(&diff_path).expect("read diff");
    rp.compare_pix(r.diff_image(), &back);

    // --- Test 3: analyzing a file ---
    let stats = analyze_file(&a_path).expect("analyze");
    let expected = a.summary_stats();
    rp.compare_values(expected.brightness as f64, stats.brightness as f64, 0.0);
    rp.compare_values(expected.red as f64, stats.red as f64, 0.0);

    let _ = fs::remove_file(&a_path);
    let _ = fs::remove_file(&b_path);
    let _ = fs::remove_file(&diff_path);

    assert!(rp.cleanup(), "facade_files regression test failed");
}
