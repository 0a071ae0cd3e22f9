use std::fs;
use std::path::Path;
use std::process::Command;

use image::{GrayImage, Luma, Rgb, RgbImage};

fn setup<'a>() -> (&'a str, &'a str) {
    let binary = env!("CARGO_BIN_EXE_fftmagick");
    let tmp_dir = env!("CARGO_TARGET_TMPDIR");
    (binary, tmp_dir)
}

#[test]
fn test_spectrum_of_png_succeeds() {
    let (binary, tmp_dir) = setup();
    let input_path = format!("{}/checkerboard.png", tmp_dir);
    let output_path = format!("{}/checkerboard.png_fft.png", tmp_dir);
    let _ = fs::remove_file(&output_path);
    GrayImage::from_fn(16, 8, |x, y| Luma([if (x + y) % 2 == 0 { 1 } else { 0 }]))
        .save(&input_path)
        .unwrap();

    let result = Command::new(binary)
        .args(&[&input_path])
        .output()
        .expect("fftmagick did not exit successfully");

    assert!(result.status.success());
    assert!(String::from_utf8(result.stdout).unwrap().contains("checkerboard.png_fft.png"));

    let spectrum = image::open(&output_path).unwrap().to_luma8();
    assert_eq!(spectrum.dimensions(), (16, 8));
    // half the 128 pixels are 1: the DC term and the Nyquist corner are both 64,
    // give or take the FFT's rounding before truncation to 8 bits
    assert!((63..=64).contains(&spectrum.get_pixel(0, 0).0[0]));
    assert!((63..=64).contains(&spectrum.get_pixel(8, 4).0[0]));
    assert_eq!(spectrum.get_pixel(1, 0).0[0], 0);
}

#[test]
fn test_spectrum_of_color_image_succeeds() {
    let (binary, tmp_dir) = setup();
    let input_path = format!("{}/color.bmp", tmp_dir);
    let output_path = format!("{}/color.bmp_fft.png", tmp_dir);
    let _ = fs::remove_file(&output_path);
    RgbImage::from_pixel(5, 3, Rgb([10, 200, 30])).save(&input_path).unwrap();

    let result = Command::new(binary)
        .args(&[&input_path])
        .output()
        .expect("fftmagick did not exit successfully");

    assert!(result.status.success());
    let spectrum = image::open(&output_path).unwrap().to_luma8();
    assert_eq!(spectrum.dimensions(), (5, 3));
    // the DC term of a bright flat image is far above 255 and gets clipped
    assert_eq!(spectrum.get_pixel(0, 0).0[0], 255);
}

#[test]
fn test_missing_file_fails_with_decode_error() {
    let (binary, tmp_dir) = setup();
    let input_path = format!("{}/does-not-exist.png", tmp_dir);

    let result = Command::new(binary)
        .args(&[&input_path])
        .output()
        .expect("failed to run fftmagick");

    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr).unwrap().contains("decode"));
    assert!(!Path::new(&format!("{}_fft.png", input_path)).exists());
}

#[test]
fn test_extra_arguments_are_rejected() {
    let (binary, _) = setup();

    let result = Command::new(binary)
        .args(&["a.png", "b.png"])
        .output()
        .expect("failed to run fftmagick");

    assert!(!result.status.success());
    assert!(String::from_utf8(result.stderr).unwrap().contains("usage"));
}

#[test]
fn test_missing_argument_fails_with_usage_error() {
    let (binary, _) = setup();

    let result = Command::new(binary)
        .output()
        .expect("failed to run fftmagick");

    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8(result.stderr).unwrap().contains("usage"));
}

#[test]
fn test_help_succeeds() {
    let (binary, _) = setup();

    let result = Command::new(binary)
        .args(&["--help"])
        .output()
        .expect("failed to run fftmagick");

    assert!(result.status.success());
    assert!(String::from_utf8(result.stdout).unwrap().contains("Usage:"));
}
