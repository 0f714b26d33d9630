use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use image::{ColorType, DynamicImage, GrayImage, ImageBuffer, Luma, LumaA, RgbImage, Rgba, RgbaImage};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_img_convert"))
        .args(args)
        .arg("--no-progress")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run img_convert")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn write_rgba_png(path: &Path) {
    RgbaImage::from_fn(8, 6, |x, y| Rgba([x as u8 * 30, y as u8 * 40, 90, if x < 4 { 0 } else { 255 }]))
        .save(path)
        .unwrap();
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn rgba_png_to_jpeg_drops_alpha_and_fixes_extension() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);
    let requested = dir.path().join("out.png");

    let out = run(&["-f", path_arg(&src), "-e", "jpg", "-o", path_arg(&requested)]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let written = dir.path().join("out.jpg");
    assert!(written.is_file());
    assert!(!requested.exists());
    assert_eq!(image::open(&written).unwrap().color(), ColorType::Rgb8);

    let text = stdout(&out);
    assert!(text.contains("(Format: PNG, Mode: RGBA)"), "{text}");
    assert!(text.contains("Converting image mode to RGB for JPEG format."));
    assert!(text.contains(&format!(
        "Successfully converted '{}' to '{}'.",
        src.display(),
        written.display()
    )));
}

#[test]
fn missing_source_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let out = run(&["-f", path_arg(&dir.path().join("nope.png")), "-e", "png", "-o", path_arg(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("does not exist"));
    assert!(stdout(&out).is_empty());
    assert!(!output.exists());
}

#[test]
fn unsupported_formats_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "hello").unwrap();
    let output = path_arg(&dir.path().join("out")).to_string();

    let out = run(&["-f", path_arg(&src), "-e", ".HEIC", "-o", &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unsupported extension '.HEIC'"));

    let out = run(&["-f", path_arg(&notes), "-e", "png", "-o", &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("is not a supported image format"));
}

#[test]
fn missing_output_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);
    let output = dir.path().join("missing").join("out.bmp");

    let out = run(&["-f", path_arg(&src), "-e", "bmp", "-o", path_arg(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("missing' does not exist"));
}

#[test]
fn corrupt_input_is_a_conversion_error() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("broken.png");
    fs::write(&src, b"\x89PNG\r\n\x1a\n\x00\x00garbage").unwrap();
    let output = dir.path().join("out.gif");

    let out = run(&["-f", path_arg(&src), "-e", "gif", "-o", path_arg(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Conversion failed"));
}

#[test]
fn pdf_uses_100_dpi_page_box() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("wide.png");
    RgbaImage::new(100, 50).save(&src).unwrap();
    let output = dir.path().join("doc.pdf");

    let out = run(&["-f", path_arg(&src), "-e", "PDF", "-o", path_arg(&output)]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let pdf = fs::read(&output).unwrap();
    let text = String::from_utf8_lossy(&pdf);
    assert!(text.starts_with("%PDF-"));
    assert!(text.contains("/MediaBox [0 0 72 36]"));
}

#[test]
fn formats_without_encoder_fail_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);
    let output = dir.path().join("layers.psd");

    let out = run(&["-f", path_arg(&src), "-e", "psd", "-o", path_arg(&output)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("PSD"));
    assert!(!output.exists());
}

const DECODABLE_TARGETS: &[&str] = &[
    "png", "bmp", "gif", "ico", "tiff", "webp", "ppm", "pgm", "pbm", "tga", "jpeg",
];

fn assert_converts_everywhere(src: &Path, dir: &Path, label: &str) {
    for &ext in DECODABLE_TARGETS {
        let output = dir.join(format!("{label}_converted.{ext}"));
        let out = run(&["-f", path_arg(src), "-e", ext, "-o", path_arg(&output)]);
        assert!(out.status.success(), "{label} -> {ext}: {}", stderr(&out));

        let decoded = image::open(&output).unwrap_or_else(|e| panic!("{label} -> {ext}: {e}"));
        assert_eq!((decoded.width(), decoded.height()), (16, 16), "{label} -> {ext}");
    }
    for ext in ["pdf", "eps"] {
        let output = dir.join(format!("{label}_converted.{ext}"));
        let out = run(&["-f", path_arg(src), "-e", ext, "-o", path_arg(&output)]);
        assert!(out.status.success(), "{label} -> {ext}: {}", stderr(&out));
    }
}

#[test]
fn converts_grayscale_to_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gray.png");
    DynamicImage::ImageLuma8(GrayImage::from_fn(16, 16, |x, y| Luma([(x * 16 + y) as u8])))
        .save(&src)
        .unwrap();
    assert_converts_everywhere(&src, dir.path(), "gray");
}

#[test]
fn converts_gray_alpha_to_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gray_alpha.png");
    let la: ImageBuffer<LumaA<u8>, Vec<u8>> =
        ImageBuffer::from_fn(16, 16, |x, y| LumaA([(x * 16) as u8, (y * 16) as u8]));
    DynamicImage::ImageLumaA8(la).save(&src).unwrap();
    assert_converts_everywhere(&src, dir.path(), "gray_alpha");

    let tiff = image::open(dir.path().join("gray_alpha_converted.tiff")).unwrap();
    assert!(tiff.color().has_alpha());
}

#[test]
fn converts_sixteen_bit_rgba_to_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("deep.png");
    let deep: ImageBuffer<Rgba<u16>, Vec<u16>> =
        ImageBuffer::from_fn(16, 16, |x, y| Rgba([x as u16 * 4000, y as u16 * 4000, 1000, 65535]));
    DynamicImage::ImageRgba16(deep).save(&src).unwrap();
    assert_converts_everywhere(&src, dir.path(), "deep");

    let png = image::open(dir.path().join("deep_converted.png")).unwrap();
    assert_eq!(png.color(), ColorType::Rgba16);
}

#[test]
fn pbm_keeps_black_left_and_white_right() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("halves.png");
    GrayImage::from_fn(8, 2, |x, _| Luma([if x < 4 { 0 } else { 255 }]))
        .save(&src)
        .unwrap();
    let output = dir.path().join("halves.pbm");

    let out = run(&["-f", path_arg(&src), "-e", "pbm", "-o", path_arg(&output)]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let decoded = image::open(&output).unwrap().to_luma8();
    for y in 0..2 {
        assert_eq!(decoded.get_pixel(0, y), &Luma([0]));
        assert_eq!(decoded.get_pixel(3, y), &Luma([0]));
        assert_eq!(decoded.get_pixel(4, y), &Luma([255]));
        assert_eq!(decoded.get_pixel(7, y), &Luma([255]));
    }
}

#[test]
fn large_images_shrink_to_fit_an_icon() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("big.png");
    RgbImage::new(300, 300).save(&src).unwrap();
    let output = dir.path().join("big.ico");

    let out = run(&["-f", path_arg(&src), "-e", "ico", "-o", path_arg(&output)]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let icon = image::open(&output).unwrap();
    assert_eq!((icon.width(), icon.height()), (256, 256));
}

#[test]
fn empty_output_path_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);

    let out = run(&["-f", path_arg(&src), "-e", "png", "-o", ""]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("The output path is empty."));
}

#[test]
fn writes_eps() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("photo.png");
    write_rgba_png(&src);
    let output = dir.path().join("photo.eps");

    let out = run(&["-f", path_arg(&src), "-e", ".eps", "-o", path_arg(&output)]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let eps = fs::read_to_string(&output).unwrap();
    assert!(eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0"));
    assert!(eps.contains("%%BoundingBox: 0 0 8 6"));
}

#[test]
fn missing_arguments_fail() {
    let out = Command::new(env!("CARGO_BIN_EXE_img_convert"))
        .args(["-f", "a.png"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!out.status.success());
}
