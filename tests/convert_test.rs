//! End-to-end conversions through PNG files.

mod common;

use common::{fixtures, Workspace};
use monodither::error::{CodecError, ConvertError};
use monodither::models::AppConfig;
use monodither::services::{ConvertService, Operation};
use pretty_assertions::assert_eq;

fn convert(operation: Operation, input_png: &[u8]) -> (u32, u32, Vec<u8>) {
    let output = ConvertService::new(operation)
        .convert_bytes(input_png)
        .expect("conversion succeeds");
    common::assert_png(&output);
    fixtures::decode_gray(&output)
}

#[test]
fn test_dither_reference_image() {
    let input = fixtures::gray_png(4, 3, &fixtures::SAMPLE_4X3);
    let (width, height, pixels) = convert(
        Operation::dither(&AppConfig::default(), None, None),
        &input,
    );

    assert_eq!((width, height), (4, 3));
    assert_eq!(pixels, fixtures::SAMPLE_4X3_FLOYD_STEINBERG.to_vec());
}

#[test]
fn test_dither_uniform_dark_image() {
    let input = fixtures::solid_rgb_png(10, 10, [0x0F, 0x0F, 0x0F]);
    let operation = Operation::dither(&AppConfig::default(), Some("floyd-steinberg"), None);

    let (_, _, first) = convert(operation, &input);
    assert_eq!(first.iter().filter(|&&v| v == 255).count(), 9);

    let (_, _, second) = convert(operation, &input);
    assert_eq!(first, second);
}

#[test]
fn test_dither_interior_binary_for_every_algorithm() {
    let data: Vec<u8> = (0..20u32 * 15)
        .flat_map(|i| [(i % 20 * 12) as u8, (i / 20 * 17) as u8, 90])
        .collect();
    let input = fixtures::png_bytes(20, 15, png::ColorType::Rgb, png::BitDepth::Eight, &data);

    for name in [
        "floyd-steinberg",
        "jarvis-judice-ninke",
        "stucki",
        "atkinson",
        "burkes",
        "sierra",
        "sierra-two-row",
        "sierra-lite",
    ] {
        let operation = Operation::dither(&AppConfig::default(), Some(name), None);
        let (width, height, pixels) = convert(operation, &input);
        common::assert_binary_interior(width, height, &pixels);
    }
}

#[test]
fn test_sixteen_bit_input_matches_eight_bit() {
    let eight = fixtures::gray_png(4, 3, &fixtures::SAMPLE_4X3);
    let wide: Vec<u8> = fixtures::SAMPLE_4X3.iter().flat_map(|&v| [v, v]).collect();
    let sixteen = fixtures::png_bytes(4, 3, png::ColorType::Grayscale, png::BitDepth::Sixteen, &wide);

    let operation = Operation::dither(&AppConfig::default(), None, None);
    assert_eq!(convert(operation, &eight), convert(operation, &sixteen));
}

#[test]
fn test_gray_policies_on_red() {
    let input = fixtures::solid_rgb_png(3, 2, [0xFF, 0x00, 0x0F]);
    let config = AppConfig::default();

    let cases = [("lightness", 127), ("average", 90), ("luminosity", 54)];
    for (policy, expected) in cases {
        let (_, _, pixels) = convert(Operation::gray(&config, Some(policy)), &input);
        assert_eq!(pixels, vec![expected; 6], "{policy}");
    }

    let pure_red = fixtures::solid_rgb_png(1, 1, [0xFF, 0x00, 0x00]);
    let (_, _, pixels) = convert(Operation::gray(&config, None), &pure_red);
    assert_eq!(pixels, vec![53]);
}

#[test]
fn test_gray_applies_alpha() {
    let data = [
        200, 200, 200, 0, //
        200, 200, 200, 255, //
        255, 255, 255, 128, //
    ];
    let input = fixtures::png_bytes(3, 1, png::ColorType::Rgba, png::BitDepth::Eight, &data);

    let (_, _, pixels) = convert(Operation::gray(&AppConfig::default(), None), &input);
    assert_eq!(pixels, vec![0, 200, 128]);
}

#[test]
fn test_static_threshold_ramp() {
    let ramp: Vec<u8> = (0..=255).collect();
    let input = fixtures::gray_png(16, 16, &ramp);
    let config = AppConfig::from_yaml_str("threshold:\n  algorithm: static\n").unwrap();

    let (_, _, pixels) = convert(Operation::threshold(&config, false, None, false), &input);
    common::assert_all_binary(&pixels);
    assert_eq!(pixels.iter().filter(|&&v| v == 255).count(), 128);

    let (_, _, inverted) = convert(Operation::threshold(&config, false, None, true), &input);
    let flipped: Vec<u8> = pixels.iter().map(|&v| 255 - v).collect();
    assert_eq!(inverted, flipped);
}

#[test]
fn test_normalize_stretches() {
    let input = fixtures::gray_png(2, 2, &[0, 25, 50, 127]);
    let (_, _, pixels) = convert(Operation::normalize(), &input);
    assert_eq!(pixels, vec![0, 50, 100, 255]);
}

#[test]
fn test_convert_file_roundtrip() {
    let workspace = Workspace::new();
    let input = workspace.write("in.png", &fixtures::gray_png(4, 3, &fixtures::SAMPLE_4X3));
    let output = workspace.path("out.png");

    let service = ConvertService::new(Operation::dither(&AppConfig::default(), None, None));
    let report = service.convert_file(&input, &output).unwrap();

    assert_eq!((report.width, report.height), (4, 3));
    assert_eq!(report.white, 2);

    let (_, _, pixels) = fixtures::decode_gray(&workspace.read(&output));
    assert_eq!(pixels, fixtures::SAMPLE_4X3_FLOYD_STEINBERG.to_vec());
}

#[test]
fn test_config_file_selects_algorithm() {
    let workspace = Workspace::new();
    let config_path = workspace.write("monodither.yaml", b"dither:\n  algorithm: sierra_lite\n");
    let config = AppConfig::load(Some(config_path.as_path()));

    let input = fixtures::gray_png(4, 3, &fixtures::SAMPLE_4X3);
    let (_, _, pixels) = convert(Operation::dither(&config, None, None), &input);
    assert_eq!(pixels, vec![40, 0, 255, 112, 220, 255, 0, 68, 105, 144, 189, 230]);
}

#[test]
fn test_missing_input_is_io_error() {
    let workspace = Workspace::new();
    let service = ConvertService::new(Operation::normalize());

    let err = service
        .convert_file(&workspace.path("absent.png"), &workspace.path("out.png"))
        .unwrap_err();
    assert!(
        matches!(err, ConvertError::Codec(CodecError::Io(_))),
        "unexpected error: {err}"
    );
}

#[test]
fn test_corrupt_input_is_decode_error() {
    let workspace = Workspace::new();
    let input = workspace.write("broken.png", b"\x89PNG\r\n\x1a\nthis is not a real chunk");
    let service = ConvertService::new(Operation::normalize());

    let err = service
        .convert_file(&input, &workspace.path("out.png"))
        .unwrap_err();
    assert!(
        matches!(err, ConvertError::Codec(CodecError::Decode(_))),
        "unexpected error: {err}"
    );
    assert!(!workspace.path("out.png").exists());
}
