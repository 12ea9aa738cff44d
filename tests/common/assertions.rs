//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel inside the scanned region is pure black or white
pub fn assert_binary_interior(width: u32, height: u32, pixels: &[u8]) {
    assert_eq!(pixels.len(), (width * height) as usize);
    for y in 0..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let v = pixels[(y * width + x) as usize];
            assert!(v == 0 || v == 255, "pixel ({x},{y}) = {v} is not binary");
        }
    }
}

/// Assert every pixel is pure black or white
pub fn assert_all_binary(pixels: &[u8]) {
    if let Some((i, v)) = pixels.iter().enumerate().find(|&(_, &v)| v != 0 && v != 255) {
        panic!("pixel {i} = {v} is not binary");
    }
}
