//! Test fixtures: synthetic images and a scratch directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Rows of the 4x3 gray reference image.
pub const SAMPLE_4X3: [u8; 12] = [40, 80, 120, 160, 200, 240, 30, 70, 110, 150, 190, 230];

/// Floyd-Steinberg output for [`SAMPLE_4X3`].
pub const SAMPLE_4X3_FLOYD_STEINBERG: [u8; 12] =
    [40, 0, 255, 116, 215, 255, 0, 63, 108, 147, 189, 229];

/// Encode raw samples as a PNG of the given format.
pub fn png_bytes(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// 8-bit grayscale PNG.
pub fn gray_png(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    png_bytes(width, height, png::ColorType::Grayscale, png::BitDepth::Eight, data)
}

/// 8-bit RGB PNG filled with one color.
pub fn solid_rgb_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let data: Vec<u8> = (0..width * height).flat_map(|_| rgb).collect();
    png_bytes(width, height, png::ColorType::Rgb, png::BitDepth::Eight, &data)
}

/// Decode a grayscale PNG produced by monodither into `(width, height, pixels)`.
pub fn decode_gray(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG info");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");
    assert_eq!(info.color_type, png::ColorType::Grayscale);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

/// Scratch directory removed on drop.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `bytes` to `name` and return the full path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }

    pub fn read(&self, path: &Path) -> Vec<u8> {
        std::fs::read(path).expect("read output")
    }
}
