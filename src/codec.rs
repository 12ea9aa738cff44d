//! PNG codec adapter.
//!
//! Decodes any 8 or 16 bit PNG into a [`Rgba16Image`] and encodes filter
//! results as 8-bit grayscale PNGs.

use std::io::Cursor;
use std::path::Path;

use gray_dither::color::widen;
use gray_dither::{GrayImage, Grid, Rgba16, Rgba16Image};

use crate::error::CodecError;

/// Decode a PNG into 16-bit RGBA.
///
/// Palettes, sub-byte grayscale and `tRNS` transparency are expanded by the
/// decoder. 8-bit samples are widened by `v * 0x101`; 16-bit samples are
/// kept as-is. Gray sources repeat the gray value into R, G and B. Sources
/// without alpha are fully opaque. Samples stay straight; alpha is applied
/// when the pixels are read as colors.
pub fn decode_png(bytes: &[u8]) -> Result<Rgba16Image, CodecError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| CodecError::Decode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| CodecError::Decode(e.to_string()))?;
    let data = &buf[..frame.buffer_size()];

    let (color_type, bit_depth) = reader.output_color_type();
    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(unsupported(other, bit_depth)),
    };
    let samples: Vec<u16> = match bit_depth {
        png::BitDepth::Eight => data.iter().map(|&v| widen(v)).collect(),
        png::BitDepth::Sixteen => data
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect(),
        other => return Err(unsupported(color_type, other)),
    };

    let pixels = samples
        .chunks_exact(channels)
        .map(|s| match *s {
            [v] => Rgba16::new(v, v, v, 0xFFFF),
            [v, a] => Rgba16::new(v, v, v, a),
            [r, g, b] => Rgba16::new(r, g, b, 0xFFFF),
            [r, g, b, a, ..] => Rgba16::new(r, g, b, a),
            [] => Rgba16::default(),
        })
        .collect();

    let image = Grid::from_raw(frame.width as usize, frame.height as usize, pixels)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        ?color_type,
        ?bit_depth,
        "Decoded PNG"
    );
    Ok(image)
}

fn unsupported(color_type: png::ColorType, bit_depth: png::BitDepth) -> CodecError {
    CodecError::UnsupportedFormat {
        color_type: format!("{color_type:?}"),
        bit_depth: format!("{bit_depth:?}"),
    }
}

/// Encode a grayscale image as an 8-bit grayscale PNG.
pub fn encode_gray_png(image: &GrayImage) -> Result<Vec<u8>, CodecError> {
    if image.is_empty() {
        return Err(CodecError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    let width = u32::try_from(image.width())
        .map_err(|_| CodecError::Encode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| CodecError::Encode(format!("height {} too large", image.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        writer
            .write_image_data(image.as_raw())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Rgba16Image, CodecError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode `image` and write it to `path`.
pub fn write_png(path: &Path, image: &GrayImage) -> Result<(), CodecError> {
    let bytes = encode_gray_png(image)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
