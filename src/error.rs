use gray_dither::DitherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("PNG encode error: {0}")]
    Encode(String),

    #[error("Unsupported PNG format: {color_type} at {bit_depth}")]
    UnsupportedFormat {
        color_type: String,
        bit_depth: String,
    },

    #[error("Cannot encode empty image: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("Pixel buffer error: {0}")]
    Pixels(#[from] DitherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for ConvertError {
    fn from(e: serde_yaml::Error) -> Self {
        ConvertError::Config(e.to_string())
    }
}
