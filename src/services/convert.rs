use std::path::Path;
use std::time::Instant;

use gray_dither::{
    Color, DiffusionAlgorithm, Dithering, Gray, GrayImage, GrayPolicy, Grid, Normalize,
    Threshold, ThresholdAlgorithm,
};

use crate::codec;
use crate::error::ConvertError;
use crate::models::AppConfig;

/// One fully resolved filter, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Dither(Dithering),
    Gray(Gray),
    Threshold(Threshold),
    Normalize(Normalize),
}

impl Operation {
    /// Error diffusion. CLI values win over `config.dither`.
    pub fn dither(config: &AppConfig, algorithm: Option<&str>, threshold: Option<u8>) -> Self {
        let name = algorithm.unwrap_or(config.dither.algorithm.as_str());
        let mut dithering = Dithering::new(DiffusionAlgorithm::from_name(name));
        if let Some(level) = threshold.or(config.dither.threshold) {
            dithering = dithering.threshold(level);
        }
        Operation::Dither(dithering)
    }

    /// Grayscale conversion. CLI policy wins over `config.gray`.
    pub fn gray(config: &AppConfig, policy: Option<&str>) -> Self {
        let name = policy.unwrap_or(config.gray.policy.as_str());
        Operation::Gray(Gray::new(GrayPolicy::from_name(name)))
    }

    /// Plain threshold.
    ///
    /// `--otsu` forces Otsu, `--level` forces a static level, otherwise the
    /// configured algorithm and level apply. Inversion is on when either the
    /// flag or the config asks for it.
    pub fn threshold(config: &AppConfig, otsu: bool, level: Option<u8>, invert: bool) -> Self {
        let section = &config.threshold;
        let (algorithm, level) = match (otsu, level) {
            (true, _) => (ThresholdAlgorithm::Otsu, section.level),
            (false, Some(level)) => (ThresholdAlgorithm::Static, Some(level)),
            (false, None) => (ThresholdAlgorithm::from_name(&section.algorithm), section.level),
        };

        let mut threshold = Threshold::new(algorithm).invert(invert || section.invert);
        if let Some(level) = level {
            threshold = threshold.static_level(level);
        }
        Operation::Threshold(threshold)
    }

    pub fn normalize() -> Self {
        Operation::Normalize(Normalize)
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Dither(_) => "dither",
            Operation::Gray(_) => "gray",
            Operation::Threshold(_) => "threshold",
            Operation::Normalize(_) => "normalize",
        }
    }

    pub fn apply<C: Color>(&self, image: &Grid<C>) -> GrayImage {
        match self {
            Operation::Dither(filter) => filter.convert(image),
            Operation::Gray(filter) => filter.convert(image),
            Operation::Threshold(filter) => filter.convert(image),
            Operation::Normalize(filter) => filter.convert(image),
        }
    }
}

/// Summary of one converted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub width: usize,
    pub height: usize,
    /// Pure white pixels in the output.
    pub white: usize,
}

/// Runs an [`Operation`] over PNG data.
pub struct ConvertService {
    operation: Operation,
}

impl ConvertService {
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Decode, filter and re-encode one PNG held in memory.
    pub fn convert_bytes(&self, png: &[u8]) -> Result<Vec<u8>, ConvertError> {
        let image = codec::decode_png(png)?;
        let output = self.operation.apply(&image);
        Ok(codec::encode_gray_png(&output)?)
    }

    /// Convert `input` and write the result to `output`.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        let start = Instant::now();

        let image = codec::read_png(input)?;
        let result = self.operation.apply(&image);
        codec::write_png(output, &result)?;

        let report = ConversionReport {
            width: result.width(),
            height: result.height(),
            white: result.as_raw().iter().filter(|&&v| v == 255).count(),
        };
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            operation = self.operation.name(),
            width = report.width,
            height = report.height,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Converted image"
        );
        Ok(report)
    }
}
