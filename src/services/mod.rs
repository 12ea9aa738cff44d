pub mod convert;

pub use convert::{ConversionReport, ConvertService, Operation};
