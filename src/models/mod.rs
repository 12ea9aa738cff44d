pub mod config;

pub use config::{AppConfig, DitherConfig, GrayConfig, ThresholdConfig, CONFIG_ENV};
