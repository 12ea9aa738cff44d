//! monodither - monochrome dithering for PNG images
//!
//! Command line front end for `gray-dither`.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
