//! Braille Renderer - CPU-based image to Unicode braille converter
//!
//! This library converts grayscale images into lines of braille glyphs,
//! approximating tone with the pattern of raised dots. Each character covers
//! a 2x4 block of sub-pixels, and several dithering strategies decide which
//! dots to raise: flat quantization, random noise, ordered (Bayer)
//! dithering, and error diffusion with the published kernel tables.
//!
//! # Example
//! ```no_run
//! use braille_rendr::{RenderConfig, render_image};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = RenderConfig::default();
//! let text = render_image(&input, &config, 80, 24).unwrap();
//! print!("{text}");
//! ```

pub mod bayer;
pub mod braille;
pub mod config;
pub mod dither;
pub mod error;
pub mod grid;
pub mod kernel;
pub mod processor;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use dither::DitherAlgorithm;
pub use error::RendrError;
pub use grid::{BinaryGrid, BrightnessGrid};
pub use processor::{render_grid, render_image};
