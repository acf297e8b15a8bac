use crate::dither::DitherAlgorithm;
use crate::error::RendrError;

/// Configuration for one image-to-braille conversion.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Dithering strategy.
    pub algorithm: DitherAlgorithm,

    /// Output "brightness": the grid is biased by `0.5 - threshold` before
    /// dithering. 0.0-1.0, default 0.5 (no bias).
    pub threshold: f32,

    /// Raise dots for dark pixels instead of bright ones. The default
    /// polarity reads correctly on dark-background terminals; set this for
    /// light terminals.
    pub invert: bool,

    /// Aspect ratio (width/height) of one terminal font cell, default 0.5.
    /// The fit step corrects image widths by `font_aspect / 0.5`.
    pub font_aspect: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            algorithm: DitherAlgorithm::Quantize,
            threshold: 0.5,
            invert: false,
            font_aspect: 0.5,
        }
    }
}

impl RenderConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), RendrError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RendrError::Config(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            )));
        }
        if !self.font_aspect.is_finite() || self.font_aspect <= 0.0 {
            return Err(RendrError::Config(format!(
                "font_aspect must be a positive number, got {}",
                self.font_aspect
            )));
        }
        Ok(())
    }
}
