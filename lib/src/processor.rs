use crate::braille;
use crate::config::RenderConfig;
use crate::error::RendrError;
use crate::grid::BrightnessGrid;
use image::{DynamicImage, GrayImage, imageops};
use log::debug;

/// Fit one rectangle inside another, preserving its aspect ratio.
///
/// Scales `(w1, h1)` by a single factor so it just fits inside `(w2, h2)`;
/// upscaling is allowed. Results truncate toward zero, matching the
/// character-cell arithmetic downstream.
///
/// # Arguments
/// * `w1`, `h1` - Source rectangle
/// * `w2`, `h2` - Bounding rectangle
///
/// # Returns
/// The scaled (width, height)
pub fn fit_inside(w1: f32, h1: f32, w2: f32, h2: f32) -> (u32, u32) {
    let fatness1 = w1 / h1;
    let fatness2 = w2 / h2;
    let scale_ratio = if fatness2 < fatness1 { w2 / w1 } else { h2 / h1 };
    ((w1 * scale_ratio) as u32, (h1 * scale_ratio) as u32)
}

/// Normalized brightness grid from an 8-bit grayscale image.
pub fn grid_from_image(img: &GrayImage) -> BrightnessGrid {
    let (width, height) = img.dimensions();
    BrightnessGrid::from_fn(width, height, |x, y| f32::from(img.get_pixel(x, y)[0]) / 255.0)
}

/// Convert a prepared brightness grid to braille text.
///
/// Applies the inversion and threshold bias from `config`, runs the selected
/// dithering strategy, and encodes the result. This is the whole core
/// pipeline; [`render_image`] adds decoding and viewport fitting on top.
///
/// # Errors
/// `Config` for invalid settings, `EmptyImage` for a zero-area grid, plus
/// anything the selected strategy reports.
pub fn render_grid(grid: &BrightnessGrid, config: &RenderConfig) -> Result<String, RendrError> {
    config.validate()?;
    if grid.is_empty() {
        return Err(RendrError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut threshold = config.threshold;
    let mut work = grid.clone();
    if config.invert {
        threshold = 1.0 - threshold;
        work.invert();
    }
    let bias = 0.5 - threshold;
    if bias != 0.0 {
        work.offset(bias);
    }

    let bits = config.algorithm.apply(&work)?;
    braille::encode(&bits)
}

/// Full pipeline: fit the image into a character viewport and render it.
///
/// The viewport is `cols x rows` terminal cells, i.e. a pixel bounding box of
/// `cols * 2` by `rows * 4` braille sub-pixels. The image is width-corrected
/// for the font cell aspect ratio, fitted, resized with Lanczos3, and handed
/// to [`render_grid`].
///
/// # Arguments
/// * `input` - Decoded image; converted to grayscale here
/// * `config` - Conversion settings
/// * `cols`, `rows` - Viewport size in terminal cells
///
/// # Errors
/// `Config` for invalid settings or a zero-area viewport, `EmptyImage` for a
/// zero-area source image.
pub fn render_image(
    input: &DynamicImage,
    config: &RenderConfig,
    cols: u32,
    rows: u32,
) -> Result<String, RendrError> {
    config.validate()?;
    if cols == 0 || rows == 0 {
        return Err(RendrError::Config(format!(
            "viewport must be at least 1x1 cells, got {cols}x{rows}"
        )));
    }

    let bbox_width = cols * braille::CELL_WIDTH;
    let bbox_height = rows * braille::CELL_HEIGHT;

    let gray = input.to_luma8();
    let (src_width, src_height) = gray.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(RendrError::EmptyImage {
            width: src_width,
            height: src_height,
        });
    }

    let (fit_width, fit_height) = fit_inside(
        src_width as f32 * (config.font_aspect / 0.5),
        src_height as f32,
        bbox_width as f32,
        bbox_height as f32,
    );
    let fit_width = fit_width.max(1);
    let fit_height = fit_height.max(1);
    debug!(
        "fitting {src_width}x{src_height} into {bbox_width}x{bbox_height} -> {fit_width}x{fit_height}"
    );

    let resized = imageops::resize(&gray, fit_width, fit_height, imageops::FilterType::Lanczos3);
    render_grid(&grid_from_image(&resized), config)
}
