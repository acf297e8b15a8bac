use std::path::PathBuf;

use anyhow::{Context, Result};
use braille_rendr::{DitherAlgorithm, RenderConfig, render_image};
use clap::Parser;
use log::debug;

/// Convert an image to Unicode braille art
#[derive(Parser, Debug)]
#[command(name = "braille-rendr")]
#[command(version)]
#[command(about = "Convert images to Unicode braille art", long_about = None)]
struct Cli {
    /// Input image (PNG, JPEG, BMP, GIF, ...)
    path: PathBuf,

    /// Maximum output width in terminal columns (default: terminal width)
    #[arg(long)]
    width: Option<u32>,

    /// Maximum output height in terminal lines (default: terminal height)
    #[arg(long)]
    height: Option<u32>,

    /// Output "brightness"
    #[arg(long, default_value_t = 0.5)]
    threshold: f32,

    /// Algorithm to quantize with: quantize, random-noise, bayer1-bayer3, a
    /// diffusion kernel name (floyd-steinberg, atkinson, jarvis-judice-ninke,
    /// stucki, burkes, sierra2, sierra3, sierra-2-4a), or "all"
    #[arg(long, default_value = "quantize")]
    dither: String,

    /// Output is meant to be viewed on a light terminal
    #[arg(long)]
    invert: bool,

    /// Adjust font aspect ratio
    #[arg(long = "font-ar", default_value_t = 0.5)]
    font_ar: f32,
}

fn main() -> Result<()> {
    // Configure logging
    env_logger::init();

    let cli = Cli::parse();
    let (cols, rows) = viewport(cli.width, cli.height)?;
    debug!("rendering into {cols}x{rows} cells");

    let img = image::open(&cli.path)
        .with_context(|| format!("failed to open {}", cli.path.display()))?;

    let mut config = RenderConfig {
        threshold: cli.threshold,
        invert: cli.invert,
        font_aspect: cli.font_ar,
        ..RenderConfig::default()
    };

    if cli.dither == "all" {
        for (name, algorithm) in DitherAlgorithm::all() {
            config.algorithm = algorithm;
            let text = render_image(&img, &config, cols, rows)
                .with_context(|| format!("conversion failed for {name}"))?;
            println!("{name}:");
            print!("{text}");
            println!();
        }
        return Ok(());
    }

    config.algorithm = DitherAlgorithm::parse(&cli.dither)?;
    let text = render_image(&img, &config, cols, rows).context("conversion failed")?;
    print!("{text}");
    Ok(())
}

/// Requested or detected viewport in terminal cells.
///
/// Missing dimensions fall back to the current terminal size, minus one
/// column/line of slack.
fn viewport(width: Option<u32>, height: Option<u32>) -> Result<(u32, u32)> {
    if let (Some(cols), Some(rows)) = (width, height) {
        return Ok((cols, rows));
    }
    let (term_cols, term_rows) =
        crossterm::terminal::size().context("failed to query terminal size")?;
    Ok((
        width.unwrap_or_else(|| u32::from(term_cols).saturating_sub(1).max(1)),
        height.unwrap_or_else(|| u32::from(term_rows).saturating_sub(1).max(1)),
    ))
}
