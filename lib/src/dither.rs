//! Dithering strategies: brightness grid in, binary grid out.
//!
//! All strategies share one contract and one output convention: a cell of 1
//! means the pixel fell below the threshold (dark). Flat quantization,
//! ordered dithering and random noise are independent per cell; error
//! diffusion is a strict sequential raster scan.

use crate::bayer::BayerMatrix;
use crate::error::RendrError;
use crate::grid::{BinaryGrid, BrightnessGrid};
use crate::kernel::{self, DiffusionKernel};
use rand::Rng;
use rand::RngExt;
use rayon::prelude::*;

/// Bayer order used when none is requested.
pub const DEFAULT_BAYER_ORDER: u32 = 2;

/// Threshold every cell against `threshold_at(x, y)`, rows in parallel.
fn threshold_with(
    img: &BrightnessGrid,
    threshold_at: impl Fn(u32, u32) -> f32 + Sync,
) -> BinaryGrid {
    if img.is_empty() {
        return BinaryGrid::filled(img.width(), img.height(), 0);
    }
    let width = img.width() as usize;
    let data: Vec<u8> = img
        .as_slice()
        .par_chunks(width)
        .enumerate()
        .flat_map_iter(|(y, row)| {
            let threshold_at = &threshold_at;
            row.iter()
                .enumerate()
                .map(move |(x, &value)| u8::from(value < threshold_at(x as u32, y as u32)))
        })
        .collect();
    BinaryGrid::from_raw(data, img.width(), img.height())
        .expect("output length mirrors the input")
}

/// Flat midpoint quantization: 1 where the value falls below 0.5.
pub fn quantize(img: &BrightnessGrid) -> BinaryGrid {
    threshold_with(img, |_, _| 0.5)
}

/// Ordered dithering against a tiled Bayer matrix of the given order.
///
/// Each cell compares against the matrix threshold at its wrapped position;
/// no cell depends on another.
pub fn bayer(img: &BrightnessGrid, order: u32) -> BinaryGrid {
    let matrix = BayerMatrix::generate(order);
    threshold_with(img, move |x, y| matrix.threshold(x, y))
}

/// Threshold against independent uniform noise in [0, 1).
///
/// The generator is the injectable collaborator: pass a seeded
/// [`rand::rngs::StdRng`] for reproducible output, or use
/// [`DitherAlgorithm::apply`] for the process generator. Cells are visited
/// in row-major order so a seeded run is fully deterministic.
pub fn random_noise(img: &BrightnessGrid, rng: &mut impl Rng) -> BinaryGrid {
    let mut out = BinaryGrid::filled(img.width(), img.height(), 0);
    for y in 0..img.height() {
        for x in 0..img.width() {
            let noise: f32 = rng.random();
            out.set(x, y, u8::from(img.get(x, y) - 0.5 < noise));
        }
    }
    out
}

/// Sequential error diffusion with the given kernel.
///
/// Visits cells in strict raster order on a private working copy. Each cell
/// quantizes against 0.5 (a value above 0.5 becomes 1.0 here; the final
/// complement below restores the shared dark-is-1 convention), then pushes
/// `error * weight` onto the not-yet-visited kernel targets. Targets outside
/// the grid are dropped, so edge error is lost rather than reflected.
///
/// # Errors
/// `EmptyImage` if either dimension is zero.
pub fn error_diffusion(
    img: &BrightnessGrid,
    kernel: &DiffusionKernel,
) -> Result<BinaryGrid, RendrError> {
    if img.is_empty() {
        return Err(RendrError::EmptyImage {
            width: img.width(),
            height: img.height(),
        });
    }
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut work: Vec<f32> = img.as_slice().to_vec();

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let old = work[index];
            let new = if old > 0.5 { 1.0 } else { 0.0 };
            work[index] = new;
            let error = old - new;

            for &(dx, dy, weight) in kernel.entries {
                let tx = x as i64 + i64::from(dx);
                let ty = y as i64 + i64::from(dy);
                if tx >= 0 && ty >= 0 && (tx as usize) < width && (ty as usize) < height {
                    work[ty as usize * width + tx as usize] += error * weight;
                }
            }
        }
    }

    // Finalized cells are exactly 0.0 or 1.0; the complement flips the
    // mirrored threshold back to dark-is-1.
    let data = work.iter().map(|&value| 1 - value as u8).collect();
    Ok(BinaryGrid::from_raw(data, img.width(), img.height())
        .expect("output length mirrors the input"))
}

/// Strategy selector: one dithering method per variant.
#[derive(Debug, Clone, Copy)]
pub enum DitherAlgorithm {
    /// Flat midpoint threshold.
    Quantize,
    /// Per-cell independent uniform noise threshold.
    RandomNoise,
    /// Tiled Bayer matrix threshold of the given order.
    Bayer {
        /// Matrix order; side is `2^(order+1)`.
        order: u32,
    },
    /// Sequential error diffusion with a published kernel.
    ErrorDiffusion {
        /// The kernel table to diffuse with.
        kernel: &'static DiffusionKernel,
    },
}

impl DitherAlgorithm {
    /// Parse a command-line algorithm name.
    ///
    /// Accepts `quantize`, `random-noise`, `bayer` (order
    /// [`DEFAULT_BAYER_ORDER`]), `bayer1`..`bayer3` and the eight published
    /// kernel names.
    ///
    /// # Errors
    /// `UnknownKernel` for any name outside that vocabulary.
    pub fn parse(name: &str) -> Result<Self, RendrError> {
        match name {
            "quantize" => Ok(Self::Quantize),
            "random-noise" => Ok(Self::RandomNoise),
            "bayer" => Ok(Self::Bayer {
                order: DEFAULT_BAYER_ORDER,
            }),
            "bayer1" => Ok(Self::Bayer { order: 1 }),
            "bayer2" => Ok(Self::Bayer { order: 2 }),
            "bayer3" => Ok(Self::Bayer { order: 3 }),
            other => kernel::by_name(other).map(|kernel| Self::ErrorDiffusion { kernel }),
        }
    }

    /// Every selectable algorithm with its command-line name.
    pub fn all() -> Vec<(&'static str, Self)> {
        let mut list = vec![
            ("quantize", Self::Quantize),
            ("random-noise", Self::RandomNoise),
            ("bayer1", Self::Bayer { order: 1 }),
            ("bayer2", Self::Bayer { order: 2 }),
            ("bayer3", Self::Bayer { order: 3 }),
        ];
        for kernel in kernel::KERNELS {
            list.push((kernel.name, Self::ErrorDiffusion { kernel }));
        }
        list
    }

    /// Run the strategy over `img`.
    ///
    /// `RandomNoise` draws from the process generator here; call
    /// [`random_noise`] directly to inject a deterministic one.
    ///
    /// # Errors
    /// `EmptyImage` if either dimension is zero.
    pub fn apply(&self, img: &BrightnessGrid) -> Result<BinaryGrid, RendrError> {
        if img.is_empty() {
            return Err(RendrError::EmptyImage {
                width: img.width(),
                height: img.height(),
            });
        }
        match *self {
            Self::Quantize => Ok(quantize(img)),
            Self::RandomNoise => Ok(random_noise(img, &mut rand::rng())),
            Self::Bayer { order } => Ok(bayer(img, order)),
            Self::ErrorDiffusion { kernel } => error_diffusion(img, kernel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{FLOYD_STEINBERG, SIERRA_2_4A};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_quantize_uniform_bright_is_all_zero() {
        let img = BrightnessGrid::filled(7, 5, 0.6);
        let out = quantize(&img);
        assert_eq!(out.width(), 7);
        assert_eq!(out.height(), 5);
        assert_eq!(out.count_ones(), 0);
    }

    #[test]
    fn test_quantize_uniform_dark_is_all_one() {
        let img = BrightnessGrid::filled(4, 9, 0.4);
        let out = quantize(&img);
        assert_eq!(out.count_ones(), 4 * 9);
    }

    #[test]
    fn test_bayer_output_is_binary_and_same_size() {
        let img = BrightnessGrid::from_fn(13, 11, |x, y| (x + y) as f32 / 24.0);
        let out = bayer(&img, DEFAULT_BAYER_ORDER);
        assert_eq!(out.width(), 13);
        assert_eq!(out.height(), 11);
        assert!(out.as_slice().iter().all(|&v| v <= 1));
    }

    #[test]
    fn test_bayer_midtone_density_tracks_brightness() {
        // A uniform 0.25 sits below three quarters of the matrix thresholds,
        // so three quarters of the cells quantize dark.
        let img = BrightnessGrid::filled(16, 16, 0.25);
        let out = bayer(&img, 2);
        let density = out.count_ones() as f32 / 256.0;
        assert!((density - 0.75).abs() < 0.05, "density {density}");
    }

    #[test]
    fn test_bayer_extremes_are_uniform() {
        let dark = BrightnessGrid::filled(8, 8, 0.0);
        assert_eq!(bayer(&dark, 1).count_ones(), 64);
        let bright = BrightnessGrid::filled(8, 8, 1.0);
        assert_eq!(bayer(&bright, 1).count_ones(), 0);
    }

    #[test]
    fn test_random_noise_seeded_is_deterministic() {
        let img = BrightnessGrid::from_fn(10, 10, |x, _| x as f32 / 10.0);
        let a = random_noise(&img, &mut StdRng::seed_from_u64(7));
        let b = random_noise(&img, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.width(), 10);
        assert_eq!(a.height(), 10);
    }

    #[test]
    fn test_random_noise_extremes() {
        // value - 0.5 >= 1 can never be below noise in [0, 1); value - 0.5
        // < 0 always is.
        let bright = BrightnessGrid::filled(6, 6, 1.5);
        let out = random_noise(&bright, &mut StdRng::seed_from_u64(1));
        assert_eq!(out.count_ones(), 0);

        let dark = BrightnessGrid::filled(6, 6, 0.0);
        let out = random_noise(&dark, &mut StdRng::seed_from_u64(1));
        assert_eq!(out.count_ones(), 36);
    }

    #[test]
    fn test_error_diffusion_two_cell_worked_example() {
        // Cell 0: 0.6 > 0.5 -> 1.0, error -0.4; 7/16 of it lands on cell 1:
        // 0.3 - 0.175 = 0.125 -> 0.0. Complement gives [0, 1].
        let img = BrightnessGrid::from_raw(vec![0.6, 0.3], 2, 1).unwrap();
        let out = error_diffusion(&img, &FLOYD_STEINBERG).unwrap();
        assert_eq!(out.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_error_diffusion_binary_input_passes_through() {
        let img = BrightnessGrid::from_fn(5, 4, |x, _| if x % 2 == 0 { 1.0 } else { 0.0 });
        let out = error_diffusion(&img, &SIERRA_2_4A).unwrap();
        for y in 0..4 {
            for x in 0..5 {
                let expected = if x % 2 == 0 { 0 } else { 1 };
                assert_eq!(out.get(x, y), expected);
            }
        }
    }

    #[test]
    fn test_error_diffusion_conserves_tone_up_to_edge_loss() {
        // Quantized brightness must track input brightness; only cells within
        // kernel reach of the right/bottom edges may leak error.
        let size = 32u32;
        let value = 0.3f32;
        let img = BrightnessGrid::filled(size, size, value);
        let out = error_diffusion(&img, &SIERRA_2_4A).unwrap();

        // out is the complement, so bright cells are the zeros.
        let bright = (size * size) as usize - out.count_ones();
        let expected = value * (size * size) as f32;
        let edge_cells = (2 * size - 1) as f32;
        assert!(
            (bright as f32 - expected).abs() <= edge_cells,
            "bright {bright}, expected {expected}"
        );
    }

    #[test]
    fn test_error_diffusion_empty_grid_fails() {
        let img = BrightnessGrid::filled(0, 3, 0.0);
        let result = error_diffusion(&img, &FLOYD_STEINBERG);
        assert!(matches!(
            result,
            Err(RendrError::EmptyImage { width: 0, height: 3 })
        ));
    }

    #[test]
    fn test_parse_vocabulary() {
        assert!(matches!(
            DitherAlgorithm::parse("quantize"),
            Ok(DitherAlgorithm::Quantize)
        ));
        assert!(matches!(
            DitherAlgorithm::parse("random-noise"),
            Ok(DitherAlgorithm::RandomNoise)
        ));
        assert!(matches!(
            DitherAlgorithm::parse("bayer3"),
            Ok(DitherAlgorithm::Bayer { order: 3 })
        ));
        assert!(matches!(
            DitherAlgorithm::parse("bayer"),
            Ok(DitherAlgorithm::Bayer {
                order: DEFAULT_BAYER_ORDER
            })
        ));
        match DitherAlgorithm::parse("stucki") {
            Ok(DitherAlgorithm::ErrorDiffusion { kernel }) => assert_eq!(kernel.name, "stucki"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            DitherAlgorithm::parse("bayer9"),
            Err(RendrError::UnknownKernel(_))
        ));
    }

    #[test]
    fn test_all_lists_every_strategy_once() {
        let all = DitherAlgorithm::all();
        assert_eq!(all.len(), 5 + 8);
        let mut names: Vec<&str> = all.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_apply_rejects_empty_grid() {
        let img = BrightnessGrid::filled(4, 0, 0.0);
        for (_, algorithm) in DitherAlgorithm::all() {
            assert!(matches!(
                algorithm.apply(&img),
                Err(RendrError::EmptyImage { .. })
            ));
        }
    }
}
