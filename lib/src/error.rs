use thiserror::Error;

/// Errors produced by the conversion library.
///
/// Every failure is detected synchronously, before or during the single pass
/// over the grid; nothing is retried and no partial output is returned.
#[derive(Error, Debug)]
pub enum RendrError {
    /// A zero-area grid reached a conversion step.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage {
        /// Width of the offending grid.
        width: u32,
        /// Height of the offending grid.
        height: u32,
    },

    /// A raw buffer does not match the dimensions it claims to have.
    #[error("buffer of {len} cells cannot form a {width}x{height} grid")]
    DimensionMismatch {
        /// Length of the supplied buffer.
        len: usize,
        /// Claimed width.
        width: u32,
        /// Claimed height.
        height: u32,
    },

    /// The requested diffusion kernel is not one of the published tables.
    #[error("unknown diffusion kernel: {0}")]
    UnknownKernel(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}
