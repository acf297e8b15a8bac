//! Ordered-dither threshold matrices.
//!
//! The dispersed-dot Bayer matrix of order `n` has side `2^(n+1)` and holds
//! every index in `0..side²` exactly once. Normalized, the indices become
//! distinct thresholds strictly inside (0, 1) that tile seamlessly over an
//! image of any size.

/// Square threshold matrix for ordered (Bayer) dithering.
#[derive(Debug, Clone)]
pub struct BayerMatrix {
    side: u32,
    thresholds: Vec<f32>,
}

/// Raw Bayer index matrix of the given order.
///
/// Base case (order 0) is `[[0,2],[3,1]]`. Each further order expands side
/// `k` to `2k` with the quadrants `4M+0` (top-left), `4M+2` (top-right),
/// `4M+3` (bottom-left), `4M+1` (bottom-right). The quadrant order is what
/// makes the pattern dispersed-dot; swapping quadrants changes the dither.
fn index_matrix(order: u32) -> Vec<Vec<u32>> {
    let mut matrix = vec![vec![0, 2], vec![3, 1]];
    for _ in 0..order {
        let side = matrix.len();
        let mut next = vec![vec![0u32; side * 2]; side * 2];
        for y in 0..side {
            for x in 0..side {
                let scaled = 4 * matrix[y][x];
                next[y][x] = scaled;
                next[y][x + side] = scaled + 2;
                next[y + side][x] = scaled + 3;
                next[y + side][x + side] = scaled + 1;
            }
        }
        matrix = next;
    }
    matrix
}

impl BayerMatrix {
    /// Generate the normalized matrix of the given order.
    ///
    /// Index `i` becomes the threshold `(i + 1) / (side² + 1)`, so all
    /// thresholds are distinct and strictly inside (0, 1). The function is
    /// pure and deterministic; callers reuse one matrix per conversion.
    pub fn generate(order: u32) -> Self {
        let indices = index_matrix(order);
        let side = indices.len() as u32;
        let scale = 1.0 / (side as f32 * side as f32 + 1.0);
        let thresholds = indices
            .iter()
            .flatten()
            .map(|&index| (index + 1) as f32 * scale)
            .collect();
        Self { side, thresholds }
    }

    /// Side length of the square matrix (`2^(order+1)`).
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Threshold for image cell (x, y), tiling the matrix by its side.
    #[inline]
    pub fn threshold(&self, x: u32, y: u32) -> f32 {
        let xx = x % self.side;
        let yy = y % self.side;
        self.thresholds[yy as usize * self.side as usize + xx as usize]
    }
}
