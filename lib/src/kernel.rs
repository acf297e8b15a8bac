//! Published error-diffusion kernel tables.
//!
//! Each kernel is a fixed constant: the coefficients are the published ones
//! for the named filter and must not be adjusted. Every entry satisfies
//! `dy >= 0`, with `dx > 0` whenever `dy == 0`, so a kernel only ever pushes
//! error onto pixels the raster scan has not visited yet.

use crate::error::RendrError;

/// One error-diffusion filter: relative targets and their weights.
#[derive(Debug, PartialEq)]
pub struct DiffusionKernel {
    /// Canonical hyphenated name, as selected on the command line.
    pub name: &'static str,
    /// `(dx, dy, weight)` triples, applied in order.
    pub entries: &'static [(i32, i32, f32)],
}

/// The classic four-neighbor filter.
pub const FLOYD_STEINBERG: DiffusionKernel = DiffusionKernel {
    name: "floyd-steinberg",
    entries: &[
        (1, 0, 7.0 / 16.0),
        (-1, 1, 3.0 / 16.0),
        (0, 1, 5.0 / 16.0),
        (1, 1, 1.0 / 16.0),
    ],
};

/// Bill Atkinson's filter. Deliberately diffuses only 3/4 of the error,
/// trading tone accuracy for contrast.
pub const ATKINSON: DiffusionKernel = DiffusionKernel {
    name: "atkinson",
    entries: &[
        (1, 0, 1.0 / 8.0),
        (2, 0, 1.0 / 8.0),
        (-1, 1, 1.0 / 8.0),
        (0, 1, 1.0 / 8.0),
        (1, 1, 1.0 / 8.0),
        (0, 2, 1.0 / 8.0),
    ],
};

/// Jarvis, Judice & Ninke: twelve neighbors over three rows.
pub const JARVIS_JUDICE_NINKE: DiffusionKernel = DiffusionKernel {
    name: "jarvis-judice-ninke",
    entries: &[
        (1, 0, 7.0 / 48.0),
        (2, 0, 5.0 / 48.0),
        (-2, 1, 3.0 / 48.0),
        (-1, 1, 5.0 / 48.0),
        (0, 1, 7.0 / 48.0),
        (1, 1, 5.0 / 48.0),
        (2, 1, 3.0 / 48.0),
        (-2, 2, 1.0 / 48.0),
        (-1, 2, 3.0 / 48.0),
        (0, 2, 5.0 / 48.0),
        (1, 2, 3.0 / 48.0),
        (2, 2, 1.0 / 48.0),
    ],
};

/// Stucki's refinement of Jarvis-Judice-Ninke.
pub const STUCKI: DiffusionKernel = DiffusionKernel {
    name: "stucki",
    entries: &[
        (1, 0, 8.0 / 42.0),
        (2, 0, 4.0 / 42.0),
        (-2, 1, 2.0 / 42.0),
        (-1, 1, 4.0 / 42.0),
        (0, 1, 8.0 / 42.0),
        (1, 1, 4.0 / 42.0),
        (2, 1, 2.0 / 42.0),
        (-2, 2, 1.0 / 42.0),
        (-1, 2, 2.0 / 42.0),
        (0, 2, 4.0 / 42.0),
        (1, 2, 2.0 / 42.0),
        (2, 2, 1.0 / 42.0),
    ],
};

/// Burkes: Stucki without the third row.
pub const BURKES: DiffusionKernel = DiffusionKernel {
    name: "burkes",
    entries: &[
        (1, 0, 8.0 / 32.0),
        (2, 0, 4.0 / 32.0),
        (-2, 1, 2.0 / 32.0),
        (-1, 1, 4.0 / 32.0),
        (0, 1, 8.0 / 32.0),
        (1, 1, 4.0 / 32.0),
        (2, 1, 2.0 / 32.0),
    ],
};

/// Two-row Sierra filter.
pub const SIERRA2: DiffusionKernel = DiffusionKernel {
    name: "sierra2",
    entries: &[
        (1, 0, 4.0 / 16.0),
        (2, 0, 3.0 / 16.0),
        (-2, 1, 1.0 / 16.0),
        (-1, 1, 2.0 / 16.0),
        (0, 1, 3.0 / 16.0),
        (1, 1, 2.0 / 16.0),
        (2, 1, 1.0 / 16.0),
    ],
};

/// Three-row Sierra filter.
pub const SIERRA3: DiffusionKernel = DiffusionKernel {
    name: "sierra3",
    entries: &[
        (1, 0, 5.0 / 32.0),
        (2, 0, 3.0 / 32.0),
        (-2, 1, 2.0 / 32.0),
        (-1, 1, 4.0 / 32.0),
        (0, 1, 5.0 / 32.0),
        (1, 1, 4.0 / 32.0),
        (2, 1, 2.0 / 32.0),
        (-1, 2, 2.0 / 32.0),
        (0, 2, 3.0 / 32.0),
        (1, 2, 2.0 / 32.0),
    ],
};

/// Sierra's three-target "filter lite".
pub const SIERRA_2_4A: DiffusionKernel = DiffusionKernel {
    name: "sierra-2-4a",
    entries: &[(1, 0, 2.0 / 4.0), (-1, 1, 1.0 / 4.0), (0, 1, 1.0 / 4.0)],
};

/// Every published kernel, in presentation order.
pub const KERNELS: [&DiffusionKernel; 8] = [
    &FLOYD_STEINBERG,
    &ATKINSON,
    &JARVIS_JUDICE_NINKE,
    &STUCKI,
    &BURKES,
    &SIERRA2,
    &SIERRA3,
    &SIERRA_2_4A,
];

/// Look up a kernel by its canonical name.
///
/// # Errors
/// `UnknownKernel` if the name matches none of the published tables.
pub fn by_name(name: &str) -> Result<&'static DiffusionKernel, RendrError> {
    KERNELS
        .iter()
        .copied()
        .find(|kernel| kernel.name == name)
        .ok_or_else(|| RendrError::UnknownKernel(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_every_kernel() {
        for kernel in KERNELS {
            assert_eq!(by_name(kernel.name).unwrap().name, kernel.name);
        }
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        let result = by_name("ostromoukhov");
        assert!(matches!(result, Err(RendrError::UnknownKernel(name)) if name == "ostromoukhov"));
    }

    #[test]
    fn test_sierra_2_4a_published_coefficients() {
        assert_eq!(
            SIERRA_2_4A.entries,
            &[(1, 0, 0.5), (-1, 1, 0.25), (0, 1, 0.25)]
        );
    }

    #[test]
    fn test_entries_never_reach_finalized_pixels() {
        for kernel in KERNELS {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy >= 0, "{}: dy must be >= 0", kernel.name);
                if dy == 0 {
                    assert!(dx > 0, "{}: dy=0 entries need dx > 0", kernel.name);
                }
            }
        }
    }

    #[test]
    fn test_weight_sums() {
        for kernel in KERNELS {
            let sum: f32 = kernel.entries.iter().map(|&(_, _, w)| w).sum();
            let expected = if kernel.name == "atkinson" { 0.75 } else { 1.0 };
            assert!(
                (sum - expected).abs() < 1e-6,
                "{}: weights sum to {sum}",
                kernel.name
            );
        }
    }
}
