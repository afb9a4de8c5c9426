//! Near-square grid selection for flat sample sequences
//!
//! A decoded waveform is a one-dimensional run of samples; to draw it as an
//! image the run is reshaped into a `width x height` grid that tiles the
//! sample count exactly. The finder picks the divisor pair closest to a
//! square, falling back to a single row when no divisor search is possible.

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Grid width in pixels
    pub width: u32,
    /// Grid height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Total number of pixels in the grid
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Find a near-square `(width, height)` pair that tiles `count` exactly.
///
/// Scans candidate widths from one below the integer square root down to 1
/// and returns the first divisor found, giving the widest grid whose width
/// stays strictly below the square root. The exact root is not a candidate,
/// so a perfect square count still resolves to its next-smaller divisor
/// (100 samples become a 5x20 grid, not 10x10).
///
/// Returns `None` for counts below 4: the search space above width 0 and
/// below the root is empty.
///
/// # Example
///
/// ```
/// use wavetile::grid::find_grid;
///
/// let dims = find_grid(12).unwrap();
/// assert_eq!((dims.width, dims.height), (2, 6));
/// assert!(find_grid(2).is_none());
/// ```
pub fn find_grid(count: usize) -> Option<Dimensions> {
    let square = count.isqrt();
    if square == 0 {
        return None;
    }
    for width in (1..square).rev() {
        if count % width == 0 {
            return Some(Dimensions {
                width: width as u32,
                height: (count / width) as u32,
            });
        }
    }
    None
}

/// Grid for `count` samples, falling back to a single row when the divisor
/// search fails.
///
/// The fallback covers counts 0 through 3; a zero count yields a zero-width
/// grid that the image encoder is expected to reject.
pub fn grid_or_single_row(count: usize) -> Dimensions {
    find_grid(count).unwrap_or_else(|| {
        log::debug!("no near-square grid for {} samples, using single row", count);
        Dimensions {
            width: count as u32,
            height: 1,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_tiles_exactly() {
        for count in 4..2000usize {
            let dims = find_grid(count).unwrap_or_else(|| panic!("no grid for {}", count));
            assert_eq!(
                dims.pixel_count(),
                count,
                "grid {}x{} does not tile {} samples",
                dims.width,
                dims.height,
                count
            );
            assert!(dims.width >= 1);
            assert!(dims.height >= 1);
        }
    }

    #[test]
    fn test_perfect_square_skips_exact_root() {
        // The scan starts below the root, so 100 resolves to 5x20.
        let dims = find_grid(100).unwrap();
        assert_eq!((dims.width, dims.height), (5, 20));

        let dims = find_grid(64).unwrap();
        assert_eq!((dims.width, dims.height), (4, 16));
    }

    #[test]
    fn test_prime_count_falls_to_width_one() {
        let dims = find_grid(7).unwrap();
        assert_eq!((dims.width, dims.height), (1, 7));

        let dims = find_grid(9973).unwrap();
        assert_eq!((dims.width, dims.height), (1, 9973));
    }

    #[test]
    fn test_small_counts_have_no_grid() {
        for count in 0..4usize {
            assert!(find_grid(count).is_none(), "count {} should fail", count);
        }
    }

    #[test]
    fn test_fallback_is_single_row() {
        for count in 0..4usize {
            let dims = grid_or_single_row(count);
            assert_eq!((dims.width, dims.height), (count as u32, 1));
        }

        // Counts with a grid never take the fallback.
        let dims = grid_or_single_row(100);
        assert_eq!((dims.width, dims.height), (5, 20));
    }

    #[test]
    fn test_width_never_exceeds_height() {
        for count in 4..500usize {
            let dims = find_grid(count).unwrap();
            assert!(
                dims.width <= dims.height,
                "width {} above height {} for count {}",
                dims.width,
                dims.height,
                count
            );
        }
    }
}
