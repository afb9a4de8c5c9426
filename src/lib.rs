//! # Wavetile
//!
//! Renders decoded audio waveforms into near-square pixel grids for image
//! output, so a whole track can be inspected at a glance.
//!
//! ## Features
//!
//! - **Grid selection**: picks a `(width, height)` pair that tiles the
//!   sample count as close to square as possible, with a single-row fallback
//! - **Pixel modes**: raw float passthrough, grayscale, rainbow colors, and
//!   a red/blue heatmap diverging around the zero crossing
//! - **I/O boundaries**: Symphonia decoding in, PNG encoding out
//!
//! ## Quick Start
//!
//! ```
//! use wavetile::{render, PixelMode};
//!
//! // Interleaved f32 samples, nominally in [-1.0, 1.0]
//! let samples = vec![0.25f32; 100];
//!
//! let image = render(&samples, PixelMode::Heatmap)?;
//!
//! // 100 samples tile into a 5x20 grid of 4-byte pixels.
//! assert_eq!((image.dimensions.width, image.dimensions.height), (5, 20));
//! assert_eq!(image.pixels.data().len(), 400);
//! # Ok::<(), wavetile::RenderError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a single synchronous path:
//!
//! ```text
//! Audio file -> Decoder -> samples -> Grid + Pixel Mapper -> PNG Encoder
//! ```
//!
//! The core (`render`) is sample-based and does no file I/O; decoding and
//! encoding live in [`io`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod error;
pub mod grid;
pub mod io;
pub mod mode;
pub mod pixels;

// Re-export main types
pub use error::RenderError;
pub use grid::{Dimensions, find_grid};
pub use mode::PixelMode;
pub use pixels::{PixelBuffer, RenderedImage};

/// Render a sample slice into a pixel grid
///
/// Chooses the near-square grid for the sample count (falling back to a
/// single row when none exists) and maps every sample to a pixel with the
/// selected mode.
///
/// # Arguments
///
/// * `samples` - Interleaved f32 samples, nominally in [-1.0, 1.0]
/// * `mode` - Sample-to-pixel encoding strategy
///
/// # Returns
///
/// A [`RenderedImage`] whose pixel data borrows `samples` for
/// [`PixelMode::Raw`] and is freshly allocated otherwise.
///
/// # Errors
///
/// Returns [`RenderError::Allocation`] if the pixel buffer cannot be
/// allocated. An empty slice is not an error here; it produces a zero-width
/// single-row image that the PNG encoder rejects.
pub fn render(samples: &[f32], mode: PixelMode) -> Result<RenderedImage<'_>, RenderError> {
    log::debug!(
        "rendering {} samples with mode `{}`",
        samples.len(),
        mode.name()
    );

    let dimensions = grid::grid_or_single_row(samples.len());
    log::debug!("selected {}x{} grid", dimensions.width, dimensions.height);

    let pixels = mode.map(samples)?;

    Ok(RenderedImage { dimensions, pixels })
}
