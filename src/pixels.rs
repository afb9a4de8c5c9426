//! Pixel mappers: whole-buffer sample-to-pixel transforms
//!
//! Every mapper is a stateless element-wise transform, so the owned variants
//! fill their buffers with rayon. Raw mode is the exception to everything:
//! it borrows the sample storage verbatim instead of allocating, which the
//! buffer type records as `Cow::Borrowed` so releasing a pixel buffer can
//! never free the caller's samples.

use std::borrow::Cow;

use rayon::prelude::*;

use crate::color;
use crate::error::RenderError;
use crate::grid::Dimensions;

/// Pixel bytes plus the per-pixel byte width.
///
/// The data is either owned (Gray, Colors, Heatmap) or a borrow of the input
/// sample storage (Raw). Length is always `pixel count x bytes_per_pixel`,
/// tightly packed.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: Cow<'a, [u8]>,
    bytes_per_pixel: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Raw pixel bytes, tightly packed row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte width of one pixel (1 for grayscale, 4 otherwise).
    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Number of pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / self.bytes_per_pixel
    }

    /// Whether the buffer aliases the input sample storage (Raw mode).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_))
    }
}

/// A pixel buffer together with the grid it is laid out on.
#[derive(Debug)]
pub struct RenderedImage<'a> {
    /// Grid the flat sample run was reshaped into
    pub dimensions: Dimensions,
    /// Mapped pixel data
    pub pixels: PixelBuffer<'a>,
}

impl RenderedImage<'_> {
    /// Row stride in bytes; rows are tightly packed with no padding.
    pub fn row_stride(&self) -> usize {
        self.pixels.bytes_per_pixel() * self.dimensions.width as usize
    }
}

/// Allocate a zeroed pixel byte buffer, surfacing allocation failure as an
/// error instead of aborting.
fn alloc_pixel_bytes(len: usize) -> Result<Vec<u8>, RenderError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|e| RenderError::Allocation(format!("{} pixel bytes: {}", len, e)))?;
    data.resize(len, 0);
    Ok(data)
}

/// Pass the sample storage through untouched.
///
/// Each sample's four native float bytes become one pixel's four channel
/// bytes; no numeric reinterpretation, no clamping, no copy. This is a
/// bit-preserving transcoding rather than a visualization.
pub fn map_raw(samples: &[f32]) -> PixelBuffer<'_> {
    PixelBuffer {
        data: Cow::Borrowed(bytemuck::cast_slice(samples)),
        bytes_per_pixel: size_of::<f32>(),
    }
}

/// One grayscale byte per sample: `(sample * 255.0) as u8`.
///
/// Unlike the color mappers there is no range clamp and no diagnostic here;
/// out-of-range samples get whatever the float-to-byte conversion produces.
pub fn map_gray(samples: &[f32]) -> Result<PixelBuffer<'static>, RenderError> {
    let mut data = alloc_pixel_bytes(samples.len())?;

    data.par_iter_mut()
        .zip(samples.par_iter())
        .for_each(|(byte, &sample)| {
            *byte = (sample * 255.0) as u8;
        });

    Ok(PixelBuffer {
        data: Cow::Owned(data),
        bytes_per_pixel: 1,
    })
}

/// Rainbow-encode each sample after normalizing amplitude from [-1, 1] to
/// [0, 1].
pub fn map_colors(samples: &[f32]) -> Result<PixelBuffer<'static>, RenderError> {
    map_packed(samples, |sample| color::rainbow((sample + 1.0) * 0.5))
}

/// Diverging-encode each raw sample value; no normalization.
pub fn map_heatmap(samples: &[f32]) -> Result<PixelBuffer<'static>, RenderError> {
    map_packed(samples, color::diverging)
}

/// Fill a 4-byte-per-pixel buffer from a packed-u32 encoder, native byte
/// order.
fn map_packed<F>(samples: &[f32], encode: F) -> Result<PixelBuffer<'static>, RenderError>
where
    F: Fn(f32) -> u32 + Sync,
{
    let mut data = alloc_pixel_bytes(samples.len() * 4)?;

    data.par_chunks_exact_mut(4)
        .zip(samples.par_iter())
        .for_each(|(pixel, &sample)| {
            pixel.copy_from_slice(&encode(sample).to_ne_bytes());
        });

    Ok(PixelBuffer {
        data: Cow::Owned(data),
        bytes_per_pixel: 4,
    })
}
