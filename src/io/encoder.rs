//! PNG output for rendered pixel buffers

use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::error::RenderError;
use crate::pixels::RenderedImage;

/// Write a rendered image to `path` as PNG.
///
/// Rows are tightly packed (stride = bytes_per_pixel x width). The file is
/// always PNG regardless of the output extension. Four-byte pixels are
/// written as an RGBA byte stream in whatever byte order the mapper stored
/// them; one-byte pixels become 8-bit grayscale.
///
/// # Errors
///
/// Returns `RenderError::Encode` for a zero-area image (the degenerate
/// empty-input grid ends up here and must be rejected), for an unsupported
/// pixel width, or when the underlying writer fails.
pub fn write_png(path: &Path, image: &RenderedImage<'_>) -> Result<(), RenderError> {
    let width = image.dimensions.width;
    let height = image.dimensions.height;

    if width == 0 || height == 0 {
        return Err(RenderError::Encode(format!(
            "refusing to write empty {}x{} image",
            width, height
        )));
    }

    let color = match image.pixels.bytes_per_pixel() {
        1 => ExtendedColorType::L8,
        4 => ExtendedColorType::Rgba8,
        other => {
            return Err(RenderError::Encode(format!(
                "unsupported pixel width: {} bytes",
                other
            )));
        }
    };

    image::save_buffer_with_format(
        path,
        image.pixels.data(),
        width,
        height,
        color,
        ImageFormat::Png,
    )
    .map_err(|e| RenderError::Encode(format!("failed to write `{}`: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;
    use crate::mode::PixelMode;

    #[test]
    fn test_zero_area_image_is_rejected() {
        let samples: Vec<f32> = vec![];
        let image = RenderedImage {
            dimensions: Dimensions {
                width: 0,
                height: 1,
            },
            pixels: PixelMode::Heatmap.map(&samples).unwrap(),
        };

        let err = write_png(Path::new("/tmp/wavetile_should_not_exist.png"), &image).unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
    }
}
