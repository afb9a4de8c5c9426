//! Mode registry: named sample-to-pixel encoding strategies
//!
//! The variant set is closed and small, so the registry is the enum itself:
//! alias tables are static data hung off each variant and resolution is a
//! declaration-order scan. No global state, nothing to construct.

use crate::error::RenderError;
use crate::pixels::{self, PixelBuffer};

/// One named sample-to-pixel encoding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelMode {
    /// Native float bytes passed through untouched.
    Raw,
    /// Single grayscale byte per sample.
    Gray,
    /// Rainbow mapping of normalized amplitude.
    Colors,
    /// Red/blue divergence around the zero crossing (default).
    #[default]
    Heatmap,
}

impl PixelMode {
    /// All modes, in declaration order.
    pub fn all() -> &'static [Self] {
        &[Self::Raw, Self::Gray, Self::Colors, Self::Heatmap]
    }

    /// Command-line aliases for this mode, primary name first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Raw => &["raw"],
            Self::Gray => &["gray"],
            Self::Colors => &["colors"],
            Self::Heatmap => &["heat", "heatmap"],
        }
    }

    /// Primary name of this mode.
    pub fn name(self) -> &'static str {
        self.aliases()[0]
    }

    /// Byte width of one output pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Raw | Self::Colors | Self::Heatmap => 4,
        }
    }

    /// Resolve a user-supplied mode name.
    ///
    /// Matching is exact and case-sensitive; variants and their aliases are
    /// scanned in declaration order and the first match wins.
    pub fn from_name(name: &str) -> Result<Self, RenderError> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.aliases().iter().any(|&alias| alias == name))
            .ok_or_else(|| RenderError::UnknownMode(name.to_string()))
    }

    /// Map a sample slice to a pixel buffer with this mode's encoding.
    pub fn map(self, samples: &[f32]) -> Result<PixelBuffer<'_>, RenderError> {
        match self {
            Self::Raw => Ok(pixels::map_raw(samples)),
            Self::Gray => pixels::map_gray(samples),
            Self::Colors => pixels::map_colors(samples),
            Self::Heatmap => pixels::map_heatmap(samples),
        }
    }
}
