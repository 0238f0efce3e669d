//! Reducing images to a few representative colors.
//!
//! Quantization is a two-stage pipeline. [`QuantizerWu`] first bins pixels
//! into a coarse histogram over RGB and recursively splits the box with the
//! largest variance. [`QuantizerWsmeans`] then refines the resulting centroids
//! with weighted k-means in L*a*b*. [`QuantizerCelebi`] combines both stages.
//!
//! All quantizers are deterministic: The same pixels and maximum color count
//! always produce the same result.

mod celebi;
mod map;
mod point_provider;
mod wsmeans;
mod wu;

use std::collections::BTreeMap;

pub use celebi::QuantizerCelebi;
pub use map::QuantizerMap;
pub use point_provider::{LabPointProvider, PointProvider};
pub use wsmeans::QuantizerWsmeans;
pub use wu::QuantizerWu;

use crate::Argb;

/// The result of quantization: colors and their pixel counts.
///
/// The colors are ordered by their packed value, which keeps iteration order
/// and hence all downstream processing deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuantizerResult {
    pub color_to_count: BTreeMap<Argb, u32>,
}

impl QuantizerResult {
    /// Create a new quantizer result.
    pub fn new(color_to_count: BTreeMap<Argb, u32>) -> Self {
        Self { color_to_count }
    }

    /// Get the number of colors.
    pub fn len(&self) -> usize {
        self.color_to_count.len()
    }

    /// Determine whether the result has no colors.
    pub fn is_empty(&self) -> bool {
        self.color_to_count.is_empty()
    }

    /// Get the total pixel count.
    pub fn population(&self) -> u64 {
        self.color_to_count.values().map(|c| *c as u64).sum()
    }

    /// Get the colors ordered by decreasing pixel count. Ties are broken by
    /// color.
    pub fn by_population(&self) -> Vec<(Argb, u32)> {
        let mut entries: Vec<_> = self.color_to_count.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries
    }
}

/// A color quantizer.
pub trait Quantizer {
    /// Reduce the pixels to at most `max_colors` colors.
    fn quantize(&mut self, pixels: &[Argb], max_colors: usize) -> QuantizerResult;
}

/// Configuration for quantization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct QuantizeOptions {
    /// The maximum number of colors. Values are clamped to `1..=256`.
    pub max_colors: usize,
}

impl QuantizeOptions {
    /// Get the options for extracting source colors.
    ///
    /// Scoring picks a few colors from many candidates, so these options
    /// quantize to 128 colors.
    pub const fn for_source_colors() -> Self {
        Self { max_colors: 128 }
    }
}

impl Default for QuantizeOptions {
    /// Quantize to at most 4 colors.
    fn default() -> Self {
        Self { max_colors: 4 }
    }
}

// ====================================================================================================================
