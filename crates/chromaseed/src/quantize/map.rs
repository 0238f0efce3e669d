use std::collections::BTreeMap;

use super::{Quantizer, QuantizerResult};
use crate::Argb;

/// A quantizer that merely counts the opaque pixels of each color.
///
/// This quantizer ignores the maximum color count. It provides the histogram
/// for the other quantizers.
#[derive(Debug, Default)]
pub struct QuantizerMap;

impl QuantizerMap {
    /// Count the opaque pixels of each color.
    pub fn count(pixels: &[Argb]) -> BTreeMap<Argb, u32> {
        let mut color_to_count = BTreeMap::new();
        for pixel in pixels.iter().filter(|p| p.is_opaque()) {
            *color_to_count.entry(*pixel).or_insert(0) += 1;
        }
        color_to_count
    }
}

impl Quantizer for QuantizerMap {
    fn quantize(&mut self, pixels: &[Argb], _max_colors: usize) -> QuantizerResult {
        QuantizerResult::new(Self::count(pixels))
    }
}

// ====================================================================================================================
