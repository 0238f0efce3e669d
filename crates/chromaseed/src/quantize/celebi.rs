use super::{Quantizer, QuantizerMap, QuantizerResult, QuantizerWsmeans, QuantizerWu};
use crate::Argb;

/// The two-stage quantizer.
///
/// This quantizer combines [`QuantizerWu`] for finding initial centroids with
/// [`QuantizerWsmeans`] for refining them, following M. Emre Celebi's
/// observation that Wu's results make excellent seeds for k-means. Pixels
/// with no more distinct colors than the maximum color count are returned
/// as counted, one entry per color.
#[derive(Debug, Default)]
pub struct QuantizerCelebi {
    refiner: QuantizerWsmeans,
}

impl QuantizerCelebi {
    /// The largest supported maximum color count.
    pub const MAX_COLORS: usize = 256;

    /// Create a new two-stage quantizer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Quantizer for QuantizerCelebi {
    fn quantize(&mut self, pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        let max_colors = max_colors.clamp(1, Self::MAX_COLORS);

        // Wu's histogram bins would merge nearby colors.
        let histogram = QuantizerMap::count(pixels);
        if histogram.len() <= max_colors {
            tracing::debug!(
                pixels = pixels.len(),
                max_colors,
                colors = histogram.len(),
                "counted distinct colors"
            );
            return QuantizerResult::new(histogram);
        }

        let centroids = QuantizerWu::centroids(pixels, max_colors);
        let result = self.refiner.quantize(pixels, &centroids, max_colors);

        tracing::debug!(
            pixels = pixels.len(),
            max_colors,
            seeds = centroids.len(),
            colors = result.len(),
            "quantized pixels"
        );
        result
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Quantizer, QuantizerCelebi};
    use crate::Argb;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const RED: Argb = Argb::new(0xffff_0000);
    const GREEN: Argb = Argb::new(0xff00_ff00);
    const BLUE: Argb = Argb::new(0xff00_00ff);

    fn noise(count: usize) -> Vec<Argb> {
        let mut rng = StdRng::seed_from_u64(0x4268_8);
        (0..count)
            .map(|_| Argb::from_rgb(rng.random(), rng.random(), rng.random()))
            .collect()
    }

    #[test]
    fn test_monochrome() {
        let result = QuantizerCelebi::new().quantize(&[BLUE; 100], 4);
        assert_eq!(result.len(), 1);
        assert_eq!(result.color_to_count.get(&BLUE), Some(&100));
    }

    #[test]
    fn test_fewer_colors_than_requested() {
        let pixels = [RED, GREEN, GREEN, BLUE, BLUE, BLUE];
        let result = QuantizerCelebi::new().quantize(&pixels, 128);
        assert_eq!(result.len(), 3);
        assert_eq!(result.color_to_count.get(&RED), Some(&1));
        assert_eq!(result.color_to_count.get(&GREEN), Some(&2));
        assert_eq!(result.color_to_count.get(&BLUE), Some(&3));
    }

    #[test]
    fn test_colors_sharing_a_bin() {
        let dark_red = Argb::new(0xfffe_0000);
        let pixels = [RED, dark_red, dark_red, BLUE];
        let result = QuantizerCelebi::new().quantize(&pixels, 128);
        assert_eq!(result.len(), 3);
        assert_eq!(result.color_to_count.get(&RED), Some(&1));
        assert_eq!(result.color_to_count.get(&dark_red), Some(&2));
        assert_eq!(result.color_to_count.get(&BLUE), Some(&1));

        let navy = Argb::new(0xff10_2030);
        let slate = Argb::new(0xff12_2232);
        let result = QuantizerCelebi::new().quantize(&[navy, slate], 4);
        assert_eq!(result.len(), 2);
        assert_eq!(result.color_to_count.get(&navy), Some(&1));
        assert_eq!(result.color_to_count.get(&slate), Some(&1));
    }

    #[test]
    fn test_bounded_and_deterministic() {
        let pixels = noise(128 * 128);
        for max_colors in [1, 4, 16, 128] {
            let first = QuantizerCelebi::new().quantize(&pixels, max_colors);
            let second = QuantizerCelebi::new().quantize(&pixels, max_colors);
            assert!(first.len() <= max_colors);
            assert!(!first.is_empty());
            assert_eq!(first.population(), pixels.len() as u64);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_clamped_max_colors() {
        let pixels = noise(1000);
        assert_eq!(QuantizerCelebi::new().quantize(&pixels, 0).len(), 1);
        assert!(QuantizerCelebi::new().quantize(&pixels, 1000).len() <= 256);
    }
}
