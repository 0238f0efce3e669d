//! Ranking colors by their suitability as theme source colors.
//!
//! Scoring favors colors that are both plentiful and colorful. It considers a
//! color's population together with the population of similar hues, so that
//! an image with many slightly different blues ranks blue highly. It discards
//! near-grays and hues that barely appear in the image. Finally, it picks
//! colors with hues that are as far apart as possible.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{difference_degrees, round_half_up, sanitize_degrees_int};
use crate::quantize::{QuantizeOptions, Quantizer, QuantizerCelebi, QuantizerResult};
use crate::{Argb, Hct};

const TARGET_CHROMA: f64 = 48.0;
const WEIGHT_PROPORTION: f64 = 0.7;
const WEIGHT_CHROMA_ABOVE: f64 = 0.3;
const WEIGHT_CHROMA_BELOW: f64 = 0.1;
const CUTOFF_CHROMA: f64 = 5.0;
const CUTOFF_EXCITED_PROPORTION: f64 = 0.01;

/// Google Blue, the default fallback color.
pub const DEFAULT_FALLBACK: Argb = Argb::new(0xff42_85f4);

/// Options for [`score`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    /// The desired number of colors.
    pub desired: usize,
    /// The color to return when no color is suitable.
    pub fallback: Argb,
    /// Whether to discard near-grays and rare hues.
    pub filter: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            desired: 4,
            fallback: DEFAULT_FALLBACK,
            filter: true,
        }
    }
}

/// Rank the quantized colors by suitability as source colors.
///
/// The result has between one and `options.desired` colors, most suitable
/// first. If no color is suitable, the result is the fallback color only.
pub fn score(result: &QuantizerResult, options: &ScoreOptions) -> Vec<Argb> {
    let mut colors = Vec::with_capacity(result.len());
    let mut hue_population = [0_u64; 360];
    let mut population_sum = 0_u64;

    for (argb, population) in &result.color_to_count {
        let hct = Hct::from_argb(*argb);
        let hue = (hct.hue().floor() as i32).clamp(0, 359) as usize;
        hue_population[hue] += *population as u64;
        population_sum += *population as u64;
        colors.push(hct);
    }

    let mut hue_excited_proportions = [0.0; 360];
    if population_sum > 0 {
        for (hue, population) in hue_population.iter().enumerate() {
            let proportion = *population as f64 / population_sum as f64;
            for neighbor in hue as i32 - 14..hue as i32 + 16 {
                hue_excited_proportions[sanitize_degrees_int(neighbor) as usize] += proportion;
            }
        }
    }

    let mut scored: Vec<(Hct, f64)> = colors
        .into_iter()
        .filter_map(|hct| {
            let hue = sanitize_degrees_int(round_half_up(hct.hue()) as i32) as usize;
            let proportion = hue_excited_proportions[hue];
            if options.filter
                && (hct.chroma() < CUTOFF_CHROMA || proportion <= CUTOFF_EXCITED_PROPORTION)
            {
                return None;
            }

            let proportion_score = proportion * 100.0 * WEIGHT_PROPORTION;
            let chroma_weight = if hct.chroma() < TARGET_CHROMA {
                WEIGHT_CHROMA_BELOW
            } else {
                WEIGHT_CHROMA_ABOVE
            };
            let chroma_score = (hct.chroma() - TARGET_CHROMA) * chroma_weight;
            Some((hct, proportion_score + chroma_score))
        })
        .collect();

    // Stable sort, so that ties retain color order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut chosen: Vec<Hct> = Vec::with_capacity(options.desired);
    for minimum_difference in (15..=90).rev() {
        chosen.clear();
        for (hct, _) in &scored {
            let is_duplicate = chosen
                .iter()
                .any(|c| difference_degrees(hct.hue(), c.hue()) < minimum_difference as f64);
            if !is_duplicate {
                chosen.push(*hct);
            }
            if chosen.len() >= options.desired {
                break;
            }
        }
        if chosen.len() >= options.desired {
            break;
        }
    }

    if chosen.is_empty() {
        tracing::debug!(
            candidates = result.len(),
            fallback = %options.fallback,
            "no suitable colors, using fallback"
        );
        return vec![options.fallback];
    }

    let colors: Vec<Argb> = chosen.iter().map(Hct::to_argb).collect();
    tracing::debug!(candidates = result.len(), chosen = colors.len(), "scored colors");
    colors
}

/// Extract ranked source colors from the pixels of an image.
///
/// This function quantizes the opaque pixels with [`QuantizerCelebi`] and
/// scores the result. It always returns at least one color. Callers should
/// downsample large images first, since quantization time grows with the
/// number of distinct colors.
pub fn source_colors(
    pixels: &[Argb],
    quantize: &QuantizeOptions,
    options: &ScoreOptions,
) -> Vec<Argb> {
    let result = QuantizerCelebi::new().quantize(pixels, quantize.max_colors);
    score(&result, options)
}

/// Extract ranked source colors from the pixels of an image. <i
/// class=python-only>Python only!</i>
///
/// The pixels are packed `0xAARRGGBB` integers.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "source_colors", signature = (pixels, desired = 4))]
pub fn py_source_colors(pixels: Vec<u32>, desired: usize) -> Vec<u32> {
    let pixels: Vec<Argb> = pixels.into_iter().map(Argb::new).collect();
    let options = ScoreOptions {
        desired,
        ..ScoreOptions::default()
    };
    source_colors(&pixels, &QuantizeOptions::for_source_colors(), &options)
        .into_iter()
        .map(u32::from)
        .collect()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;

    use super::{score, source_colors, ScoreOptions, DEFAULT_FALLBACK};
    use crate::quantize::{QuantizeOptions, QuantizerResult};
    use crate::Argb;

    fn result(entries: &[(u32, u32)]) -> QuantizerResult {
        QuantizerResult::new(
            entries
                .iter()
                .map(|(argb, count)| (Argb::new(*argb), *count))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_prioritizes_chroma() {
        let colors = score(
            &result(&[(0xff00_0000, 1), (0xffff_ffff, 1), (0xff00_00ff, 1)]),
            &ScoreOptions::default(),
        );
        assert_eq!(colors, vec![Argb::new(0xff00_00ff)]);
    }

    #[test]
    fn test_prioritizes_chroma_when_proportions_equal() {
        let colors = score(
            &result(&[(0xffff_0000, 1), (0xff00_ff00, 1), (0xff00_00ff, 1)]),
            &ScoreOptions::default(),
        );
        assert_eq!(
            colors,
            vec![
                Argb::new(0xffff_0000),
                Argb::new(0xff00_ff00),
                Argb::new(0xff00_00ff)
            ]
        );
    }

    #[test]
    fn test_fallback() {
        let colors = score(&result(&[(0xff00_0000, 1)]), &ScoreOptions::default());
        assert_eq!(colors, vec![DEFAULT_FALLBACK]);

        let options = ScoreOptions {
            fallback: Argb::new(0xff12_3456),
            ..ScoreOptions::default()
        };
        let colors = score(&QuantizerResult::default(), &options);
        assert_eq!(colors, vec![Argb::new(0xff12_3456)]);
    }

    #[test]
    fn test_unfiltered() {
        let options = ScoreOptions {
            filter: false,
            ..ScoreOptions::default()
        };
        let colors = score(&result(&[(0xff00_0000, 1)]), &options);
        assert_eq!(colors, vec![Argb::BLACK]);
    }

    #[test]
    fn test_dedupes_nearby_hues() {
        let colors = score(
            &result(&[(0xff00_8772, 1), (0xff31_8477, 1)]),
            &ScoreOptions::default(),
        );
        assert_eq!(colors, vec![Argb::new(0xff00_8772)]);
    }

    #[test]
    fn test_white_image() {
        let pixels = vec![Argb::WHITE; 128 * 128];
        let colors = source_colors(
            &pixels,
            &QuantizeOptions::for_source_colors(),
            &ScoreOptions::default(),
        );
        assert_eq!(colors, vec![DEFAULT_FALLBACK]);
    }

    #[test]
    fn test_desired() {
        let options = ScoreOptions {
            desired: 2,
            ..ScoreOptions::default()
        };
        let colors = score(
            &result(&[(0xffff_0000, 1), (0xff00_ff00, 1), (0xff00_00ff, 1)]),
            &options,
        );
        assert_eq!(colors.len(), 2);
    }
}
