//! Tonal palettes: one hue and chroma across all tones.

use crate::core::round_half_up;
use crate::{Argb, Hct};

/// The tones that tonal palettes precompute. They include the steps of 5
/// between 0 and 100 as well as the tones used by dynamic color roles.
pub const CACHED_TONES: [u8; 28] = [
    0, 4, 5, 6, 10, 12, 15, 17, 20, 22, 24, 25, 30, 35, 40, 50, 60, 70, 80, 87, 90, 92, 94, 95,
    96, 98, 99, 100,
];

/// A tonal palette.
///
/// A tonal palette comprises the colors with one hue and one chroma across all
/// tones. Since sRGB cannot represent all chromas at all tones, colors near
/// black and white usually have less chroma than requested. Tone 0 always is
/// black and tone 100 always is white.
///
/// The palette eagerly computes the [`CACHED_TONES`] when it is created and
/// never changes afterwards. [`TonalPalette::tone`] looks up cached tones and
/// computes all others on demand. [`TonalPalette::hct`] supports fractional
/// tones.
///
/// ```
/// # use chromaseed::{Argb, TonalPalette};
/// let blue = TonalPalette::from_argb(Argb::new(0xff00_00ff));
/// assert_eq!(blue.tone(0), Argb::BLACK);
/// assert_eq!(blue.tone(90), Argb::new(0xffe0_e0ff));
/// assert_eq!(blue.tone(100), Argb::WHITE);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Hct,
    cache: [Argb; CACHED_TONES.len()],
}

impl TonalPalette {
    /// Create the tonal palette with the packed color's hue and chroma.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    /// Create the tonal palette with the color's hue and chroma. The color
    /// also becomes the palette's key color.
    pub fn from_hct(hct: Hct) -> Self {
        Self::with_key_color(hct.hue(), hct.chroma(), hct)
    }

    /// Create the tonal palette with the given hue and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self::with_key_color(hue, chroma, Self::find_key_color(hue, chroma))
    }

    fn with_key_color(hue: f64, chroma: f64, key_color: Hct) -> Self {
        let cache = CACHED_TONES.map(|tone| Hct::new(hue, chroma, tone as f64).to_argb());
        Self {
            hue,
            chroma,
            key_color,
            cache,
        }
    }

    /// Find the key color for the hue and chroma.
    ///
    /// The key color is the color with the palette's hue whose chroma is
    /// closest to the palette's chroma. Starting at tone 50, the search widens
    /// one tone at a time in both directions and stops as soon as a color's
    /// chroma rounds to the palette's chroma.
    fn find_key_color(hue: f64, chroma: f64) -> Hct {
        let start_tone = 50.0;
        let target = round_half_up(chroma);
        let mut best = Hct::new(hue, chroma, start_tone);
        let mut best_delta = (best.chroma() - chroma).abs();

        let mut delta = 1.0;
        while delta < 50.0 {
            if target == round_half_up(best.chroma()) {
                return best;
            }

            for tone in [start_tone + delta, start_tone - delta] {
                let candidate = Hct::new(hue, chroma, tone);
                let candidate_delta = (candidate.chroma() - chroma).abs();
                if candidate_delta < best_delta {
                    best_delta = candidate_delta;
                    best = candidate;
                }
            }

            delta += 1.0;
        }

        best
    }

    /// Get the palette's hue.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the palette's chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the palette's key color.
    #[inline]
    pub fn key_color(&self) -> Hct {
        self.key_color
    }

    /// Get the color with the given tone. Tones above 100 are treated as 100.
    pub fn tone(&self, tone: u8) -> Argb {
        let tone = tone.min(100);
        match CACHED_TONES.binary_search(&tone) {
            Ok(index) => self.cache[index],
            Err(_) => Hct::new(self.hue, self.chroma, tone as f64).to_argb(),
        }
    }

    /// Get the color with the given, possibly fractional tone.
    pub fn hct(&self, tone: f64) -> Hct {
        Hct::new(self.hue, self.chroma, tone)
    }

    /// Get an iterator over the cached tones and their colors.
    pub fn cached(&self) -> impl Iterator<Item = (u8, Argb)> + '_ {
        CACHED_TONES.iter().copied().zip(self.cache.iter().copied())
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::TonalPalette;
    use crate::{assert_close_enough, Argb};

    #[test]
    fn test_blue() {
        let blue = TonalPalette::from_argb(Argb::new(0xff00_00ff));
        let expected = [
            (100, 0xffff_ffff_u32),
            (95, 0xfff1_efff),
            (90, 0xffe0_e0ff),
            (80, 0xffbe_c2ff),
            (70, 0xff9d_a3ff),
            (60, 0xff7c_84ff),
            (50, 0xff5a_64ff),
            (40, 0xff34_3dff),
            (30, 0xff00_00ef),
            (20, 0xff00_01ac),
            (10, 0xff00_006e),
            (0, 0xff00_0000),
        ];

        for (tone, argb) in expected {
            assert_eq!(blue.tone(tone), Argb::new(argb), "tone {}", tone);
        }

        assert_eq!(blue.key_color().to_argb(), Argb::new(0xff00_00ff));
        assert_eq!(blue.tone(3), blue.hct(3.0).to_argb());
    }

    #[test]
    fn test_purple() {
        let purple = TonalPalette::from_hue_and_chroma(298.980997210704, 36.0);
        let expected = [
            (0, 0xff00_0000_u32),
            (10, 0xff20_1047),
            (20, 0xff36_275d),
            (40, 0xff65_558f),
            (80, 0xffcf_bdfe),
            (90, 0xffe9_ddff),
            (95, 0xfff6_eeff),
            (99, 0xffff_fbff),
            (100, 0xffff_ffff),
        ];

        for (tone, argb) in expected {
            assert_eq!(purple.tone(tone), Argb::new(argb), "tone {}", tone);
        }
    }

    #[test]
    fn test_key_color() {
        let palette = TonalPalette::from_hue_and_chroma(282.78817956187277, 16.0);
        assert_eq!(palette.key_color().to_argb(), Argb::new(0xff75_758b));
        assert_close_enough!(palette.key_color().tone(), 49.94012279224776);

        let palette = TonalPalette::from_hue_and_chroma(298.980997210704, 36.0);
        assert_eq!(palette.key_color().to_argb(), Argb::new(0xff7e_6ea9));

        let error = TonalPalette::from_hue_and_chroma(25.0, 84.0);
        assert_eq!(error.key_color().to_argb(), Argb::new(0xffde_3730));

        let chartreuse = TonalPalette::from_hue_and_chroma(120.0, 200.0);
        assert_eq!(chartreuse.key_color().to_argb(), Argb::new(0xffdb_fd00));
    }

    #[test]
    fn test_extremes() {
        for hue in [0.0, 90.0, 180.0, 270.0] {
            for chroma in [0.0, 48.0, 120.0] {
                let palette = TonalPalette::from_hue_and_chroma(hue, chroma);
                assert_eq!(palette.tone(0), Argb::BLACK);
                assert_eq!(palette.tone(100), Argb::WHITE);
                assert_eq!(palette.tone(200), Argb::WHITE);
                assert_eq!(palette.cached().count(), 28);
            }
        }
    }
}
