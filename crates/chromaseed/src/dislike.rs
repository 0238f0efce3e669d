//! Detecting and fixing universally disliked colors.
//!
//! Color science studies find dark yellow-greens, the colors of bile and mud,
//! to be disliked nearly universally. Lightening them to tone 70 turns them
//! into pleasant light olives and limes.

use crate::core::round_half_up;
use crate::Hct;

/// Determine whether the color is a disliked dark yellow-green.
pub fn is_disliked(hct: &Hct) -> bool {
    let hue = round_half_up(hct.hue());
    let hue_passes = (90.0..=111.0).contains(&hue);
    let chroma_passes = round_half_up(hct.chroma()) > 16.0;
    let tone_passes = round_half_up(hct.tone()) < 65.0;

    hue_passes && chroma_passes && tone_passes
}

/// Lighten the color to tone 70 if it is disliked. Otherwise, return the color
/// unchanged.
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        Hct::new(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{fix_if_disliked, is_disliked};
    use crate::{Argb, Hct};

    #[test]
    fn test_monk_skin_tones() {
        // The Monk Skin Tone Scale covers a wide range of human skin tones.
        for argb in [
            0xfff6ede4_u32,
            0xfff3e7db,
            0xfff7ead0,
            0xffeadaba,
            0xffd7bd96,
            0xffa07e56,
            0xff825c43,
            0xff604134,
            0xff3a312a,
            0xff292420,
        ] {
            assert!(!is_disliked(&Hct::from_argb(Argb::new(argb))));
        }
    }

    #[test]
    fn test_bile() {
        for argb in [0xff95884b_u32, 0xff716b40, 0xffb08e00, 0xff4c4308] {
            assert!(is_disliked(&Hct::from_argb(Argb::new(argb))), "{:x}", argb);
        }
    }

    #[test]
    fn test_fix() {
        let bile = Hct::from_argb(Argb::new(0xff95884b));
        let fixed = fix_if_disliked(bile);
        assert!(!is_disliked(&fixed));
        assert!((fixed.tone() - 70.0).abs() < 1.0);

        let blue = Hct::from_argb(Argb::new(0xff00_00ff));
        assert_eq!(fix_if_disliked(blue), blue);
    }

    #[test]
    fn test_tone_67_is_liked() {
        let color = Hct::new(100.0, 50.0, 67.0);
        assert!(!is_disliked(&color));
        assert_eq!(fix_if_disliked(color).to_argb(), color.to_argb());
    }
}
