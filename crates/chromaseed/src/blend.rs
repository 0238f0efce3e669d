//! Harmonizing colors with a source color.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{difference_degrees, rotation_direction, sanitize_degrees};
use crate::{Argb, Hct};

/// The largest hue rotation applied by [`harmonize`].
const MAX_ROTATION: f64 = 15.0;

/// Shift the design color's hue towards the source color's hue.
///
/// The hue rotates by half the hue difference, but at most 15°. Chroma and
/// tone stay the same, so that a harmonized error or warning color still
/// reads as such.
///
/// ```
/// # use chromaseed::{blend::harmonize, Argb};
/// let red = Argb::new(0xffff_0000);
/// let blue = Argb::new(0xff00_00ff);
/// assert_eq!(harmonize(red, blue), Argb::new(0xfffb_0057));
/// ```
pub fn harmonize(design: Argb, source: Argb) -> Argb {
    let from = Hct::from_argb(design);
    let to = Hct::from_argb(source);
    let rotation = (difference_degrees(from.hue(), to.hue()) * 0.5).min(MAX_ROTATION);
    let hue = sanitize_degrees(from.hue() + rotation * rotation_direction(from.hue(), to.hue()));
    Hct::new(hue, from.chroma(), from.tone()).to_argb()
}

/// Shift the design color's hue towards the source color's hue. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "harmonize")]
pub fn py_harmonize(design: u32, source: u32) -> u32 {
    harmonize(Argb::new(design), Argb::new(source)).value()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::harmonize;
    use crate::Argb;

    const RED: Argb = Argb::new(0xffff_0000);
    const GREEN: Argb = Argb::new(0xff00_ff00);
    const BLUE: Argb = Argb::new(0xff00_00ff);
    const YELLOW: Argb = Argb::new(0xffff_ff00);

    #[test]
    fn test_harmonize() {
        assert_eq!(harmonize(RED, BLUE), Argb::new(0xfffb_0057));
        assert_eq!(harmonize(RED, GREEN), Argb::new(0xffd8_5600));
        assert_eq!(harmonize(RED, YELLOW), Argb::new(0xffd8_5600));
        assert_eq!(harmonize(BLUE, GREEN), Argb::new(0xff00_47a3));
        assert_eq!(harmonize(GREEN, BLUE), Argb::new(0xff00_fc94));
        assert_eq!(harmonize(RED, RED), RED);
    }
}
