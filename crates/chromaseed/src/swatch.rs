//! Swatches: extracted colors with legible text colors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{ratio_of_ys, xyz_from_argb};
use crate::{Argb, Hct};

/// The minimum contrast ratio for title text.
pub const MIN_CONTRAST_TITLE_TEXT: f64 = 3.0;

/// The minimum contrast ratio for body text.
pub const MIN_CONTRAST_BODY_TEXT: f64 = 4.5;

fn luminance(argb: Argb) -> f64 {
    xyz_from_argb(argb)[1]
}

fn contrast(foreground: Argb, background: Argb) -> f64 {
    ratio_of_ys(luminance(foreground), luminance(background))
}

/// Composite the foreground with the given alpha over the opaque background.
fn composite(foreground: Argb, alpha: u8, background: Argb) -> Argb {
    let blend = |fg: u8, bg: u8| {
        let alpha = alpha as u32;
        ((fg as u32 * alpha + bg as u32 * (255 - alpha)) / 255) as u8
    };

    Argb::from_rgb(
        blend(foreground.red(), background.red()),
        blend(foreground.green(), background.green()),
        blend(foreground.blue(), background.blue()),
    )
}

/// Find the smallest alpha for the foreground that still meets the contrast
/// ratio over the opaque background.
///
/// If the opaque foreground does not meet the ratio, this function returns
/// `None`. Otherwise, it performs a binary search over alpha values, stopping
/// after 10 rounds or when the range has been narrowed to one step.
pub fn minimum_alpha(foreground: Argb, background: Argb, ratio: f64) -> Option<u8> {
    let background = background.with_alpha(0xff);
    if contrast(foreground.with_alpha(0xff), background) < ratio {
        return None;
    }

    let (mut min, mut max) = (0_u8, 255_u8);
    let mut iterations = 0;
    while iterations <= 10 && 1 < max - min {
        let alpha = ((min as u16 + max as u16) / 2) as u8;
        if contrast(composite(foreground, alpha, background), background) < ratio {
            min = alpha;
        } else {
            max = alpha;
        }
        iterations += 1;
    }

    Some(max)
}

/// A swatch.
///
/// A swatch is a color extracted from an image together with its population,
/// i.e., the number of pixels it represents, and the text colors for titles
/// and body copy on top of it. Text colors are translucent white or black with
/// the smallest alpha that meets [`MIN_CONTRAST_TITLE_TEXT`] and
/// [`MIN_CONTRAST_BODY_TEXT`], respectively. White is preferred when it works
/// for both.
///
/// ```
/// # use chromaseed::{Argb, Swatch};
/// let swatch = Swatch::new(Argb::new(0xff67_50a4), 100);
/// assert_eq!(swatch.title_text_color(), Argb::new(0x87ff_ffff));
/// assert_eq!(swatch.body_text_color(), Argb::new(0xc2ff_ffff));
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #6750a4;">
///     <span style="color: #ffffff87;">Title</span>
///     <span style="color: #ffffffc2;">Body</span>
/// </div>
/// </div>
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "chromaseed"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swatch {
    color: Argb,
    population: u32,
    title_text_color: Argb,
    body_text_color: Argb,
}

impl Swatch {
    /// Create a new swatch for the color and population. Any alpha of the
    /// color is ignored.
    pub fn new(color: Argb, population: u32) -> Self {
        let color = color.with_alpha(0xff);
        let text = |ratio: f64| {
            let on_white = minimum_alpha(Argb::WHITE, color, ratio);
            let on_black = minimum_alpha(Argb::BLACK, color, ratio);
            (on_white, on_black)
        };

        let (light_title, dark_title) = text(MIN_CONTRAST_TITLE_TEXT);
        let (light_body, dark_body) = text(MIN_CONTRAST_BODY_TEXT);

        let (title_text_color, body_text_color) = match (light_title, light_body) {
            (Some(title), Some(body)) => {
                (Argb::WHITE.with_alpha(title), Argb::WHITE.with_alpha(body))
            }
            _ => match (dark_title, dark_body) {
                (Some(title), Some(body)) => {
                    (Argb::BLACK.with_alpha(title), Argb::BLACK.with_alpha(body))
                }
                _ => {
                    let fallback = Self::most_contrasting(color);
                    (fallback, fallback)
                }
            },
        };

        Self {
            color,
            population,
            title_text_color,
            body_text_color,
        }
    }

    /// Pick opaque white or black, whichever contrasts more with the color.
    fn most_contrasting(color: Argb) -> Argb {
        if contrast(Argb::BLACK, color) <= contrast(Argb::WHITE, color) {
            Argb::WHITE
        } else {
            Argb::BLACK
        }
    }

    /// Get the swatch's color.
    pub fn color(&self) -> Argb {
        self.color
    }

    /// Get the swatch's color in HCT.
    pub fn hct(&self) -> Hct {
        Hct::from_argb(self.color)
    }

    /// Get the number of pixels represented by this swatch.
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Get the color for title text on this swatch.
    pub fn title_text_color(&self) -> Argb {
        self.title_text_color
    }

    /// Get the color for body text on this swatch.
    pub fn body_text_color(&self) -> Argb {
        self.body_text_color
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Swatch {
    /// Create a new swatch. <i class=python-only>Python only!</i>
    #[new]
    pub fn py_new(color: u32, population: u32) -> Self {
        Self::new(Argb::new(color), population)
    }

    /// Get the swatch's color. <i class=python-only>Python only!</i>
    #[pyo3(name = "color")]
    pub fn py_color(&self) -> u32 {
        self.color.value()
    }

    /// Get the swatch's population. <i class=python-only>Python only!</i>
    #[pyo3(name = "population")]
    pub fn py_population(&self) -> u32 {
        self.population
    }

    /// Get the title text color. <i class=python-only>Python only!</i>
    #[pyo3(name = "title_text_color")]
    pub fn py_title_text_color(&self) -> u32 {
        self.title_text_color.value()
    }

    /// Get the body text color. <i class=python-only>Python only!</i>
    #[pyo3(name = "body_text_color")]
    pub fn py_body_text_color(&self) -> u32 {
        self.body_text_color.value()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{minimum_alpha, Swatch};
    use crate::Argb;

    #[test]
    fn test_minimum_alpha() {
        let white = Argb::WHITE;
        let black = Argb::BLACK;

        assert_eq!(minimum_alpha(white, white, 3.0), None);
        assert_eq!(minimum_alpha(black, white, 3.0), Some(107));
        assert_eq!(minimum_alpha(black, white, 4.5), Some(137));
        assert_eq!(minimum_alpha(white, black, 3.0), Some(90));
        assert_eq!(minimum_alpha(white, black, 4.5), Some(117));

        let gray = Argb::new(0xff77_7777);
        assert_eq!(minimum_alpha(white, gray, 3.0), Some(175));
        assert_eq!(minimum_alpha(white, gray, 4.5), None);
        assert_eq!(minimum_alpha(black, gray, 4.5), Some(241));
    }

    #[test]
    fn test_swatch() {
        let white = Swatch::new(Argb::WHITE, 1);
        assert_eq!(white.title_text_color(), Argb::new(0x6b00_0000));
        assert_eq!(white.body_text_color(), Argb::new(0x8900_0000));

        let black = Swatch::new(Argb::BLACK, 1);
        assert_eq!(black.title_text_color(), Argb::new(0x5aff_ffff));
        assert_eq!(black.body_text_color(), Argb::new(0x75ff_ffff));

        // White works for titles but not body copy, so both use black.
        let blue = Swatch::new(Argb::new(0xff42_85f4), 42);
        assert_eq!(blue.title_text_color(), Argb::new(0x8900_0000));
        assert_eq!(blue.body_text_color(), Argb::new(0xbe00_0000));
        assert_eq!(blue.population(), 42);

        let yellow = Swatch::new(Argb::new(0x80ff_ff00), 7);
        assert_eq!(yellow.color(), Argb::new(0xffff_ff00));
        assert_eq!(yellow.title_text_color(), Argb::new(0x6b00_0000));
        assert_eq!(yellow.body_text_color(), Argb::new(0x8a00_0000));
    }
}
