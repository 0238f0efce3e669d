//! Contrast ratios between tones.
//!
//! The ratio follows WCAG's relative luminance formula, `(Y₁ + 5) / (Y₂ + 5)`
//! with `Y₁ ≥ Y₂` and both luminances scaled to `0..=100`. Since tone is L*,
//! which is a function of Y alone, contrast can be computed from tones
//! directly. Ratios range from 1 for identical tones to 21 for black on white.
//!
//! Solving for a tone that achieves some ratio may be impossible. [`lighter`]
//! and [`darker`] return `None` in that case, so that callers can decide
//! whether to substitute the extreme tone. [`lighter_unsafe`] and
//! [`darker_unsafe`] make exactly that substitution.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::conversion::{lstar_from_y, y_from_lstar};

/// The largest shortfall of an achieved ratio that still counts as reaching
/// the requested ratio. Conversions between Y and L* are not exact.
const CONTRAST_RATIO_EPSILON: f64 = 0.04;

/// The tone adjustment applied to solved tones. Rounding to sRGB bytes may
/// shift the luminance a little, so solutions err on the side of more
/// contrast.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Compute the contrast ratio of two relative luminances in `0..=100`.
#[inline]
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let (lighter, darker) = if y1 > y2 { (y1, y2) } else { (y2, y1) };
    (lighter + 5.0) / (darker + 5.0)
}

/// Compute the contrast ratio of two tones. The tones are clamped to
/// `0..=100`. The ratio is symmetric and ranges `1..=21`.
#[inline]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn ratio_of_tones(tone1: f64, tone2: f64) -> f64 {
    ratio_of_ys(
        y_from_lstar(tone1.clamp(0.0, 100.0)),
        y_from_lstar(tone2.clamp(0.0, 100.0)),
    )
}

/// Find a tone at least as light as the given tone that has at least the given
/// contrast ratio with it. This function returns `None` if the tone is out of
/// range or no such tone exists.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let dark_y = y_from_lstar(tone);
    let light_y = ratio * (dark_y + 5.0) - 5.0;
    if !(0.0..=100.0).contains(&light_y) {
        return None;
    }

    let real_contrast = ratio_of_ys(light_y, dark_y);
    if real_contrast < ratio && (real_contrast - ratio).abs() > CONTRAST_RATIO_EPSILON {
        return None;
    }

    let result = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&result).then_some(result)
}

/// Find a tone at least as dark as the given tone that has at least the given
/// contrast ratio with it. This function returns `None` if the tone is out of
/// range or no such tone exists.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }

    let light_y = y_from_lstar(tone);
    let dark_y = (light_y + 5.0) / ratio - 5.0;
    if !(0.0..=100.0).contains(&dark_y) {
        return None;
    }

    let real_contrast = ratio_of_ys(light_y, dark_y);
    if real_contrast < ratio && (real_contrast - ratio).abs() > CONTRAST_RATIO_EPSILON {
        return None;
    }

    let result = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&result).then_some(result)
}

/// Find a lighter tone like [`lighter`], but return 100 if no such tone exists.
/// The result always is a valid tone, though it may not meet the ratio.
#[inline]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// Find a darker tone like [`darker`], but return 0 if no such tone exists.
/// The result always is a valid tone, though it may not meet the ratio.
#[inline]
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).unwrap_or(0.0)
}

// ====================================================================================================================
