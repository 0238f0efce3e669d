//! Conversion between packed sRGB, linear sRGB, CIE XYZ, and CIE L*a*b*.
//!
//! All conversions use the D65 white point. Linear sRGB components and XYZ
//! coordinates are scaled to `0..=100` (for in-gamut colors), which keeps Y
//! directly comparable to L* and tone.

use super::math::{multiply, round_half_up};
use crate::Argb;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.41233895, 0.35762064, 0.18051042 ],
    [ 0.2126,     0.7152,     0.0722     ],
    [ 0.01932141, 0.11916382, 0.95034478 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [  3.2413774792388685, -1.5376652402851851,  -0.49885366846268053 ],
    [ -0.9691452513005321,  1.8758853451067872,   0.04156585616912061 ],
    [  0.05562093689691305, -0.20395524564742123, 1.0571799111220335  ],
];

/// The standard white point for sRGB, D65, scaled so that Y is 100.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE's ε for the L*a*b* transfer function.
const EPSILON: f64 = 216.0 / 24389.0;

/// CIE's κ for the L*a*b* transfer function.
const KAPPA: f64 = 24389.0 / 27.0;

// --------------------------------------------------------------------------------------------------------------------

/// Linearize an sRGB component. The result ranges `0..=100`.
#[inline]
pub fn linearized(component: u8) -> f64 {
    let normalized = component as f64 / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Apply sRGB's gamma to a linear component in `0..=100` without rounding.
/// The result ranges `0..=1` for in-gamut values.
#[inline]
pub(crate) fn delinearized_unrounded(component: f64) -> f64 {
    let normalized = component / 100.0;
    if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    }
}

/// Apply sRGB's gamma to a linear component in `0..=100` and round the result
/// to a byte. Out-of-range values are clamped.
#[inline]
pub fn delinearized(component: f64) -> u8 {
    round_half_up(delinearized_unrounded(component) * 255.0).clamp(0.0, 255.0) as u8
}

/// Convert linear sRGB components to a packed color.
pub fn argb_from_linrgb(linrgb: &[f64; 3]) -> Argb {
    let [r, g, b] = linrgb;
    Argb::from_rgb(delinearized(*r), delinearized(*g), delinearized(*b))
}

/// Convert a packed color to linear sRGB components.
pub fn linrgb_from_argb(argb: Argb) -> [f64; 3] {
    let [r, g, b] = argb.to_rgb();
    [linearized(r), linearized(g), linearized(b)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a packed color to XYZ.
pub fn xyz_from_argb(argb: Argb) -> [f64; 3] {
    multiply(&SRGB_TO_XYZ, &linrgb_from_argb(argb))
}

/// Convert XYZ to a packed color, clipping out-of-gamut values.
pub fn argb_from_xyz(xyz: &[f64; 3]) -> Argb {
    argb_from_linrgb(&multiply(&XYZ_TO_SRGB, xyz))
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_inv_f(ft: f64) -> f64 {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Convert a packed color to L*a*b*.
pub fn lab_from_argb(argb: Argb) -> [f64; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert L*a*b* to a packed color, clipping out-of-gamut values.
pub fn argb_from_lab(lab: &[f64; 3]) -> Argb {
    let [l, a, b] = *lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    argb_from_xyz(&[
        lab_inv_f(fx) * WHITE_POINT_D65[0],
        lab_inv_f(fy) * WHITE_POINT_D65[1],
        lab_inv_f(fz) * WHITE_POINT_D65[2],
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert L* to Y, both ranging `0..=100`.
#[inline]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// Convert Y to L*, both ranging `0..=100`.
#[inline]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

/// Determine the L* of a packed color.
pub fn lstar_from_argb(argb: Argb) -> f64 {
    lstar_from_y(xyz_from_argb(argb)[1])
}

/// Create the gray with the given L*.
pub fn argb_from_lstar(lstar: f64) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

// ====================================================================================================================
