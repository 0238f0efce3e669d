//! Solving hue, chroma, and tone for an sRGB color.
//!
//! Given a hue, chroma, and tone, [`solve_to_argb`] finds the sRGB color with
//! that hue and tone whose chroma is as close as possible to the requested
//! chroma. When the requested color is in gamut, a few Newton iterations on J
//! converge quickly. Otherwise, the solver intersects the plane of constant
//! luminance with the RGB cube, locates the segment of the resulting polygon
//! that crosses the hue, and bisects along that segment. The result always
//! has the requested tone, within rounding, and at most the requested chroma.

use super::ViewingConditions;
use crate::core::{
    argb_from_linrgb, argb_from_lstar, delinearized_unrounded, multiply, sanitize_degrees,
    signum, y_from_lstar,
};
use crate::Argb;

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const SCALED_DISCOUNT_FROM_LINRGB: [[f64; 3]; 3] = [
    [ 0.001200833568784504,  0.002389694492170889,  0.0002795742885861124 ],
    [ 0.0005891086651375999, 0.0029785502573438758, 0.0003270666104008398 ],
    [ 0.00010146692491640572, 0.0005364214359186694, 0.0032979401770712076 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINRGB_FROM_SCALED_DISCOUNT: [[f64; 3]; 3] = [
    [ 1373.2198709594231,  -1100.4251190754821,  -7.278681089101213 ],
    [ -271.815969077903,     559.6580465940733, -32.46047482791194  ],
    [    1.9622899599665666, -57.173814538844006, 308.7233197812385 ],
];

const Y_FROM_LINRGB: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The linear component, scaled to `0..=100`, that sits halfway between the
/// given sRGB byte and the next one. Bisection stops once it cannot cross any
/// more of these planes, since that no longer changes the rounded result.
#[inline]
fn critical_plane(index: i32) -> f64 {
    let normalized = (index as f64 + 0.5) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

#[inline]
fn sanitize_radians(angle: f64) -> f64 {
    (angle + std::f64::consts::PI * 8.0) % (std::f64::consts::PI * 2.0)
}

#[inline]
fn true_delinearized(component: f64) -> f64 {
    delinearized_unrounded(component) * 255.0
}

#[inline]
fn chromatic_adaptation(component: f64) -> f64 {
    let factor = component.abs().powf(0.42);
    signum(component) * 400.0 * factor / (factor + 27.13)
}

#[inline]
fn inverse_chromatic_adaptation(adapted: f64) -> f64 {
    let magnitude = adapted.abs();
    let base = (27.13 * magnitude / (400.0 - magnitude)).max(0.0);
    signum(adapted) * base.powf(1.0 / 0.42)
}

/// Compute the CAM16 hue in radians of a linear RGB color.
fn hue_of(linrgb: &[f64; 3]) -> f64 {
    let scaled = multiply(&SCALED_DISCOUNT_FROM_LINRGB, linrgb);
    let [r_a, g_a, b_a] = scaled.map(chromatic_adaptation);
    let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a)
}

/// Determine whether `b` sits between `a` and `c` going counterclockwise.
#[inline]
fn are_in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    sanitize_radians(b - a) < sanitize_radians(c - a)
}

/// Compute the nth of the 12 possible vertices of the polygon that results
/// from intersecting the RGB cube with the plane of the given luminance.
fn nth_vertex(y: f64, n: usize) -> Option<[f64; 3]> {
    let [k_r, k_g, k_b] = Y_FROM_LINRGB;
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };

    let vertex = if n < 4 {
        let (g, b) = (coord_a, coord_b);
        let r = (y - g * k_g - b * k_b) / k_r;
        [r, g, b]
    } else if n < 8 {
        let (b, r) = (coord_a, coord_b);
        let g = (y - r * k_r - b * k_b) / k_g;
        [r, g, b]
    } else {
        let (r, g) = (coord_a, coord_b);
        let b = (y - r * k_r - g * k_g) / k_b;
        [r, g, b]
    };

    vertex.iter().all(|c| (0.0..=100.0).contains(c)).then_some(vertex)
}

/// Find the segment of the luminance polygon that contains the target hue.
fn bisect_to_segment(y: f64, target_hue: f64) -> ([f64; 3], [f64; 3]) {
    let mut segment: Option<([f64; 3], f64, [f64; 3], f64)> = None;
    let mut uncut = true;

    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_of(&mid);

        let Some((left, left_hue, right, right_hue)) = segment else {
            segment = Some((mid, mid_hue, mid, mid_hue));
            continue;
        };

        if uncut || are_in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            segment = if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                Some((left, left_hue, mid, mid_hue))
            } else {
                Some((mid, mid_hue, right, right_hue))
            };
        }
    }

    segment.map_or(([-1.0; 3], [-1.0; 3]), |(left, _, right, _)| (left, right))
}

/// Find the color on the boundary of the RGB cube with the given luminance and
/// hue.
fn bisect_to_limit(y: f64, target_hue: f64) -> [f64; 3] {
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_of(&left);

    for axis in 0..3 {
        if left[axis] == right[axis] {
            continue;
        }

        let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
            (
                (true_delinearized(left[axis]) - 0.5).floor() as i32,
                (true_delinearized(right[axis]) - 0.5).ceil() as i32,
            )
        } else {
            (
                (true_delinearized(left[axis]) - 0.5).ceil() as i32,
                (true_delinearized(right[axis]) - 0.5).floor() as i32,
            )
        };

        for _ in 0..8 {
            if (r_plane - l_plane).abs() <= 1 {
                break;
            }

            let m_plane = (l_plane + r_plane).div_euclid(2);
            let t = (critical_plane(m_plane) - left[axis]) / (right[axis] - left[axis]);
            let mid = [0, 1, 2].map(|i| left[i] + (right[i] - left[i]) * t);
            let mid_hue = hue_of(&mid);

            if are_in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                r_plane = m_plane;
            } else {
                left = mid;
                left_hue = mid_hue;
                l_plane = m_plane;
            }
        }
    }

    [0, 1, 2].map(|i| (left[i] + right[i]) / 2.0)
}

/// Find an in-gamut color with the given hue, chroma, and luminance by Newton
/// iteration on J. This function returns `None` if the color is out of gamut
/// or the iteration does not converge.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<Argb> {
    // Initial estimate of J based on Y.
    let mut j = y.sqrt() * 11.0;

    let vc = &ViewingConditions::STANDARD;
    let t_inner_coeff = 1.0 / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let (h_sin, h_cos) = hue_radians.sin_cos();

    for iteration in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = vc.aw * j_normalized.powf(1.0 / vc.c / vc.z);
        let p2 = ac / vc.nbb;
        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let scaled = [r_a, g_a, b_a].map(inverse_chromatic_adaptation);
        let linrgb = multiply(&LINRGB_FROM_SCALED_DISCOUNT, &scaled);
        if linrgb.iter().any(|c| *c < 0.0) {
            return None;
        }

        let [k_r, k_g, k_b] = Y_FROM_LINRGB;
        let fnj = k_r * linrgb[0] + k_g * linrgb[1] + k_b * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }

        if iteration == 4 || (fnj - y).abs() < 0.002 {
            if linrgb.iter().any(|c| *c > 100.01) {
                return None;
            }
            return Some(argb_from_linrgb(&linrgb));
        }

        // 2 * fn(j) / j is a good estimate of fn'(j).
        j -= (fnj - y) * j / (2.0 * fnj);
    }

    None
}

/// Find the sRGB color with the given hue, chroma, and tone.
///
/// The hue is normalized to `0..360`. If the chroma is out of gamut at the
/// given hue and tone, the result has the largest in-gamut chroma instead.
/// Requests with near-zero chroma or with tones at or beyond the extremes
/// produce grays.
pub fn solve_to_argb(hue: f64, chroma: f64, tone: f64) -> Argb {
    if chroma < 0.0001 || !(0.0001..=99.9999).contains(&tone) {
        return argb_from_lstar(tone);
    }

    let hue_radians = sanitize_degrees(hue).to_radians();
    let y = y_from_lstar(tone);
    find_result_by_j(hue_radians, chroma, y)
        .unwrap_or_else(|| argb_from_linrgb(&bisect_to_limit(y, hue_radians)))
}

// ====================================================================================================================
