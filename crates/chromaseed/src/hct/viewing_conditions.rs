//! The environment in which colors are seen.

use crate::core::{lerp, multiply, y_from_lstar, WHITE_POINT_D65};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [  0.401288, 0.650173, -0.051461 ],
    [ -0.250268, 1.204414,  0.045854 ],
    [ -0.002079, 0.048952,  0.953127 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [  1.8620678,  -1.0112547,   0.14918678 ],
    [  0.38752654,  0.62144744, -0.00897398 ],
    [ -0.01584150, -0.03412294,  1.0499644  ],
];

/// Viewing conditions for CAM16.
///
/// CAM16 models how a color looks depending on the surroundings. The
/// parameters here are the intermediate values that only depend on the
/// surroundings, computed once by [`ViewingConditions::make`] and then shared
/// by every color conversion under these conditions.
///
/// [`ViewingConditions::STANDARD`] are the conditions for HCT: the sRGB white
/// point D65, an adapting luminance of 11.72 cd/m², which corresponds to a
/// display at 200 lux, a background at L* 50, and average surround.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewingConditions {
    pub(crate) n: f64,
    pub(crate) aw: f64,
    pub(crate) nbb: f64,
    pub(crate) ncb: f64,
    pub(crate) c: f64,
    pub(crate) nc: f64,
    pub(crate) rgb_d: [f64; 3],
    pub(crate) fl: f64,
    pub(crate) fl_root: f64,
    pub(crate) z: f64,
}

impl ViewingConditions {
    /// The standard viewing conditions for sRGB displays, as computed by
    /// [`ViewingConditions::make`] with [`WHITE_POINT_D65`], an adapting
    /// luminance of `200/π · Y(50) / 100`, a background L* of 50, average
    /// surround 2.0, and no discounting of the illuminant.
    #[allow(clippy::excessive_precision)]
    pub const STANDARD: ViewingConditions = ViewingConditions {
        n: 0.18418651851244416,
        aw: 29.980997194447333,
        nbb: 1.0169191804458755,
        ncb: 1.0169191804458755,
        c: 0.69,
        nc: 1.0,
        rgb_d: [1.02117770275752, 0.9863077294280124, 0.9339605082802299],
        fl: 0.3884814537800353,
        fl_root: 0.7894826179304937,
        z: 1.909169568483652,
    };

    /// Compute viewing conditions.
    ///
    /// The white point is given in XYZ with Y scaled to 100. The adapting
    /// luminance is the luminance of the adapting field in cd/m². The
    /// background L* is floored at 0.1. The surround ranges from 0 (dark) to 2
    /// (average). When discounting the illuminant, the observer is assumed to
    /// be fully adapted.
    pub fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        let background_lstar = background_lstar.max(0.1);
        let rgb_w = multiply(&XYZ_TO_CAM16RGB, &white_point);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };

        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        }
        .clamp(0.0, 1.0);

        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a = [0, 1, 2].map(|i| {
            let factor = (fl * rgb_d[i] * rgb_w[i] / 100.0).powf(0.42);
            400.0 * factor / (factor + 27.13)
        });
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// Compute the standard viewing conditions, but with a different
    /// background L*.
    pub fn with_background_lstar(lstar: f64) -> Self {
        Self::make(
            WHITE_POINT_D65,
            200.0 / std::f64::consts::PI * y_from_lstar(50.0) / 100.0,
            lstar,
            2.0,
            false,
        )
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ====================================================================================================================
