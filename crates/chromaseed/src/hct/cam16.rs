//! The CAM16 color appearance model.

use super::viewing_conditions::{ViewingConditions, CAM16RGB_TO_XYZ, XYZ_TO_CAM16RGB};
use crate::core::{argb_from_xyz, multiply, signum, xyz_from_argb};
use crate::Argb;

/// A color in the CAM16 color appearance model.
///
/// Besides hue, chroma, and lightness J, a CAM16 color also carries the
/// brightness Q, colorfulness M, saturation s, and the coordinates J*, a*, b*
/// of the uniform color space CAM16-UCS, which is where [`Cam16::distance`]
/// measures color differences.
///
/// HCT uses CAM16's hue and chroma but replaces J with L*, since the latter
/// is a direct function of luminance and hence of contrast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam16 {
    hue: f64,
    chroma: f64,
    j: f64,
    q: f64,
    m: f64,
    s: f64,
    jstar: f64,
    astar: f64,
    bstar: f64,
}

impl Cam16 {
    /// Convert the packed color to CAM16 under standard viewing conditions.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in(argb, &ViewingConditions::STANDARD)
    }

    /// Convert the packed color to CAM16 under the given viewing conditions.
    pub fn from_argb_in(argb: Argb, conditions: &ViewingConditions) -> Self {
        Self::from_xyz_in(&xyz_from_argb(argb), conditions)
    }

    /// Convert the XYZ coordinates to CAM16 under the given viewing conditions.
    pub fn from_xyz_in(xyz: &[f64; 3], conditions: &ViewingConditions) -> Self {
        let vc = conditions;

        // Chromatic adaptation
        let rgb_c = multiply(&XYZ_TO_CAM16RGB, xyz);
        let rgb_a = [0, 1, 2].map(|i| {
            let discounted = vc.rgb_d[i] * rgb_c[i];
            let factor = (vc.fl * discounted.abs() / 100.0).powf(0.42);
            signum(discounted) * 400.0 * factor / (factor + 27.13)
        });
        let [r_a, g_a, b_a] = rgb_a;

        // Redness-greenness and yellowness-blueness
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        // Auxiliary components
        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let atan_degrees = b.atan2(a).to_degrees();
        let hue = if atan_degrees < 0.0 {
            atan_degrees + 360.0
        } else if atan_degrees >= 360.0 {
            atan_degrees - 360.0
        } else {
            atan_degrees
        };
        let hue_radians = hue.to_radians();

        // Achromatic response and lightness
        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;

        // Chroma from eccentricity
        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(vc.n)).powf(0.73) * t.powf(0.9);
        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root;
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let (jstar, astar, bstar) = Self::ucs(j, m, hue_radians);
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from lightness J, chroma, and hue under standard
    /// viewing conditions.
    pub fn from_jch(j: f64, chroma: f64, hue: f64) -> Self {
        Self::from_jch_in(j, chroma, hue, &ViewingConditions::STANDARD)
    }

    /// Create a CAM16 color from lightness J, chroma, and hue under the given
    /// viewing conditions.
    pub fn from_jch_in(j: f64, chroma: f64, hue: f64, conditions: &ViewingConditions) -> Self {
        let vc = conditions;
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * ((alpha * vc.c) / (vc.aw + 4.0)).sqrt();

        let (jstar, astar, bstar) = Self::ucs(j, m, hue.to_radians());
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Create a CAM16 color from CAM16-UCS coordinates under standard viewing
    /// conditions.
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in(jstar, astar, bstar, &ViewingConditions::STANDARD)
    }

    /// Create a CAM16 color from CAM16-UCS coordinates under the given viewing
    /// conditions.
    pub fn from_ucs_in(jstar: f64, astar: f64, bstar: f64, conditions: &ViewingConditions) -> Self {
        let m = astar.hypot(bstar);
        let colorfulness = (m * 0.0228).exp_m1() / 0.0228;
        let chroma = colorfulness / conditions.fl_root;
        let mut hue = bstar.atan2(astar).to_degrees();
        if hue < 0.0 {
            hue += 360.0;
        }
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);
        Self::from_jch_in(j, chroma, hue, conditions)
    }

    fn ucs(j: f64, m: f64, hue_radians: f64) -> (f64, f64, f64) {
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        (
            jstar,
            mstar * hue_radians.cos(),
            mstar * hue_radians.sin(),
        )
    }

    /// Get the hue in degrees.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the lightness J.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Get the brightness Q.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Get the colorfulness M.
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Get the saturation s.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Get the CAM16-UCS coordinates J*, a*, and b*.
    pub fn ucs_coordinates(&self) -> [f64; 3] {
        [self.jstar, self.astar, self.bstar]
    }

    /// Compute the perceptual distance to the other color in CAM16-UCS.
    pub fn distance(&self, other: &Self) -> f64 {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// Convert this color to a packed color under standard viewing conditions.
    pub fn to_argb(&self) -> Argb {
        self.to_argb_in(&ViewingConditions::STANDARD)
    }

    /// Convert this color to a packed color under the given viewing conditions.
    pub fn to_argb_in(&self, conditions: &ViewingConditions) -> Argb {
        argb_from_xyz(&self.xyz_in(conditions))
    }

    /// Compute the XYZ coordinates of this color under the given viewing
    /// conditions.
    pub fn xyz_in(&self, conditions: &ViewingConditions) -> [f64; 3] {
        let vc = conditions;
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let hue_radians = self.hue.to_radians();

        let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let (hue_sin, hue_cos) = hue_radians.sin_cos();
        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * hue_cos + 108.0 * t * hue_sin);
        let a = gamma * hue_cos;
        let b = gamma * hue_sin;

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        let adapted = [r_a, g_a, b_a];
        let rgb_f = [0, 1, 2].map(|i| {
            let magnitude = adapted[i].abs();
            let base = (27.13 * magnitude / (400.0 - magnitude)).max(0.0);
            signum(adapted[i]) * (100.0 / vc.fl) * base.powf(1.0 / 0.42) / vc.rgb_d[i]
        });

        multiply(&CAM16RGB_TO_XYZ, &rgb_f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Cam16;
    use crate::{assert_close_enough, Argb};

    #[test]
    fn test_from_argb() {
        let purple = Cam16::from_argb(Argb::new(0xff67_50a4));
        assert_close_enough!(purple.hue(), 298.980997210704);
        assert_close_enough!(purple.chroma(), 47.856526374970294);
        assert_close_enough!(purple.j(), 31.399821301403925);

        let blue = Cam16::from_argb(Argb::new(0xff00_00ff));
        assert_close_enough!(blue.hue(), 282.78817956187277);
        assert_close_enough!(blue.chroma(), 87.23069368032536);
        assert_close_enough!(blue.j(), 25.46562935643031);

        let black = Cam16::from_argb(Argb::BLACK);
        assert_eq!(black.chroma(), 0.0);
        assert_eq!(black.j(), 0.0);
    }

    #[test]
    fn test_round_trip() {
        for value in [0xff67_50a4_u32, 0xff00_00ff, 0xffff_0000, 0xff00_ff00, 0xff80_8080] {
            let argb = Argb::new(value);
            let cam = Cam16::from_argb(argb);
            assert_eq!(cam.to_argb(), argb);

            let [jstar, astar, bstar] = cam.ucs_coordinates();
            let ucs = Cam16::from_ucs(jstar, astar, bstar);
            assert_eq!(ucs.to_argb(), argb);

            let jch = Cam16::from_jch(cam.j(), cam.chroma(), cam.hue());
            assert_eq!(jch.to_argb(), argb);
        }
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(Argb::new(0xffff_0000));
        let blue = Cam16::from_argb(Argb::new(0xff00_00ff));
        assert_eq!(red.distance(&red), 0.0);
        assert_close_enough!(red.distance(&blue), blue.distance(&red));
        assert!(red.distance(&blue) > 1.0);
    }
}
