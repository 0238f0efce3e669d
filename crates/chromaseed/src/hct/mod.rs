//! The HCT color space: hue, chroma, and tone.
//!
//! HCT combines CAM16's hue and chroma with CIE L* as tone. Hue and chroma
//! predict how colors look, while tone directly determines the contrast ratio
//! between two colors. That makes HCT a good basis for generating colors that
//! look alike and still meet accessibility guidelines.
//!
//! Since sRGB cannot represent every combination of hue, chroma, and tone,
//! [`Hct::new`] treats the requested chroma as an upper bound: The resulting
//! color has the requested hue and tone, but possibly less chroma.

mod cam16;
mod solver;
mod viewing_conditions;

pub use cam16::Cam16;
pub use solver::solve_to_argb;
pub use viewing_conditions::ViewingConditions;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{lstar_from_argb, lstar_from_y};
use crate::Argb;

/// A color in HCT.
///
/// An HCT color always corresponds to an sRGB color. Its hue, chroma, and tone
/// are the actual coordinates of that sRGB color, which may differ from the
/// coordinates requested when creating the color:
///
/// ```
/// # use chromaseed::{Argb, Hct};
/// let red = Hct::new(25.0, 200.0, 40.0);
/// assert!(red.chroma() < 200.0);
/// assert!((red.tone() - 40.0).abs() < 0.5);
///
/// let purple = Hct::from_argb(Argb::new(0xff67_50a4));
/// assert_eq!(purple.to_argb(), Argb::new(0xff67_50a4));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "chromaseed"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Create the sRGB color closest to the given hue, chroma, and tone.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Convert the packed color to HCT.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Get the hue in degrees `0..360`.
    #[inline]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma.
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the tone `0..=100`.
    #[inline]
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// Get the packed sRGB color.
    #[inline]
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Create a new color with this color's chroma and tone but the given hue.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Create a new color with this color's hue and tone but the given chroma.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Create a new color with this color's hue and chroma but the given tone.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// Determine how this color looks under the given viewing conditions.
    ///
    /// This method converts the color to XYZ as seen under the given
    /// conditions and then reinterprets the result under standard viewing
    /// conditions.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn in_viewing_conditions(&self, conditions: &ViewingConditions) -> Self {
        let viewed = Cam16::from_argb(self.argb).xyz_in(conditions);
        let recast = Cam16::from_xyz_in(&viewed, &ViewingConditions::STANDARD);
        Self::new(recast.hue(), recast.chroma(), lstar_from_y(viewed[1]))
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Hct {
    /// Create the sRGB color closest to the given hue, chroma, and tone. <i
    /// class=python-only>Python only!</i>
    #[new]
    pub fn py_new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::new(hue, chroma, tone)
    }

    /// Convert the packed color to HCT. <i class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_argb")]
    pub fn py_from_argb(argb: u32) -> Self {
        Self::from_argb(Argb::new(argb))
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[getter]
    #[pyo3(name = "hue")]
    pub fn py_hue(&self) -> f64 {
        self.hue
    }

    /// Get the chroma. <i class=python-only>Python only!</i>
    #[getter]
    #[pyo3(name = "chroma")]
    pub fn py_chroma(&self) -> f64 {
        self.chroma
    }

    /// Get the tone. <i class=python-only>Python only!</i>
    #[getter]
    #[pyo3(name = "tone")]
    pub fn py_tone(&self) -> f64 {
        self.tone
    }

    /// Get the packed sRGB color. <i class=python-only>Python only!</i>
    #[pyo3(name = "to_argb")]
    pub fn py_to_argb(&self) -> u32 {
        self.argb.value()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{}", self)
    }
}

impl From<Argb> for Hct {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}

impl From<Hct> for Argb {
    fn from(value: Hct) -> Self {
        value.argb
    }
}

impl std::fmt::Display for Hct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Hct({:.2}, {:.2}, {:.2}, {})",
            self.hue, self.chroma, self.tone, self.argb
        )
    }
}

// ====================================================================================================================
