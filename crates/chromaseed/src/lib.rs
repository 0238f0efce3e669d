//! # Chromaseed
//!
//! Chromaseed picks source colors from images and derives accessible color
//! schemes from them, following Material Design's dynamic color.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Chromaseed's pipeline runs from pixels to schemes:
//!
//!   * [`Argb`] is the **packed sRGB color** used at every interface. [`Hct`]
//!     re-expresses it in terms of hue, chroma, and tone, with tone equal to
//!     CIE L*. The [`contrast`] module computes contrast ratios between tones
//!     and solves for tones that meet a ratio.
//!   * The [`quantize`] module **reduces pixels to a few representative
//!     colors**, first with Wu's histogram splitting and then with weighted
//!     k-means. [`score::score`] **ranks those colors** by how well they serve
//!     as a theme's source color and always returns at least one color.
//!   * A [`TonalPalette`] holds **one hue and chroma across all tones**.
//!   * A [`DynamicScheme`] assigns a color to every [`Role`], given a source
//!     color, a [`Variant`], light or dark mode, and a contrast level. Each
//!     variant derives six palettes from the source color. Each role then
//!     picks a palette and a tone that meets its contrast requirements.
//!   * [`blend::harmonize`] nudges fixed colors, such as warnings, towards
//!     the source color's hue.
//!   * A [`Swatch`] pairs an extracted color with legible text colors.
//!   * The [`persist`] and [`export`] modules **save and export** schemes.
//!
//!
//! ## 2. From Image to Scheme
//!
//! ```
//! # use chromaseed::{Argb, DynamicScheme, Role, Variant};
//! # use chromaseed::quantize::QuantizeOptions;
//! # use chromaseed::score::{source_colors, ScoreOptions};
//! let mut pixels = vec![Argb::new(0xff67_50a4); 900];
//! pixels.extend([Argb::WHITE; 100]);
//!
//! let colors = source_colors(
//!     &pixels,
//!     &QuantizeOptions::for_source_colors(),
//!     &ScoreOptions::default(),
//! );
//! assert_eq!(colors, vec![Argb::new(0xff67_50a4)]);
//!
//! let scheme = DynamicScheme::new(colors[0], Variant::TonalSpot, false, 0.0);
//! assert_eq!(scheme[Role::Primary], Argb::new(0xff65_558f));
//! assert_eq!(scheme[Role::OnPrimary], Argb::WHITE);
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Chromaseed supports two feature flags:
//!
//!   - **`image`** adds the [`image`](mod@image) module, which decodes PNG
//!     and JPEG images and downsamples them before quantization. This
//!     feature is disabled by default.
//!   - **`pyffi`** controls chromaseed's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]
//!
//! Chromaseed logs with [tracing](https://docs.rs/tracing). It emits debug
//! events at the boundaries of the pipeline and trace events for individual
//! roles, but never installs a subscriber.

mod argb;
pub mod blend;
mod core;
pub mod dislike;
pub mod dynamic;
pub mod error;
pub mod export;
mod hct;
#[cfg(feature = "image")]
pub mod image;
mod palette;
pub mod persist;
pub mod quantize;
pub mod score;
mod swatch;
pub mod temperature;

pub mod contrast {
    //! Contrast ratios between tones.
    //!
    //! Ratios follow WCAG's relative luminance formula and range from 1 for
    //! identical tones to 21 for black and white.
    pub use crate::core::{
        darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, ratio_of_ys,
    };
}

pub mod conversion {
    //! Conversions between sRGB, linear sRGB, XYZ, and L*a*b*.
    pub use crate::core::{
        argb_from_lab, argb_from_linrgb, argb_from_lstar, argb_from_xyz, delinearized,
        difference_degrees, lab_from_argb, linearized, linrgb_from_argb, lstar_from_argb,
        lstar_from_y, sanitize_degrees, xyz_from_argb, y_from_lstar, WHITE_POINT_D65,
    };
    pub use crate::hct::{solve_to_argb, Cam16, ViewingConditions};
}

#[doc(hidden)]
pub use core::{to_eq_bits, ROUNDING_FACTOR};

pub use argb::Argb;
pub use dynamic::{DynamicScheme, Role, Variant};
pub use hct::Hct;
pub use palette::{TonalPalette, CACHED_TONES};
pub use swatch::{minimum_alpha, Swatch, MIN_CONTRAST_BODY_TEXT, MIN_CONTRAST_TITLE_TEXT};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn chromaseed(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(contrast::ratio_of_tones, m)?)?;
    m.add_function(wrap_pyfunction!(contrast::lighter, m)?)?;
    m.add_function(wrap_pyfunction!(contrast::darker, m)?)?;
    m.add_function(wrap_pyfunction!(contrast::lighter_unsafe, m)?)?;
    m.add_function(wrap_pyfunction!(contrast::darker_unsafe, m)?)?;
    m.add_function(wrap_pyfunction!(score::py_source_colors, m)?)?;
    m.add_function(wrap_pyfunction!(blend::py_harmonize, m)?)?;

    m.add_class::<DynamicScheme>()?;
    m.add_class::<Hct>()?;
    m.add_class::<Role>()?;
    m.add_class::<dynamic::RoleIterator>()?;
    m.add_class::<Swatch>()?;
    m.add_class::<Variant>()?;

    m.add("DEFAULT_FALLBACK", u32::from(score::DEFAULT_FALLBACK))?;
    Ok(())
}
