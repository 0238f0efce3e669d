//! Utility module with chromaseed's errors.
//!
//! The color pipeline itself never fails. Out-of-gamut requests are gamut
//! mapped, unreachable contrast targets are signalled with `None`, and the
//! scorer always falls back on a default color. The errors here cover the
//! edges where outside data enters the crate.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, PyErr};
use thiserror::Error;

/// An erroneous hexadecimal color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgbParseError {
    /// A color that does not start with `#`.
    #[error("color should start with `#`")]
    MissingHash,

    /// A color with the wrong number of hexadecimal digits. Valid colors have
    /// 3, 6, or 8 digits.
    #[error("color should have 3, 6, or 8 hexadecimal digits, not {0}")]
    UnexpectedLength(usize),

    /// A color with a character that is not a hexadecimal digit.
    #[error("color contains a malformed hexadecimal digit")]
    MalformedHex,
}

#[cfg(feature = "pyffi")]
impl From<ArgbParseError> for PyErr {
    fn from(value: ArgbParseError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid theme preference or snapshot field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// An ordinal that does not identify a scheme variant.
    #[error("{0} is not a valid scheme variant ordinal")]
    UnknownVariantOrdinal(u8),

    /// A name that does not identify a scheme variant.
    #[error("`{0}` is not a known scheme variant")]
    UnknownVariantName(String),

    /// A source color that is not fully opaque.
    #[error("source color {0:#010x} is not opaque")]
    TranslucentSource(u32),

    /// A theme name that the store does not know.
    #[error("no theme named `{0}`")]
    NoSuchTheme(String),
}

#[cfg(feature = "pyffi")]
impl From<PreferenceError> for PyErr {
    fn from(value: PreferenceError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while turning image bytes into pixels.
#[cfg(feature = "image")]
#[derive(Debug, Error)]
pub enum ImageError {
    /// The bytes could not be decoded as an image.
    #[error("could not decode image: {0}")]
    Decode(#[from] ::image::ImageError),

    /// The image has no pixels, or none of them are opaque.
    #[error("image has no opaque pixels")]
    Empty,
}

#[cfg(all(feature = "image", feature = "pyffi"))]
impl From<ImageError> for PyErr {
    fn from(value: ImageError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
