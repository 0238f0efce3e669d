//! Packed 32-bit sRGB colors.
//!
//! [`Argb`] is the canonical representation of colors at every external
//! interface of this crate. It stores alpha, red, green, and blue as one byte
//! each, with alpha in the most significant byte. That is also the layout used
//! by Android and the web's `#aarrggbb` notation, so values can be copied
//! verbatim from those environments.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArgbParseError;

/// A packed sRGB color with alpha.
///
/// The color formats as hashed hexadecimal, using six digits for opaque colors
/// and eight digits otherwise:
///
/// ```
/// # use chromaseed::Argb;
/// let purple = Argb::new(0xff67_50a4);
/// assert_eq!(purple.to_string(), "#6750a4");
/// assert_eq!(format!("{:?}", purple), "Argb(0xff6750a4)");
/// assert_eq!("#6750a4".parse::<Argb>(), Ok(purple));
/// ```
///
/// Serde uses the same string representation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xff00_0000);

    /// Opaque white.
    pub const WHITE: Argb = Argb(0xffff_ffff);

    /// Create a new color from its packed representation.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a new opaque color from its red, green, and blue components.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xff, red, green, blue)
    }

    /// Create a new color from its alpha, red, green, and blue components.
    #[inline]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// Get the packed representation.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the alpha component.
    #[inline]
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Get the red component.
    #[inline]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Get the green component.
    #[inline]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the blue component.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Get the red, green, and blue components.
    #[inline]
    pub const fn to_rgb(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Determine whether this color is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.alpha() == 0xff
    }

    /// Replace this color's alpha component.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(&self, alpha: u8) -> Self {
        Self(self.0 & 0x00ff_ffff | (alpha as u32) << 24)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl From<[u8; 3]> for Argb {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::from_rgb(r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the hexadecimal digits following the `#`.
fn parse_hashed(s: &str) -> Result<u32, ArgbParseError> {
    let digits = s.strip_prefix('#').ok_or(ArgbParseError::MissingHash)?;
    if !matches!(digits.len(), 3 | 6 | 8) {
        return Err(ArgbParseError::UnexpectedLength(digits.len()));
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ArgbParseError::MalformedHex);
    }

    let n = u32::from_str_radix(digits, 16).map_err(|_| ArgbParseError::MalformedHex)?;
    match digits.len() {
        3 => {
            let (r, g, b) = ((n >> 8) & 0xf, (n >> 4) & 0xf, n & 0xf);
            Ok(0xff00_0000 | (r * 17) << 16 | (g * 17) << 8 | b * 17)
        }
        6 => Ok(0xff00_0000 | n),
        _ => Ok(n),
    }
}

impl FromStr for Argb {
    type Err = ArgbParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s.trim()).map(Self)
    }
}

impl TryFrom<String> for Argb {
    type Error = ArgbParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(value: Argb) -> Self {
        value.to_string()
    }
}

impl std::fmt::Debug for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Argb({:#010x})", self.0)
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

impl std::fmt::LowerHex for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl std::fmt::UpperHex for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Argb, ArgbParseError};

    #[test]
    fn test_components() {
        let color = Argb::new(0x8012_3456);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert!(!color.is_opaque());
        assert!(color.with_alpha(0xff).is_opaque());
        assert_eq!(Argb::from_rgb(0x12, 0x34, 0x56), color.with_alpha(0xff));
        assert_eq!(Argb::from([0x12, 0x34, 0x56]).value(), 0xff12_3456);
    }

    #[test]
    fn test_parse() -> Result<(), ArgbParseError> {
        assert_eq!("#123".parse::<Argb>()?, Argb::new(0xff11_2233));
        assert_eq!("#112233".parse::<Argb>()?, Argb::new(0xff11_2233));
        assert_eq!(" #80112233 ".parse::<Argb>()?, Argb::new(0x8011_2233));
        assert_eq!("fff".parse::<Argb>(), Err(ArgbParseError::MissingHash));
        assert_eq!(
            "#ffff".parse::<Argb>(),
            Err(ArgbParseError::UnexpectedLength(4))
        );
        assert_eq!("#0g0".parse::<Argb>(), Err(ArgbParseError::MalformedHex));
        assert_eq!("#+12".parse::<Argb>(), Err(ArgbParseError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(Argb::new(0xff00_00ff).to_string(), "#0000ff");
        assert_eq!(Argb::new(0x0100_00ff).to_string(), "#010000ff");
        assert_eq!(format!("{:X}", Argb::WHITE), "FFFFFFFF");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Argb::new(0xff65_558f)).unwrap();
        assert_eq!(json, "\"#65558f\"");
        let color: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(color, Argb::new(0xff65_558f));
        assert!(serde_json::from_str::<Argb>("\"65558f\"").is_err());
    }
}
