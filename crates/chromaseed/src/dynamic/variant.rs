//! Scheme variants and their palette rules.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::sanitize_degrees;
use crate::dislike::fix_if_disliked;
use crate::error::PreferenceError;
use crate::temperature::TemperatureCache;
use crate::{Hct, TonalPalette};

/// A scheme variant.
///
/// A variant determines how a scheme derives the hues and chromas of its
/// primary, secondary, tertiary, neutral, and neutral variant palettes from
/// the source color. The error palette is the same for all variants.
///
/// The variants are ordered. Their ordinals are stable and also serve as the
/// persisted representation, see [`Variant::ordinal`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "chromaseed")
)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// All palettes are grayscale.
    Monochrome,
    /// Close to grayscale, with a hint of the source hue.
    Neutral,
    /// Calm colors with a medium-chroma primary palette. The default.
    #[default]
    TonalSpot,
    /// Maximum chroma for the primary palette, rotated hues for the others.
    Vibrant,
    /// A playful scheme whose primary hue is far from the source hue.
    Expressive,
    /// Palettes that stay faithful to the source color's chroma.
    Fidelity,
    /// Like fidelity, with a tertiary color analogous to the source.
    Content,
    /// A colorful primary palette on grayscale neutrals.
    Rainbow,
    /// Rotated primary and secondary hues.
    FruitSalad,
}

impl Variant {
    /// The number of variants.
    pub const COUNT: usize = 9;

    /// All variants in ordinal order.
    pub const ALL: [Variant; Variant::COUNT] = [
        Variant::Monochrome,
        Variant::Neutral,
        Variant::TonalSpot,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Fidelity,
        Variant::Content,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    /// Get this variant's camel-cased name, which is also its serialized
    /// representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Neutral => "neutral",
            Self::TonalSpot => "tonalSpot",
            Self::Vibrant => "vibrant",
            Self::Expressive => "expressive",
            Self::Fidelity => "fidelity",
            Self::Content => "content",
            Self::Rainbow => "rainbow",
            Self::FruitSalad => "fruitSalad",
        }
    }

    /// Get this variant's ordinal.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Determine whether this variant keeps container tones close to the
    /// source color.
    pub fn is_fidelity(&self) -> bool {
        matches!(self, Self::Fidelity | Self::Content)
    }

    /// Get the palette rules for this variant.
    pub fn rules(&self) -> &'static VariantRules {
        &VARIANT_RULES[*self as usize]
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Variant {
    /// Get this variant's camel-cased name. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "name")]
    pub fn py_name(&self) -> &'static str {
        self.name()
    }

    /// Get this variant's ordinal. <i class=python-only>Python only!</i>
    #[pyo3(name = "ordinal")]
    pub fn py_ordinal(&self) -> u8 {
        self.ordinal()
    }

    /// Look up the variant with the given ordinal. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    pub fn from_ordinal(ordinal: u8) -> Result<Self, PreferenceError> {
        Self::try_from(ordinal)
    }
}

impl TryFrom<u8> for Variant {
    type Error = PreferenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(PreferenceError::UnknownVariantOrdinal(value))
    }
}

impl From<Variant> for u8 {
    fn from(value: Variant) -> Self {
        value.ordinal()
    }
}

impl std::str::FromStr for Variant {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|variant| variant.name() == s)
            .copied()
            .ok_or_else(|| PreferenceError::UnknownVariantName(s.to_owned()))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A rule for deriving a palette's hue from the source hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HueRule {
    /// The source hue plus the offset in degrees.
    Offset(f64),
    /// The source hue plus a rotation that depends on the source hue.
    ///
    /// The first array holds the boundaries of hue ranges, the second array
    /// the rotation for each range. A source hue that falls exactly on a
    /// boundary is not rotated.
    Rotated(&'static [f64; 9], &'static [f64; 9]),
}

impl HueRule {
    /// Apply this rule to the source hue.
    pub fn apply(&self, source_hue: f64) -> f64 {
        match *self {
            Self::Offset(offset) => sanitize_degrees(source_hue + offset),
            Self::Rotated(hues, rotations) => {
                for (bounds, rotation) in hues.windows(2).zip(rotations) {
                    if bounds[0] < source_hue && source_hue < bounds[1] {
                        return sanitize_degrees(source_hue + rotation);
                    }
                }
                source_hue
            }
        }
    }
}

/// A rule for deriving a palette's chroma from the source chroma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChromaRule {
    /// A fixed chroma.
    Fixed(f64),
    /// The source chroma.
    Source,
    /// The larger of the source chroma minus 32 and half the source chroma.
    Reduced,
    /// The source chroma divided by the divisor plus the addend.
    Scaled { divisor: f64, addend: f64 },
}

impl ChromaRule {
    /// Apply this rule to the source chroma.
    pub fn apply(&self, source_chroma: f64) -> f64 {
        match *self {
            Self::Fixed(chroma) => chroma,
            Self::Source => source_chroma,
            Self::Reduced => (source_chroma - 32.0).max(source_chroma * 0.5),
            Self::Scaled { divisor, addend } => source_chroma / divisor + addend,
        }
    }
}

/// A rule for deriving one palette from the source color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteRule {
    /// A palette with derived hue and chroma.
    Derived(HueRule, ChromaRule),
    /// The palette of the source color's temperature complement.
    Complement,
    /// The palette of the third of three analogous colors across six
    /// divisions of the hue circle.
    Analogous,
}

impl PaletteRule {
    const fn offset(degrees: f64, chroma: f64) -> Self {
        Self::Derived(HueRule::Offset(degrees), ChromaRule::Fixed(chroma))
    }

    const fn same(chroma: f64) -> Self {
        Self::offset(0.0, chroma)
    }

    /// Create the palette for the source color.
    pub fn palette(&self, source: &Hct) -> TonalPalette {
        match self {
            Self::Derived(hue, chroma) => TonalPalette::from_hue_and_chroma(
                hue.apply(source.hue()),
                chroma.apply(source.chroma()),
            ),
            Self::Complement => {
                let complement = TemperatureCache::new(*source).complement();
                TonalPalette::from_hct(fix_if_disliked(complement))
            }
            Self::Analogous => {
                let analogous = TemperatureCache::new(*source).analogous_with(3, 6);
                let color = analogous.get(2).copied().unwrap_or(*source);
                TonalPalette::from_hct(fix_if_disliked(color))
            }
        }
    }
}

/// The palette rules for one variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantRules {
    pub primary: PaletteRule,
    pub secondary: PaletteRule,
    pub tertiary: PaletteRule,
    pub neutral: PaletteRule,
    pub neutral_variant: PaletteRule,
}

impl VariantRules {
    const fn fixed(chromas: [f64; 5], tertiary_offset: f64) -> Self {
        Self {
            primary: PaletteRule::same(chromas[0]),
            secondary: PaletteRule::same(chromas[1]),
            tertiary: PaletteRule::offset(tertiary_offset, chromas[2]),
            neutral: PaletteRule::same(chromas[3]),
            neutral_variant: PaletteRule::same(chromas[4]),
        }
    }

    const fn fidelity(tertiary: PaletteRule) -> Self {
        Self {
            primary: PaletteRule::Derived(HueRule::Offset(0.0), ChromaRule::Source),
            secondary: PaletteRule::Derived(HueRule::Offset(0.0), ChromaRule::Reduced),
            tertiary,
            neutral: PaletteRule::Derived(
                HueRule::Offset(0.0),
                ChromaRule::Scaled {
                    divisor: 8.0,
                    addend: 0.0,
                },
            ),
            neutral_variant: PaletteRule::Derived(
                HueRule::Offset(0.0),
                ChromaRule::Scaled {
                    divisor: 8.0,
                    addend: 4.0,
                },
            ),
        }
    }
}

/// The hue of the error palette.
pub const ERROR_HUE: f64 = 25.0;

/// The chroma of the error palette.
pub const ERROR_CHROMA: f64 = 84.0;

const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] =
    [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// The palette rules, indexed by variant ordinal.
pub static VARIANT_RULES: [VariantRules; Variant::COUNT] = [
    // Monochrome
    VariantRules::fixed([0.0, 0.0, 0.0, 0.0, 0.0], 0.0),
    // Neutral
    VariantRules::fixed([12.0, 8.0, 16.0, 2.0, 2.0], 0.0),
    // TonalSpot
    VariantRules::fixed([36.0, 16.0, 24.0, 6.0, 8.0], 60.0),
    // Vibrant
    VariantRules {
        primary: PaletteRule::same(200.0),
        secondary: PaletteRule::Derived(
            HueRule::Rotated(&VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS),
            ChromaRule::Fixed(24.0),
        ),
        tertiary: PaletteRule::Derived(
            HueRule::Rotated(&VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS),
            ChromaRule::Fixed(32.0),
        ),
        neutral: PaletteRule::same(10.0),
        neutral_variant: PaletteRule::same(12.0),
    },
    // Expressive
    VariantRules {
        primary: PaletteRule::offset(240.0, 40.0),
        secondary: PaletteRule::Derived(
            HueRule::Rotated(&EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS),
            ChromaRule::Fixed(24.0),
        ),
        tertiary: PaletteRule::Derived(
            HueRule::Rotated(&EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS),
            ChromaRule::Fixed(32.0),
        ),
        neutral: PaletteRule::offset(15.0, 8.0),
        neutral_variant: PaletteRule::offset(15.0, 12.0),
    },
    // Fidelity
    VariantRules::fidelity(PaletteRule::Complement),
    // Content
    VariantRules::fidelity(PaletteRule::Analogous),
    // Rainbow
    VariantRules::fixed([48.0, 16.0, 24.0, 0.0, 0.0], 60.0),
    // FruitSalad
    VariantRules {
        primary: PaletteRule::offset(-50.0, 48.0),
        secondary: PaletteRule::offset(-50.0, 36.0),
        tertiary: PaletteRule::same(36.0),
        neutral: PaletteRule::same(10.0),
        neutral_variant: PaletteRule::same(16.0),
    },
];

// ====================================================================================================================
