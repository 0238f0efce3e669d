use std::sync::Arc;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use super::dynamic_color::ToneResolver;
use super::variant::{ERROR_CHROMA, ERROR_HUE};
use super::{material_color, Role, Variant};
use crate::score::DEFAULT_FALLBACK;
use crate::{Argb, Hct, TonalPalette};

/// The palettes of a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

/// The inputs to a scheme: source color, variant, dark mode, contrast level,
/// and the six palettes derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemeBasis {
    source: Hct,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    primary: TonalPalette,
    secondary: TonalPalette,
    tertiary: TonalPalette,
    neutral: TonalPalette,
    neutral_variant: TonalPalette,
    error: TonalPalette,
}

impl SchemeBasis {
    /// Derive the basis for the source color, variant, dark mode, and contrast
    /// level. The contrast level is clamped to `-1..=1`, with not-a-number
    /// treated as 0.
    pub fn new(source: Hct, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        let contrast_level = if contrast_level.is_nan() {
            0.0
        } else {
            contrast_level.clamp(-1.0, 1.0)
        };

        let rules = variant.rules();
        Self {
            source,
            variant,
            is_dark,
            contrast_level,
            primary: rules.primary.palette(&source),
            secondary: rules.secondary.palette(&source),
            tertiary: rules.tertiary.palette(&source),
            neutral: rules.neutral.palette(&source),
            neutral_variant: rules.neutral_variant.palette(&source),
            error: TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
        }
    }

    /// Get the source color.
    pub fn source(&self) -> Hct {
        self.source
    }

    /// Get the variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Determine whether the scheme is dark.
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Get the clamped contrast level.
    pub fn contrast_level(&self) -> f64 {
        self.contrast_level
    }

    /// Get the palette.
    pub fn palette(&self, kind: PaletteKind) -> &TonalPalette {
        match kind {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
            PaletteKind::Tertiary => &self.tertiary,
            PaletteKind::Neutral => &self.neutral,
            PaletteKind::NeutralVariant => &self.neutral_variant,
            PaletteKind::Error => &self.error,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A dynamic color scheme.
///
/// A dynamic scheme maps every [`Role`] to a color. It is computed eagerly
/// when created and immutable afterwards. A scheme can be indexed by role and
/// iterated over in role order:
///
/// ```
/// # use chromaseed::{Argb, DynamicScheme, Role, Variant};
/// let scheme = DynamicScheme::new(Argb::new(0xff67_50a4), Variant::TonalSpot, false, 0.0);
/// assert_eq!(scheme[Role::Primary], Argb::new(0xff65_558f));
/// assert_eq!(scheme[Role::OnPrimary], Argb::WHITE);
/// assert_eq!(scheme.iter().count(), Role::COUNT);
/// ```
///
/// Schemes are cheap to clone and can be shared between threads.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "chromaseed"))]
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicScheme {
    basis: Arc<SchemeBasis>,
    colors: [Argb; Role::COUNT],
}

impl DynamicScheme {
    /// Create a new scheme for the source color.
    pub fn new(source: Argb, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::from_hct(Hct::from_argb(source), variant, is_dark, contrast_level)
    }

    /// Create a new scheme for the source color in HCT.
    pub fn from_hct(source: Hct, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::from_basis(SchemeBasis::new(source, variant, is_dark, contrast_level))
    }

    /// Create a new scheme from its basis.
    pub fn from_basis(basis: SchemeBasis) -> Self {
        let mut resolver = ToneResolver::new(&basis);
        let colors = Role::ALL.map(|role| {
            let tone = resolver.tone(role);
            basis.palette(material_color(role).palette).hct(tone).to_argb()
        });

        tracing::debug!(
            source = %basis.source.to_argb(),
            variant = %basis.variant,
            is_dark = basis.is_dark,
            contrast_level = basis.contrast_level,
            primary = %colors[Role::Primary as usize],
            "created dynamic scheme"
        );

        Self {
            basis: Arc::new(basis),
            colors,
        }
    }

    /// Create the default light scheme, a tonal spot scheme for the default
    /// fallback color.
    pub fn default_light() -> Self {
        SchemeConfig::default().build()
    }

    /// Create the default dark scheme, a tonal spot scheme for the default
    /// fallback color.
    pub fn default_dark() -> Self {
        SchemeConfig {
            is_dark: true,
            ..SchemeConfig::default()
        }
        .build()
    }

    /// Get this scheme's basis.
    pub fn basis(&self) -> &SchemeBasis {
        &self.basis
    }

    /// Get this scheme's source color.
    pub fn source(&self) -> Argb {
        self.basis.source.to_argb()
    }

    /// Get this scheme's variant.
    pub fn variant(&self) -> Variant {
        self.basis.variant
    }

    /// Determine whether this scheme is dark.
    pub fn is_dark(&self) -> bool {
        self.basis.is_dark
    }

    /// Get this scheme's clamped contrast level.
    pub fn contrast_level(&self) -> f64 {
        self.basis.contrast_level
    }

    /// Get the color for the role.
    pub fn get(&self, role: Role) -> Argb {
        self.colors[role as usize]
    }

    /// Get an iterator over roles and their colors in role order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Role, Argb)> + '_ {
        Role::all().zip(self.colors.iter().copied())
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl DynamicScheme {
    /// Create a new scheme for the source color. <i class=python-only>Python
    /// only!</i>
    #[new]
    #[pyo3(signature = (source, variant = Variant::TonalSpot, is_dark = false, contrast_level = 0.0))]
    pub fn py_new(source: u32, variant: Variant, is_dark: bool, contrast_level: f64) -> Self {
        Self::new(Argb::new(source), variant, is_dark, contrast_level)
    }

    /// Get the color for the role. <i class=python-only>Python only!</i>
    pub fn __getitem__(&self, role: Role) -> u32 {
        self.get(role).value()
    }

    /// Get the number of roles. <i class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        Role::COUNT
    }

    /// Get this scheme's source color. <i class=python-only>Python only!</i>
    #[pyo3(name = "source")]
    pub fn py_source(&self) -> u32 {
        self.source().value()
    }

    /// Get this scheme's variant. <i class=python-only>Python only!</i>
    #[pyo3(name = "variant")]
    pub fn py_variant(&self) -> Variant {
        self.variant()
    }

    /// Determine whether this scheme is dark. <i class=python-only>Python
    /// only!</i>
    #[pyo3(name = "is_dark")]
    pub fn py_is_dark(&self) -> bool {
        self.is_dark()
    }

    /// Get this scheme's contrast level. <i class=python-only>Python only!</i>
    #[pyo3(name = "contrast_level")]
    pub fn py_contrast_level(&self) -> f64 {
        self.contrast_level()
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!(
            "DynamicScheme({}, {}, is_dark={}, contrast_level={})",
            self.source(),
            self.variant(),
            self.is_dark(),
            self.contrast_level()
        )
    }
}

impl std::ops::Index<Role> for DynamicScheme {
    type Output = Argb;

    fn index(&self, index: Role) -> &Self::Output {
        &self.colors[index as usize]
    }
}

impl AsRef<[Argb]> for DynamicScheme {
    fn as_ref(&self) -> &[Argb] {
        &self.colors
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Configuration for creating a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemeConfig {
    /// The source color.
    pub source: Argb,
    /// The variant.
    pub variant: Variant,
    /// Whether the scheme is dark.
    pub is_dark: bool,
    /// The contrast level from -1 to 1.
    pub contrast_level: f64,
}

impl SchemeConfig {
    /// Create the scheme with this configuration.
    pub fn build(&self) -> DynamicScheme {
        DynamicScheme::new(self.source, self.variant, self.is_dark, self.contrast_level)
    }
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_FALLBACK,
            variant: Variant::TonalSpot,
            is_dark: false,
            contrast_level: 0.0,
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{DynamicScheme, SchemeConfig};
    use crate::core::ratio_of_tones;
    use crate::dynamic::{Role, Variant};
    use crate::{Argb, Hct};

    const PURPLE: Argb = Argb::new(0xff67_50a4);

    fn check(scheme: &DynamicScheme, expected: &[(Role, u32)]) {
        for (role, argb) in expected {
            assert_eq!(scheme[*role], Argb::new(*argb), "{}", role);
        }
    }

    fn tone(scheme: &DynamicScheme, role: Role) -> f64 {
        Hct::from_argb(scheme[role]).tone()
    }

    #[test]
    fn test_tonal_spot() {
        let light = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 0.0);
        check(
            &light,
            &[
                (Role::Primary, 0xff65558f),
                (Role::OnPrimary, 0xffffffff),
                (Role::PrimaryContainer, 0xffe9ddff),
                (Role::OnPrimaryContainer, 0xff4d3d75),
                (Role::Secondary, 0xff625b71),
                (Role::Tertiary, 0xff7e5260),
                (Role::Surface, 0xfffdf7ff),
                (Role::OnSurface, 0xff1d1b20),
                (Role::SurfaceContainer, 0xfff2ecf4),
                (Role::Outline, 0xff7a757f),
                (Role::Error, 0xffba1a1a),
                (Role::PrimaryFixed, 0xffe9ddff),
                (Role::OnPrimaryFixedVariant, 0xff4d3d75),
            ],
        );

        let dark = DynamicScheme::new(PURPLE, Variant::TonalSpot, true, 0.0);
        check(
            &dark,
            &[
                (Role::Primary, 0xffcfbdfe),
                (Role::OnPrimary, 0xff36275d),
                (Role::PrimaryContainer, 0xff4d3d75),
                (Role::OnPrimaryContainer, 0xffe9ddff),
                (Role::Secondary, 0xffcbc2db),
                (Role::Tertiary, 0xffefb8c8),
                (Role::TertiaryContainer, 0xff633b48),
                (Role::Surface, 0xff141218),
                (Role::SurfaceContainerHighest, 0xff36343a),
                (Role::OnSurface, 0xffe6e0e9),
                (Role::Outline, 0xff948f99),
                (Role::Error, 0xffffb4ab),
                (Role::InversePrimary, 0xff65558f),
                (Role::OnPrimaryFixed, 0xff201047),
            ],
        );
    }

    #[test]
    fn test_contrast_levels() {
        let high = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 1.0);
        check(
            &high,
            &[
                (Role::Primary, 0xff312259),
                (Role::OnPrimary, 0xffffffff),
                (Role::PrimaryContainer, 0xff4f4078),
                (Role::OnPrimaryContainer, 0xffffffff),
                (Role::SurfaceContainerHighest, 0xffcac5cc),
                (Role::OnSurface, 0xff000000),
                (Role::Error, 0xff600004),
            ],
        );

        let low = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, -1.0);
        check(
            &low,
            &[
                (Role::Primary, 0xff7b6ba7),
                (Role::PrimaryContainer, 0xffe0d2ff),
                (Role::OnPrimaryContainer, 0xff8171ac),
                (Role::OnSurface, 0xff615e64),
                (Role::Outline, 0xffb5b0bb),
            ],
        );

        // Contrast levels are clamped.
        assert_eq!(
            DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 3.0).as_ref(),
            high.as_ref()
        );
        assert_eq!(
            DynamicScheme::new(PURPLE, Variant::TonalSpot, false, -7.0).as_ref(),
            low.as_ref()
        );
        assert_eq!(
            DynamicScheme::new(PURPLE, Variant::TonalSpot, false, f64::NAN).contrast_level(),
            0.0
        );
    }

    #[test]
    fn test_monochrome() {
        let light = DynamicScheme::new(PURPLE, Variant::Monochrome, false, 0.0);
        check(
            &light,
            &[
                (Role::Primary, 0xff000000),
                (Role::OnPrimary, 0xffe2e2e2),
                (Role::PrimaryContainer, 0xff3b3b3b),
                (Role::Secondary, 0xff5e5e5e),
                (Role::TertiaryContainer, 0xff747474),
                (Role::Surface, 0xfff9f9f9),
                (Role::Error, 0xffba1a1a),
            ],
        );

        let dark = DynamicScheme::new(PURPLE, Variant::Monochrome, true, 0.0);
        check(
            &dark,
            &[
                (Role::Primary, 0xffffffff),
                (Role::OnPrimary, 0xff1b1b1b),
                (Role::PrimaryContainer, 0xffd4d4d4),
                (Role::Surface, 0xff131313),
            ],
        );
    }

    #[test]
    fn test_fidelity_and_content() {
        let blue = Argb::new(0xff00_00ff);
        let fidelity = DynamicScheme::new(blue, Variant::Fidelity, false, 0.0);
        check(
            &fidelity,
            &[
                (Role::Primary, 0xff0001bb),
                (Role::PrimaryContainer, 0xff0000ff),
                (Role::OnPrimaryContainer, 0xffb3b7ff),
                (Role::Secondary, 0xff4c53b8),
                (Role::Tertiary, 0xff720001),
                (Role::TertiaryContainer, 0xff9d0002),
                (Role::Surface, 0xfffbf8ff),
            ],
        );

        let content = DynamicScheme::new(blue, Variant::Content, false, 0.0);
        check(
            &content,
            &[
                (Role::Primary, 0xff0001bb),
                (Role::PrimaryContainer, 0xff0000ff),
                (Role::Tertiary, 0xff5d0074),
                (Role::TertiaryContainer, 0xff81009f),
            ],
        );
    }

    #[test]
    fn test_other_variants() {
        let blue = Argb::new(0xff00_00ff);
        let red = Argb::new(0xffff_0000);

        check(
            &DynamicScheme::new(blue, Variant::Vibrant, false, 0.0),
            &[
                (Role::Primary, 0xff343dff),
                (Role::Secondary, 0xff62597c),
                (Role::Tertiary, 0xff6e5483),
            ],
        );
        check(
            &DynamicScheme::new(blue, Variant::Expressive, true, 0.0),
            &[
                (Role::Primary, 0xff87d7ab),
                (Role::Secondary, 0xffdfbbde),
                (Role::Tertiary, 0xffd2bdf5),
                (Role::Surface, 0xff14121a),
            ],
        );
        check(
            &DynamicScheme::new(red, Variant::FruitSalad, false, 0.0),
            &[
                (Role::Primary, 0xff8c4381),
                (Role::Secondary, 0xff814c77),
                (Role::Tertiary, 0xff904b40),
            ],
        );
        check(
            &DynamicScheme::new(red, Variant::Rainbow, false, 0.0),
            &[
                (Role::Primary, 0xff9c4235),
                (Role::Tertiary, 0xff705c2e),
                (Role::Surface, 0xfff9f9f9),
            ],
        );
        check(
            &DynamicScheme::new(red, Variant::Neutral, true, 0.5),
            &[
                (Role::Primary, 0xfff6d5cf),
                (Role::PrimaryContainer, 0xffa78a86),
                (Role::OnPrimaryContainer, 0xff000000),
                (Role::OnSurface, 0xffffffff),
            ],
        );
    }

    #[test]
    fn test_on_primary_contrast() {
        for source in [0xff67_50a4_u32, 0xff00_00ff, 0xffff_0000, 0xffff_ffff, 0xff00_0000] {
            for variant in Variant::ALL {
                for is_dark in [false, true] {
                    let scheme = DynamicScheme::new(Argb::new(source), variant, is_dark, 0.0);
                    let ratio = ratio_of_tones(
                        tone(&scheme, Role::Primary),
                        tone(&scheme, Role::OnPrimary),
                    );
                    assert!(3.0 <= ratio, "{:#x} {} {} {}", source, variant, is_dark, ratio);
                }
            }
        }
    }

    #[test]
    fn test_config() {
        let config: SchemeConfig =
            serde_json::from_str(r##"{"source": "#6750a4", "isDark": true}"##).unwrap();
        assert_eq!(config.variant, Variant::TonalSpot);
        assert_eq!(config.contrast_level, 0.0);
        assert_eq!(config.build()[Role::Primary], Argb::new(0xffcf_bdfe));

        let light = DynamicScheme::default_light();
        let dark = DynamicScheme::default_dark();
        assert_eq!(light.source(), Argb::new(0xff42_85f4));
        assert!(!light.is_dark());
        assert!(dark.is_dark());
        assert_eq!(light.variant(), dark.variant());
    }

    #[test]
    fn test_sharing() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<DynamicScheme>();

        let scheme = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 0.0);
        let copy = scheme.clone();
        let handle = std::thread::spawn(move || copy[Role::Primary]);
        assert_eq!(handle.join().unwrap(), scheme[Role::Primary]);
    }
}
