//! The named color roles of a dynamic scheme.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// A color role.
///
/// A role is a semantic slot in a color scheme, such as the color of primary
/// buttons or the color of text on them. Roles serialize as, and are named by,
/// their camel-cased names, e.g., `onPrimaryContainer`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "chromaseed")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    PrimaryPaletteKeyColor,
    SecondaryPaletteKeyColor,
    TertiaryPaletteKeyColor,
    NeutralPaletteKeyColor,
    NeutralVariantPaletteKeyColor,
    Background,
    OnBackground,
    Surface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    SurfaceTint,
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
}

impl Role {
    /// The total number of roles.
    pub const COUNT: usize = 54;

    /// All roles in canonical order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::PrimaryPaletteKeyColor,
        Role::SecondaryPaletteKeyColor,
        Role::TertiaryPaletteKeyColor,
        Role::NeutralPaletteKeyColor,
        Role::NeutralVariantPaletteKeyColor,
        Role::Background,
        Role::OnBackground,
        Role::Surface,
        Role::SurfaceDim,
        Role::SurfaceBright,
        Role::SurfaceContainerLowest,
        Role::SurfaceContainerLow,
        Role::SurfaceContainer,
        Role::SurfaceContainerHigh,
        Role::SurfaceContainerHighest,
        Role::OnSurface,
        Role::SurfaceVariant,
        Role::OnSurfaceVariant,
        Role::InverseSurface,
        Role::InverseOnSurface,
        Role::Outline,
        Role::OutlineVariant,
        Role::Shadow,
        Role::Scrim,
        Role::SurfaceTint,
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::InversePrimary,
        Role::Secondary,
        Role::OnSecondary,
        Role::SecondaryContainer,
        Role::OnSecondaryContainer,
        Role::Tertiary,
        Role::OnTertiary,
        Role::TertiaryContainer,
        Role::OnTertiaryContainer,
        Role::Error,
        Role::OnError,
        Role::ErrorContainer,
        Role::OnErrorContainer,
        Role::PrimaryFixed,
        Role::PrimaryFixedDim,
        Role::OnPrimaryFixed,
        Role::OnPrimaryFixedVariant,
        Role::SecondaryFixed,
        Role::SecondaryFixedDim,
        Role::OnSecondaryFixed,
        Role::OnSecondaryFixedVariant,
        Role::TertiaryFixed,
        Role::TertiaryFixedDim,
        Role::OnTertiaryFixed,
        Role::OnTertiaryFixedVariant,
    ];

    /// Get an iterator over all roles in canonical order.
    pub fn all() -> RoleIterator {
        RoleIterator::new()
    }

    /// Get this role's camel-cased name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrimaryPaletteKeyColor => "primaryPaletteKeyColor",
            Self::SecondaryPaletteKeyColor => "secondaryPaletteKeyColor",
            Self::TertiaryPaletteKeyColor => "tertiaryPaletteKeyColor",
            Self::NeutralPaletteKeyColor => "neutralPaletteKeyColor",
            Self::NeutralVariantPaletteKeyColor => "neutralVariantPaletteKeyColor",
            Self::Background => "background",
            Self::OnBackground => "onBackground",
            Self::Surface => "surface",
            Self::SurfaceDim => "surfaceDim",
            Self::SurfaceBright => "surfaceBright",
            Self::SurfaceContainerLowest => "surfaceContainerLowest",
            Self::SurfaceContainerLow => "surfaceContainerLow",
            Self::SurfaceContainer => "surfaceContainer",
            Self::SurfaceContainerHigh => "surfaceContainerHigh",
            Self::SurfaceContainerHighest => "surfaceContainerHighest",
            Self::OnSurface => "onSurface",
            Self::SurfaceVariant => "surfaceVariant",
            Self::OnSurfaceVariant => "onSurfaceVariant",
            Self::InverseSurface => "inverseSurface",
            Self::InverseOnSurface => "inverseOnSurface",
            Self::Outline => "outline",
            Self::OutlineVariant => "outlineVariant",
            Self::Shadow => "shadow",
            Self::Scrim => "scrim",
            Self::SurfaceTint => "surfaceTint",
            Self::Primary => "primary",
            Self::OnPrimary => "onPrimary",
            Self::PrimaryContainer => "primaryContainer",
            Self::OnPrimaryContainer => "onPrimaryContainer",
            Self::InversePrimary => "inversePrimary",
            Self::Secondary => "secondary",
            Self::OnSecondary => "onSecondary",
            Self::SecondaryContainer => "secondaryContainer",
            Self::OnSecondaryContainer => "onSecondaryContainer",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "onTertiary",
            Self::TertiaryContainer => "tertiaryContainer",
            Self::OnTertiaryContainer => "onTertiaryContainer",
            Self::Error => "error",
            Self::OnError => "onError",
            Self::ErrorContainer => "errorContainer",
            Self::OnErrorContainer => "onErrorContainer",
            Self::PrimaryFixed => "primaryFixed",
            Self::PrimaryFixedDim => "primaryFixedDim",
            Self::OnPrimaryFixed => "onPrimaryFixed",
            Self::OnPrimaryFixedVariant => "onPrimaryFixedVariant",
            Self::SecondaryFixed => "secondaryFixed",
            Self::SecondaryFixedDim => "secondaryFixedDim",
            Self::OnSecondaryFixed => "onSecondaryFixed",
            Self::OnSecondaryFixedVariant => "onSecondaryFixedVariant",
            Self::TertiaryFixed => "tertiaryFixed",
            Self::TertiaryFixedDim => "tertiaryFixedDim",
            Self::OnTertiaryFixed => "onTertiaryFixed",
            Self::OnTertiaryFixedVariant => "onTertiaryFixedVariant",
        }
    }

    /// Determine whether this role is one of the five palette key colors.
    pub fn is_key_color(&self) -> bool {
        (*self as usize) < 5
    }
}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Role {
    /// Get an iterator over all roles. <i class=python-only>Python only!</i>
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> RoleIterator {
        RoleIterator::new()
    }

    /// Get this role's camel-cased name. <i class=python-only>Python only!</i>
    #[pyo3(name = "name")]
    pub fn py_name(&self) -> &'static str {
        self.name()
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|role| role.name() == s)
            .copied()
            .ok_or_else(|| format!("`{}` is not a color role", s))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An iterator over color roles.
///
/// [`Role::all`] returns this iterator, which produces all roles in canonical
/// order. It is fused and exact.
#[cfg_attr(feature = "pyffi", pyclass(module = "chromaseed"))]
#[derive(Debug)]
pub struct RoleIterator {
    index: usize,
}

impl RoleIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for RoleIterator {
    type Item = Role;

    fn next(&mut self) -> Option<Self::Item> {
        let role = Role::ALL.get(self.index).copied()?;
        self.index += 1;
        Some(role)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = Role::COUNT - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for RoleIterator {
    fn len(&self) -> usize {
        Role::COUNT - self.index
    }
}

impl std::iter::FusedIterator for RoleIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl RoleIterator {
    /// Get the number of remaining roles. <i class=python-only>Python only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next role. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<Role> {
        slf.next()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Role;

    #[test]
    fn test_all() {
        let mut iter = Role::all();
        assert_eq!(iter.len(), Role::COUNT);
        assert_eq!(iter.next(), Some(Role::PrimaryPaletteKeyColor));
        assert_eq!(iter.len(), Role::COUNT - 1);
        assert_eq!(iter.last(), Some(Role::OnTertiaryFixedVariant));

        for (index, role) in Role::all().enumerate() {
            assert_eq!(role as usize, index);
            assert_eq!(role.name().parse::<Role>(), Ok(role));
        }

        let mut exhausted = Role::all();
        while exhausted.next().is_some() {}
        assert_eq!(exhausted.next(), None);
        assert_eq!(exhausted.next(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Role::OnPrimaryContainer.name(), "onPrimaryContainer");
        assert_eq!(Role::SurfaceContainerHighest.to_string(), "surfaceContainerHighest");
        assert_eq!(
            serde_json::to_string(&Role::InverseOnSurface).unwrap(),
            "\"inverseOnSurface\""
        );
        assert!("onPrimaryButton".parse::<Role>().is_err());
        assert!(Role::NeutralVariantPaletteKeyColor.is_key_color());
        assert!(!Role::Background.is_key_color());
    }
}
