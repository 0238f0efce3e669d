//! Persisting schemes and theme preferences.
//!
//! A [`SchemeSnapshot`] records the colors of the most widely used roles
//! together with the source color and variant that produced them. The snapshot
//! is a cache: [`SchemeSnapshot::regenerate`] recreates the full scheme from
//! source color and variant alone. A [`ThemePreference`] is even more compact
//! and flattens to two integer fields.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::dynamic::{DynamicScheme, Role, Variant};
use crate::error::PreferenceError;
use crate::score::DEFAULT_FALLBACK;
use crate::Argb;

/// A user's theme preference: the source color and the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemePreference {
    pub source: Argb,
    pub variant: Variant,
}

impl ThemePreference {
    /// Create a new theme preference. The source color must be opaque.
    pub fn new(source: Argb, variant: Variant) -> Result<Self, PreferenceError> {
        if !source.is_opaque() {
            return Err(PreferenceError::TranslucentSource(source.value()));
        }

        Ok(Self { source, variant })
    }

    /// Flatten this preference into the packed source color and the variant
    /// ordinal.
    pub fn to_fields(&self) -> (u32, u8) {
        (self.source.value(), self.variant.ordinal())
    }

    /// Restore a preference from its flattened fields.
    pub fn from_fields(source: u32, variant: u8) -> Result<Self, PreferenceError> {
        Self::new(Argb::new(source), Variant::try_from(variant)?)
    }

    /// Create the scheme for this preference.
    pub fn scheme(&self, is_dark: bool, contrast_level: f64) -> DynamicScheme {
        DynamicScheme::new(self.source, self.variant, is_dark, contrast_level)
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            source: DEFAULT_FALLBACK,
            variant: Variant::TonalSpot,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A named snapshot of a scheme's most widely used colors.
///
/// The recorded colors are a cache. The source color, variant, mode and
/// contrast level determine them, and [`SchemeSnapshot::regenerate`] rebuilds
/// the full scheme from those four. Snapshots without a contrast level load at
/// the default level 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeSnapshot {
    pub name: String,
    pub source: Argb,
    pub variant: Variant,
    pub is_dark: bool,
    #[serde(default)]
    pub contrast_level: f64,
    pub primary: Argb,
    pub on_primary: Argb,
    pub primary_container: Argb,
    pub on_primary_container: Argb,
    pub secondary: Argb,
    pub on_secondary: Argb,
    pub tertiary: Argb,
    pub on_tertiary: Argb,
    pub surface: Argb,
    pub on_surface: Argb,
    pub error: Argb,
    pub on_error: Argb,
}

impl SchemeSnapshot {
    /// The roles recorded by a snapshot.
    pub const ROLES: [Role; 12] = [
        Role::Primary,
        Role::OnPrimary,
        Role::PrimaryContainer,
        Role::OnPrimaryContainer,
        Role::Secondary,
        Role::OnSecondary,
        Role::Tertiary,
        Role::OnTertiary,
        Role::Surface,
        Role::OnSurface,
        Role::Error,
        Role::OnError,
    ];

    /// Take a snapshot of the scheme.
    pub fn capture(name: &str, scheme: &DynamicScheme) -> Self {
        Self {
            name: name.to_owned(),
            source: scheme.source(),
            variant: scheme.variant(),
            is_dark: scheme.is_dark(),
            contrast_level: scheme.contrast_level(),
            primary: scheme[Role::Primary],
            on_primary: scheme[Role::OnPrimary],
            primary_container: scheme[Role::PrimaryContainer],
            on_primary_container: scheme[Role::OnPrimaryContainer],
            secondary: scheme[Role::Secondary],
            on_secondary: scheme[Role::OnSecondary],
            tertiary: scheme[Role::Tertiary],
            on_tertiary: scheme[Role::OnTertiary],
            surface: scheme[Role::Surface],
            on_surface: scheme[Role::OnSurface],
            error: scheme[Role::Error],
            on_error: scheme[Role::OnError],
        }
    }

    /// Get the recorded color for the role, if the snapshot records it.
    pub fn get(&self, role: Role) -> Option<Argb> {
        let color = match role {
            Role::Primary => self.primary,
            Role::OnPrimary => self.on_primary,
            Role::PrimaryContainer => self.primary_container,
            Role::OnPrimaryContainer => self.on_primary_container,
            Role::Secondary => self.secondary,
            Role::OnSecondary => self.on_secondary,
            Role::Tertiary => self.tertiary,
            Role::OnTertiary => self.on_tertiary,
            Role::Surface => self.surface,
            Role::OnSurface => self.on_surface,
            Role::Error => self.error,
            Role::OnError => self.on_error,
            _ => return None,
        };

        Some(color)
    }

    /// Get the theme preference that produced this snapshot.
    pub fn preference(&self) -> ThemePreference {
        ThemePreference {
            source: self.source,
            variant: self.variant,
        }
    }

    /// Recreate the full scheme.
    pub fn regenerate(&self) -> DynamicScheme {
        self.preference().scheme(self.is_dark, self.contrast_level)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A store for named scheme snapshots.
pub trait ThemeStore {
    /// Save the snapshot under its name, replacing any earlier snapshot with
    /// the same name.
    fn save(&self, snapshot: SchemeSnapshot) -> Result<(), PreferenceError>;

    /// Load the snapshot with the name.
    fn load(&self, name: &str) -> Result<SchemeSnapshot, PreferenceError>;

    /// List the names of all snapshots in order.
    fn list(&self) -> Vec<String>;

    /// Delete the snapshot with the name, returning it.
    fn delete(&self, name: &str) -> Result<SchemeSnapshot, PreferenceError>;
}

/// An in-memory theme store.
///
/// The store can be shared between threads.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    snapshots: RwLock<BTreeMap<String, SchemeSnapshot>>,
}

impl MemoryThemeStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn save(&self, snapshot: SchemeSnapshot) -> Result<(), PreferenceError> {
        if !snapshot.source.is_opaque() {
            return Err(PreferenceError::TranslucentSource(snapshot.source.value()));
        }

        tracing::debug!(name = %snapshot.name, source = %snapshot.source, "saving theme");
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(snapshot.name.clone(), snapshot);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<SchemeSnapshot, PreferenceError> {
        tracing::debug!(name, "loading theme");
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| PreferenceError::NoSuchTheme(name.to_owned()))
    }

    fn list(&self) -> Vec<String> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn delete(&self, name: &str) -> Result<SchemeSnapshot, PreferenceError> {
        tracing::debug!(name, "deleting theme");
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .ok_or_else(|| PreferenceError::NoSuchTheme(name.to_owned()))
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{MemoryThemeStore, SchemeSnapshot, ThemePreference, ThemeStore};
    use crate::dynamic::{DynamicScheme, Role, Variant};
    use crate::error::PreferenceError;
    use crate::Argb;

    const PURPLE: Argb = Argb::new(0xff67_50a4);

    #[test]
    fn test_preference_fields() -> Result<(), PreferenceError> {
        let preference = ThemePreference::new(PURPLE, Variant::Expressive)?;
        assert_eq!(preference.to_fields(), (0xff67_50a4, 4));
        assert_eq!(ThemePreference::from_fields(0xff67_50a4, 4)?, preference);

        assert_eq!(
            ThemePreference::from_fields(0xff67_50a4, 42),
            Err(PreferenceError::UnknownVariantOrdinal(42))
        );
        assert_eq!(
            ThemePreference::from_fields(0x8067_50a4, 2),
            Err(PreferenceError::TranslucentSource(0x8067_50a4))
        );

        let default = ThemePreference::default();
        assert_eq!(default.to_fields(), (0xff42_85f4, 2));
        Ok(())
    }

    #[test]
    fn test_snapshot() {
        let scheme = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 0.0);
        let snapshot = SchemeSnapshot::capture("purple", &scheme);
        assert_eq!(snapshot.primary, Argb::new(0xff65_558f));
        assert_eq!(snapshot.surface, Argb::new(0xfffd_f7ff));

        for role in SchemeSnapshot::ROLES {
            assert_eq!(snapshot.get(role), Some(scheme[role]));
        }
        assert_eq!(snapshot.get(Role::Outline), None);

        assert_eq!(snapshot.regenerate(), scheme);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"onPrimaryContainer\":\"#4d3d75\""));
        assert!(json.contains("\"variant\":\"tonalSpot\""));
        let restored: SchemeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_snapshot_contrast_level() {
        let scheme = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 1.0);
        let snapshot = SchemeSnapshot::capture("purple-high", &scheme);
        assert_eq!(snapshot.contrast_level, 1.0);
        assert_eq!(snapshot.primary, Argb::new(0xff31_2259));

        let regenerated = snapshot.regenerate();
        assert_eq!(regenerated, scheme);
        for role in SchemeSnapshot::ROLES {
            assert_eq!(snapshot.get(role), Some(regenerated[role]));
        }

        let mut json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["contrastLevel"], 1.0);
        json.as_object_mut().unwrap().remove("contrastLevel");
        let legacy: SchemeSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(legacy.contrast_level, 0.0);
        assert_eq!(
            legacy.regenerate(),
            DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 0.0)
        );
    }

    #[test]
    fn test_memory_store() -> Result<(), PreferenceError> {
        let store = MemoryThemeStore::new();
        let light = DynamicScheme::new(PURPLE, Variant::TonalSpot, false, 0.0);
        let dark = DynamicScheme::new(PURPLE, Variant::TonalSpot, true, 0.0);

        store.save(SchemeSnapshot::capture("light", &light))?;
        store.save(SchemeSnapshot::capture("dark", &dark))?;
        assert_eq!(store.list(), vec!["dark".to_owned(), "light".to_owned()]);
        assert!(store.load("dark")?.is_dark);
        assert_eq!(store.load("light")?.regenerate(), light);

        let mut translucent = SchemeSnapshot::capture("ghost", &light);
        translucent.source = PURPLE.with_alpha(0);
        assert_eq!(
            store.save(translucent),
            Err(PreferenceError::TranslucentSource(0x0067_50a4))
        );

        assert_eq!(store.delete("light")?.name, "light");
        assert_eq!(
            store.load("light"),
            Err(PreferenceError::NoSuchTheme("light".to_owned()))
        );
        assert_eq!(store.list(), vec!["dark".to_owned()]);
        Ok(())
    }
}
