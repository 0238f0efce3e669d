use std::sync::Arc;
use std::thread;

use chromaseed::contrast::ratio_of_tones;
use chromaseed::conversion::lstar_from_argb;
use chromaseed::dynamic::material_color;
use chromaseed::persist::{MemoryThemeStore, SchemeSnapshot, ThemePreference, ThemeStore};
use chromaseed::{Argb, DynamicScheme, Hct, Role, Variant};

const SOURCES: [u32; 8] = [
    0xff67_50a4,
    0xff42_85f4,
    0xffe8_1e25,
    0xff00_ff00,
    0xffff_eb3b,
    0xff00_0000,
    0xffff_ffff,
    0xff79_5548,
];

const LEVELS: [f64; 4] = [-1.0, 0.0, 0.5, 1.0];

/// The background/foreground pairs whose contrast drops when the contrast
/// level rises from 0 to 1, by mode. A variant restricts the drop to that
/// variant. At high contrast, the light fixed colors darken towards their on
/// colors and the dim and bright surfaces move towards the accents.
const DROPS: [(bool, Option<Variant>, Role, Role); 25] = [
    (false, Some(Variant::Monochrome), Role::SecondaryContainer, Role::OnSecondaryContainer),
    (false, Some(Variant::Monochrome), Role::ErrorContainer, Role::OnErrorContainer),
    (false, None, Role::PrimaryFixed, Role::OnPrimaryFixed),
    (false, None, Role::SecondaryFixed, Role::OnSecondaryFixed),
    (false, None, Role::TertiaryFixed, Role::OnTertiaryFixed),
    (false, None, Role::SurfaceDim, Role::OnSurface),
    (false, None, Role::SurfaceDim, Role::Primary),
    (false, None, Role::SurfaceDim, Role::PrimaryContainer),
    (false, None, Role::SurfaceDim, Role::PrimaryFixed),
    (false, None, Role::SurfaceDim, Role::PrimaryFixedDim),
    (false, None, Role::SurfaceDim, Role::Tertiary),
    (false, None, Role::SurfaceDim, Role::TertiaryContainer),
    (false, None, Role::SurfaceDim, Role::TertiaryFixed),
    (false, None, Role::SurfaceDim, Role::TertiaryFixedDim),
    (true, None, Role::SurfaceBright, Role::OnSurface),
    (true, None, Role::SurfaceBright, Role::Primary),
    (true, None, Role::SurfaceBright, Role::PrimaryContainer),
    (true, None, Role::SurfaceBright, Role::PrimaryFixed),
    (true, None, Role::SurfaceBright, Role::PrimaryFixedDim),
    (true, None, Role::SurfaceBright, Role::SecondaryFixed),
    (true, None, Role::SurfaceBright, Role::SecondaryFixedDim),
    (true, None, Role::SurfaceBright, Role::Tertiary),
    (true, None, Role::SurfaceBright, Role::TertiaryContainer),
    (true, None, Role::SurfaceBright, Role::TertiaryFixed),
    (true, None, Role::SurfaceBright, Role::TertiaryFixedDim),
];

/// Get every role's background pairs for the scheme, background first.
fn background_pairs(scheme: &DynamicScheme) -> Vec<(Role, Role)> {
    let mut pairs = Vec::new();
    for role in Role::ALL {
        let color = material_color(role);
        if let Some(background) = color.background {
            pairs.push((background(scheme.basis()), role));
        }
        if let Some(background) = color.second_background {
            pairs.push((background, role));
        }
    }
    pairs
}

fn contrast(scheme: &DynamicScheme, pair: (Role, Role)) -> f64 {
    ratio_of_tones(
        lstar_from_argb(scheme[pair.0]),
        lstar_from_argb(scheme[pair.1]),
    )
}

#[test]
fn purple_tonal_spot() {
    let scheme = DynamicScheme::new(Argb::new(0xff67_50a4), Variant::TonalSpot, false, 0.0);
    let primary = scheme[Role::Primary];
    assert_eq!(primary, Argb::new(0xff65_558f));

    let tone = Hct::from_argb(primary).tone();
    assert!((30.0..=50.0).contains(&tone));
}

#[test]
fn schemes_are_complete_and_deterministic() {
    for source in SOURCES {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                for level in LEVELS {
                    let scheme = DynamicScheme::new(Argb::new(source), variant, is_dark, level);
                    let again = DynamicScheme::new(Argb::new(source), variant, is_dark, level);
                    assert_eq!(scheme.as_ref(), again.as_ref());
                    assert_eq!(scheme.iter().count(), Role::COUNT);

                    for (role, color) in scheme.iter() {
                        assert!(
                            color.is_opaque(),
                            "{} of {:#x} {} is translucent",
                            role,
                            source,
                            variant
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn on_primary_is_legible() {
    for source in SOURCES {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                let scheme = DynamicScheme::new(Argb::new(source), variant, is_dark, 0.0);
                let ratio = contrast(&scheme, (Role::Primary, Role::OnPrimary));
                assert!(ratio >= 3.0, "{:#x} {} {}: {}", source, variant, is_dark, ratio);
            }
        }
    }
}

#[test]
fn more_contrast_never_hurts() {
    let mut observed = [false; DROPS.len()];

    for source in SOURCES {
        for variant in Variant::ALL {
            for is_dark in [false, true] {
                let normal = DynamicScheme::new(Argb::new(source), variant, is_dark, 0.0);
                let high = DynamicScheme::new(Argb::new(source), variant, is_dark, 1.0);

                let pairs = background_pairs(&normal);
                assert_eq!(pairs, background_pairs(&high));
                assert!(pairs.contains(&(Role::Primary, Role::OnPrimary)));
                assert!(pairs.contains(&(Role::PrimaryFixed, Role::OnPrimaryFixed)));

                for pair in pairs {
                    let before = contrast(&normal, pair);
                    let after = contrast(&high, pair);
                    if before <= after + 1e-9 {
                        continue;
                    }

                    let known = DROPS.iter().position(|(dark, only, background, foreground)| {
                        *dark == is_dark
                            && (only.is_none() || *only == Some(variant))
                            && (*background, *foreground) == pair
                    });
                    match known {
                        Some(index) => observed[index] = true,
                        None => panic!(
                            "{:#x} {} {} {}/{}: {} > {}",
                            source, variant, is_dark, pair.0, pair.1, before, after
                        ),
                    }
                }
            }
        }
    }

    for (drop, observed) in DROPS.iter().zip(observed) {
        assert!(observed, "{:?} never drops", drop);
    }
}

#[test]
fn schemes_are_shareable() {
    let scheme = Arc::new(DynamicScheme::new(
        Argb::new(0xff67_50a4),
        Variant::Vibrant,
        true,
        0.5,
    ));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scheme = Arc::clone(&scheme);
            thread::spawn(move || {
                let other = DynamicScheme::new(scheme.source(), scheme.variant(), true, 0.5);
                other == *scheme
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn snapshots_regenerate_schemes() {
    let store = MemoryThemeStore::new();
    for (index, variant) in Variant::ALL.into_iter().enumerate() {
        let source = Argb::new(SOURCES[index % SOURCES.len()]);
        let scheme = DynamicScheme::new(source, variant, index % 2 == 1, 0.0);
        store
            .save(SchemeSnapshot::capture(variant.name(), &scheme))
            .unwrap();
    }
    assert_eq!(store.list().len(), Variant::COUNT);

    for name in store.list() {
        let snapshot = store.load(&name).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SchemeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);

        let scheme = restored.regenerate();
        for role in SchemeSnapshot::ROLES {
            assert_eq!(restored.get(role), Some(scheme[role]));
        }

        let (source, ordinal) = restored.preference().to_fields();
        let preference = ThemePreference::from_fields(source, ordinal).unwrap();
        assert_eq!(preference.scheme(restored.is_dark, 0.0), scheme);
    }
}
