//! The specifications of all color roles.
//!
//! Every role draws from one of the scheme's palettes. Most foreground roles
//! name a background role and a contrast curve, and most container roles are
//! paired with their accent role, so that the two keep their tones apart.

use super::dynamic_color::{foreground_tone, ToneFn};
use super::{
    ContrastCurve, DynamicColor, PaletteKind as P, Role, SchemeBasis, ToneDeltaPair,
    TonePolarity, Variant,
};
use crate::dislike::fix_if_disliked;
use crate::Hct;

const ACCENT: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 7.0);
const CONTAINER: ContrastCurve = ContrastCurve::new(1.0, 1.0, 3.0, 4.5);
const TEXT: ContrastCurve = ContrastCurve::new(4.5, 7.0, 11.0, 21.0);
const TEXT_ON_CONTAINER: ContrastCurve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);

fn pick(s: &SchemeBasis, dark: f64, light: f64) -> f64 {
    if s.is_dark() {
        dark
    } else {
        light
    }
}

fn is_monochrome(s: &SchemeBasis) -> bool {
    s.variant() == Variant::Monochrome
}

fn is_fidelity(s: &SchemeBasis) -> bool {
    s.variant().is_fidelity()
}

fn highest_surface(s: &SchemeBasis) -> Role {
    if s.is_dark() {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    }
}

/// Find the tone closest to `tone` whose color has the desired chroma.
///
/// Starting at `tone`, this function steps one tone at a time, downwards if
/// `by_decreasing_tone` and upwards otherwise, as long as chroma increases
/// and has not come within 0.4 of the desired chroma.
pub fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest = Hct::new(hue, chroma, tone);
    if closest.chroma() < chroma {
        let step = if by_decreasing_tone { -1.0 } else { 1.0 };
        let mut peak = closest.chroma();
        while closest.chroma() < chroma {
            answer += step;
            let candidate = Hct::new(hue, chroma, answer);
            if candidate.chroma() < peak || (candidate.chroma() - chroma).abs() < 0.4 {
                break;
            }

            if (candidate.chroma() - chroma).abs() < (closest.chroma() - chroma).abs() {
                closest = candidate;
            }
            peak = peak.max(candidate.chroma());
        }
    }

    answer
}

// --------------------------------------------------------------------------------------------------------------------

fn primary_container_tone(s: &SchemeBasis) -> f64 {
    if is_fidelity(s) {
        s.source().tone()
    } else if is_monochrome(s) {
        pick(s, 85.0, 25.0)
    } else {
        pick(s, 30.0, 90.0)
    }
}

fn secondary_container_tone(s: &SchemeBasis) -> f64 {
    let initial = pick(s, 30.0, 90.0);
    if is_monochrome(s) {
        pick(s, 30.0, 85.0)
    } else if is_fidelity(s) {
        let palette = s.palette(P::Secondary);
        find_desired_chroma_by_tone(palette.hue(), palette.chroma(), initial, !s.is_dark())
    } else {
        initial
    }
}

fn tertiary_container_tone(s: &SchemeBasis) -> f64 {
    if is_monochrome(s) {
        pick(s, 60.0, 49.0)
    } else if is_fidelity(s) {
        let proposed = s.palette(P::Tertiary).hct(s.source().tone());
        fix_if_disliked(proposed).tone()
    } else {
        pick(s, 30.0, 90.0)
    }
}

fn surface_curve(s: &SchemeBasis, dark: ContrastCurve, light: ContrastCurve) -> f64 {
    if s.is_dark() {
        dark.get(s.contrast_level())
    } else {
        light.get(s.contrast_level())
    }
}

fn key_color_tone(s: &SchemeBasis, palette: P) -> f64 {
    s.palette(palette).key_color().tone()
}

const fn container_pair(container: Role, accent: Role) -> ToneDeltaPair {
    ToneDeltaPair::new(container, accent, 10.0, TonePolarity::Nearer, false)
}

const fn fixed_pair(fixed: Role, fixed_dim: Role) -> ToneDeltaPair {
    ToneDeltaPair::new(fixed, fixed_dim, 10.0, TonePolarity::Lighter, true)
}

/// Get the specification of the role's color.
pub fn material_color(role: Role) -> DynamicColor {
    use Role::*;

    let color = |palette: P, tone: ToneFn| DynamicColor::new(role, palette, tone);
    let surface = |tone: ToneFn| DynamicColor::new(role, P::Neutral, tone).background_role();

    match role {
        PrimaryPaletteKeyColor => color(P::Primary, |s| key_color_tone(s, P::Primary)),
        SecondaryPaletteKeyColor => color(P::Secondary, |s| key_color_tone(s, P::Secondary)),
        TertiaryPaletteKeyColor => color(P::Tertiary, |s| key_color_tone(s, P::Tertiary)),
        NeutralPaletteKeyColor => color(P::Neutral, |s| key_color_tone(s, P::Neutral)),
        NeutralVariantPaletteKeyColor => {
            color(P::NeutralVariant, |s| key_color_tone(s, P::NeutralVariant))
        }

        // Surfaces
        Background | Surface => surface(|s| pick(s, 6.0, 98.0)),
        OnBackground => color(P::Neutral, |s| pick(s, 90.0, 10.0))
            .on(|_| Background, ContrastCurve::new(3.0, 3.0, 4.5, 7.0)),
        SurfaceDim => surface(|s| {
            if s.is_dark() {
                6.0
            } else {
                ContrastCurve::new(87.0, 87.0, 80.0, 75.0).get(s.contrast_level())
            }
        }),
        SurfaceBright => surface(|s| {
            if s.is_dark() {
                ContrastCurve::new(24.0, 24.0, 29.0, 34.0).get(s.contrast_level())
            } else {
                98.0
            }
        }),
        SurfaceContainerLowest => surface(|s| {
            if s.is_dark() {
                ContrastCurve::new(4.0, 4.0, 2.0, 0.0).get(s.contrast_level())
            } else {
                100.0
            }
        }),
        SurfaceContainerLow => surface(|s| {
            surface_curve(
                s,
                ContrastCurve::new(10.0, 10.0, 11.0, 12.0),
                ContrastCurve::new(96.0, 96.0, 96.0, 95.0),
            )
        }),
        SurfaceContainer => surface(|s| {
            surface_curve(
                s,
                ContrastCurve::new(12.0, 12.0, 16.0, 20.0),
                ContrastCurve::new(94.0, 94.0, 92.0, 90.0),
            )
        }),
        SurfaceContainerHigh => surface(|s| {
            surface_curve(
                s,
                ContrastCurve::new(17.0, 17.0, 21.0, 25.0),
                ContrastCurve::new(92.0, 92.0, 88.0, 85.0),
            )
        }),
        SurfaceContainerHighest => surface(|s| {
            surface_curve(
                s,
                ContrastCurve::new(22.0, 22.0, 26.0, 30.0),
                ContrastCurve::new(90.0, 90.0, 84.0, 80.0),
            )
        }),
        OnSurface => color(P::Neutral, |s| pick(s, 90.0, 10.0)).on(highest_surface, TEXT),
        SurfaceVariant => color(P::NeutralVariant, |s| pick(s, 30.0, 90.0)).background_role(),
        OnSurfaceVariant => color(P::NeutralVariant, |s| pick(s, 80.0, 30.0))
            .on(highest_surface, TEXT_ON_CONTAINER),
        InverseSurface => color(P::Neutral, |s| pick(s, 90.0, 20.0)),
        InverseOnSurface => {
            color(P::Neutral, |s| pick(s, 20.0, 95.0)).on(|_| InverseSurface, TEXT)
        }
        Outline => color(P::NeutralVariant, |s| pick(s, 60.0, 50.0))
            .on(highest_surface, ContrastCurve::new(1.5, 3.0, 4.5, 7.0)),
        OutlineVariant => {
            color(P::NeutralVariant, |s| pick(s, 30.0, 80.0)).on(highest_surface, CONTAINER)
        }
        Shadow | Scrim => color(P::Neutral, |_| 0.0),
        SurfaceTint => color(P::Primary, |s| pick(s, 80.0, 40.0)).background_role(),

        // Primary
        Primary => color(P::Primary, |s| {
            if is_monochrome(s) {
                pick(s, 100.0, 0.0)
            } else {
                pick(s, 80.0, 40.0)
            }
        })
        .background_role()
        .on(highest_surface, ACCENT)
        .paired(container_pair(PrimaryContainer, Primary)),
        OnPrimary => color(P::Primary, |s| {
            if is_monochrome(s) {
                pick(s, 10.0, 90.0)
            } else {
                pick(s, 20.0, 100.0)
            }
        })
        .on(|_| Primary, TEXT),
        PrimaryContainer => color(P::Primary, primary_container_tone)
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(container_pair(PrimaryContainer, Primary)),
        OnPrimaryContainer => color(P::Primary, |s| {
            if is_fidelity(s) {
                foreground_tone(primary_container_tone(s), 4.5)
            } else if is_monochrome(s) {
                pick(s, 0.0, 100.0)
            } else {
                pick(s, 90.0, 30.0)
            }
        })
        .on(|_| PrimaryContainer, TEXT_ON_CONTAINER),
        InversePrimary => color(P::Primary, |s| pick(s, 40.0, 80.0)).on(|_| InverseSurface, ACCENT),

        // Secondary
        Secondary => color(P::Secondary, |s| pick(s, 80.0, 40.0))
            .background_role()
            .on(highest_surface, ACCENT)
            .paired(container_pair(SecondaryContainer, Secondary)),
        OnSecondary => color(P::Secondary, |s| {
            if is_monochrome(s) {
                pick(s, 10.0, 100.0)
            } else {
                pick(s, 20.0, 100.0)
            }
        })
        .on(|_| Secondary, TEXT),
        SecondaryContainer => color(P::Secondary, secondary_container_tone)
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(container_pair(SecondaryContainer, Secondary)),
        OnSecondaryContainer => color(P::Secondary, |s| {
            if is_monochrome(s) {
                pick(s, 90.0, 10.0)
            } else if is_fidelity(s) {
                foreground_tone(secondary_container_tone(s), 4.5)
            } else {
                pick(s, 90.0, 30.0)
            }
        })
        .on(|_| SecondaryContainer, TEXT_ON_CONTAINER),

        // Tertiary
        Tertiary => color(P::Tertiary, |s| {
            if is_monochrome(s) {
                pick(s, 90.0, 25.0)
            } else {
                pick(s, 80.0, 40.0)
            }
        })
        .background_role()
        .on(highest_surface, ACCENT)
        .paired(container_pair(TertiaryContainer, Tertiary)),
        OnTertiary => color(P::Tertiary, |s| {
            if is_monochrome(s) {
                pick(s, 10.0, 90.0)
            } else {
                pick(s, 20.0, 100.0)
            }
        })
        .on(|_| Tertiary, TEXT),
        TertiaryContainer => color(P::Tertiary, tertiary_container_tone)
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(container_pair(TertiaryContainer, Tertiary)),
        OnTertiaryContainer => color(P::Tertiary, |s| {
            if is_monochrome(s) {
                pick(s, 0.0, 100.0)
            } else if is_fidelity(s) {
                foreground_tone(tertiary_container_tone(s), 4.5)
            } else {
                pick(s, 90.0, 30.0)
            }
        })
        .on(|_| TertiaryContainer, TEXT_ON_CONTAINER),

        // Error
        Error => color(P::Error, |s| pick(s, 80.0, 40.0))
            .background_role()
            .on(highest_surface, ACCENT)
            .paired(container_pair(ErrorContainer, Error)),
        OnError => color(P::Error, |s| pick(s, 20.0, 100.0)).on(|_| Error, TEXT),
        ErrorContainer => color(P::Error, |s| pick(s, 30.0, 90.0))
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(container_pair(ErrorContainer, Error)),
        OnErrorContainer => color(P::Error, |s| {
            if is_monochrome(s) {
                pick(s, 90.0, 10.0)
            } else {
                pick(s, 90.0, 30.0)
            }
        })
        .on(|_| ErrorContainer, TEXT_ON_CONTAINER),

        // Fixed
        PrimaryFixed => color(P::Primary, |s| if is_monochrome(s) { 40.0 } else { 90.0 })
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(fixed_pair(PrimaryFixed, PrimaryFixedDim)),
        PrimaryFixedDim => color(P::Primary, |s| if is_monochrome(s) { 30.0 } else { 80.0 })
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(fixed_pair(PrimaryFixed, PrimaryFixedDim)),
        OnPrimaryFixed => color(P::Primary, |s| if is_monochrome(s) { 100.0 } else { 10.0 })
            .on(|_| PrimaryFixedDim, TEXT)
            .also_on(PrimaryFixed),
        OnPrimaryFixedVariant => {
            color(P::Primary, |s| if is_monochrome(s) { 90.0 } else { 30.0 })
                .on(|_| PrimaryFixedDim, TEXT_ON_CONTAINER)
                .also_on(PrimaryFixed)
        }
        SecondaryFixed => color(P::Secondary, |s| if is_monochrome(s) { 80.0 } else { 90.0 })
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(fixed_pair(SecondaryFixed, SecondaryFixedDim)),
        SecondaryFixedDim => {
            color(P::Secondary, |s| if is_monochrome(s) { 70.0 } else { 80.0 })
                .background_role()
                .on(highest_surface, CONTAINER)
                .paired(fixed_pair(SecondaryFixed, SecondaryFixedDim))
        }
        OnSecondaryFixed => color(P::Secondary, |_| 10.0)
            .on(|_| SecondaryFixedDim, TEXT)
            .also_on(SecondaryFixed),
        OnSecondaryFixedVariant => {
            color(P::Secondary, |s| if is_monochrome(s) { 25.0 } else { 30.0 })
                .on(|_| SecondaryFixedDim, TEXT_ON_CONTAINER)
                .also_on(SecondaryFixed)
        }
        TertiaryFixed => color(P::Tertiary, |s| if is_monochrome(s) { 40.0 } else { 90.0 })
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(fixed_pair(TertiaryFixed, TertiaryFixedDim)),
        TertiaryFixedDim => color(P::Tertiary, |s| if is_monochrome(s) { 30.0 } else { 80.0 })
            .background_role()
            .on(highest_surface, CONTAINER)
            .paired(fixed_pair(TertiaryFixed, TertiaryFixedDim)),
        OnTertiaryFixed => color(P::Tertiary, |s| if is_monochrome(s) { 100.0 } else { 10.0 })
            .on(|_| TertiaryFixedDim, TEXT)
            .also_on(TertiaryFixed),
        OnTertiaryFixedVariant => {
            color(P::Tertiary, |s| if is_monochrome(s) { 90.0 } else { 30.0 })
                .on(|_| TertiaryFixedDim, TEXT_ON_CONTAINER)
                .also_on(TertiaryFixed)
        }
    }
}

// ====================================================================================================================
