//! Resolving roles to tones.

use super::{material_color, ContrastCurve, PaletteKind, Role, SchemeBasis, ToneDeltaPair};
use crate::core::{darker, darker_unsafe, lighter, lighter_unsafe, ratio_of_tones, round_half_up};

/// A function computing a role's base tone.
pub type ToneFn = fn(&SchemeBasis) -> f64;

/// A function selecting a role's background role.
pub type BackgroundFn = fn(&SchemeBasis) -> Role;

/// The specification of a role's color.
///
/// A dynamic color names the palette to draw from and a base tone. If it has
/// a background, the base tone is adjusted until it meets the contrast curve's
/// ratio against the background's tone. Two roles that share a tone delta pair
/// are adjusted together, so that their tones stay apart by the pair's delta.
#[derive(Clone, Copy, Debug)]
pub struct DynamicColor {
    pub role: Role,
    pub palette: PaletteKind,
    pub tone: ToneFn,
    pub is_background: bool,
    pub background: Option<BackgroundFn>,
    pub second_background: Option<Role>,
    pub contrast_curve: Option<ContrastCurve>,
    pub tone_delta_pair: Option<ToneDeltaPair>,
}

impl DynamicColor {
    /// Create a new dynamic color without background, which always has its
    /// base tone.
    pub const fn new(role: Role, palette: PaletteKind, tone: ToneFn) -> Self {
        Self {
            role,
            palette,
            tone,
            is_background: false,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
        }
    }

    /// Mark this dynamic color as a background for other colors.
    #[must_use = "method returns a new dynamic color and does not mutate original value"]
    pub const fn background_role(mut self) -> Self {
        self.is_background = true;
        self
    }

    /// Require contrast against the background.
    #[must_use = "method returns a new dynamic color and does not mutate original value"]
    pub const fn on(mut self, background: BackgroundFn, curve: ContrastCurve) -> Self {
        self.background = Some(background);
        self.contrast_curve = Some(curve);
        self
    }

    /// Also require contrast against a second background.
    #[must_use = "method returns a new dynamic color and does not mutate original value"]
    pub const fn also_on(mut self, background: Role) -> Self {
        self.second_background = Some(background);
        self
    }

    /// Constrain this color's tone relative to another color's.
    #[must_use = "method returns a new dynamic color and does not mutate original value"]
    pub const fn paired(mut self, pair: ToneDeltaPair) -> Self {
        self.tone_delta_pair = Some(pair);
        self
    }

    /// Get the contrast ratio this color requires at the contrast level.
    fn desired_ratio(&self, level: f64) -> f64 {
        self.contrast_curve.map_or(1.0, |curve| curve.get(level))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the tone calls for light text and icons on top of it.
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    round_half_up(tone) < 60.0
}

/// Find the tone for a foreground on the background tone that comes closest to
/// the ratio.
///
/// If the background prefers a light foreground, the lighter tone wins unless
/// the darker tone has clearly more contrast. Otherwise, the darker tone wins
/// unless the lighter tone has more contrast.
pub fn foreground_tone(background: f64, ratio: f64) -> f64 {
    let lighter_tone = lighter_unsafe(background, ratio);
    let darker_tone = darker_unsafe(background, ratio);
    let lighter_ratio = ratio_of_tones(lighter_tone, background);
    let darker_ratio = ratio_of_tones(darker_tone, background);

    if tone_prefers_light_foreground(background) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if ratio <= lighter_ratio || darker_ratio <= lighter_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if ratio <= darker_ratio || lighter_ratio <= darker_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

fn in_awkward_band(tone: f64) -> bool {
    (50.0..60.0).contains(&tone)
}

// --------------------------------------------------------------------------------------------------------------------

/// A memoizing resolver of role tones for one scheme basis.
///
/// Resolving a role may resolve its background roles first. Each role is
/// resolved at most once.
pub(crate) struct ToneResolver<'a> {
    basis: &'a SchemeBasis,
    tones: [Option<f64>; Role::COUNT],
}

impl<'a> ToneResolver<'a> {
    pub fn new(basis: &'a SchemeBasis) -> Self {
        Self {
            basis,
            tones: [None; Role::COUNT],
        }
    }

    /// Get the role's tone.
    pub fn tone(&mut self, role: Role) -> f64 {
        if let Some(tone) = self.tones[role as usize] {
            return tone;
        }

        let tone = self.resolve(&material_color(role));
        tracing::trace!(role = role.name(), tone, "resolved tone");
        self.tones[role as usize] = Some(tone);
        tone
    }

    fn resolve(&mut self, color: &DynamicColor) -> f64 {
        let basis = self.basis;
        let Some(background) = color.background else {
            return (color.tone)(basis);
        };

        let background_tone = self.tone(background(basis));
        match color.tone_delta_pair {
            Some(pair) => Self::resolve_pair(basis, color.role, &pair, background_tone),
            None => self.resolve_single(color, background_tone),
        }
    }

    fn resolve_pair(
        basis: &SchemeBasis,
        role: Role,
        pair: &ToneDeltaPair,
        background_tone: f64,
    ) -> f64 {
        let level = basis.contrast_level();
        let (nearer, farther) = pair.nearer_and_farther(basis.is_dark());
        let nearer = material_color(nearer);
        let farther = material_color(farther);
        let direction = if basis.is_dark() { 1.0 } else { -1.0 };
        let delta = pair.delta;

        let nearer_ratio = nearer.desired_ratio(level);
        let farther_ratio = farther.desired_ratio(level);
        let fit = |tone: f64, ratio: f64| {
            if level < 0.0 || ratio_of_tones(background_tone, tone) < ratio {
                foreground_tone(background_tone, ratio)
            } else {
                tone
            }
        };

        let mut nearer_tone = fit((nearer.tone)(basis), nearer_ratio);
        let mut farther_tone = fit((farther.tone)(basis), farther_ratio);

        if (farther_tone - nearer_tone) * direction < delta {
            farther_tone = (nearer_tone + delta * direction).clamp(0.0, 100.0);
            if (farther_tone - nearer_tone) * direction < delta {
                nearer_tone = (farther_tone - delta * direction).clamp(0.0, 100.0);
            }
        }

        if in_awkward_band(nearer_tone) || (pair.stay_together && in_awkward_band(farther_tone)) {
            if 0.0 < direction {
                nearer_tone = 60.0;
                farther_tone = farther_tone.max(nearer_tone + delta * direction);
            } else {
                nearer_tone = 49.0;
                farther_tone = farther_tone.min(nearer_tone + delta * direction);
            }
        } else if in_awkward_band(farther_tone) {
            farther_tone = if 0.0 < direction { 60.0 } else { 49.0 };
        }

        if role == nearer.role {
            nearer_tone
        } else {
            farther_tone
        }
    }

    fn resolve_single(&mut self, color: &DynamicColor, background_tone: f64) -> f64 {
        let basis = self.basis;
        let ratio = color.desired_ratio(basis.contrast_level());
        let mut tone = (color.tone)(basis);

        if basis.contrast_level() < 0.0 || ratio_of_tones(background_tone, tone) < ratio {
            tone = foreground_tone(background_tone, ratio);
        }

        if color.is_background && in_awkward_band(tone) {
            tone = if ratio <= ratio_of_tones(49.0, background_tone) {
                49.0
            } else {
                60.0
            };
        }

        let Some(second_background) = color.second_background else {
            return tone;
        };

        let second_tone = self.tone(second_background);
        let upper = background_tone.max(second_tone);
        let lower = background_tone.min(second_tone);
        if ratio <= ratio_of_tones(upper, tone) && ratio <= ratio_of_tones(lower, tone) {
            return tone;
        }

        let light = lighter(upper, ratio);
        let dark = darker(lower, ratio);
        if tone_prefers_light_foreground(background_tone)
            || tone_prefers_light_foreground(second_tone)
        {
            light.unwrap_or(100.0)
        } else if let (Some(light), None) = (light, dark) {
            light
        } else {
            dark.unwrap_or(0.0)
        }
    }
}

// ====================================================================================================================
