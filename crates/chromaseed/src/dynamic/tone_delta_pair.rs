use super::Role;

/// The direction of a tone delta constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TonePolarity {
    /// Role A is darker than role B.
    Darker,
    /// Role A is lighter than role B.
    Lighter,
    /// Role A is nearer to the background than role B.
    Nearer,
    /// Role A is farther from the background than role B.
    Farther,
}

/// A constraint on the tones of two roles.
///
/// The tones of both roles must differ by at least `delta`, with the
/// `polarity` determining which role ends up darker or lighter. If
/// `stay_together` is set, both roles move out of the tone band from 50 to
/// 60 together, so that they do not end up on opposite sides of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneDeltaPair {
    pub role_a: Role,
    pub role_b: Role,
    pub delta: f64,
    pub polarity: TonePolarity,
    pub stay_together: bool,
}

impl ToneDeltaPair {
    /// Create a new tone delta constraint.
    pub const fn new(
        role_a: Role,
        role_b: Role,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
        }
    }

    /// Split the pair into the role nearer to and the role farther from the
    /// background.
    pub fn nearer_and_farther(&self, is_dark: bool) -> (Role, Role) {
        let a_is_nearer = match self.polarity {
            TonePolarity::Nearer => true,
            TonePolarity::Farther => false,
            TonePolarity::Lighter => !is_dark,
            TonePolarity::Darker => is_dark,
        };

        if a_is_nearer {
            (self.role_a, self.role_b)
        } else {
            (self.role_b, self.role_a)
        }
    }
}

// ====================================================================================================================
