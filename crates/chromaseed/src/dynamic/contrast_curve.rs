use serde::{Deserialize, Serialize};

use crate::core::lerp;

/// A contrast curve.
///
/// A contrast curve maps the contrast level, which ranges from -1 to 1, to a
/// contrast ratio. It is defined by four control points, the ratios at contrast
/// levels -1, 0, 0.5, and 1, and interpolates linearly in between. Levels
/// outside the range are treated like the nearest end.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastCurve {
    pub low: f64,
    pub normal: f64,
    pub medium: f64,
    pub high: f64,
}

impl ContrastCurve {
    /// Create a new contrast curve.
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// Get the contrast ratio for the contrast level.
    pub fn get(&self, level: f64) -> f64 {
        if level <= -1.0 {
            self.low
        } else if level < 0.0 {
            lerp(self.low, self.normal, level + 1.0)
        } else if level < 0.5 {
            lerp(self.normal, self.medium, level / 0.5)
        } else if level < 1.0 {
            lerp(self.medium, self.high, (level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

// ====================================================================================================================
