//! Color temperature: warm oranges and cool blues.
//!
//! Warmth is computed from a color's L*a*b* hue and chroma, following Ou et
//! al.'s model of color emotion. Orange, at hue 50°, is warmest. The
//! [`TemperatureCache`] uses temperature to find complementary and analogous
//! colors that are spaced evenly in temperature rather than hue.

use crate::core::{lab_from_argb, round_half_up, sanitize_degrees, sanitize_degrees_int};
use crate::Hct;

/// Compute the raw temperature of the color. Values range from about -0.5 to
/// about 3, with grays at -0.5.
pub fn raw_temperature(hct: &Hct) -> f64 {
    let [_, a, b] = lab_from_argb(hct.to_argb());
    let hue = sanitize_degrees(b.atan2(a).to_degrees());
    let chroma = a.hypot(b);
    -0.5 + 0.02 * chroma.powf(1.07) * sanitize_degrees(hue - 50.0).to_radians().cos()
}

/// Determine whether the angle lies on the arc from `a` to `b`.
fn is_between(angle: f64, a: f64, b: f64) -> bool {
    if a < b {
        a <= angle && angle <= b
    } else {
        a <= angle || angle <= b
    }
}

/// The temperatures of the colors with the input's chroma and tone.
///
/// Creating the cache computes 361 colors, one for each integral hue from 0
/// to 360 inclusive, with the input color's chroma and tone, as well as their
/// temperatures.
#[derive(Clone, Debug)]
pub struct TemperatureCache {
    input: Hct,
    input_temperature: f64,
    hcts_by_hue: Vec<Hct>,
    temperatures_by_hue: Vec<f64>,
    coldest: (Hct, f64),
    warmest: (Hct, f64),
}

impl TemperatureCache {
    /// Create a new temperature cache for the color.
    pub fn new(input: Hct) -> Self {
        let hcts_by_hue: Vec<Hct> = (0..=360)
            .map(|hue| Hct::new(hue as f64, input.chroma(), input.tone()))
            .collect();
        let temperatures_by_hue: Vec<f64> = hcts_by_hue.iter().map(raw_temperature).collect();
        let input_temperature = raw_temperature(&input);

        // Coldest is the first minimum, warmest the last maximum, with the
        // input color after all hues.
        let mut coldest = (input, input_temperature);
        let mut warmest = (input, input_temperature);
        let mut first = true;
        for (hct, temperature) in hcts_by_hue
            .iter()
            .zip(&temperatures_by_hue)
            .chain(std::iter::once((&input, &input_temperature)))
        {
            if first || *temperature < coldest.1 {
                coldest = (*hct, *temperature);
            }
            if first || *temperature >= warmest.1 {
                warmest = (*hct, *temperature);
            }
            first = false;
        }

        Self {
            input,
            input_temperature,
            hcts_by_hue,
            temperatures_by_hue,
            coldest,
            warmest,
        }
    }

    /// Get the input color.
    pub fn input(&self) -> Hct {
        self.input
    }

    /// Get the coldest color with the input's chroma and tone.
    pub fn coldest(&self) -> Hct {
        self.coldest.0
    }

    /// Get the warmest color with the input's chroma and tone.
    pub fn warmest(&self) -> Hct {
        self.warmest.0
    }

    fn hct_at(&self, hue: i32) -> (Hct, f64) {
        let index = sanitize_degrees_int(hue) as usize;
        (self.hcts_by_hue[index], self.temperatures_by_hue[index])
    }

    fn relative(&self, temperature: f64) -> f64 {
        let range = self.warmest.1 - self.coldest.1;
        if range == 0.0 {
            0.5
        } else {
            (temperature - self.coldest.1) / range
        }
    }

    /// Determine the temperature of the color relative to the coldest and
    /// warmest colors, with 0 being coldest and 1 being warmest. If all colors
    /// have the same temperature, the result is 0.5.
    pub fn relative_temperature(&self, hct: &Hct) -> f64 {
        self.relative(raw_temperature(hct))
    }

    /// Find the complement of the input color.
    ///
    /// The complement has the input's chroma and tone, sits on the other arc
    /// between coldest and warmest color, and has the relative temperature
    /// that mirrors the input's.
    pub fn complement(&self) -> Hct {
        let coldest_hue = self.coldest.0.hue();
        let coldest_temperature = self.coldest.1;
        let warmest_hue = self.warmest.0.hue();
        let range = self.warmest.1 - coldest_temperature;

        let start_is_coldest_to_warmest = is_between(self.input.hue(), coldest_hue, warmest_hue);
        let (start_hue, end_hue) = if start_is_coldest_to_warmest {
            (warmest_hue, coldest_hue)
        } else {
            (coldest_hue, warmest_hue)
        };

        let mut smallest_error = 1000.0;
        let mut answer = self.hct_at(round_half_up(self.input.hue()) as i32).0;
        let complement_relative = 1.0 - self.relative(self.input_temperature);

        for addend in 0..=360 {
            let hue = sanitize_degrees(start_hue + addend as f64);
            if !is_between(hue, start_hue, end_hue) {
                continue;
            }

            // Index 360 is valid, so do not wrap.
            let (candidate, temperature) = {
                let index = round_half_up(hue) as usize;
                (self.hcts_by_hue[index], self.temperatures_by_hue[index])
            };
            let relative = (temperature - coldest_temperature) / range;
            let error = (complement_relative - relative).abs();
            if error < smallest_error {
                smallest_error = error;
                answer = candidate;
            }
        }

        answer
    }

    /// Find five analogous colors spread across twelve divisions of the hue
    /// circle. The input color is the third.
    pub fn analogous(&self) -> Vec<Hct> {
        self.analogous_with(5, 12)
    }

    /// Find `count` analogous colors, starting with `divisions` colors spaced
    /// evenly in temperature around the hue circle. The input color is in the
    /// middle of the result.
    pub fn analogous_with(&self, count: usize, divisions: usize) -> Vec<Hct> {
        let start_hue = round_half_up(self.input.hue()) as i32;
        let (start_hct, start_temperature) = self.hct_at(start_hue);

        let mut absolute_total_delta = 0.0;
        let mut last = self.relative(start_temperature);
        for i in 0..360 {
            let temperature = self.relative(self.hct_at(start_hue + i).1);
            absolute_total_delta += (temperature - last).abs();
            last = temperature;
        }

        let step = absolute_total_delta / divisions as f64;
        let mut all_colors = vec![start_hct];
        let mut total_delta = 0.0;
        let mut last = self.relative(start_temperature);
        let mut addend = 1;

        while all_colors.len() < divisions {
            let (hct, raw) = self.hct_at(start_hue + addend);
            let temperature = self.relative(raw);
            total_delta += (temperature - last).abs();

            let mut desired = all_colors.len() as f64 * step;
            let mut satisfied = total_delta >= desired;
            let mut index_addend = 1;
            while satisfied && all_colors.len() < divisions {
                all_colors.push(hct);
                desired = (all_colors.len() + index_addend) as f64 * step;
                satisfied = total_delta >= desired;
                index_addend += 1;
            }

            last = temperature;
            addend += 1;
            if addend > 360 {
                all_colors.resize(divisions, hct);
                break;
            }
        }

        let size = all_colors.len();
        let mut answers = std::collections::VecDeque::with_capacity(count);
        answers.push_back(self.input);

        let ccw_count = count.saturating_sub(1) / 2;
        for i in 1..=ccw_count {
            answers.push_front(all_colors[(size - i % size) % size]);
        }

        let cw_count = count.saturating_sub(ccw_count + 1);
        for i in 1..=cw_count {
            answers.push_back(all_colors[i % size]);
        }

        answers.into()
    }
}

// ====================================================================================================================
