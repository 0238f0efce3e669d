//! Xiaolin Wu's greedy orthogonal bipartition of the RGB cube.
//!
//! The quantizer bins colors into a 33×33×33 histogram over the top five bits
//! of each component, converts the histogram into cumulative moments, and then
//! repeatedly splits the box with the largest weighted variance along the axis
//! and at the position that maximize the between-box variance.

use std::collections::BTreeMap;

use super::{Quantizer, QuantizerMap, QuantizerResult};
use crate::Argb;

const INDEX_BITS: u32 = 5;
const INDEX_COUNT: usize = (1 << INDEX_BITS) + 1;
const TOTAL_SIZE: usize = INDEX_COUNT * INDEX_COUNT * INDEX_COUNT;

#[inline]
const fn index(r: usize, g: usize, b: usize) -> usize {
    (r << (INDEX_BITS * 2)) + (r << (INDEX_BITS + 1)) + r + (g << INDEX_BITS) + g + b
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Red,
    Green,
    Blue,
}

/// A box in the histogram, with exclusive lower and inclusive upper bounds.
#[derive(Clone, Copy, Debug, Default)]
struct Cube {
    r0: usize,
    r1: usize,
    g0: usize,
    g1: usize,
    b0: usize,
    b1: usize,
    vol: usize,
}

impl Cube {
    fn update_volume(&mut self) {
        self.vol = (self.r1 - self.r0) * (self.g1 - self.g0) * (self.b1 - self.b0);
    }
}

/// The cumulative moments of a histogram.
struct Moments {
    weights: Vec<i64>,
    moments_r: Vec<i64>,
    moments_g: Vec<i64>,
    moments_b: Vec<i64>,
    moments: Vec<f64>,
}

/// Sum the moment over the cube using inclusion-exclusion.
fn volume<T>(cube: &Cube, moment: &[T]) -> T
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Sub<Output = T>,
{
    let Cube {
        r0,
        r1,
        g0,
        g1,
        b0,
        b1,
        ..
    } = *cube;

    moment[index(r1, g1, b1)] - moment[index(r1, g1, b0)] - moment[index(r1, g0, b1)]
        + moment[index(r1, g0, b0)]
        - moment[index(r0, g1, b1)]
        + moment[index(r0, g1, b0)]
        + moment[index(r0, g0, b1)]
        - moment[index(r0, g0, b0)]
}

/// Sum the moment over the cube's face at its lower bound in the direction,
/// negated.
fn bottom(cube: &Cube, direction: Direction, moment: &[i64]) -> i64 {
    let Cube {
        r0,
        r1,
        g0,
        g1,
        b0,
        b1,
        ..
    } = *cube;

    match direction {
        Direction::Red => {
            -moment[index(r0, g1, b1)] + moment[index(r0, g1, b0)] + moment[index(r0, g0, b1)]
                - moment[index(r0, g0, b0)]
        }
        Direction::Green => {
            -moment[index(r1, g0, b1)] + moment[index(r1, g0, b0)] + moment[index(r0, g0, b1)]
                - moment[index(r0, g0, b0)]
        }
        Direction::Blue => {
            -moment[index(r1, g1, b0)] + moment[index(r1, g0, b0)] + moment[index(r0, g1, b0)]
                - moment[index(r0, g0, b0)]
        }
    }
}

/// Sum the moment over the cube's slice at the position in the direction.
fn top(cube: &Cube, direction: Direction, position: usize, moment: &[i64]) -> i64 {
    let Cube {
        r0,
        r1,
        g0,
        g1,
        b0,
        b1,
        ..
    } = *cube;
    let p = position;

    match direction {
        Direction::Red => {
            moment[index(p, g1, b1)] - moment[index(p, g1, b0)] - moment[index(p, g0, b1)]
                + moment[index(p, g0, b0)]
        }
        Direction::Green => {
            moment[index(r1, p, b1)] - moment[index(r1, p, b0)] - moment[index(r0, p, b1)]
                + moment[index(r0, p, b0)]
        }
        Direction::Blue => {
            moment[index(r1, g1, p)] - moment[index(r1, g0, p)] - moment[index(r0, g1, p)]
                + moment[index(r0, g0, p)]
        }
    }
}

impl Moments {
    /// Bin the colors into the histogram.
    fn from_histogram(color_to_count: &BTreeMap<Argb, u32>) -> Self {
        let mut this = Self {
            weights: vec![0; TOTAL_SIZE],
            moments_r: vec![0; TOTAL_SIZE],
            moments_g: vec![0; TOTAL_SIZE],
            moments_b: vec![0; TOTAL_SIZE],
            moments: vec![0.0; TOTAL_SIZE],
        };

        let bits_to_remove = 8 - INDEX_BITS;
        for (color, count) in color_to_count {
            let [red, green, blue] = color.to_rgb();
            let i = index(
                (red >> bits_to_remove) as usize + 1,
                (green >> bits_to_remove) as usize + 1,
                (blue >> bits_to_remove) as usize + 1,
            );

            let count = *count as i64;
            let (red, green, blue) = (red as i64, green as i64, blue as i64);
            this.weights[i] += count;
            this.moments_r[i] += red * count;
            this.moments_g[i] += green * count;
            this.moments_b[i] += blue * count;
            this.moments[i] += (count * (red * red + green * green + blue * blue)) as f64;
        }

        this.accumulate();
        this
    }

    /// Turn the histogram into cumulative moments.
    fn accumulate(&mut self) {
        for r in 1..INDEX_COUNT {
            let mut area = [0_i64; INDEX_COUNT];
            let mut area_r = [0_i64; INDEX_COUNT];
            let mut area_g = [0_i64; INDEX_COUNT];
            let mut area_b = [0_i64; INDEX_COUNT];
            let mut area2 = [0.0_f64; INDEX_COUNT];

            for g in 1..INDEX_COUNT {
                let mut line = 0;
                let mut line_r = 0;
                let mut line_g = 0;
                let mut line_b = 0;
                let mut line2 = 0.0;

                for b in 1..INDEX_COUNT {
                    let i = index(r, g, b);
                    line += self.weights[i];
                    line_r += self.moments_r[i];
                    line_g += self.moments_g[i];
                    line_b += self.moments_b[i];
                    line2 += self.moments[i];

                    area[b] += line;
                    area_r[b] += line_r;
                    area_g[b] += line_g;
                    area_b[b] += line_b;
                    area2[b] += line2;

                    let previous = index(r - 1, g, b);
                    self.weights[i] = self.weights[previous] + area[b];
                    self.moments_r[i] = self.moments_r[previous] + area_r[b];
                    self.moments_g[i] = self.moments_g[previous] + area_g[b];
                    self.moments_b[i] = self.moments_b[previous] + area_b[b];
                    self.moments[i] = self.moments[previous] + area2[b];
                }
            }
        }
    }

    /// Compute the weighted variance of the colors in the cube.
    fn variance(&self, cube: &Cube) -> f64 {
        let dr = volume(cube, &self.moments_r) as f64;
        let dg = volume(cube, &self.moments_g) as f64;
        let db = volume(cube, &self.moments_b) as f64;
        let xx = volume(cube, &self.moments);
        let hypotenuse = dr * dr + dg * dg + db * db;
        let weight = volume(cube, &self.weights) as f64;
        xx - hypotenuse / weight
    }

    /// Find the position in the direction that maximizes the between-box
    /// variance of the two halves. The position is `None` if no cut leaves
    /// pixels in both halves.
    fn maximize(
        &self,
        cube: &Cube,
        direction: Direction,
        first: usize,
        last: usize,
        whole: [i64; 4],
    ) -> (Option<usize>, f64) {
        let bottom_r = bottom(cube, direction, &self.moments_r);
        let bottom_g = bottom(cube, direction, &self.moments_g);
        let bottom_b = bottom(cube, direction, &self.moments_b);
        let bottom_w = bottom(cube, direction, &self.weights);

        let mut max = 0.0;
        let mut cut = None;

        for position in first..last {
            let half_r = bottom_r + top(cube, direction, position, &self.moments_r);
            let half_g = bottom_g + top(cube, direction, position, &self.moments_g);
            let half_b = bottom_b + top(cube, direction, position, &self.moments_b);
            let half_w = bottom_w + top(cube, direction, position, &self.weights);
            if half_w == 0 {
                continue;
            }

            let score = |r: i64, g: i64, b: i64, w: i64| {
                let (r, g, b) = (r as f64, g as f64, b as f64);
                (r * r + g * g + b * b) / w as f64
            };

            let mut temp = score(half_r, half_g, half_b, half_w);

            let [whole_r, whole_g, whole_b, whole_w] = whole;
            let other_w = whole_w - half_w;
            if other_w == 0 {
                continue;
            }
            temp += score(whole_r - half_r, whole_g - half_g, whole_b - half_b, other_w);

            if temp > max {
                max = temp;
                cut = Some(position);
            }
        }

        (cut, max)
    }

    /// Split `one` into `one` and `two`. This method returns `false` if the
    /// cube cannot be split.
    fn cut(&self, one: &mut Cube, two: &mut Cube) -> bool {
        let whole = [
            volume(one, &self.moments_r),
            volume(one, &self.moments_g),
            volume(one, &self.moments_b),
            volume(one, &self.weights),
        ];

        let (cut_r, max_r) = self.maximize(one, Direction::Red, one.r0 + 1, one.r1, whole);
        let (cut_g, max_g) = self.maximize(one, Direction::Green, one.g0 + 1, one.g1, whole);
        let (cut_b, max_b) = self.maximize(one, Direction::Blue, one.b0 + 1, one.b1, whole);

        let (direction, cut) = if max_r >= max_g && max_r >= max_b {
            (Direction::Red, cut_r)
        } else if max_g >= max_r && max_g >= max_b {
            (Direction::Green, cut_g)
        } else {
            (Direction::Blue, cut_b)
        };
        let Some(cut) = cut else {
            return false;
        };

        two.r1 = one.r1;
        two.g1 = one.g1;
        two.b1 = one.b1;

        match direction {
            Direction::Red => {
                one.r1 = cut;
                two.r0 = cut;
                two.g0 = one.g0;
                two.b0 = one.b0;
            }
            Direction::Green => {
                one.g1 = cut;
                two.r0 = one.r0;
                two.g0 = cut;
                two.b0 = one.b0;
            }
            Direction::Blue => {
                one.b1 = cut;
                two.r0 = one.r0;
                two.g0 = one.g0;
                two.b0 = cut;
            }
        }

        one.update_volume();
        two.update_volume();
        true
    }

    /// Split the whole histogram into at most `max_colors` boxes.
    fn create_boxes(&self, max_colors: usize) -> Vec<Cube> {
        let mut cubes = vec![Cube::default(); max_colors];
        let mut variances = vec![0.0; max_colors];
        cubes[0] = Cube {
            r1: INDEX_COUNT - 1,
            g1: INDEX_COUNT - 1,
            b1: INDEX_COUNT - 1,
            ..Cube::default()
        };
        cubes[0].update_volume();

        let mut generated = max_colors;
        let mut next = 0;
        let mut i = 1;
        while i < max_colors {
            let (head, tail) = cubes.split_at_mut(i);
            if self.cut(&mut head[next], &mut tail[0]) {
                variances[next] = if head[next].vol > 1 {
                    self.variance(&head[next])
                } else {
                    0.0
                };
                variances[i] = if tail[0].vol > 1 {
                    self.variance(&tail[0])
                } else {
                    0.0
                };
            } else {
                variances[next] = 0.0;
                i -= 1;
            }

            next = 0;
            let mut temp = variances[0];
            for (j, variance) in variances.iter().enumerate().take(i + 1).skip(1) {
                if *variance > temp {
                    temp = *variance;
                    next = j;
                }
            }

            if temp <= 0.0 {
                generated = i + 1;
                break;
            }
            i += 1;
        }

        cubes.truncate(generated);
        cubes
    }

    /// Compute the mean color of each box with pixels.
    fn colors(&self, cubes: &[Cube]) -> Vec<Argb> {
        cubes
            .iter()
            .filter_map(|cube| {
                let weight = volume(cube, &self.weights);
                (weight > 0).then(|| {
                    let r = volume(cube, &self.moments_r) / weight;
                    let g = volume(cube, &self.moments_g) / weight;
                    let b = volume(cube, &self.moments_b) / weight;
                    Argb::from_rgb(r as u8, g as u8, b as u8)
                })
            })
            .collect()
    }
}

/// The Wu quantizer.
///
/// This quantizer produces the coarse centroids for [`QuantizerCelebi`]. Its
/// result maps each centroid to a count of zero, since the box populations are
/// only meaningful after refinement.
///
/// [`QuantizerCelebi`]: super::QuantizerCelebi
#[derive(Debug, Default)]
pub struct QuantizerWu;

impl QuantizerWu {
    /// Compute the centroids of at most `max_colors` boxes, in box order.
    pub fn centroids(pixels: &[Argb], max_colors: usize) -> Vec<Argb> {
        let histogram = QuantizerMap::count(pixels);
        if histogram.is_empty() || max_colors == 0 {
            return Vec::new();
        }

        let moments = Moments::from_histogram(&histogram);
        let cubes = moments.create_boxes(max_colors);
        let colors = moments.colors(&cubes);
        tracing::trace!(
            distinct = histogram.len(),
            boxes = cubes.len(),
            "split color histogram into boxes"
        );
        colors
    }
}

impl Quantizer for QuantizerWu {
    fn quantize(&mut self, pixels: &[Argb], max_colors: usize) -> QuantizerResult {
        QuantizerResult::new(
            Self::centroids(pixels, max_colors)
                .into_iter()
                .map(|color| (color, 0))
                .collect(),
        )
    }
}

// ====================================================================================================================
